use std::collections::HashMap;

use bevy::prelude::*;
use bevy_pillar_layout::{DiscSpec, LayoutConfig, generate_layout};

use crate::animation::{FireDisc, WaterDisc, scaled_emissive};
use crate::constants::{fire, hue_degrees, pillar_material, water};

/// Parent of every pillar and disc
#[derive(Component, Default, Reflect)]
#[reflect(Component)]
pub struct PillarGroup;

/// A cylinder of the grid
#[derive(Component, Clone, Copy, Debug, Reflect)]
#[reflect(Component)]
pub struct Pillar {
    pub row: usize,
    pub column: usize,
    pub height: f32,
}

/// Spawn the pillar grid and its accent discs under a single `PillarGroup`
pub fn spawn_pillar_grid(
    mut commands: Commands,
    config: Res<LayoutConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let layout = generate_layout(&config);

    let group = commands
        .spawn((
            PillarGroup,
            Name::new("Pillars"),
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    let metal = materials.add(StandardMaterial {
        base_color: pillar_material::BASE_COLOR,
        metallic: pillar_material::METALLIC,
        perceptual_roughness: pillar_material::ROUGHNESS,
        ..default()
    });
    let disc_mesh = meshes.add(
        Cylinder::new(config.radius, config.disc_thickness)
            .mesh()
            .resolution(config.segments),
    );

    // Every pillar of a column has the same height, so meshes are shared per column.
    let mut column_meshes: HashMap<usize, Handle<Mesh>> = HashMap::new();

    for pillar in layout.iter() {
        let mesh = column_meshes
            .entry(pillar.column)
            .or_insert_with(|| {
                meshes.add(
                    Cylinder::new(config.radius, pillar.height)
                        .mesh()
                        .resolution(config.segments),
                )
            })
            .clone();

        commands.spawn((
            Pillar {
                row: pillar.row,
                column: pillar.column,
                height: pillar.height,
            },
            Name::new(format!("Pillar {}:{}", pillar.row, pillar.column)),
            Mesh3d(mesh),
            MeshMaterial3d(metal.clone()),
            Transform::from_translation(pillar.center),
            ChildOf(group),
        ));

        spawn_water_disc(
            &mut commands,
            &mut materials,
            &config,
            group,
            disc_mesh.clone(),
            pillar.water_disc(&config),
        );
        spawn_fire_disc(
            &mut commands,
            &mut materials,
            group,
            disc_mesh.clone(),
            pillar.fire_disc(&config),
        );
    }

    info!(
        "Spawned {} pillars ({} rows x {} columns) with {} discs",
        layout.len(),
        config.rows,
        config.columns,
        layout.len() * 2
    );
}

/// Blue hue of a water disc, shifting slightly across the row
pub fn water_hue(config: &LayoutConfig, column: usize) -> f32 {
    let columns = config.columns.max(1) as f32;
    water::HUE_START + (column as f32 / columns) * water::HUE_SPAN
}

fn spawn_water_disc(
    commands: &mut Commands,
    materials: &mut Assets<StandardMaterial>,
    config: &LayoutConfig,
    group: Entity,
    mesh: Handle<Mesh>,
    disc: DiscSpec,
) {
    let hue = hue_degrees(water_hue(config, disc.column));
    let emissive =
        LinearRgba::from(Color::hsl(hue, water::EMISSIVE_SATURATION, water::EMISSIVE_LIGHTNESS));

    let material = materials.add(StandardMaterial {
        base_color: Color::hsl(hue, water::SATURATION, water::LIGHTNESS),
        metallic: water::METALLIC,
        perceptual_roughness: water::ROUGHNESS,
        emissive: scaled_emissive(emissive, water::EMISSIVE_INTENSITY),
        ..default()
    });

    commands.spawn((
        WaterDisc { emissive },
        Name::new(format!("Water {}:{}", disc.row, disc.column)),
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::from_translation(disc.center),
        ChildOf(group),
    ));
}

fn spawn_fire_disc(
    commands: &mut Commands,
    materials: &mut Assets<StandardMaterial>,
    group: Entity,
    mesh: Handle<Mesh>,
    disc: DiscSpec,
) {
    let emissive = LinearRgba::from(fire::EMISSIVE_COLOR);

    let material = materials.add(StandardMaterial {
        base_color: fire::BASE_COLOR,
        metallic: fire::METALLIC,
        perceptual_roughness: fire::ROUGHNESS,
        emissive: scaled_emissive(emissive, fire::EMISSIVE_INTENSITY),
        ..default()
    });

    commands.spawn((
        FireDisc {
            column: disc.column,
            emissive,
        },
        Name::new(format!("Fire {}:{}", disc.row, disc.column)),
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::from_translation(disc.center),
        ChildOf(group),
    ));
}
