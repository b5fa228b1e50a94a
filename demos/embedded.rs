//! Example showing how to drop the pillar garden into an existing Bevy app.
//!
//! Run with: `cargo run --example embedded`
//!
//! This demonstrates:
//! - Passing a `SceneConfig` directly instead of reading the config file
//! - Adding your own entities next to the garden
//! - Reading `FrameSignals` from your own systems

use bevy::prelude::*;
use bevy_pillar_garden::layout::HeightProfile;
use bevy_pillar_garden::{FrameSignals, PillarGardenPlugin, SceneConfig, primary_window};

fn main() {
    let mut config = SceneConfig::default();
    config.layout.rows = 8;
    config.layout.columns = 12;
    config.layout.profile = HeightProfile::Valley;
    config.animation.fire_seed = Some(7);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(primary_window()),
            ..default()
        }))
        .add_plugins(PillarGardenPlugin {
            config: Some(config),
        })
        .add_systems(Startup, setup_floor)
        .add_systems(Update, pulse_floor)
        .run();
}

#[derive(Component)]
struct Floor;

fn setup_floor(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("Floor"),
        Floor,
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(20.0)))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.1, 0.1, 0.12),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_xyz(0.0, -0.5, 0.0),
    ));
}

/// Tint the floor with the fire flicker
fn pulse_floor(
    signals: Res<FrameSignals>,
    floors: Query<&MeshMaterial3d<StandardMaterial>, With<Floor>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for material in &floors {
        if let Some(mat) = materials.get_mut(&material.0) {
            mat.emissive = LinearRgba::rgb(0.05 * signals.fire_flicker, 0.0, 0.0);
        }
    }
}
