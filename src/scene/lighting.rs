use bevy::prelude::*;

use crate::config::LightingConfig;

/// The point light driven by the debug panel sliders
#[derive(Component, Default, Reflect)]
#[reflect(Component)]
pub struct DebugLight;

/// Spawn the directional, ambient and point lights
pub fn spawn_lights(mut commands: Commands, config: Res<LightingConfig>) {
    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: config.directional_illuminance,
            ..default()
        },
        Transform::from_translation(config.directional_position).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: config.ambient_brightness,
        affects_lightmapped_meshes: true,
    });

    commands.spawn((
        DebugLight,
        Name::new("Accent Light"),
        PointLight {
            color: config.point_color,
            intensity: config.point_intensity,
            range: config.point_range,
            ..default()
        },
        Transform::from_translation(config.point_position),
    ));
}
