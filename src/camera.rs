use std::f32::consts::FRAC_PI_2;

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::config::CameraConfig;

/// Keeps the camera from flipping over the poles
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;
/// Pan distance per pixel, as a fraction of the orbit radius
const PAN_SPEED: f32 = 0.002;

pub struct OrbitCameraPlugin;

impl Plugin for OrbitCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_orbit_camera)
            .add_systems(Update, (orbit_input, orbit_update).chain());
    }
}

/// Orbit state around a target point.
///
/// Input accumulates into `velocity` and `pan_velocity`; [`OrbitCamera::step`]
/// bleeds them into the pose a fraction at a time so motion eases out.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    /// Positive looks down from above
    pub pitch: f32,
    pub radius: f32,
    /// Pending (yaw, pitch) rotation in radians
    pub velocity: Vec2,
    /// Pending target translation
    pub pan_velocity: Vec3,
}

impl OrbitCamera {
    pub fn from_position(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let radius = offset.length().max(f32::EPSILON);
        Self {
            target,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / radius).clamp(-1.0, 1.0).asin(),
            radius,
            velocity: Vec2::ZERO,
            pan_velocity: Vec3::ZERO,
        }
    }

    pub fn position(&self) -> Vec3 {
        let (yaw_sin, yaw_cos) = self.yaw.sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.sin_cos();
        self.target + Vec3::new(yaw_sin * pitch_cos, pitch_sin, yaw_cos * pitch_cos) * self.radius
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.target, Vec3::Y)
    }

    /// Apply a share of the pending motion. A damping of zero applies all of it at once.
    pub fn step(&mut self, damping: f32) {
        let share = if damping > 0.0 { damping.min(1.0) } else { 1.0 };

        self.yaw += self.velocity.x * share;
        self.pitch = (self.pitch + self.velocity.y * share).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.target += self.pan_velocity * share;

        self.velocity *= 1.0 - share;
        self.pan_velocity *= 1.0 - share;
    }

    /// Scale the radius by `factor`, clamped to the configured range
    pub fn zoom(&mut self, factor: f32, min: f32, max: f32) {
        self.radius = (self.radius * factor).clamp(min, max);
    }

    /// Queue a pan in the camera's screen plane
    pub fn pan(&mut self, delta: Vec2) {
        let transform = self.transform();
        let right = transform.right().as_vec3();
        let up = transform.up().as_vec3();
        let scale = self.radius * PAN_SPEED;
        self.pan_velocity += (-right * delta.x + up * delta.y) * scale;
    }
}

fn spawn_orbit_camera(mut commands: Commands, config: Res<CameraConfig>) {
    let orbit = OrbitCamera::from_position(config.position, config.target);

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: config.fov_degrees.to_radians(),
            near: config.near,
            far: config.far,
            ..default()
        }),
        orbit.transform(),
        orbit,
        Name::new("Orbit Camera"),
    ));
}

/// Left drag rotates, right drag pans, the wheel zooms
fn orbit_input(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    config: Res<CameraConfig>,
    mut query: Query<&mut OrbitCamera>,
    mut contexts: EguiContexts,
) {
    // Don't steal the pointer from the panel
    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.wants_pointer_input() || ctx.is_pointer_over_area() {
            return;
        }
    }

    let delta = mouse_motion.delta;
    let scroll_y = scroll.delta.y;
    if delta == Vec2::ZERO && scroll_y == 0.0 {
        return;
    }

    for mut orbit in &mut query {
        if mouse_button.pressed(MouseButton::Left) {
            orbit.velocity += Vec2::new(-delta.x, delta.y) * config.rotate_speed;
        } else if mouse_button.pressed(MouseButton::Right) {
            orbit.pan(delta);
        }

        if scroll_y != 0.0 {
            let factor = 1.0 - scroll_y * config.zoom_speed;
            orbit.zoom(factor.max(0.1), config.min_distance, config.max_distance);
        }
    }
}

fn orbit_update(config: Res<CameraConfig>, mut query: Query<(&mut OrbitCamera, &mut Transform)>) {
    for (mut orbit, mut transform) in &mut query {
        orbit.step(config.damping);
        *transform = orbit.transform();
    }
}
