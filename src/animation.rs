//! Per-frame fire and water animation.
//!
//! Each frame two scalar signals are sampled from the elapsed time: a smooth
//! `water_flow` in `[0, 1]` and a noisy `fire_flicker` in `[0, 1 + noise)`.
//! Pure look functions turn a signal into visual parameters, which the disc
//! systems then write into each disc's own material and transform.

use bevy::prelude::*;

use crate::config::AnimationConfig;
use crate::constants::{fire, hue_degrees, water};

/// Tags a disc floating above a pillar.
#[derive(Component, Clone, Copy, Debug, Reflect)]
#[reflect(Component)]
pub struct WaterDisc {
    /// Emissive color at intensity 1.0.
    pub emissive: LinearRgba,
}

/// Tags a disc floating below a pillar.
#[derive(Component, Clone, Copy, Debug, Reflect)]
#[reflect(Component)]
pub struct FireDisc {
    /// Column of the owning pillar.
    pub column: usize,
    /// Emissive color at intensity 1.0.
    pub emissive: LinearRgba,
}

/// Signals sampled once per frame and shared by every disc.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameSignals {
    pub elapsed: f32,
    pub water_flow: f32,
    pub fire_flicker: f32,
}

/// Random source for the flicker term.
#[derive(Resource)]
pub struct FlickerNoise {
    rng: fastrand::Rng,
    amplitude: f32,
}

impl FlickerNoise {
    pub fn new(amplitude: f32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self { rng, amplitude }
    }

    /// Next sample in `[0, amplitude)`.
    pub fn sample(&mut self) -> f32 {
        self.rng.f32() * self.amplitude
    }
}

impl FromWorld for FlickerNoise {
    fn from_world(world: &mut World) -> Self {
        let config = world
            .get_resource::<AnimationConfig>()
            .cloned()
            .unwrap_or_default();
        Self::new(config.fire_noise, config.fire_seed)
    }
}

/// Visual parameters of a fire disc for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FireLook {
    pub base_color: Color,
    pub emissive_intensity: f32,
    pub scale_y: f32,
}

/// Visual parameters of a water disc for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaterLook {
    pub base_color: Color,
    pub emissive_intensity: f32,
}

/// Smooth oscillation in `[0, 1]`.
pub fn water_flow(elapsed: f32) -> f32 {
    ((elapsed * 2.0).sin() + 1.0) / 2.0
}

/// Faster oscillation in `[0, 1]` lifted by `noise`.
pub fn fire_flicker(elapsed: f32, noise: f32) -> f32 {
    (elapsed * 4.0).sin() * 0.5 + 0.5 + noise
}

/// Red to orange, brighter and taller as the flicker rises.
pub fn fire_look(flicker: f32) -> FireLook {
    FireLook {
        base_color: Color::hsl(
            hue_degrees(fire::HUE_MIN + flicker * fire::HUE_SPAN),
            fire::SATURATION,
            fire::LIGHTNESS_MIN + flicker * fire::LIGHTNESS_SPAN,
        ),
        emissive_intensity: fire::EMISSIVE_MIN + flicker * fire::EMISSIVE_SPAN,
        scale_y: fire::SCALE_MIN + flicker * fire::SCALE_SPAN,
    }
}

/// Dark saturated blue at `flow == 0`, washed out to near white at `flow == 1`.
pub fn water_look(flow: f32) -> WaterLook {
    WaterLook {
        base_color: Color::hsl(
            hue_degrees(water::ANIMATED_HUE),
            water::SATURATION * (1.0 - flow),
            water::ANIMATED_LIGHTNESS_MIN + flow * water::ANIMATED_LIGHTNESS_SPAN,
        ),
        emissive_intensity: water::ANIMATED_EMISSIVE_MIN + flow * water::ANIMATED_EMISSIVE_SPAN,
    }
}

/// Scale an emissive color's RGB by `intensity`, leaving alpha alone.
pub fn scaled_emissive(color: LinearRgba, intensity: f32) -> LinearRgba {
    LinearRgba::new(
        color.red * intensity,
        color.green * intensity,
        color.blue * intensity,
        color.alpha,
    )
}

pub struct DiscAnimationPlugin;

impl Plugin for DiscAnimationPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<WaterDisc>()
            .register_type::<FireDisc>()
            .init_resource::<FrameSignals>()
            .init_resource::<FlickerNoise>()
            .add_systems(
                Update,
                (sample_frame_signals, animate_fire_discs, animate_water_discs).chain(),
            );
    }
}

fn sample_frame_signals(
    time: Res<Time>,
    mut noise: ResMut<FlickerNoise>,
    mut signals: ResMut<FrameSignals>,
) {
    let elapsed = time.elapsed_secs();
    *signals = FrameSignals {
        elapsed,
        water_flow: water_flow(elapsed),
        fire_flicker: fire_flicker(elapsed, noise.sample()),
    };
}

fn animate_fire_discs(
    signals: Res<FrameSignals>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut discs: Query<(&FireDisc, &MeshMaterial3d<StandardMaterial>, &mut Transform)>,
) {
    let look = fire_look(signals.fire_flicker);

    for (disc, material, mut transform) in &mut discs {
        transform.scale.y = look.scale_y;

        if let Some(mat) = materials.get_mut(&material.0) {
            mat.base_color = look.base_color;
            mat.emissive = scaled_emissive(disc.emissive, look.emissive_intensity);
        }
    }
}

fn animate_water_discs(
    signals: Res<FrameSignals>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    discs: Query<(&WaterDisc, &MeshMaterial3d<StandardMaterial>)>,
) {
    let look = water_look(signals.water_flow);

    for (disc, material) in &discs {
        if let Some(mat) = materials.get_mut(&material.0) {
            mat.base_color = look.base_color;
            mat.emissive = scaled_emissive(disc.emissive, look.emissive_intensity);
        }
    }
}
