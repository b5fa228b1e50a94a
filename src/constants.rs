//! Centralized constants for the scene
//!
//! Material parameters and animation coefficients shared by the spawning and
//! animation code.

use bevy::prelude::*;

/// Shared material of every pillar
pub mod pillar_material {
    use super::*;

    pub const BASE_COLOR: Color = Color::srgb_u8(0xcc, 0xcc, 0xcc);
    pub const METALLIC: f32 = 0.9;
    pub const ROUGHNESS: f32 = 0.1;
}

/// Water disc material and animation coefficients
///
/// Hues are fractions of a full turn, converted to degrees when building colors.
pub mod water {
    /// Starting hue of the leftmost column
    pub const HUE_START: f32 = 0.5;
    /// Hue added across a row, left to right
    pub const HUE_SPAN: f32 = 0.1;
    pub const SATURATION: f32 = 0.7;
    pub const LIGHTNESS: f32 = 0.5;
    pub const EMISSIVE_SATURATION: f32 = 0.5;
    pub const EMISSIVE_LIGHTNESS: f32 = 0.2;
    pub const EMISSIVE_INTENSITY: f32 = 0.5;
    pub const METALLIC: f32 = 0.7;
    pub const ROUGHNESS: f32 = 0.2;

    /// Hue held while animating
    pub const ANIMATED_HUE: f32 = 0.55;
    /// Lightness at `water_flow == 0`
    pub const ANIMATED_LIGHTNESS_MIN: f32 = 0.3;
    /// Lightness gained at `water_flow == 1`
    pub const ANIMATED_LIGHTNESS_SPAN: f32 = 0.5;
    pub const ANIMATED_EMISSIVE_MIN: f32 = 0.1;
    pub const ANIMATED_EMISSIVE_SPAN: f32 = 0.2;
}

/// Fire disc material and animation coefficients
pub mod fire {
    use super::*;

    /// Dark red / maroon
    pub const BASE_COLOR: Color = Color::srgb_u8(0x8b, 0x00, 0x00);
    /// Very dark red
    pub const EMISSIVE_COLOR: Color = Color::srgb_u8(0x66, 0x00, 0x00);
    pub const EMISSIVE_INTENSITY: f32 = 0.8;
    pub const METALLIC: f32 = 0.2;
    pub const ROUGHNESS: f32 = 0.4;

    /// Red end of the animated hue range
    pub const HUE_MIN: f32 = 0.04;
    /// Hue gained toward orange at full flicker
    pub const HUE_SPAN: f32 = 0.05;
    pub const SATURATION: f32 = 0.9;
    pub const LIGHTNESS_MIN: f32 = 0.4;
    pub const LIGHTNESS_SPAN: f32 = 0.2;
    pub const EMISSIVE_MIN: f32 = 0.6;
    pub const EMISSIVE_SPAN: f32 = 0.4;
    pub const SCALE_MIN: f32 = 0.8;
    pub const SCALE_SPAN: f32 = 0.3;
}

/// Convert a hue expressed as a fraction of a turn into Bevy's degrees.
pub fn hue_degrees(turns: f32) -> f32 {
    turns.rem_euclid(1.0) * 360.0
}
