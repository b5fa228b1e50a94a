//! Layout parameters.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// How pillar height varies across a row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum HeightProfile {
    /// Tallest at the row center, zero height at both edge columns.
    #[default]
    Peak,
    /// Zero height at the row center, tallest at both edge columns.
    ///
    /// The plain `max_height * distance / max_distance` formula, uninverted.
    Valley,
}

impl HeightProfile {
    /// Map a normalized distance from the row center (0 = center, 1 = edge)
    /// to a height factor in `[0, 1]`.
    pub fn factor(self, normalized_distance: f32) -> f32 {
        match self {
            HeightProfile::Peak => 1.0 - normalized_distance,
            HeightProfile::Valley => normalized_distance,
        }
    }
}

/// Fixed parameters of the pillar grid.
#[derive(Resource, Clone, Debug, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Resource)]
#[serde(default)]
pub struct LayoutConfig {
    /// Number of rows along Z.
    pub rows: usize,
    /// Pillars per row along X.
    pub columns: usize,
    /// Distance between consecutive rows.
    pub row_spacing: f32,
    /// Height of the tallest pillar.
    pub max_height: f32,
    /// Radius shared by pillars and discs.
    pub radius: f32,
    /// Horizontal gap between neighbouring pillars.
    pub gap: f32,
    /// Thickness of each accent disc.
    pub disc_thickness: f32,
    /// Distance between a pillar face and the center of its disc.
    pub disc_offset: f32,
    /// Radial resolution used when meshing cylinders.
    pub segments: u32,
    pub profile: HeightProfile,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            columns: 20,
            row_spacing: 0.5,
            max_height: 10.0,
            radius: 0.15,
            gap: 0.06,
            disc_thickness: 0.1,
            disc_offset: 0.2,
            segments: 32,
            profile: HeightProfile::Peak,
        }
    }
}

impl LayoutConfig {
    /// Distance between the centers of two neighbouring columns.
    pub fn column_pitch(&self) -> f32 {
        self.radius * 2.0 + self.gap
    }

    /// Fractional index of the row's middle column.
    pub fn center_column(&self) -> f32 {
        self.columns.saturating_sub(1) as f32 / 2.0
    }

    /// Y coordinate shared by the top face of every pillar.
    pub fn top_y(&self) -> f32 {
        self.max_height / 2.0
    }
}
