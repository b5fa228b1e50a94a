//! Scene configuration loaded from a RON file at startup.
//!
//! The file is looked up at `$PILLAR_GARDEN_CONFIG` first, then at
//! `<config dir>/bevy_pillar_garden/scene.ron`. Missing files silently fall
//! back to defaults; unreadable ones log a warning and fall back too. Every
//! field is optional in the file.

use std::f32::consts::FRAC_PI_3;
use std::fs;
use std::path::PathBuf;

use bevy::prelude::*;
use bevy_pillar_layout::LayoutConfig;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "PILLAR_GARDEN_CONFIG";

/// Top-level scene configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub layout: LayoutConfig,
    pub camera: CameraConfig,
    pub lighting: LightingConfig,
    pub model: ModelConfig,
    pub panel: PanelConfig,
    pub animation: AnimationConfig,
}

/// Perspective camera and orbit controls
#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    /// Point the camera orbits around
    pub target: Vec3,
    /// Fraction of the remaining orbit velocity shed each frame (0 disables inertia)
    pub damping: f32,
    /// Radians per pixel of pointer drag
    pub rotate_speed: f32,
    /// Fraction of the orbit radius per scroll unit
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 100.0,
            position: Vec3::new(1.0, 15.0, 1.0),
            target: Vec3::ZERO,
            damping: 0.05,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
            min_distance: 1.0,
            max_distance: 80.0,
        }
    }
}

/// Light placement and strength, in Bevy units
#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LightingConfig {
    /// Position the directional light shines from, toward the origin
    pub directional_position: Vec3,
    pub directional_illuminance: f32,
    pub ambient_brightness: f32,
    pub point_color: Color,
    pub point_position: Vec3,
    pub point_intensity: f32,
    pub point_range: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            directional_position: Vec3::new(5.0, 10.0, 7.0),
            directional_illuminance: 6000.0,
            ambient_brightness: 400.0,
            point_color: Color::srgb_u8(0x03, 0x4f, 0xe7),
            point_position: Vec3::new(6.0, 6.0, 6.0),
            point_intensity: 800_000.0,
            point_range: 60.0,
        }
    }
}

/// The imported model and where it is placed
#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ModelConfig {
    /// Path relative to the assets folder
    pub path: String,
    pub translation: Vec3,
    /// Rotation around Z in radians
    pub rotation_z: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: "katana.glb".to_string(),
            translation: Vec3::new(0.0, 2.0, 10.0),
            rotation_z: FRAC_PI_3,
        }
    }
}

impl ModelConfig {
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.translation)
            .with_rotation(Quat::from_rotation_z(self.rotation_z))
    }
}

/// Slider bounds for one axis of the debug panel
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl SliderRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }
}

/// Debug panel layout
#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PanelConfig {
    pub title: String,
    pub width: f32,
    pub x: SliderRange,
    pub y: SliderRange,
    pub z: SliderRange,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: "Controls".to_string(),
            width: 300.0,
            x: SliderRange::new(-5.0, 5.0, 0.5),
            y: SliderRange::new(0.0, 1.0, 0.5),
            z: SliderRange::new(-5.0, 10.0, 0.5),
        }
    }
}

/// Animation knobs
#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Upper bound (exclusive) of the random term added to the fire flicker
    pub fire_noise: f32,
    /// Seed for the flicker noise; unseeded runs differ every launch
    pub fire_seed: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fire_noise: 0.3,
            fire_seed: None,
        }
    }
}

impl SceneConfig {
    /// Resolve the config file path
    fn file_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }

        dirs::config_dir().map(|mut p| {
            p.push("bevy_pillar_garden");
            p.push("scene.ron");
            p
        })
    }

    /// Load configuration from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(content) => Self::from_ron(&content).unwrap_or_else(|e| {
                warn!("Ignoring invalid scene config {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Parse a RON document; absent fields keep their defaults
    pub fn from_ron(content: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(content)
    }

    /// Serialize to pretty RON, e.g. to seed a config file
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Split into the per-concern resources the plugins read.
    pub fn insert_into(self, app: &mut App) {
        app.insert_resource(self.layout)
            .insert_resource(self.camera)
            .insert_resource(self.lighting)
            .insert_resource(self.model)
            .insert_resource(self.panel)
            .insert_resource(self.animation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_pillar_layout::HeightProfile;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(SceneConfig::from_ron("()").unwrap(), SceneConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = SceneConfig::from_ron(
            "(layout: (columns: 7, profile: Valley), animation: (fire_seed: Some(9)))",
        )
        .unwrap();
        assert_eq!(config.layout.columns, 7);
        assert_eq!(config.layout.profile, HeightProfile::Valley);
        assert_eq!(config.layout.rows, 20);
        assert_eq!(config.animation.fire_seed, Some(9));
        assert_eq!(config.animation.fire_noise, 0.3);
        assert_eq!(config.model, ModelConfig::default());
    }

    #[test]
    fn pretty_output_parses_back() {
        let mut config = SceneConfig::default();
        config.panel.width = 420.0;
        config.model.path = "models/blade.glb".to_string();

        let text = config.to_ron().unwrap();
        assert_eq!(SceneConfig::from_ron(&text).unwrap(), config);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(SceneConfig::from_ron("(layout: (rows: \"many\"))").is_err());
    }

    #[test]
    fn model_transform_matches_config() {
        let model = ModelConfig::default();
        let transform = model.transform();
        assert_eq!(transform.translation, Vec3::new(0.0, 2.0, 10.0));
        let (axis, angle) = transform.rotation.to_axis_angle();
        assert!((axis - Vec3::Z).length() < 1e-5);
        assert!((angle - FRAC_PI_3).abs() < 1e-5);
    }

    #[test]
    fn default_panel_ranges() {
        let panel = PanelConfig::default();
        assert_eq!(panel.x, SliderRange::new(-5.0, 5.0, 0.5));
        assert_eq!(panel.y, SliderRange::new(0.0, 1.0, 0.5));
        assert_eq!(panel.z, SliderRange::new(-5.0, 10.0, 0.5));
    }
}
