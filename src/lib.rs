//! # Bevy Pillar Garden
//!
//! A static 3D scene: a grid of metallic pillars whose heights peak along the
//! middle column, each pillar carrying a water disc above and a fire disc below
//! that pulse every frame. An imported glTF model, an orbit camera and a small
//! debug panel for the accent light complete the scene.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bevy::prelude::*;
//! use bevy_pillar_garden::PillarGardenPlugin;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(PillarGardenPlugin::default())
//!         .run();
//! }
//! ```
//!
//! ## Configuration
//!
//! Without an explicit [`SceneConfig`], the plugin reads one from
//! `$PILLAR_GARDEN_CONFIG` or `<config dir>/bevy_pillar_garden/scene.ron`,
//! falling back to defaults. See [`config`] for the fields.
//!
//! ## Controls
//!
//! - Left drag orbits, right drag pans, the wheel zooms
//! - `F1` shows or hides the debug panel

pub mod animation;
pub mod camera;
pub mod config;
pub mod constants;
pub mod scene;
pub mod ui;
pub mod viewport;

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub use animation::{DiscAnimationPlugin, FireDisc, FrameSignals, WaterDisc};
pub use camera::{OrbitCamera, OrbitCameraPlugin};
pub use config::SceneConfig;
pub use scene::{
    DebugLight, ModelLoad, ModelLoadEvent, ModelStatus, Pillar, PillarGroup, ScenePlugin,
};
pub use ui::{DebugPanelState, UiPlugin};
pub use viewport::{Viewport, ViewportPlugin, primary_window};

pub use bevy_pillar_layout as layout;

/// Bundles the whole scene
#[derive(Default)]
pub struct PillarGardenPlugin {
    /// Overrides the config file when set
    pub config: Option<SceneConfig>,
}

impl Plugin for PillarGardenPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone().unwrap_or_else(SceneConfig::load);
        config.insert_into(app);

        if !app.is_plugin_added::<EguiPlugin>() {
            app.add_plugins(EguiPlugin::default());
        }

        app.add_plugins(ViewportPlugin)
            .add_plugins(ScenePlugin)
            .add_plugins(DiscAnimationPlugin)
            .add_plugins(OrbitCameraPlugin)
            .add_plugins(UiPlugin);
    }
}
