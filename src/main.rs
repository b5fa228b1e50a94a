//! Standalone binary. In the browser the scene draws into the `#bevy` canvas.

use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_pillar_garden::{PillarGardenPlugin, primary_window};

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(primary_window()),
                    ..default()
                })
                .set(AssetPlugin {
                    meta_check: AssetMetaCheck::Never,
                    ..default()
                }),
        )
        .add_plugins(PillarGardenPlugin::default())
        .run();
}
