mod lighting;
mod model;
mod pillars;

pub use lighting::*;
pub use model::*;
pub use pillars::*;

use bevy::prelude::*;

/// Static scene content: the pillar grid, its lights and the imported model
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<PillarGroup>()
            .register_type::<Pillar>()
            .register_type::<DebugLight>()
            .add_plugins(ModelPlugin)
            .add_systems(Startup, (spawn_pillar_grid, spawn_lights));
    }
}
