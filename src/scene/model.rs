use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy::scene::SceneRoot;

use crate::config::ModelConfig;

/// Where the one-shot model fetch stands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModelStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    Pending,
    /// Attached to the scene
    Ready,
    /// Load failed; the rest of the scene keeps running without it
    Failed,
}

impl ModelStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ModelStatus::Idle => "idle",
            ModelStatus::Pending => "loading",
            ModelStatus::Ready => "ready",
            ModelStatus::Failed => "failed",
        }
    }
}

/// Ready flag for the imported model
#[derive(Resource, Default)]
pub struct ModelLoad {
    pub handle: Option<Handle<Gltf>>,
    pub status: ModelStatus,
}

/// Outcome of the model fetch, written once
#[derive(Message, Clone, Debug)]
pub enum ModelLoadEvent {
    Ready(Handle<Scene>),
    Failed(String),
}

/// Root of the imported model's subtree
#[derive(Component)]
pub struct ModelRoot;

pub struct ModelPlugin;

impl Plugin for ModelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ModelLoad>()
            .add_message::<ModelLoadEvent>()
            .add_systems(Startup, request_model)
            .add_systems(
                Update,
                (
                    poll_model_load.run_if(model_pending),
                    attach_model,
                    refresh_model_materials,
                )
                    .chain(),
            );
    }
}

fn model_pending(load: Res<ModelLoad>) -> bool {
    load.status == ModelStatus::Pending
}

/// Start the asynchronous fetch
fn request_model(
    asset_server: Res<AssetServer>,
    config: Res<ModelConfig>,
    mut load: ResMut<ModelLoad>,
) {
    info!("Loading model: {}", config.path);
    load.handle = Some(asset_server.load(config.path.clone()));
    load.status = ModelStatus::Pending;
}

/// Translate the asset server's view of the fetch into a `ModelLoadEvent`
fn poll_model_load(
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    config: Res<ModelConfig>,
    load: Res<ModelLoad>,
    mut events: MessageWriter<ModelLoadEvent>,
) {
    let Some(handle) = &load.handle else {
        return;
    };

    match asset_server.load_state(handle.id()) {
        LoadState::Loaded => {
            let Some(gltf) = gltfs.get(handle) else {
                return;
            };
            events.write(loaded_outcome(
                &config.path,
                gltf.default_scene.as_ref(),
                &gltf.scenes,
            ));
        }
        LoadState::Failed(err) => {
            events.write(ModelLoadEvent::Failed(err.to_string()));
        }
        LoadState::NotLoaded | LoadState::Loading => {}
    }
}

/// Outcome for a file that finished loading: its default scene, else its first one
fn loaded_outcome(
    path: &str,
    default_scene: Option<&Handle<Scene>>,
    scenes: &[Handle<Scene>],
) -> ModelLoadEvent {
    match default_scene.or_else(|| scenes.first()) {
        Some(scene) => ModelLoadEvent::Ready(scene.clone()),
        None => ModelLoadEvent::Failed(format!("{} contains no scenes", path)),
    }
}

/// Attach the model on success, log on failure. Nothing else in the scene is touched.
fn attach_model(
    mut commands: Commands,
    mut events: MessageReader<ModelLoadEvent>,
    config: Res<ModelConfig>,
    mut load: ResMut<ModelLoad>,
) {
    for event in events.read() {
        if load.status != ModelStatus::Pending {
            continue;
        }

        match event {
            ModelLoadEvent::Ready(scene) => {
                commands.spawn((
                    ModelRoot,
                    Name::new("Model"),
                    SceneRoot(scene.clone()),
                    config.transform(),
                ));
                load.status = ModelStatus::Ready;
                info!("Model attached: {}", config.path);
            }
            ModelLoadEvent::Failed(message) => {
                load.status = ModelStatus::Failed;
                error!("Failed to load model {}: {}", config.path, message);
            }
        }
    }
}

/// Mark materials of freshly instanced model meshes as modified so they are
/// re-extracted with the scene's lighting setup.
fn refresh_model_materials(
    mut materials: ResMut<Assets<StandardMaterial>>,
    added: Query<
        (Entity, &MeshMaterial3d<StandardMaterial>),
        Added<MeshMaterial3d<StandardMaterial>>,
    >,
    parents: Query<&ChildOf>,
    roots: Query<(), With<ModelRoot>>,
) {
    let mut refreshed = 0;
    for (entity, material) in &added {
        if !parents.iter_ancestors(entity).any(|a| roots.contains(a)) {
            continue;
        }
        // Mutable access queues `AssetEvent::Modified` for the material
        if materials.get_mut(&material.0).is_some() {
            refreshed += 1;
        }
    }

    if refreshed > 0 {
        debug!("Refreshed {} model materials", refreshed);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::time::Duration;

    use bevy::ecs::message::Messages;
    use bevy_pillar_layout::LayoutConfig;

    use super::*;
    use crate::animation::{FireDisc, WaterDisc};
    use crate::config::LightingConfig;
    use crate::scene::{DebugLight, Pillar, spawn_lights, spawn_pillar_grid};

    fn model_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<Assets<Scene>>()
            .insert_resource(LayoutConfig {
                rows: 2,
                columns: 3,
                ..default()
            })
            .insert_resource(LightingConfig::default())
            .insert_resource(ModelConfig::default())
            .insert_resource(ModelLoad {
                handle: None,
                status: ModelStatus::Pending,
            })
            .add_message::<ModelLoadEvent>()
            .add_systems(Startup, (spawn_pillar_grid, spawn_lights))
            .add_systems(Update, (attach_model, refresh_model_materials).chain());
        app.update();
        app
    }

    fn scene_snapshot(app: &mut App) -> Vec<(Entity, Transform)> {
        let world = app.world_mut();
        let mut snapshot: Vec<_> = world
            .query_filtered::<(Entity, &Transform), Or<(
                With<Pillar>,
                With<WaterDisc>,
                With<FireDisc>,
                With<PointLight>,
                With<DirectionalLight>,
            )>>()
            .iter(world)
            .map(|(e, t)| (e, *t))
            .collect();
        snapshot.sort_by_key(|(e, _)| *e);
        snapshot
    }

    #[test]
    fn failed_load_leaves_scene_untouched() {
        let mut app = model_app();
        let before = scene_snapshot(&mut app);
        assert_eq!(before.len(), 6 * 3 + 2);

        app.world_mut()
            .write_message(ModelLoadEvent::Failed("missing file".to_string()));
        app.update();

        assert_eq!(app.world().resource::<ModelLoad>().status, ModelStatus::Failed);
        assert_eq!(scene_snapshot(&mut app), before);

        let world = app.world_mut();
        assert_eq!(world.query::<&ModelRoot>().iter(world).count(), 0);
        assert_eq!(
            world
                .query_filtered::<(), With<DebugLight>>()
                .iter(world)
                .count(),
            1
        );
    }

    #[test]
    fn ready_load_attaches_with_fixed_transform() {
        let mut app = model_app();
        let scene = app
            .world_mut()
            .resource_mut::<Assets<Scene>>()
            .add(Scene::new(World::new()));

        app.world_mut().write_message(ModelLoadEvent::Ready(scene));
        app.update();

        assert_eq!(app.world().resource::<ModelLoad>().status, ModelStatus::Ready);

        let world = app.world_mut();
        let transforms: Vec<Transform> = world
            .query_filtered::<&Transform, With<ModelRoot>>()
            .iter(world)
            .copied()
            .collect();
        assert_eq!(transforms, vec![ModelConfig::default().transform()]);
    }

    #[test]
    fn only_the_first_outcome_counts() {
        let mut app = model_app();
        app.world_mut()
            .write_message(ModelLoadEvent::Failed("timeout".to_string()));
        app.update();

        let scene = app
            .world_mut()
            .resource_mut::<Assets<Scene>>()
            .add(Scene::new(World::new()));
        app.world_mut().write_message(ModelLoadEvent::Ready(scene));
        app.update();

        assert_eq!(app.world().resource::<ModelLoad>().status, ModelStatus::Failed);
        let world = app.world_mut();
        assert_eq!(world.query::<&ModelRoot>().iter(world).count(), 0);
    }

    #[test]
    fn status_labels() {
        assert_eq!(ModelStatus::Pending.label(), "loading");
        assert_eq!(ModelStatus::Failed.label(), "failed");
    }

    /// Test app backed by a real `AssetPlugin`, so loads run and asset events flush
    fn asset_app(model_path: &str) -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Mesh>()
            .init_asset::<StandardMaterial>()
            .init_asset::<Scene>()
            .init_asset::<Gltf>()
            .insert_resource(LayoutConfig {
                rows: 2,
                columns: 3,
                ..default()
            })
            .insert_resource(LightingConfig::default())
            .insert_resource(ModelConfig {
                path: model_path.to_string(),
                ..default()
            })
            .add_systems(Startup, (spawn_pillar_grid, spawn_lights));
        app
    }

    fn scene_handles(count: usize) -> Vec<Handle<Scene>> {
        let mut scenes = Assets::<Scene>::default();
        (0..count)
            .map(|_| scenes.add(Scene::new(World::new())))
            .collect()
    }

    #[test]
    fn loaded_file_prefers_its_default_scene() {
        let scenes = scene_handles(2);
        match loaded_outcome("katana.glb", Some(&scenes[1]), &scenes) {
            ModelLoadEvent::Ready(scene) => assert_eq!(scene, scenes[1]),
            other => panic!("expected a scene, got {other:?}"),
        }
    }

    #[test]
    fn loaded_file_falls_back_to_first_scene() {
        let scenes = scene_handles(1);
        match loaded_outcome("katana.glb", None, &scenes) {
            ModelLoadEvent::Ready(scene) => assert_eq!(scene, scenes[0]),
            other => panic!("expected a scene, got {other:?}"),
        }
    }

    #[test]
    fn loaded_file_without_scenes_is_a_failure() {
        match loaded_outcome("empty.glb", None, &[]) {
            ModelLoadEvent::Failed(message) => {
                assert_eq!(message, "empty.glb contains no scenes");
            }
            other => panic!("expected a failure, got {other:?}"),
        }
    }

    #[test]
    fn scene_outcomes_drive_the_status() {
        let mut app = model_app();
        let scene = app
            .world_mut()
            .resource_mut::<Assets<Scene>>()
            .add(Scene::new(World::new()));
        let outcome = loaded_outcome("katana.glb", None, &[scene]);
        app.world_mut().write_message(outcome);
        app.update();
        assert_eq!(app.world().resource::<ModelLoad>().status, ModelStatus::Ready);

        let mut app = model_app();
        app.world_mut()
            .write_message(loaded_outcome("empty.glb", None, &[]));
        app.update();
        assert_eq!(app.world().resource::<ModelLoad>().status, ModelStatus::Failed);
    }

    #[test]
    fn missing_file_fails_without_touching_the_scene() {
        let mut app = asset_app("does/not/exist/katana.glb");
        app.add_plugins(ModelPlugin);
        app.update();

        let before = scene_snapshot(&mut app);
        assert_eq!(before.len(), 6 * 3 + 2);

        for _ in 0..500 {
            if app.world().resource::<ModelLoad>().status != ModelStatus::Pending {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
            app.update();
        }

        assert_eq!(app.world().resource::<ModelLoad>().status, ModelStatus::Failed);
        assert_eq!(scene_snapshot(&mut app), before);
        let world = app.world_mut();
        assert_eq!(world.query::<&ModelRoot>().iter(world).count(), 0);
    }

    #[test]
    fn model_materials_are_marked_modified() {
        let mut app = asset_app("katana.glb");
        app.add_systems(Update, refresh_model_materials);
        app.update();

        let model_material = app
            .world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial::default());
        let root = app
            .world_mut()
            .spawn((ModelRoot, Transform::default(), Visibility::default()))
            .id();
        let node = app
            .world_mut()
            .spawn((Transform::default(), Visibility::default(), ChildOf(root)))
            .id();
        app.world_mut().spawn((
            MeshMaterial3d(model_material.clone()),
            Transform::default(),
            ChildOf(node),
        ));
        app.update();

        let scene_materials: Vec<AssetId<StandardMaterial>> = {
            let world = app.world_mut();
            world
                .query_filtered::<&MeshMaterial3d<StandardMaterial>, Or<(
                    With<Pillar>,
                    With<WaterDisc>,
                    With<FireDisc>,
                )>>()
                .iter(world)
                .map(|m| m.0.id())
                .collect()
        };
        assert!(!scene_materials.is_empty());

        let messages = app
            .world()
            .resource::<Messages<AssetEvent<StandardMaterial>>>();
        let modified: HashSet<AssetId<StandardMaterial>> = messages
            .get_cursor()
            .read(messages)
            .filter_map(|event| match event {
                AssetEvent::Modified { id } => Some(*id),
                _ => None,
            })
            .collect();

        assert!(modified.contains(&model_material.id()));
        for id in scene_materials {
            assert!(!modified.contains(&id));
        }
    }
}
