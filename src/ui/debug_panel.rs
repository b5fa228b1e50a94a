use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

use crate::animation::FrameSignals;
use crate::config::{PanelConfig, SliderRange};
use crate::scene::{DebugLight, ModelLoad};

/// Whether the debug panel is shown
#[derive(Resource)]
pub struct DebugPanelState {
    pub open: bool,
}

impl Default for DebugPanelState {
    fn default() -> Self {
        Self { open: true }
    }
}

pub struct DebugPanelPlugin;

impl Plugin for DebugPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugPanelState>()
            .add_systems(Update, toggle_debug_panel)
            .add_systems(EguiPrimaryContextPass, draw_debug_panel);
    }
}

fn toggle_debug_panel(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugPanelState>) {
    if keyboard.just_pressed(KeyCode::F1) {
        state.open = !state.open;
    }
}

/// Sliders for the debug light position, plus a readout of the animation signals
fn draw_debug_panel(
    mut contexts: EguiContexts,
    mut state: ResMut<DebugPanelState>,
    config: Res<PanelConfig>,
    signals: Res<FrameSignals>,
    model: Res<ModelLoad>,
    mut lights: Query<&mut Transform, With<DebugLight>>,
) -> Result {
    if !state.open {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;

    egui::Window::new(config.title.as_str())
        .open(&mut state.open)
        .default_width(config.width)
        .resizable(false)
        .show(ctx, |ui| {
            egui::CollapsingHeader::new("Rotation")
                .default_open(true)
                .show(ui, |ui| {
                    let Ok(mut transform) = lights.single_mut() else {
                        ui.label("No debug light in the scene");
                        return;
                    };

                    egui::Grid::new("debug_light_grid")
                        .num_columns(2)
                        .spacing([10.0, 8.0])
                        .show(ui, |ui| {
                            axis_slider(ui, "pos x", &mut transform.translation.x, config.x);
                            axis_slider(ui, "pos y", &mut transform.translation.y, config.y);
                            axis_slider(ui, "pos z", &mut transform.translation.z, config.z);
                        });
                });

            ui.add_space(4.0);
            ui.separator();

            egui::Grid::new("debug_signal_grid")
                .num_columns(2)
                .spacing([10.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Time:");
                    ui.monospace(format!("{:.2}s", signals.elapsed));
                    ui.end_row();

                    ui.label("Water flow:");
                    ui.monospace(format!("{:+.3}", signals.water_flow));
                    ui.end_row();

                    ui.label("Fire flicker:");
                    ui.monospace(format!("{:.3}", signals.fire_flicker));
                    ui.end_row();

                    ui.label("Model:");
                    ui.monospace(model.status.label());
                    ui.end_row();
                });

            ui.weak("F1 hides this panel");
        });

    Ok(())
}

/// One labelled slider row. The value is only written back on user edits.
fn axis_slider(ui: &mut egui::Ui, label: &str, value: &mut f32, range: SliderRange) {
    let mut edited = *value;
    ui.label(label);
    let response = ui.add(
        egui::Slider::new(&mut edited, range.min..=range.max).step_by(range.step as f64),
    );
    if response.changed() {
        *value = edited;
    }
    ui.end_row();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f1_toggles_the_panel() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<DebugPanelState>()
            .add_systems(Update, toggle_debug_panel);

        app.update();
        assert!(app.world().resource::<DebugPanelState>().open);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::F1);
        app.update();
        assert!(!app.world().resource::<DebugPanelState>().open);

        // Held key does not toggle again
        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
        app.update();
        assert!(!app.world().resource::<DebugPanelState>().open);

        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.release(KeyCode::F1);
        input.press(KeyCode::F1);
        app.update();
        assert!(app.world().resource::<DebugPanelState>().open);
    }
}
