use bevy::prelude::*;
use bevy::window::{PresentMode, PrimaryWindow, WindowResized};

/// Highest device pixel ratio the canvas renders at
pub const MAX_PIXEL_RATIO: f32 = 2.0;

pub const WINDOW_TITLE: &str = "Pillar Garden";

/// Size of the drawing surface in logical pixels
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub aspect: f32,
    pub pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            aspect: aspect_ratio(1280.0, 720.0),
            pixel_ratio: 1.0,
        }
    }
}

/// Width over height, or 1.0 while the surface has no height
pub fn aspect_ratio(width: f32, height: f32) -> f32 {
    if height > 0.0 && width > 0.0 {
        width / height
    } else {
        1.0
    }
}

pub fn capped_pixel_ratio(device_ratio: f32) -> f32 {
    device_ratio.min(MAX_PIXEL_RATIO)
}

/// Primary window: full page canvas in the browser, a normal window elsewhere
pub fn primary_window() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            title: WINDOW_TITLE.to_string(),
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: WINDOW_TITLE.to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>()
            .add_message::<WindowResized>()
            .add_systems(Startup, init_viewport)
            .add_systems(Update, track_resize);
    }
}

fn init_viewport(
    mut viewport: ResMut<Viewport>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    let (width, height) = (window.width(), window.height());
    apply_size(&mut viewport, &mut window, width, height);
}

/// Keep the viewport in step with the window. Only the viewport and the
/// window's pixel ratio change; scene content is left alone.
fn track_resize(
    mut events: MessageReader<WindowResized>,
    mut viewport: ResMut<Viewport>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Some(event) = events.read().last() else {
        return;
    };
    let Ok(mut window) = windows.get_mut(event.window) else {
        return;
    };

    apply_size(&mut viewport, &mut window, event.width, event.height);
    debug!(
        "Viewport resized to {}x{} (aspect {:.3}, pixel ratio {})",
        viewport.width, viewport.height, viewport.aspect, viewport.pixel_ratio
    );
}

fn apply_size(viewport: &mut Viewport, window: &mut Window, width: f32, height: f32) {
    let pixel_ratio = capped_pixel_ratio(window.resolution.base_scale_factor());
    if window.resolution.scale_factor_override() != Some(pixel_ratio) {
        window.resolution.set_scale_factor_override(Some(pixel_ratio));
    }

    *viewport = Viewport {
        width,
        height,
        aspect: aspect_ratio(width, height),
        pixel_ratio,
    };
}
