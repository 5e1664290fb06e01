use bevy::prelude::*;
use bevy::window::WindowResized;

use super::SceneCamera;

/// Last known drawable size in logical pixels.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

/// Set the perspective aspect ratio for a `width` x `height` viewport.
/// Returns `false` and leaves the projection alone for degenerate sizes.
pub fn apply_viewport_resize(projection: &mut Projection, width: f32, height: f32) -> bool {
    if !(width > 0.0 && height > 0.0) {
        return false;
    }
    let Projection::Perspective(perspective) = projection else {
        return false;
    };
    perspective.aspect_ratio = width / height;
    true
}

pub fn handle_window_resize(
    mut resize_events: EventReader<WindowResized>,
    mut viewport: ResMut<ViewportSize>,
    mut camera_query: Query<&mut Projection, With<SceneCamera>>,
) {
    let Some(resized) = resize_events.read().last() else {
        return;
    };
    let Ok(mut projection) = camera_query.single_mut() else {
        return;
    };

    if apply_viewport_resize(&mut projection, resized.width, resized.height) {
        viewport.width = resized.width;
        viewport.height = resized.height;
    }
}
