//! Scene camera: spawning, orbit navigation, animated reset and viewport
//! aspect handling.

use bevy::prelude::*;
use bevy::render::camera::PerspectiveProjection;
use constants::camera::{FAR_PLANE, FIELD_OF_VIEW_DEGREES, NEAR_PLANE};

use crate::engine::assets::scene_manifest::SceneConfig;

/// Tweened return to the initial view.
pub mod camera_reset;
/// Mouse-driven orbit controls with damping and polar/distance limits.
pub mod orbit_controls;
/// Window resize handling for the perspective aspect ratio.
pub mod viewport;

use orbit_controls::OrbitControls;

/// Marks the single perspective camera that renders the route map.
#[derive(Component)]
pub struct SceneCamera;

pub fn scene_projection() -> PerspectiveProjection {
    PerspectiveProjection {
        fov: FIELD_OF_VIEW_DEGREES.to_radians(),
        near: NEAR_PLANE,
        far: FAR_PLANE,
        ..default()
    }
}

pub fn spawn_orbit_camera(commands: &mut Commands, config: &SceneConfig) -> Entity {
    commands
        .spawn((
            Camera3d::default(),
            Projection::Perspective(scene_projection()),
            Transform::from_translation(config.camera_position)
                .looking_at(config.camera_target, Vec3::Y),
            OrbitControls::new(config.camera_target),
            SceneCamera,
            Name::new("SceneCamera"),
        ))
        .id()
}
