use bevy::prelude::*;

use crate::engine::camera::SceneCamera;

/// Quad that keeps facing the camera, like a sprite.
#[derive(Component, Debug, Clone, Copy)]
pub struct Billboard {
    /// Edge length of the square quad in world units.
    pub size: f32,
}

#[derive(Component)]
pub struct GateSprite;

#[derive(Component)]
pub struct KindergartenSprite;

pub fn billboard_material(texture: Handle<Image>) -> StandardMaterial {
    StandardMaterial {
        base_color_texture: Some(texture),
        unlit: true,
        cull_mode: None,
        alpha_mode: AlphaMode::Blend,
        ..default()
    }
}

/// Spawn a textured icon quad of edge `size` centred on `position`.
pub fn spawn_billboard(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    texture: Handle<Image>,
    position: Vec3,
    size: f32,
    marker: impl Bundle,
) -> Entity {
    commands
        .spawn((
            Mesh3d(meshes.add(Rectangle::new(1.0, 1.0))),
            MeshMaterial3d(materials.add(billboard_material(texture))),
            Transform::from_translation(position).with_scale(Vec3::splat(size)),
            Billboard { size },
            marker,
        ))
        .id()
}

/// Align every billboard with the camera's view plane.
pub fn face_camera(
    camera_query: Query<&Transform, (With<SceneCamera>, Without<Billboard>)>,
    mut billboards: Query<&mut Transform, With<Billboard>>,
) {
    let Ok(camera_transform) = camera_query.single() else {
        return;
    };
    for mut transform in &mut billboards {
        transform.rotation = camera_transform.rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn billboards_copy_camera_rotation() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_systems(Update, face_camera);

        let camera_transform = Transform::from_xyz(3.0, 4.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y);
        app.world_mut().spawn((SceneCamera, camera_transform));
        let icon = app
            .world_mut()
            .spawn((Transform::from_xyz(5.0, 0.3, 5.0), Billboard { size: 0.5 }))
            .id();

        app.update();

        let rotation = app.world().get::<Transform>(icon).unwrap().rotation;
        assert!(rotation.abs_diff_eq(camera_transform.rotation, 1e-6));
    }
}
