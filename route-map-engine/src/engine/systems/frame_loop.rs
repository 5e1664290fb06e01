use bevy::prelude::*;
use constants::render_settings::SPIN_PER_FRAME;

use crate::engine::scene::assembly::{TrackingLine, WireframeSphere};
use crate::engine::scene::lines::{segment_endpoints, set_segment_endpoints};

/// Constant rotation about the Y axis, advanced once per rendered frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct Spin {
    pub angle: f32,
    pub per_frame: f32,
}

impl Default for Spin {
    fn default() -> Self {
        Self {
            angle: 0.0,
            per_frame: SPIN_PER_FRAME,
        }
    }
}

// Fixed step per frame, not scaled by frame time
pub fn spin_system(mut query: Query<(&mut Spin, &mut Transform)>) {
    for (mut spin, mut transform) in &mut query {
        spin.angle += spin.per_frame;
        transform.rotation = Quat::from_rotation_y(spin.angle);
    }
}

pub fn update_tracking_line(
    sphere_query: Query<&Transform, With<WireframeSphere>>,
    line_query: Query<&Mesh3d, With<TrackingLine>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let Ok(sphere_transform) = sphere_query.single() else {
        return;
    };
    let Ok(line_mesh) = line_query.single() else {
        return;
    };

    let endpoints = (Vec3::ZERO, sphere_transform.translation);
    let unchanged = meshes
        .get(&line_mesh.0)
        .and_then(segment_endpoints)
        .is_some_and(|current| current == endpoints);
    if unchanged {
        return;
    }

    if let Some(mesh) = meshes.get_mut(&line_mesh.0) {
        set_segment_endpoints(mesh, endpoints.0, endpoints.1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scene::lines::segment_mesh;
    use approx::assert_relative_eq;

    #[test]
    fn spin_angle_grows_by_fixed_step_each_frame() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_systems(Update, spin_system);
        let entity = app
            .world_mut()
            .spawn((Spin::default(), Transform::default()))
            .id();

        let mut previous = 0.0;
        for frame in 1..=5 {
            app.update();
            let angle = app.world().get::<Spin>(entity).unwrap().angle;
            assert!(angle > previous);
            assert_relative_eq!(angle, SPIN_PER_FRAME * frame as f32, epsilon = 1e-6);
            previous = angle;
        }

        let rotation = app.world().get::<Transform>(entity).unwrap().rotation;
        assert!(rotation.abs_diff_eq(Quat::from_rotation_y(previous), 1e-6));
    }

    #[test]
    fn tracking_line_follows_sphere() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Assets<Mesh>>()
            .add_systems(Update, update_tracking_line);

        let handle = app
            .world_mut()
            .resource_mut::<Assets<Mesh>>()
            .add(segment_mesh(Vec3::ZERO, Vec3::ZERO));
        app.world_mut().spawn((Mesh3d(handle.clone()), TrackingLine));
        let sphere = app
            .world_mut()
            .spawn((Transform::from_xyz(1.0, 2.0, 3.0), WireframeSphere))
            .id();

        app.update();
        let meshes = app.world().resource::<Assets<Mesh>>();
        assert_eq!(
            segment_endpoints(meshes.get(&handle).unwrap()),
            Some((Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0)))
        );

        app.world_mut()
            .get_mut::<Transform>(sphere)
            .unwrap()
            .translation = Vec3::new(-4.0, 0.0, 0.5);
        app.update();
        let meshes = app.world().resource::<Assets<Mesh>>();
        assert_eq!(
            segment_endpoints(meshes.get(&handle).unwrap()),
            Some((Vec3::ZERO, Vec3::new(-4.0, 0.0, 0.5)))
        );
    }
}
