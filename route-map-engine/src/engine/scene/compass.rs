use std::f32::consts::PI;

use bevy::prelude::*;
use constants::scene_layout::{COMPASS_MARGIN_PX, COMPASS_SIZE_PX};

use crate::engine::camera::SceneCamera;
use crate::engine::camera::camera_reset::{CameraResetRequest, ResetSource};

/// UI compass rotated to the camera heading; clicking it resets the view.
#[derive(Component)]
pub struct Compass;

/// Latest camera heading in radians, as applied to the compass.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct CompassHeading(pub f32);

/// Heading of a world-space viewing direction, offset by half a turn so that
/// looking towards -Z reads as north.
pub fn heading_from_direction(direction: Vec3) -> f32 {
    direction.x.atan2(direction.z) + PI
}

pub fn spawn_compass(commands: &mut Commands, asset_server: &AssetServer, icon_path: &str) {
    commands.spawn((
        Button,
        ImageNode::new(asset_server.load(icon_path.to_owned())),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(COMPASS_MARGIN_PX),
            right: Val::Px(COMPASS_MARGIN_PX),
            width: Val::Px(COMPASS_SIZE_PX),
            height: Val::Px(COMPASS_SIZE_PX),
            ..default()
        },
        Compass,
        Name::new("Compass"),
    ));
}

pub fn update_compass_heading(
    camera_query: Query<&Transform, (With<SceneCamera>, Without<Compass>)>,
    mut compass_query: Query<&mut Transform, With<Compass>>,
    mut heading: ResMut<CompassHeading>,
) {
    let Ok(camera_transform) = camera_query.single() else {
        return;
    };

    heading.0 = heading_from_direction(camera_transform.forward().as_vec3());

    // UI space is y-down, so a positive z rotation turns the needle clockwise.
    for mut transform in &mut compass_query {
        transform.rotation = Quat::from_rotation_z(heading.0);
    }
}

pub fn compass_click_system(
    interactions: Query<&Interaction, (Changed<Interaction>, With<Compass>)>,
    mut reset_events: EventWriter<CameraResetRequest>,
) {
    for interaction in &interactions {
        if *interaction == Interaction::Pressed {
            reset_events.write(CameraResetRequest {
                source: ResetSource::Compass,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::TAU;

    #[test]
    fn facing_positive_z_is_the_reference_heading() {
        assert_relative_eq!(heading_from_direction(Vec3::Z), 0.0_f32.atan2(1.0) + PI);
        assert_relative_eq!(heading_from_direction(Vec3::Z), PI);
    }

    #[test]
    fn facing_negative_z_is_shifted_by_half_a_turn() {
        let forward = heading_from_direction(Vec3::Z);
        let backward = heading_from_direction(Vec3::NEG_Z);
        assert_relative_eq!(backward - forward, PI, epsilon = 1e-6);
    }

    #[test]
    fn heading_varies_continuously_with_direction() {
        let mut previous = heading_from_direction(Vec3::new(0.0, 0.0, 1.0));
        for step in 1..90 {
            let angle = step as f32 * 0.01;
            let heading = heading_from_direction(Vec3::new(angle.sin(), 0.0, angle.cos()));
            assert!((heading - previous).abs() < 0.011);
            previous = heading;
        }
    }

    #[test]
    fn compass_follows_camera_heading() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<CompassHeading>()
            .add_systems(Update, update_compass_heading);

        // Looking along (-1, 0, -1), clear of the atan2 branch cut.
        app.world_mut().spawn((
            SceneCamera,
            Transform::from_xyz(10.0, 0.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        ));
        let compass = app.world_mut().spawn((Compass, Transform::default())).id();

        app.update();

        let heading = app.world().resource::<CompassHeading>().0;
        assert_relative_eq!(heading, PI / 4.0, epsilon = 1e-5);
        let rotation = app.world().get::<Transform>(compass).unwrap().rotation;
        assert!(rotation.abs_diff_eq(Quat::from_rotation_z(heading), 1e-6));
    }

    #[test]
    fn heading_along_negative_z_is_the_same_angle_either_side_of_the_cut() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<CompassHeading>()
            .add_systems(Update, update_compass_heading);

        // The forward vector here carries x = -0.0, so atan2 lands on -PI.
        app.world_mut().spawn((
            SceneCamera,
            Transform::from_xyz(0.0, 0.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        ));
        app.update();

        let heading = app.world().resource::<CompassHeading>().0.rem_euclid(TAU);
        assert!(heading < 1e-5 || (TAU - heading) < 1e-5, "heading {heading}");
    }

    #[test]
    fn pressing_the_compass_requests_a_reset() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<CameraResetRequest>()
            .add_systems(Update, compass_click_system);

        app.world_mut().spawn((Compass, Interaction::Pressed));
        app.update();

        let events = app.world().resource::<Events<CameraResetRequest>>();
        let mut reader = events.get_cursor();
        let requests: Vec<_> = reader.read(events).collect();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].source, ResetSource::Compass);
    }
}
