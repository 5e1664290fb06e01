use bevy::prelude::*;
use bevy::render::camera::CameraProjection;
use bevy::window::PrimaryWindow;
use constants::render_settings::ROAD_LINE_COLOUR;
use serde_json::json;

use super::ray::{cursor_to_ndc, ray_from_ndc, ray_hits_billboard};
use crate::engine::camera::SceneCamera;
use crate::engine::scene::billboard::{GateSprite, KindergartenSprite};
use crate::engine::scene::compass::Compass;
use crate::engine::scene::lines::spawn_segment;
use crate::rpc::web_rpc::WebRpcInterface;

/// The road currently drawn between the gate and the kindergarten, if any.
#[derive(Resource, Default, Debug)]
pub struct RoadLine {
    pub entity: Option<Entity>,
    pub endpoints: Option<(Vec3, Vec3)>,
}

#[derive(Component)]
pub struct RoadSegment;

/// World-space ray under a left click on the map.
#[derive(Event, Debug, Clone, Copy)]
pub struct MapPickEvent {
    pub ray: Ray3d,
}

pub fn map_click_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Projection), With<SceneCamera>>,
    compass: Query<&Interaction, With<Compass>>,
    mut picks: EventWriter<MapPickEvent>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    // Clicks on the compass belong to the compass.
    if compass.iter().any(|interaction| *interaction != Interaction::None) {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((camera_transform, projection)) = cameras.single() else {
        return;
    };
    let Some(ndc) = cursor_to_ndc(cursor_pos, window.size()) else {
        return;
    };
    let Some(ray) = ray_from_ndc(ndc, camera_transform, projection.get_clip_from_view()) else {
        return;
    };

    picks.write(MapPickEvent { ray });
}

/// Rebuild the road whenever a pick ray passes through the kindergarten icon.
pub fn road_pick_system(
    mut picks: EventReader<MapPickEvent>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut road: ResMut<RoadLine>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    kindergarten: Query<&GlobalTransform, With<KindergartenSprite>>,
    gate: Query<&GlobalTransform, With<GateSprite>>,
) {
    for pick in picks.read() {
        let Ok(kindergarten_transform) = kindergarten.single() else {
            return;
        };
        if ray_hits_billboard(pick.ray, kindergarten_transform).is_none() {
            continue;
        }
        let Ok(gate_transform) = gate.single() else {
            return;
        };

        let from = gate_transform.translation();
        let to = kindergarten_transform.translation();

        if let Some(previous) = road.entity.take() {
            commands.entity(previous).despawn();
        }
        road.entity = Some(spawn_segment(
            &mut commands,
            &mut meshes,
            &mut materials,
            from,
            to,
            ROAD_LINE_COLOUR,
            (RoadSegment, Name::new("Road")),
        ));
        road.endpoints = Some((from, to));

        info!("Road rebuilt from {from} to {to}");
        rpc_interface.send_notification(
            "road_updated",
            json!({
                "from": from.to_array(),
                "to": to.to_array()
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::camera::scene_projection;

    const GATE: Vec3 = Vec3::new(2.0, 0.3, 0.0);
    const KINDERGARTEN: Vec3 = Vec3::new(5.0, 0.3, 5.0);

    fn pick_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<RoadLine>()
            .init_resource::<WebRpcInterface>()
            .add_event::<MapPickEvent>()
            .add_systems(Update, road_pick_system);

        app.world_mut().spawn((
            GateSprite,
            GlobalTransform::from(Transform::from_translation(GATE).with_scale(Vec3::splat(0.5))),
        ));
        app.world_mut().spawn((
            KindergartenSprite,
            GlobalTransform::from(
                Transform::from_translation(KINDERGARTEN).with_scale(Vec3::splat(0.5)),
            ),
        ));
        app
    }

    fn hit() -> MapPickEvent {
        MapPickEvent {
            ray: Ray3d::new(KINDERGARTEN + Vec3::Z * 10.0, Dir3::NEG_Z),
        }
    }

    fn miss() -> MapPickEvent {
        MapPickEvent {
            ray: Ray3d::new(Vec3::new(0.0, 0.0, 10.0), Dir3::NEG_Z),
        }
    }

    fn click_app(cursor: Vec2) -> App {
        let mut app = pick_app();
        app.init_resource::<ButtonInput<MouseButton>>()
            .add_systems(Update, map_click_system.before(road_pick_system));

        let mut window = Window::default();
        window.resolution.set(1280.0, 720.0);
        window.set_cursor_position(Some(cursor));
        app.world_mut().spawn((window, PrimaryWindow));

        app.world_mut().spawn((SceneCamera, camera_transform(), click_projection()));
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app
    }

    fn camera_transform() -> GlobalTransform {
        GlobalTransform::from(Transform::from_xyz(0.0, 0.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y))
    }

    fn click_projection() -> Projection {
        let mut perspective = scene_projection();
        perspective.aspect_ratio = 1280.0 / 720.0;
        Projection::Perspective(perspective)
    }

    /// Window position at which `point` is drawn by the test camera.
    fn cursor_over(point: Vec3) -> Vec2 {
        let view_from_world = camera_transform().compute_matrix().inverse();
        let clip = click_projection().get_clip_from_view() * view_from_world * point.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        Vec2::new((ndc.x + 1.0) * 0.5 * 1280.0, (1.0 - ndc.y) * 0.5 * 720.0)
    }

    fn picks_written(app: &App) -> usize {
        let events = app.world().resource::<Events<MapPickEvent>>();
        events.get_cursor().read(events).count()
    }

    #[test]
    fn click_over_kindergarten_builds_road() {
        let mut app = click_app(cursor_over(KINDERGARTEN));
        app.update();

        assert_eq!(picks_written(&app), 1);
        assert_eq!(road_segments(&mut app), 1);
        assert_eq!(
            app.world().resource::<RoadLine>().endpoints,
            Some((GATE, KINDERGARTEN))
        );
    }

    #[test]
    fn click_beside_kindergarten_misses() {
        let mut app = click_app(cursor_over(KINDERGARTEN) + Vec2::new(60.0, 0.0));
        app.update();

        assert_eq!(picks_written(&app), 1);
        assert_eq!(road_segments(&mut app), 0);
    }

    #[test]
    fn click_on_compass_is_not_a_map_pick() {
        let mut app = click_app(cursor_over(KINDERGARTEN));
        app.world_mut().spawn((Compass, Interaction::Pressed));
        app.update();

        assert_eq!(picks_written(&app), 0);
        assert_eq!(road_segments(&mut app), 0);
    }

    fn road_segments(app: &mut App) -> usize {
        let world = app.world_mut();
        world
            .query_filtered::<Entity, With<RoadSegment>>()
            .iter(world)
            .count()
    }

    #[test]
    fn repeated_hits_leave_exactly_one_road() {
        let mut app = pick_app();

        for _ in 0..3 {
            app.world_mut().send_event(hit());
            app.update();
            assert_eq!(road_segments(&mut app), 1);
        }

        let road = app.world().resource::<RoadLine>();
        assert_eq!(road.endpoints, Some((GATE, KINDERGARTEN)));
        let entity = road.entity.unwrap();
        assert!(app.world().get::<RoadSegment>(entity).is_some());
    }

    #[test]
    fn two_hits_in_one_frame_still_leave_one_road() {
        let mut app = pick_app();
        app.world_mut().send_event(hit());
        app.world_mut().send_event(hit());
        app.update();
        assert_eq!(road_segments(&mut app), 1);
    }

    #[test]
    fn misses_leave_road_state_unchanged() {
        let mut app = pick_app();

        app.world_mut().send_event(miss());
        app.update();
        assert_eq!(road_segments(&mut app), 0);
        assert!(app.world().resource::<RoadLine>().entity.is_none());

        app.world_mut().send_event(hit());
        app.update();
        let built = app.world().resource::<RoadLine>().entity;

        app.world_mut().send_event(miss());
        app.update();
        assert_eq!(road_segments(&mut app), 1);
        assert_eq!(app.world().resource::<RoadLine>().entity, built);
    }

    #[test]
    fn rebuild_notifies_frontend() {
        let mut app = pick_app();
        app.world_mut().send_event(hit());
        app.update();

        let methods = app
            .world()
            .resource::<WebRpcInterface>()
            .queued_notification_methods();
        assert_eq!(methods, vec!["road_updated"]);
    }
}
