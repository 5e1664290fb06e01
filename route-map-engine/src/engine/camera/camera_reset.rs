use bevy::math::curve::{Curve, EaseFunction, EasingCurve};
use bevy::prelude::*;
use constants::camera::RESET_DURATION_SECS;
use serde_json::json;

use super::SceneCamera;
use super::orbit_controls::OrbitControls;
use crate::engine::assets::scene_manifest::SceneConfig;
use crate::rpc::web_rpc::WebRpcInterface;

/// Camera pose the reset animates back to, captured from the scene config.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct InitialView {
    pub camera_position: Vec3,
    pub target: Vec3,
}

impl InitialView {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            camera_position: config.camera_position,
            target: config.camera_target,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetSource {
    Compass,
    Keyboard,
    Rpc,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct CameraResetRequest {
    pub source: ResetSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenProperty {
    CameraPosition,
    OrbitTarget,
}

/// Eased interpolation of one camera property between fixed endpoints.
#[derive(Debug, Clone)]
pub struct PropertyTween {
    pub property: TweenProperty,
    start: Vec3,
    end: Vec3,
    elapsed: f32,
    duration: f32,
    ease: EaseFunction,
}

impl PropertyTween {
    pub fn new(property: TweenProperty, start: Vec3, end: Vec3, duration: f32) -> Self {
        Self {
            property,
            start,
            end,
            elapsed: 0.0,
            duration,
            ease: EaseFunction::QuadraticOut,
        }
    }

    /// Step the tween by `dt` seconds and return the value for that instant.
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        let progress = if self.duration > 0.0 {
            self.elapsed / self.duration
        } else {
            1.0
        };
        let eased = EasingCurve::new(0.0, 1.0, self.ease).sample_clamped(progress);
        self.start.lerp(self.end, eased)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// In-flight tweens. Overlapping resets simply add more entries.
#[derive(Resource, Default)]
pub struct ActiveTweens {
    pub tweens: Vec<PropertyTween>,
}

pub fn start_camera_reset(
    mut requests: EventReader<CameraResetRequest>,
    initial_view: Option<Res<InitialView>>,
    camera_query: Query<(&Transform, &OrbitControls), With<SceneCamera>>,
    mut active: ResMut<ActiveTweens>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for request in requests.read() {
        let Some(initial_view) = initial_view.as_deref() else {
            return;
        };
        let Ok((transform, controls)) = camera_query.single() else {
            return;
        };

        active.tweens.push(PropertyTween::new(
            TweenProperty::CameraPosition,
            transform.translation,
            initial_view.camera_position,
            RESET_DURATION_SECS,
        ));
        active.tweens.push(PropertyTween::new(
            TweenProperty::OrbitTarget,
            controls.target,
            initial_view.target,
            RESET_DURATION_SECS,
        ));

        info!("Camera reset started ({:?})", request.source);
        rpc_interface.send_notification(
            "camera_reset_started",
            json!({ "source": format!("{:?}", request.source) }),
        );
    }
}

pub fn advance_camera_tweens(
    time: Res<Time>,
    mut active: ResMut<ActiveTweens>,
    mut camera_query: Query<(&mut Transform, &mut OrbitControls), With<SceneCamera>>,
) {
    if active.tweens.is_empty() {
        return;
    }
    let Ok((mut transform, mut controls)) = camera_query.single_mut() else {
        return;
    };

    let dt = time.delta_secs();
    for tween in active.tweens.iter_mut() {
        let value = tween.advance(dt);
        match tween.property {
            TweenProperty::CameraPosition => transform.translation = value,
            TweenProperty::OrbitTarget => {
                controls.target = value;
                controls.update(&mut transform);
            }
        }
    }

    active.tweens.retain(|tween| !tween.is_finished());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn keyboard_reset_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut reset_events: EventWriter<CameraResetRequest>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        reset_events.write(CameraResetRequest {
            source: ResetSource::Keyboard,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    #[test]
    fn tween_reaches_end_value_at_duration() {
        let start = Vec3::new(20.0, 8.0, -3.0);
        let end = Vec3::new(0.0, 5.0, 10.0);
        let mut tween = PropertyTween::new(TweenProperty::CameraPosition, start, end, 2.0);

        let mut value = start;
        for _ in 0..20 {
            value = tween.advance(0.1);
        }

        assert!(tween.is_finished());
        assert!(value.abs_diff_eq(end, 1e-5));
    }

    #[test]
    fn tween_eases_out_monotonically() {
        let start = Vec3::new(0.0, 0.0, 50.0);
        let end = Vec3::new(0.0, 0.0, 10.0);
        let mut tween = PropertyTween::new(TweenProperty::CameraPosition, start, end, 2.0);

        let mut previous_distance = start.distance(end);
        let mut previous_step = f32::INFINITY;
        for _ in 0..20 {
            let value = tween.advance(0.1);
            let distance = value.distance(end);
            let step = previous_distance - distance;
            assert!(distance <= previous_distance);
            // Ease-out: each step covers less ground than the one before.
            assert!(step <= previous_step + 1e-4);
            previous_distance = distance;
            previous_step = step;
        }
    }

    #[test]
    fn quadratic_out_matches_closed_form() {
        let mut tween = PropertyTween::new(TweenProperty::OrbitTarget, Vec3::ZERO, Vec3::X, 2.0);
        let value = tween.advance(0.5);
        let t = 0.25_f32;
        assert_relative_eq!(value.x, 1.0 - (1.0 - t) * (1.0 - t), epsilon = 1e-5);
    }

    fn reset_app(camera: Transform, target: Vec3) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
            .insert_resource(InitialView {
                camera_position: Vec3::new(0.0, 5.0, 10.0),
                target: Vec3::ZERO,
            })
            .init_resource::<ActiveTweens>()
            .init_resource::<WebRpcInterface>()
            .add_event::<CameraResetRequest>()
            .add_systems(Update, (start_camera_reset, advance_camera_tweens).chain());

        app.world_mut()
            .spawn((SceneCamera, camera, OrbitControls::new(target)));
        app
    }

    #[test]
    fn reset_returns_camera_and_target_to_initial_view() {
        let camera = Transform::from_xyz(30.0, 12.0, -8.0).looking_at(Vec3::new(4.0, 0.0, 2.0), Vec3::Y);
        let mut app = reset_app(camera, Vec3::new(4.0, 0.0, 2.0));

        app.world_mut().send_event(CameraResetRequest {
            source: ResetSource::Rpc,
        });
        for _ in 0..30 {
            app.update();
        }

        assert!(app.world().resource::<ActiveTweens>().tweens.is_empty());
        let mut query = app
            .world_mut()
            .query_filtered::<(&Transform, &OrbitControls), With<SceneCamera>>();
        let (transform, controls) = query.single(app.world()).unwrap();
        assert!(controls.target.abs_diff_eq(Vec3::ZERO, 1e-3));
        assert!(transform.translation.abs_diff_eq(Vec3::new(0.0, 5.0, 10.0), 1e-2));
    }

    #[test]
    fn repeated_requests_overlap_instead_of_cancelling() {
        let camera = Transform::from_xyz(30.0, 12.0, -8.0).looking_at(Vec3::ZERO, Vec3::Y);
        let mut app = reset_app(camera, Vec3::ZERO);

        app.world_mut().send_event(CameraResetRequest {
            source: ResetSource::Compass,
        });
        app.update();
        app.world_mut().send_event(CameraResetRequest {
            source: ResetSource::Compass,
        });
        app.update();

        assert_eq!(app.world().resource::<ActiveTweens>().tweens.len(), 4);
    }
}
