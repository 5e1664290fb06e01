use std::f32::consts::{PI, TAU};

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::camera::{
    ORBIT_DAMPING_FACTOR, ORBIT_MAX_DISTANCE, ORBIT_MAX_POLAR_ANGLE, ORBIT_MIN_DISTANCE,
    ORBIT_MIN_POLAR_ANGLE, ORBIT_PAN_SPEED, ORBIT_ROTATE_SPEED, ORBIT_ZOOM_SPEED,
};

use super::SceneCamera;

const POLAR_EPSILON: f32 = 1e-6;
const CHANGE_EPSILON: f32 = 1e-6;
const ZOOM_STEP: f32 = 0.95;

/// Orbit navigation around a target point. Input accumulates into pending
/// deltas which `update` applies to the camera transform.
#[derive(Component, Debug, Clone)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    /// Pan in the camera's view plane instead of the horizontal plane.
    pub screen_space_panning: bool,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    pub pan_speed: f32,
    pub zoom_speed: f32,
    theta_delta: f32,
    phi_delta: f32,
    pan_offset: Vec3,
    scale: f32,
}

impl OrbitControls {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            enable_damping: true,
            damping_factor: ORBIT_DAMPING_FACTOR,
            screen_space_panning: false,
            min_polar_angle: ORBIT_MIN_POLAR_ANGLE,
            max_polar_angle: ORBIT_MAX_POLAR_ANGLE,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            rotate_speed: ORBIT_ROTATE_SPEED,
            pan_speed: ORBIT_PAN_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            theta_delta: 0.0,
            phi_delta: 0.0,
            pan_offset: Vec3::ZERO,
            scale: 1.0,
        }
    }

    /// Queue a rotation from a pointer drag of `delta` pixels. A drag across
    /// the full viewport height is one full turn.
    pub fn rotate(&mut self, delta: Vec2, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        self.theta_delta -= TAU * delta.x / viewport_height * self.rotate_speed;
        self.phi_delta -= TAU * delta.y / viewport_height * self.rotate_speed;
    }

    /// Queue a pan so that the point under the cursor follows the drag at the
    /// target's depth.
    pub fn pan(&mut self, delta: Vec2, viewport_height: f32, fov: f32, camera: &Transform) {
        if viewport_height <= 0.0 {
            return;
        }
        let target_distance = (camera.translation - self.target).length() * (fov * 0.5).tan();
        let left = 2.0 * delta.x * target_distance / viewport_height * self.pan_speed;
        let up = 2.0 * delta.y * target_distance / viewport_height * self.pan_speed;

        let right = camera.right().as_vec3();
        self.pan_offset -= right * left;

        let vertical = if self.screen_space_panning {
            camera.up().as_vec3()
        } else {
            Vec3::Y.cross(right)
        };
        self.pan_offset += vertical * up;
    }

    /// Queue a dolly of `notches` wheel steps; positive moves towards the target.
    pub fn dolly(&mut self, notches: f32) {
        if notches == 0.0 {
            return;
        }
        self.scale *= ZOOM_STEP.powf(self.zoom_speed).powf(notches);
    }

    /// Apply pending input to `camera`, keeping it aimed at the target.
    /// Returns whether the camera moved.
    pub fn update(&mut self, camera: &mut Transform) -> bool {
        let offset = camera.translation - self.target;
        let mut radius = offset.length();
        let (mut theta, mut phi) = if radius > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, 0.0)
        };

        if self.enable_damping {
            theta += self.theta_delta * self.damping_factor;
            phi += self.phi_delta * self.damping_factor;
        } else {
            theta += self.theta_delta;
            phi += self.phi_delta;
        }

        phi = phi
            .clamp(self.min_polar_angle, self.max_polar_angle)
            .clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        radius = (radius * self.scale).clamp(self.min_distance, self.max_distance);

        if self.enable_damping {
            self.target += self.pan_offset * self.damping_factor;
        } else {
            self.target += self.pan_offset;
        }

        let sin_phi = phi.sin();
        let offset = Vec3::new(
            radius * sin_phi * theta.sin(),
            radius * phi.cos(),
            radius * sin_phi * theta.cos(),
        );

        let previous = *camera;
        camera.translation = self.target + offset;
        camera.look_at(self.target, Vec3::Y);

        if self.enable_damping {
            let decay = 1.0 - self.damping_factor;
            self.theta_delta *= decay;
            self.phi_delta *= decay;
            self.pan_offset *= decay;
        } else {
            self.theta_delta = 0.0;
            self.phi_delta = 0.0;
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;

        previous.translation.distance_squared(camera.translation) > CHANGE_EPSILON
            || 8.0 * (1.0 - previous.rotation.dot(camera.rotation)) > CHANGE_EPSILON
    }

    pub fn has_pending_input(&self) -> bool {
        self.theta_delta.abs() > CHANGE_EPSILON
            || self.phi_delta.abs() > CHANGE_EPSILON
            || self.pan_offset.length_squared() > CHANGE_EPSILON
            || (self.scale - 1.0).abs() > CHANGE_EPSILON
    }
}

/// Left drag rotates, right drag pans, the wheel dollies. Runs every frame
/// so damped motion keeps settling after input stops.
pub fn orbit_controls_system(
    mut camera_query: Query<(&mut OrbitControls, &mut Transform, &Projection), With<SceneCamera>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    let Ok((mut controls, mut transform, projection)) = camera_query.single_mut() else {
        return;
    };
    let viewport_height = windows.single().map(|w| w.height()).unwrap_or(0.0);

    if mouse_delta != Vec2::ZERO {
        if mouse_button.pressed(MouseButton::Left) {
            controls.rotate(mouse_delta, viewport_height);
        } else if mouse_button.pressed(MouseButton::Right) {
            let fov = match projection {
                Projection::Perspective(perspective) => perspective.fov,
                _ => super::scene_projection().fov,
            };
            controls.pan(mouse_delta, viewport_height, fov, &transform);
        }
    }
    controls.dolly(scroll_accum);

    controls.update(&mut transform);
}
