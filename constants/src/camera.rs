use std::f32::consts::PI;

/// Vertical field of view of the perspective camera, in degrees.
pub const FIELD_OF_VIEW_DEGREES: f32 = 75.0;

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

/// Initial camera position, also the camera reset destination.
pub const INITIAL_CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 10.0];

/// Initial orbit target, also the orbit target reset destination.
pub const INITIAL_CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 0.0];

/// Fraction of the pending orbit motion applied per update when damping is on.
pub const ORBIT_DAMPING_FACTOR: f32 = 0.25;

/// Polar angle limits measured from +Y, in radians.
pub const ORBIT_MIN_POLAR_ANGLE: f32 = PI / 190.0;
pub const ORBIT_MAX_POLAR_ANGLE: f32 = PI / 2.1;

pub const ORBIT_MIN_DISTANCE: f32 = 0.5;
pub const ORBIT_MAX_DISTANCE: f32 = 400.0;

/// Unitless multiplier on the orbit angle; a drag the height of the window
/// turns a full circle at 1.0.
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_PAN_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;

/// Duration of the compass-triggered camera reset, in seconds.
pub const RESET_DURATION_SECS: f32 = 2.0;

/// Minimum interval between compass heading notifications to the host page.
pub const HEADING_NOTIFY_INTERVAL_SECS: f32 = 0.1;
