use bevy::color::Color;

/// Rotation added to the sphere and pyramid every rendered frame, in radians.
/// Not scaled by frame time.
pub const SPIN_PER_FRAME: f32 = 0.01;

pub const TRACKING_LINE_COLOUR: Color = Color::srgb(0.0, 1.0, 0.0);
pub const ROAD_LINE_COLOUR: Color = Color::srgb(0.0, 0.0, 1.0);

pub const WIREFRAME_SPHERE_COLOUR: Color = Color::srgba(0.0, 1.0, 0.0, 0.5);
pub const ORIGIN_MARKER_COLOUR: Color = Color::srgb(1.0, 0.0, 0.0);

/// 0xFF4500
pub const PYRAMID_COLOUR: Color = Color::srgb(1.0, 0.270_588, 0.0);
pub const PYRAMID_METALLIC: f32 = 0.5;
pub const PYRAMID_ROUGHNESS: f32 = 0.1;

pub const AXIS_X_COLOUR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const AXIS_Y_COLOUR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
pub const AXIS_Z_COLOUR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

pub const SPOT_LIGHT_INTENSITY: f32 = 1_000_000.0;
pub const AMBIENT_LIGHT_BRIGHTNESS: f32 = 500.0;

/// Full depth, in local units, of the box used to ray test a billboard quad.
pub const BILLBOARD_PICK_THICKNESS: f32 = 0.001;
