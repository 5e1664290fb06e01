use std::f32::consts::PI;

pub const GROUND_SIZE: f32 = 20.0;

pub const WIREFRAME_SPHERE_RADIUS: f32 = 2.0;
pub const WIREFRAME_SPHERE_SECTORS: u32 = 32;
pub const WIREFRAME_SPHERE_STACKS: u32 = 32;

pub const PYRAMID_RADIUS: f32 = 1.0;
pub const PYRAMID_HEIGHT: f32 = 3.0;
pub const PYRAMID_SIDES: u32 = 3;
pub const PYRAMID_POSITION: [f32; 3] = [7.0, 2.0, 0.0];

pub const SPOT_LIGHT_POSITIONS: [[f32; 3]; 2] = [[5.0, 5.0, 5.0], [-5.0, 5.0, 5.0]];
pub const SPOT_LIGHT_ANGLE: f32 = PI / 4.0;

pub const SKY_RADIUS: f32 = 500.0;
pub const SKY_SECTORS: u32 = 60;
pub const SKY_STACKS: u32 = 40;

pub const ORIGIN_MARKER_RADIUS: f32 = 0.1;
pub const AXES_LENGTH: f32 = 5.0;

pub const GATE_POSITION: [f32; 3] = [2.0, 0.3, 0.0];
pub const KINDERGARTEN_POSITION: [f32; 3] = [5.0, 0.3, 5.0];
pub const SPRITE_SCALE: f32 = 0.5;

/// Compass widget edge length and inset from the top-right corner, in logical pixels.
pub const COMPASS_SIZE_PX: f32 = 64.0;
pub const COMPASS_MARGIN_PX: f32 = 16.0;
