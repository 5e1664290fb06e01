//! Shared scene layout, camera and render constants.
//!
//! Every value here is a compiled default; the engine's scene manifest may
//! override the subset that describes placement and asset paths.

/// Perspective camera, orbit control and reset animation settings.
pub mod camera;

/// Line colours, material parameters and per-frame animation rates.
pub mod render_settings;

/// Positions and dimensions of every entity placed in the scene.
pub mod scene_layout;

/// Relative asset paths for textures, icons and the scene manifest.
pub mod texture;
