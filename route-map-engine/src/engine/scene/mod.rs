//! Scene composition and per-entity visual helpers.
//!
//! Builds every entity in the route map, the line meshes they share, the
//! camera-facing icon billboards, and the compass widget.

/// Scene assembly: meshes, lights and markers placed on entering the running state.
pub mod assembly;

/// Camera-facing textured quads used for the gate and kindergarten icons.
pub mod billboard;

/// Compass widget, heading computation and reset-on-click handling.
pub mod compass;

/// Line-list meshes for the axes helper, tracking line and road.
pub mod lines;
