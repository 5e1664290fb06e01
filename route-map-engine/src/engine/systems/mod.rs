//! Per-frame runtime systems.
//!
//! Drives the constant scene animation and pushes camera heading updates
//! to the embedding page.

/// Spinning meshes and the origin-to-sphere tracking line.
pub mod frame_loop;

/// Throttled compass heading notifications over RPC.
pub mod heading_tracking;
