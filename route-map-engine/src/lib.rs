//! Interactive route map scene built on Bevy.
//!
//! Renders a textured ground plane under a sky sphere, a spinning wireframe
//! sphere and pyramid, axis and tracking lines, and two camera-facing icons.
//! Clicking the kindergarten icon draws the road from the gate to it; the
//! compass widget follows the camera heading and, when clicked, eases the
//! orbit camera back to where it started.

pub mod engine;
pub mod rpc;
pub mod tools;
