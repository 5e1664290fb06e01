//! JSON-RPC 2.0 bridge to the page embedding the route map.
//!
//! Messages travel over `window.postMessage` between the engine (running in
//! an iframe) and its parent page. Outside the browser the queues still
//! work but nothing is transmitted.
//!
//! ```text
//! Parent page  <──postMessage──>  Engine (iframe)
//!      │                                │
//!      ├─ Request (with ID) ──────────> │
//!      │                                ├─ handle_rpc_request()
//!      │ <───────── Response (with ID) ─┤
//!      │                                │
//!      │ <────── Notification (no ID) ──┤
//! ```
//!
//! ## Methods
//!
//! - `reset_camera`: animate the camera back to its initial view
//! - `get_compass_heading`: current heading in radians
//! - `get_road_state`: whether a road is drawn, and its endpoints
//! - `get_fps`: smoothed frame rate
//!
//! ## Notifications
//!
//! - `road_updated`: the road was rebuilt, with its endpoints
//! - `camera_reset_started`: a reset animation began, with its trigger
//! - `compass_heading`: heading changes, at most ten per second
//!
//! ## Error codes
//!
//! - `-32600`: Invalid request
//! - `-32601`: Method not found
//! - `-32602`: Invalid params

/// Message types, queues, the browser listener and request dispatch.
pub mod web_rpc;
