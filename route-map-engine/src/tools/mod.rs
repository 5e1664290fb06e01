//! Map interaction tools.
//!
//! A left click on the map becomes a world-space pick ray; a ray through the
//! kindergarten icon rebuilds the road from the gate to the kindergarten.
//!
//! ```text
//! Left click (not over the compass)
//!   └─> map_click_system(): cursor -> NDC -> inverse view-projection ray
//!       └─> MapPickEvent
//!           └─> road_pick_system()
//!               ├─> miss: nothing changes
//!               └─> hit:  despawn old road, spawn new one, notify frontend
//! ```

/// Cursor unprojection and ray intersection tests.
pub mod ray;

/// Click handling and road rebuilding between the gate and the kindergarten.
pub mod road_pick;
