use bevy::prelude::*;
use constants::camera::HEADING_NOTIFY_INTERVAL_SECS;

use crate::engine::scene::compass::CompassHeading;
use crate::rpc::web_rpc::WebRpcInterface;

pub fn heading_notification_system(
    mut rpc_interface: ResMut<WebRpcInterface>,
    heading: Res<CompassHeading>,
    mut last_send_time: Local<Option<f32>>,
    mut last_sent_heading: Local<Option<f32>>,
    time: Res<Time>,
) {
    let current_time = time.elapsed_secs();

    // Send at most every HEADING_NOTIFY_INTERVAL_SECS, and only on change
    if last_send_time.is_some_and(|last| current_time - last < HEADING_NOTIFY_INTERVAL_SECS) {
        return;
    }
    if *last_sent_heading == Some(heading.0) {
        return;
    }

    rpc_interface.send_notification(
        "compass_heading",
        serde_json::json!({
            "heading": heading.0
        }),
    );
    *last_send_time = Some(current_time);
    *last_sent_heading = Some(heading.0);
}
