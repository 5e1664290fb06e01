use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::{Level, LogPlugin};
use bevy::pbr::wireframe::{WireframeConfig, WireframePlugin};
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::camera::camera_reset::{
    ActiveTweens, CameraResetRequest, advance_camera_tweens, start_camera_reset,
};
use crate::engine::camera::orbit_controls::orbit_controls_system;
use crate::engine::camera::viewport::{ViewportSize, handle_window_resize};
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::manifest_loader::{ManifestLoader, resolve_scene_config, start_loading};
use crate::engine::loading::texture_loader::{PendingTextures, spawn_textured_entities_when_ready};
use crate::engine::scene::assembly::assemble_scene;
use crate::engine::scene::billboard::face_camera;
use crate::engine::scene::compass::{CompassHeading, compass_click_system, update_compass_heading};
use crate::engine::systems::frame_loop::{spin_system, update_tracking_line};
use crate::engine::systems::heading_tracking::heading_notification_system;
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::tools::road_pick::{MapPickEvent, RoadLine, map_click_system, road_pick_system};

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::camera::camera_reset::keyboard_reset_system;

const LOG_FILTER: &str = "wgpu=error,naga=warn,route_map_engine=info";

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneManifest>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(WireframePlugin::default())
        .insert_resource(WireframeConfig {
            global: false,
            default_color: Color::WHITE,
        });

    app.init_resource::<ManifestLoader>()
        .init_resource::<PendingTextures>()
        .init_resource::<ActiveTweens>()
        .init_resource::<CompassHeading>()
        .init_resource::<RoadLine>()
        .init_resource::<ViewportSize>()
        .add_event::<CameraResetRequest>()
        .add_event::<MapPickEvent>();

    app.add_systems(Startup, start_loading)
        .add_systems(
            Update,
            (resolve_scene_config, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Running), assemble_scene);

    // Input first, then the per-frame scene update in a fixed order.
    app.add_systems(
        Update,
        (
            map_click_system,
            road_pick_system,
            compass_click_system,
            start_camera_reset,
            spin_system,
            orbit_controls_system,
            update_tracking_line,
            update_compass_heading,
            advance_camera_tweens,
            face_camera,
        )
            .chain()
            .run_if(in_state(AppState::Running)),
    );

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(
            Update,
            keyboard_reset_system
                .before(start_camera_reset)
                .run_if(in_state(AppState::Running)),
        );
    }

    app.add_systems(
        Update,
        (
            spawn_textured_entities_when_ready,
            handle_window_resize,
            heading_notification_system.after(update_compass_heading),
        )
            .run_if(in_state(AppState::Running)),
    );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    // RUST_LOG still takes precedence on native builds.
    let log_config = LogPlugin {
        filter: LOG_FILTER.to_string(),
        level: Level::INFO,
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
