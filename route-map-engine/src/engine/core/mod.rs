//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, the loading to
//! running transition, and plugin initialisation for both native and WASM
//! targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with scene assembly, interaction, camera and RPC
/// systems wired into their schedules.
pub mod app_setup;

/// Application state machine from manifest loading to the running scene.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
