//! Scene configuration assets.
//!
//! The scene manifest is a JSON asset describing asset paths and entity
//! placement; the validated result becomes the `SceneConfig` resource.

/// Scene manifest asset, validation and the effective `SceneConfig` resource.
pub mod scene_manifest;
