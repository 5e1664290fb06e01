use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::texture::SCENE_MANIFEST_PATH;

use crate::engine::assets::scene_manifest::{SceneConfig, SceneManifest};

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SceneManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Loading scene manifest from: {}", SCENE_MANIFEST_PATH);
    manifest_loader.handle = Some(asset_server.load(SCENE_MANIFEST_PATH));
}

/// Insert `SceneConfig` once the manifest has loaded, or defaults if it failed.
pub fn resolve_scene_config(
    mut commands: Commands,
    manifest_loader: Res<ManifestLoader>,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<SceneManifest>>,
    existing: Option<Res<SceneConfig>>,
) {
    if existing.is_some() {
        return;
    }
    let Some(handle) = manifest_loader.handle.as_ref() else {
        return;
    };

    match asset_server.get_load_state(handle) {
        Some(LoadState::Loaded) => {
            let Some(manifest) = manifests.get(handle) else {
                return;
            };
            info!("✓ Scene manifest loaded");
            commands.insert_resource(config_from_manifest(manifest));
        }
        Some(LoadState::Failed(err)) => {
            warn!("Scene manifest unavailable ({err}), using compiled defaults");
            commands.insert_resource(SceneConfig::default());
        }
        _ => {}
    }
}

/// Validate a loaded manifest, falling back to defaults when it is invalid.
pub fn config_from_manifest(manifest: &SceneManifest) -> SceneConfig {
    manifest.validate().unwrap_or_else(|err| {
        warn!("Invalid scene manifest: {err}; using compiled defaults");
        SceneConfig::default()
    })
}
