use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::scene_manifest::SceneConfig;
use crate::engine::loading::texture_config::configure_sky_texture;
use crate::engine::scene::assembly::{spawn_ground_plane, spawn_sky_sphere};

/// Entities that are only added to the scene once their texture is ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TexturedEntityKind {
    GroundPlane,
    SkySphere,
}

#[derive(Debug, Clone)]
pub struct PendingTexture {
    pub kind: TexturedEntityKind,
    pub handle: Handle<Image>,
}

/// Texture loads still in flight, each with the entity it will produce.
#[derive(Resource, Default)]
pub struct PendingTextures {
    pub entries: Vec<PendingTexture>,
}

impl PendingTextures {
    pub fn request(&mut self, kind: TexturedEntityKind, handle: Handle<Image>) {
        self.entries.push(PendingTexture { kind, handle });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Spawn each textured entity once its image has loaded; drop it if the load failed
pub fn spawn_textured_entities_when_ready(
    mut commands: Commands,
    mut pending: ResMut<PendingTextures>,
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
) {
    if pending.is_empty() {
        return;
    }

    pending.entries.retain(|entry| {
        match asset_server.get_load_state(&entry.handle) {
            Some(LoadState::Loaded) => {
                match entry.kind {
                    TexturedEntityKind::GroundPlane => {
                        spawn_ground_plane(
                            &mut commands,
                            &mut meshes,
                            &mut materials,
                            entry.handle.clone(),
                            config.ground_size,
                        );
                    }
                    TexturedEntityKind::SkySphere => {
                        configure_sky_texture(&mut images, &entry.handle);
                        spawn_sky_sphere(
                            &mut commands,
                            &mut meshes,
                            &mut materials,
                            entry.handle.clone(),
                        );
                    }
                }
                info!("✓ {:?} texture loaded, entity added to scene", entry.kind);
                false
            }
            Some(LoadState::Failed(err)) => {
                warn!("{:?} omitted, texture failed to load: {err}", entry.kind);
                false
            }
            _ => true,
        }
    });
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::asset::io::Reader;
    use bevy::asset::{AssetLoader, AssetMetaCheck, LoadContext};
    use tempfile::TempDir;

    use super::*;
    use crate::engine::scene::assembly::GroundPlane;

    /// Decodes any `.texel` file into a blank image.
    struct TexelLoader;

    impl AssetLoader for TexelLoader {
        type Asset = Image;
        type Settings = ();
        type Error = std::io::Error;

        async fn load(
            &self,
            _reader: &mut dyn Reader,
            _settings: &(),
            _load_context: &mut LoadContext<'_>,
        ) -> Result<Image, Self::Error> {
            Ok(Image::default())
        }

        fn extensions(&self) -> &[&str] {
            &["texel"]
        }
    }

    fn texture_app(root: &TempDir) -> App {
        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            AssetPlugin {
                file_path: root.path().to_string_lossy().into_owned(),
                meta_check: AssetMetaCheck::Never,
                ..default()
            },
        ))
        .init_asset::<Image>()
        .init_asset::<Mesh>()
        .init_asset::<StandardMaterial>()
        .register_asset_loader(TexelLoader)
        .insert_resource(SceneConfig::default())
        .init_resource::<PendingTextures>()
        .add_systems(Update, spawn_textured_entities_when_ready);
        app
    }

    fn request_ground(app: &mut App, path: &str) {
        let handle = app.world().resource::<AssetServer>().load(path.to_string());
        app.world_mut()
            .resource_mut::<PendingTextures>()
            .request(TexturedEntityKind::GroundPlane, handle);
    }

    fn run_until_settled(app: &mut App) {
        for _ in 0..200 {
            app.update();
            if app.world().resource::<PendingTextures>().is_empty() {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("texture load never settled");
    }

    fn ground_planes(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<Entity, With<GroundPlane>>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn missing_texture_omits_its_entity() {
        let root = TempDir::new().unwrap();
        let mut app = texture_app(&root);
        request_ground(&mut app, "images/missing.texel");

        run_until_settled(&mut app);

        assert_eq!(ground_planes(&mut app), 0);
    }

    #[test]
    fn loaded_texture_spawns_one_ground_plane() {
        let root = TempDir::new().unwrap();
        std::fs::create_dir_all(root.path().join("images")).unwrap();
        std::fs::write(root.path().join("images/ground.texel"), b"texel").unwrap();
        let mut app = texture_app(&root);
        request_ground(&mut app, "images/ground.texel");

        run_until_settled(&mut app);
        app.update();

        assert_eq!(ground_planes(&mut app), 1);
    }
}
