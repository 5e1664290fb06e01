use bevy::prelude::*;
use constants::camera::{INITIAL_CAMERA_POSITION, INITIAL_CAMERA_TARGET};
use constants::scene_layout::{GATE_POSITION, GROUND_SIZE, KINDERGARTEN_POSITION, SPRITE_SCALE};
use constants::texture::{
    COMPASS_ICON_PATH, GATE_ICON_PATH, GROUND_TEXTURE_PATH, KINDERGARTEN_ICON_PATH,
    SKY_TEXTURE_PATH,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scene manifest as a Bevy asset. Mirrors the JSON structure; every field
/// is optional and falls back to the compiled defaults.
#[derive(Asset, TypePath, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneManifest {
    pub ground_texture: String,
    pub sky_texture: String,
    pub gate_icon: String,
    pub kindergarten_icon: String,
    pub compass_icon: String,
    pub ground_size: f32,
    pub gate_position: [f32; 3],
    pub kindergarten_position: [f32; 3],
    pub sprite_scale: f32,
    pub camera_position: [f32; 3],
    pub camera_target: [f32; 3],
}

impl Default for SceneManifest {
    fn default() -> Self {
        Self {
            ground_texture: GROUND_TEXTURE_PATH.to_string(),
            sky_texture: SKY_TEXTURE_PATH.to_string(),
            gate_icon: GATE_ICON_PATH.to_string(),
            kindergarten_icon: KINDERGARTEN_ICON_PATH.to_string(),
            compass_icon: COMPASS_ICON_PATH.to_string(),
            ground_size: GROUND_SIZE,
            gate_position: GATE_POSITION,
            kindergarten_position: KINDERGARTEN_POSITION,
            sprite_scale: SPRITE_SCALE,
            camera_position: INITIAL_CAMERA_POSITION,
            camera_target: INITIAL_CAMERA_TARGET,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SceneConfigError {
    #[error("{field} must be finite and greater than zero, got {value}")]
    NonPositiveSize { field: &'static str, value: f32 },
    #[error("{field} contains a non-finite coordinate: {value:?}")]
    NonFinitePosition { field: &'static str, value: [f32; 3] },
    #[error("camera position {0:?} coincides with the camera target")]
    CameraOnTarget([f32; 3]),
}

/// Effective scene configuration used by scene assembly.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub ground_texture: String,
    pub sky_texture: String,
    pub gate_icon: String,
    pub kindergarten_icon: String,
    pub compass_icon: String,
    pub ground_size: f32,
    pub gate_position: Vec3,
    pub kindergarten_position: Vec3,
    pub sprite_scale: f32,
    pub camera_position: Vec3,
    pub camera_target: Vec3,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig::from_manifest(&SceneManifest::default())
    }
}

impl SceneConfig {
    fn from_manifest(manifest: &SceneManifest) -> Self {
        Self {
            ground_texture: manifest.ground_texture.clone(),
            sky_texture: manifest.sky_texture.clone(),
            gate_icon: manifest.gate_icon.clone(),
            kindergarten_icon: manifest.kindergarten_icon.clone(),
            compass_icon: manifest.compass_icon.clone(),
            ground_size: manifest.ground_size,
            gate_position: Vec3::from_array(manifest.gate_position),
            kindergarten_position: Vec3::from_array(manifest.kindergarten_position),
            sprite_scale: manifest.sprite_scale,
            camera_position: Vec3::from_array(manifest.camera_position),
            camera_target: Vec3::from_array(manifest.camera_target),
        }
    }
}

impl SceneManifest {
    /// Check sizes and positions, producing the resource consumed by the scene.
    pub fn validate(&self) -> Result<SceneConfig, SceneConfigError> {
        check_size("ground_size", self.ground_size)?;
        check_size("sprite_scale", self.sprite_scale)?;
        check_position("gate_position", self.gate_position)?;
        check_position("kindergarten_position", self.kindergarten_position)?;
        let camera_position = check_position("camera_position", self.camera_position)?;
        let camera_target = check_position("camera_target", self.camera_target)?;

        if camera_position.distance_squared(camera_target) <= f32::EPSILON {
            return Err(SceneConfigError::CameraOnTarget(self.camera_position));
        }

        Ok(SceneConfig::from_manifest(self))
    }
}

fn check_size(field: &'static str, value: f32) -> Result<(), SceneConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SceneConfigError::NonPositiveSize { field, value })
    }
}

fn check_position(field: &'static str, value: [f32; 3]) -> Result<Vec3, SceneConfigError> {
    let position = Vec3::from_array(value);
    if position.is_finite() {
        Ok(position)
    } else {
        Err(SceneConfigError::NonFinitePosition { field, value })
    }
}
