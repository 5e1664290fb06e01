//! Asset loading for the scene manifest and texture-dependent entities.
//!
//! The manifest is resolved before the scene is assembled; textured
//! entities are spawned later, each one as soon as its own image arrives.

/// Scene manifest loading and fallback to compiled defaults.
pub mod manifest_loader;

/// Sampler configuration applied to loaded textures before first use.
pub mod texture_config;

/// Deferred spawning of entities that only exist once their texture loads.
pub mod texture_loader;
