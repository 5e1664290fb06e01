use bevy::image::{ImageAddressMode, ImageFilterMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;

/// Sampler for the sky map: clamped at the seams, linear with linear mips.
pub fn sky_sampler() -> ImageSampler {
    ImageSampler::Descriptor(ImageSamplerDescriptor {
        address_mode_u: ImageAddressMode::ClampToEdge,
        address_mode_v: ImageAddressMode::ClampToEdge,
        address_mode_w: ImageAddressMode::ClampToEdge,
        mag_filter: ImageFilterMode::Linear,
        min_filter: ImageFilterMode::Linear,
        mipmap_filter: ImageFilterMode::Linear,
        ..default()
    })
}

// Apply the sky sampler to an already loaded image
pub fn configure_sky_texture(images: &mut Assets<Image>, handle: &Handle<Image>) {
    if let Some(image) = images.get_mut(handle) {
        image.sampler = sky_sampler();
    }
}
