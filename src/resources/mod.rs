//! Loading of external assets.
//!
//! Images are read from disk and decoded here; [`texture::TextureRegistry`]
//! turns them into GPU textures and [`mesh::MeshLibrary`] owns the generated
//! primitive meshes.

use std::path::Path;

use image::ImageFormat;

use crate::data_structures::texture::{DecodedImage, TextureError};

pub mod mesh;
pub mod texture;

pub fn load_binary(path: &Path) -> Result<Vec<u8>, TextureError> {
    std::fs::read(path).map_err(|source| TextureError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and decode an image file, flipped so its first row is the bottom one.
pub fn read_image(path: &Path) -> Result<DecodedImage, TextureError> {
    let data = load_binary(path)?;
    let decoded = match ImageFormat::from_path(path) {
        Ok(format) => image::load_from_memory_with_format(&data, format),
        // unknown extension, let the decoder sniff the header
        Err(_) => image::load_from_memory(&data),
    }
    .map_err(|source| TextureError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    DecodedImage::from_dynamic(decoded)
}
