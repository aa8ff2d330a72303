//! GPU textures and decoded image data.
//!
//! This module provides [`DecodedImage`], the CPU-side result of decoding an
//! image file, and [`Texture`], a wrapper around WGPU texture resources with
//! helpers for depth buffers, solid fallback colours and uploading decoded
//! images with a full mip chain.

use std::path::PathBuf;

use image::{DynamicImage, imageops::FilterType};
use thiserror::Error;

use crate::data_structures::registry::RegistryError;

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("could not read image `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not decode image `{path}`")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("images with {0} colour channels are not supported, expected 3 or 4")]
    UnsupportedChannelCount(u8),
    #[error("image has no pixels")]
    Empty,
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Channel layout of decoded pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    Rgb,
    Rgba,
}

impl PixelLayout {
    pub fn from_channel_count(channels: u8) -> Result<Self, TextureError> {
        match channels {
            3 => Ok(PixelLayout::Rgb),
            4 => Ok(PixelLayout::Rgba),
            other => Err(TextureError::UnsupportedChannelCount(other)),
        }
    }

    pub fn channel_count(self) -> u8 {
        match self {
            PixelLayout::Rgb => 3,
            PixelLayout::Rgba => 4,
        }
    }
}

/// Tightly packed 8-bit pixels, bottom row first.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
}

impl DecodedImage {
    /// Flip `img` vertically so the first row is the bottom of the picture and
    /// keep its pixels in their native 3 or 4 channel layout.
    pub fn from_dynamic(img: DynamicImage) -> Result<Self, TextureError> {
        if img.width() == 0 || img.height() == 0 {
            return Err(TextureError::Empty);
        }
        let layout = PixelLayout::from_channel_count(img.color().channel_count())?;
        let img = img.flipv();
        let (width, height) = (img.width(), img.height());
        let pixels = match layout {
            PixelLayout::Rgb => img.to_rgb8().into_raw(),
            PixelLayout::Rgba => img.to_rgba8().into_raw(),
        };
        Ok(Self {
            pixels,
            width,
            height,
            layout,
        })
    }

    /// Expand to RGBA, the only 8-bit colour layout wgpu can sample.
    pub fn to_rgba8(&self) -> image::RgbaImage {
        match self.layout {
            PixelLayout::Rgba => {
                image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            }
            PixelLayout::Rgb => image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
                .map(|rgb| DynamicImage::ImageRgb8(rgb).to_rgba8()),
        }
        .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }

    /// Levels down to 1x1.
    pub fn mip_level_count(&self) -> u32 {
        32 - self.width.max(self.height).max(1).leading_zeros()
    }
}

/// A GPU texture with a view and sampler.
#[derive(Clone, Debug)]
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    /// Channel layout of the image this texture was created from.
    pub layout: Option<PixelLayout>,
}

impl Texture {
    /// Standard depth buffer texture format (32-bit float).
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
    pub const COLOR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

    /// Create a depth texture for depth-testing during rendering.
    ///
    /// * `size` is [width, height] of the texture in pixels
    /// * `label` is used as a debug label for the GPU resource
    pub fn create_depth_texture(device: &wgpu::Device, size: [u32; 2], label: &str) -> Self {
        let size = wgpu::Extent3d {
            width: size[0].max(1),
            height: size[1].max(1),
            depth_or_array_layers: 1,
        };
        let desc = wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[Self::DEPTH_FORMAT],
        };
        let texture = device.create_texture(&desc);
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            compare: Some(wgpu::CompareFunction::LessEqual),
            lod_min_clamp: 0.0,
            lod_max_clamp: 100.0,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
            layout: None,
        }
    }

    /// A 1x1 texture of a single colour, bound whenever an object is drawn
    /// without a texture so the texture bind group is never empty.
    pub fn create_solid(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        rgba: [u8; 4],
        label: &str,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: 1,
            height: 1,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::COLOR_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        write_level(queue, &texture, 0, &rgba, size);

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = create_default_sampler(device);
        Self {
            texture,
            view,
            sampler,
            layout: Some(PixelLayout::Rgba),
        }
    }

    /// Upload a decoded image together with a downsampled mip chain.
    pub fn from_decoded(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        img: &DecodedImage,
        label: &str,
    ) -> Self {
        let mip_level_count = img.mip_level_count();
        let size = wgpu::Extent3d {
            width: img.width,
            height: img.height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::COLOR_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let base = img.to_rgba8();
        write_level(queue, &texture, 0, &base, size);
        for level in 1..mip_level_count {
            let width = (img.width >> level).max(1);
            let height = (img.height >> level).max(1);
            let mip = image::imageops::resize(&base, width, height, FilterType::Triangle);
            let extent = wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            };
            write_level(queue, &texture, level, &mip, extent);
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = create_default_sampler(device);
        Self {
            texture,
            view,
            sampler,
            layout: Some(img.layout),
        }
    }
}

fn write_level(
    queue: &wgpu::Queue,
    texture: &wgpu::Texture,
    mip_level: u32,
    rgba: &[u8],
    size: wgpu::Extent3d,
) {
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            aspect: wgpu::TextureAspect::All,
            texture,
            mip_level,
            origin: wgpu::Origin3d::ZERO,
        },
        rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * size.width),
            rows_per_image: Some(size.height),
        },
        size,
    );
}

/// Repeat wrapping with trilinear filtering.
pub fn create_default_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::MipmapFilterMode::Linear,
        ..Default::default()
    })
}
