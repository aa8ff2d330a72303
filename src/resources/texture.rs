//! Tag-keyed GPU texture storage.

use std::path::Path;

use crate::{
    data_structures::{
        registry::{RegistryError, TagRegistry},
        texture::{DecodedImage, Texture, TextureError},
    },
    resources::read_image,
};

/// Number of texture slots the scene can hold.
pub const MAX_TEXTURE_SLOTS: usize = 16;

pub fn texture_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
        label: Some("texture_bind_group_layout"),
    })
}

pub fn texture_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    texture: &Texture,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&texture.view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&texture.sampler),
            },
        ],
        label: Some(label),
    })
}

/// GPU textures by tag. The slot of a texture is the index of the bind group
/// that samples it.
#[derive(Debug)]
pub struct TextureRegistry {
    textures: TagRegistry<Texture>,
    bind_groups: Vec<wgpu::BindGroup>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            textures: TagRegistry::bounded(MAX_TEXTURE_SLOTS),
            bind_groups: Vec::new(),
        }
    }

    /// Decode the image at `path` and store it under `tag`.
    pub fn load(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &Path,
        tag: &str,
    ) -> Result<usize, TextureError> {
        // no point decoding an image that has nowhere to go
        self.ensure_free_slot(tag)?;
        let img = read_image(path)?;
        let slot = self.load_decoded(device, queue, &img, tag)?;
        log::info!(
            "Successfully loaded image: {}, width: {}, height: {}, channels: {}",
            path.display(),
            img.width,
            img.height,
            img.layout.channel_count()
        );
        Ok(slot)
    }

    pub fn load_decoded(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        img: &DecodedImage,
        tag: &str,
    ) -> Result<usize, TextureError> {
        self.ensure_free_slot(tag)?;
        let texture = Texture::from_decoded(device, queue, img, tag);
        Ok(self.textures.insert(tag, texture)?)
    }

    fn ensure_free_slot(&self, tag: &str) -> Result<(), RegistryError> {
        if self.textures.is_full() {
            return Err(RegistryError::Full {
                tag: tag.to_string(),
                capacity: MAX_TEXTURE_SLOTS,
            });
        }
        Ok(())
    }

    /// Create one bind group per occupied slot, in slot order.
    pub fn bind_all(&mut self, device: &wgpu::Device, layout: &wgpu::BindGroupLayout) {
        self.bind_groups = self
            .textures
            .iter()
            .enumerate()
            .map(|(slot, entry)| {
                texture_bind_group(device, layout, &entry.value, &format!("texture slot {slot}"))
            })
            .collect();
    }

    pub fn find_slot(&self, tag: &str) -> Option<usize> {
        self.textures.slot(tag)
    }

    pub fn find_handle(&self, tag: &str) -> Option<&Texture> {
        self.textures.get(tag)
    }

    /// Bind group of `slot`, available once [`bind_all`](Self::bind_all) ran.
    pub fn bind_group(&self, slot: usize) -> Option<&wgpu::BindGroup> {
        self.bind_groups.get(slot)
    }

    pub fn tag(&self, slot: usize) -> Option<&str> {
        self.textures.entry(slot).map(|entry| entry.tag.as_str())
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Destroy every GPU texture and empty all slots.
    pub fn release_all(&mut self) {
        self.bind_groups.clear();
        for entry in self.textures.drain() {
            log::debug!("releasing texture `{}`", entry.tag);
            entry.value.texture.destroy();
        }
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TextureRegistry {
    fn drop(&mut self) {
        self.release_all();
    }
}
