//! GPU-side layouts of the scene shader's uniform blocks.
//!
//! Field order and padding follow WGSL uniform layout rules: a `vec3<f32>` is
//! 16-byte aligned, so every three-component field is either followed by a
//! scalar that shares its 16 bytes or by an explicit padding word. Keep these
//! structs in sync with `scene.wgsl`.

use cgmath::SquareMatrix;

use crate::pipelines::light::{LightUniform, MAX_LIGHTS};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub ambient_color: [f32; 3],
    pub ambient_strength: f32,
    pub diffuse_color: [f32; 3],
    // Due to uniforms requiring 16 byte (4 float) spacing, we need to use a padding field here
    pub _padding: u32,
    pub specular_color: [f32; 3],
    pub shininess: f32,
}

/// Per-frame state: camera matrices and the light rig.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub view_position: [f32; 3],
    pub use_lighting: u32,
    pub lights: [LightUniform; MAX_LIGHTS],
}

impl Default for FrameUniform {
    fn default() -> Self {
        let identity: [[f32; 4]; 4] = cgmath::Matrix4::<f32>::identity().into();
        Self {
            view: identity,
            projection: identity,
            ..<Self as bytemuck::Zeroable>::zeroed()
        }
    }
}

/// Per-draw state: transform, surface and material.
///
/// One of these is snapshotted for every recorded draw call and written into
/// the dynamic-offset object buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 4],
    pub object_color: [f32; 4],
    pub uv_scale: [f32; 2],
    pub use_texture: u32,
    pub _padding: u32,
    pub material: MaterialUniform,
}

impl Default for ObjectUniform {
    fn default() -> Self {
        let identity: [[f32; 4]; 4] = cgmath::Matrix4::<f32>::identity().into();
        Self {
            model: identity,
            normal: identity,
            object_color: [1.0; 4],
            uv_scale: [1.0, 1.0],
            ..<Self as bytemuck::Zeroable>::zeroed()
        }
    }
}

pub fn frame_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(
                    std::mem::size_of::<FrameUniform>() as u64
                ),
            },
            count: None,
        }],
        label: Some("frame_bind_group_layout"),
    })
}

pub fn object_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                // one buffer for all draws, addressed per draw call
                has_dynamic_offset: true,
                min_binding_size: wgpu::BufferSize::new(
                    std::mem::size_of::<ObjectUniform>() as u64
                ),
            },
            count: None,
        }],
        label: Some("object_bind_group_layout"),
    })
}
