//! Draw recording and GPU submission.
//!
//! Scene code never touches a render pass. Every draw it issues is recorded as
//! a [`DrawCall`] holding a snapshot of the per-object uniform block. The
//! [`Renderer`] then writes all snapshots into one uniform buffer and replays
//! the list, addressing each snapshot with a dynamic offset.
//!
//! # Key types
//!
//! - [`DrawCall`] is one recorded draw: a shape, its object uniforms and the
//!   texture slot it samples, if any
//! - [`DrawList`] is the ordered list of draws of one frame
//! - [`Renderer`] owns the pipeline and the uniform buffers
//!

use crate::{
    context::Context,
    data_structures::{model::DrawMesh, shapes::Shape, texture::Texture},
    pipelines::{
        basic::mk_scene_pipeline,
        uniforms::{FrameUniform, ObjectUniform, frame_bind_group_layout, object_bind_group_layout},
    },
    resources::{
        mesh::MeshLibrary,
        texture::{TextureRegistry, texture_bind_group, texture_bind_group_layout},
    },
    scene::SceneManager,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCall {
    pub shape: Shape,
    pub object: ObjectUniform,
    pub texture_slot: Option<usize>,
}

#[derive(Clone, Debug, Default)]
pub struct DrawList {
    calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, call: DrawCall) {
        self.calls.push(call);
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter()
    }

    pub fn get(&self, index: usize) -> Option<&DrawCall> {
        self.calls.get(index)
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

/// Where a frame is drawn to.
pub struct RenderTarget<'a> {
    pub color: &'a wgpu::TextureView,
    pub depth: &'a wgpu::TextureView,
    pub clear_colour: wgpu::Color,
}

#[derive(Debug)]
pub struct Renderer {
    pipeline: wgpu::RenderPipeline,
    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    object_layout: wgpu::BindGroupLayout,
    object_buffer: wgpu::Buffer,
    object_bind_group: wgpu::BindGroup,
    object_capacity: usize,
    object_stride: wgpu::BufferAddress,
    texture_layout: wgpu::BindGroupLayout,
    fallback_bind_group: wgpu::BindGroup,
    // keeps the fallback texture alive for its bind group
    _fallback: Texture,
}

impl Renderer {
    /// Draw calls the object buffer holds before it has to grow.
    const INITIAL_OBJECT_CAPACITY: usize = 32;

    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, color_format: wgpu::TextureFormat) -> Self {
        let frame_layout = frame_bind_group_layout(device);
        let object_layout = object_bind_group_layout(device);
        let texture_layout = texture_bind_group_layout(device);
        let pipeline = mk_scene_pipeline(
            device,
            color_format,
            &frame_layout,
            &object_layout,
            &texture_layout,
        );

        let frame_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Frame Uniform Buffer"),
            size: std::mem::size_of::<FrameUniform>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &frame_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
            label: Some("frame_bind_group"),
        });

        let object_stride = wgpu::util::align_to(
            std::mem::size_of::<ObjectUniform>() as wgpu::BufferAddress,
            device.limits().min_uniform_buffer_offset_alignment as wgpu::BufferAddress,
        );
        let (object_buffer, object_bind_group) = create_object_buffer(
            device,
            &object_layout,
            object_stride,
            Self::INITIAL_OBJECT_CAPACITY,
        );

        let fallback = Texture::create_solid(device, queue, [255, 255, 255, 255], "fallback texture");
        let fallback_bind_group =
            texture_bind_group(device, &texture_layout, &fallback, "fallback texture");

        Self {
            pipeline,
            frame_buffer,
            frame_bind_group,
            object_layout,
            object_buffer,
            object_bind_group,
            object_capacity: Self::INITIAL_OBJECT_CAPACITY,
            object_stride,
            texture_layout,
            fallback_bind_group,
            _fallback: fallback,
        }
    }

    /// Layout texture bind groups must be created with.
    pub fn texture_layout(&self) -> &wgpu::BindGroupLayout {
        &self.texture_layout
    }

    pub fn object_capacity(&self) -> usize {
        self.object_capacity
    }

    /// Write the frame block and every recorded object block to the GPU.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        frame: &FrameUniform,
        draws: &DrawList,
    ) {
        queue.write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(frame));
        if draws.is_empty() {
            return;
        }
        if draws.len() > self.object_capacity {
            let capacity = draws.len().next_power_of_two();
            log::debug!("growing object uniform buffer to {} draws", capacity);
            let (buffer, bind_group) =
                create_object_buffer(device, &self.object_layout, self.object_stride, capacity);
            self.object_buffer = buffer;
            self.object_bind_group = bind_group;
            self.object_capacity = capacity;
        }

        let stride = self.object_stride as usize;
        let mut data = vec![0u8; stride * draws.len()];
        for (chunk, call) in data.chunks_exact_mut(stride).zip(draws.iter()) {
            let bytes = bytemuck::bytes_of(&call.object);
            chunk[..bytes.len()].copy_from_slice(bytes);
        }
        queue.write_buffer(&self.object_buffer, 0, &data);
    }

    /// Encode one render pass replaying `draws`.
    pub fn encode(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        target: &RenderTarget,
        meshes: &MeshLibrary,
        textures: &TextureRegistry,
        draws: &DrawList,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(target.clear_colour),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.frame_bind_group, &[]);
        for (index, call) in draws.iter().enumerate().take(self.object_capacity) {
            let Some(mesh) = meshes.gpu_mesh(call.shape) else {
                log::debug!("{} mesh has no GPU buffers; draw skipped", call.shape.name());
                continue;
            };
            let texture = call
                .texture_slot
                .and_then(|slot| textures.bind_group(slot))
                .unwrap_or(&self.fallback_bind_group);
            let offset = (index as wgpu::BufferAddress * self.object_stride) as wgpu::DynamicOffset;
            render_pass.set_bind_group(1, &self.object_bind_group, &[offset]);
            render_pass.set_bind_group(2, texture, &[]);
            render_pass.draw_mesh(mesh);
        }
    }

    /// Record the scene, upload its state and present one frame.
    pub fn render(&mut self, ctx: &Context, scene: &mut SceneManager) -> Result<(), wgpu::SurfaceError> {
        scene.set_view(&ctx.camera, &ctx.projection);
        scene.render();
        self.upload(&ctx.device, &ctx.queue, scene.shader().frame(), scene.draw_list());

        let output = ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        self.encode(
            &mut encoder,
            &RenderTarget {
                color: &view,
                depth: &ctx.depth_texture.view,
                clear_colour: ctx.clear_colour,
            },
            scene.meshes(),
            scene.textures(),
            scene.draw_list(),
        );
        ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

fn create_object_buffer(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    stride: wgpu::BufferAddress,
    capacity: usize,
) -> (wgpu::Buffer, wgpu::BindGroup) {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Object Uniform Buffer"),
        size: stride * capacity as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                buffer: &buffer,
                offset: 0,
                size: wgpu::BufferSize::new(std::mem::size_of::<ObjectUniform>() as u64),
            }),
        }],
        label: Some("object_bind_group"),
    });
    (buffer, bind_group)
}
