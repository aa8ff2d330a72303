//! The shared library of primitive meshes.
//!
//! Geometry of every shape is generated at most once. Drawing does not talk to
//! the GPU directly: it snapshots the current per-object shader state into a
//! [`DrawList`] which the renderer replays inside its render pass.

use std::collections::HashMap;

use crate::{
    data_structures::{
        model::Mesh,
        shapes::{MeshData, Shape},
    },
    render::{DrawCall, DrawList},
    shader::ShaderState,
};

#[derive(Debug)]
struct LoadedMesh {
    data: MeshData,
    gpu: Option<Mesh>,
}

#[derive(Debug, Default)]
pub struct MeshLibrary {
    meshes: HashMap<Shape, LoadedMesh>,
}

impl MeshLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the geometry of `shape`. Returns false if it was already loaded.
    pub fn load(&mut self, shape: Shape) -> bool {
        if self.meshes.contains_key(&shape) {
            return false;
        }
        let data = MeshData::generate(shape);
        log::debug!(
            "generated {} mesh: {} vertices, {} triangles",
            shape.name(),
            data.vertices.len(),
            data.triangle_count()
        );
        self.meshes.insert(shape, LoadedMesh { data, gpu: None });
        true
    }

    pub fn is_loaded(&self, shape: Shape) -> bool {
        self.meshes.contains_key(&shape)
    }

    pub fn loaded_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn mesh_data(&self, shape: Shape) -> Option<&MeshData> {
        self.meshes.get(&shape).map(|loaded| &loaded.data)
    }

    /// Create vertex and index buffers for every loaded shape that has none yet.
    pub fn upload(&mut self, device: &wgpu::Device) {
        for (shape, loaded) in self.meshes.iter_mut() {
            if loaded.gpu.is_none() {
                loaded.gpu = Some(Mesh::new(
                    device,
                    shape.name(),
                    &loaded.data.vertices,
                    &loaded.data.indices,
                ));
            }
        }
    }

    pub fn gpu_mesh(&self, shape: Shape) -> Option<&Mesh> {
        self.meshes.get(&shape).and_then(|loaded| loaded.gpu.as_ref())
    }

    /// Record a draw of `shape` with the current object state of `shader`.
    /// Unloaded shapes are skipped. Returns whether a draw was recorded.
    pub fn draw(&self, shape: Shape, shader: &ShaderState, draws: &mut DrawList) -> bool {
        if !self.is_loaded(shape) {
            log::debug!("{} mesh is not loaded; draw skipped", shape.name());
            return false;
        }
        draws.push(DrawCall {
            shape,
            object: *shader.object(),
            texture_slot: shader.texture_slot(),
        });
        true
    }
}
