//! Composition of the tabletop still life.
//!
//! [`SceneManager`] owns everything the scene needs between frames: the
//! shader state, the texture and material registries, the mesh library and
//! the draw list of the current frame. Scene content is the declarative
//! table in [`objects`]; [`SceneManager::render`] walks it once per frame.

use std::path::PathBuf;

use cgmath::{Matrix4, Vector2, Vector4};
use thiserror::Error;

use crate::{
    camera::{self, Camera, Projection},
    data_structures::{
        material::MaterialRegistry,
        shapes::Shape,
        transform::Transform,
    },
    pipelines::light::configure_lights,
    render::DrawList,
    resources::{mesh::MeshLibrary, texture::TextureRegistry},
    shader::{ShaderSink, ShaderState, names},
};

pub mod lights;
pub mod materials;
pub mod objects;
pub mod textures;

use objects::{SceneObject, Surface};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("no texture is registered under `{0}`")]
    UnknownTexture(String),
    #[error("no material is defined under `{0}`")]
    UnknownMaterial(String),
}

#[derive(Debug)]
pub struct SceneManager {
    shader: ShaderState,
    meshes: MeshLibrary,
    textures: TextureRegistry,
    materials: MaterialRegistry,
    objects: Vec<SceneObject>,
    draws: DrawList,
    texture_dir: PathBuf,
}

impl SceneManager {
    pub fn new(texture_dir: impl Into<PathBuf>) -> Self {
        Self::with_objects(texture_dir, objects::scene_objects())
    }

    /// A scene drawing `objects` instead of the still life.
    pub fn with_objects(texture_dir: impl Into<PathBuf>, objects: Vec<SceneObject>) -> Self {
        Self {
            shader: ShaderState::new(),
            meshes: MeshLibrary::new(),
            textures: TextureRegistry::new(),
            materials: MaterialRegistry::new(),
            objects,
            draws: DrawList::new(),
            texture_dir: texture_dir.into(),
        }
    }

    /// Load textures, define materials, set up lights and build every mesh.
    ///
    /// Nothing in here is fatal: assets that fail to load are logged and the
    /// objects using them render untextured.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        texture_layout: &wgpu::BindGroupLayout,
    ) {
        let loaded = self.load_scene_textures(device, queue);
        log::info!("{} of {} scene textures loaded", loaded, textures::SCENE_TEXTURES.len());
        self.textures.bind_all(device, texture_layout);
        self.define_object_materials();
        self.setup_scene_lights();
        self.load_scene_meshes();
        self.meshes.upload(device);

        for err in self.unresolved_tags() {
            log::warn!("{}; objects using it will not look right", err);
        }
    }

    /// Returns how many textures were loaded.
    pub fn load_scene_textures(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) -> usize {
        let mut loaded = 0;
        for (file, tag) in textures::SCENE_TEXTURES {
            let path = self.texture_dir.join(file);
            match self.textures.load(device, queue, &path, tag) {
                Ok(_) => loaded += 1,
                Err(err) => log::error!(
                    "{:#}",
                    anyhow::Error::new(err).context(format!("texture `{}` was not loaded", tag))
                ),
            }
        }
        loaded
    }

    pub fn define_object_materials(&mut self) {
        for (tag, material) in materials::scene_materials() {
            self.materials.define(tag, material);
        }
    }

    pub fn setup_scene_lights(&mut self) {
        configure_lights(&mut self.shader, &lights::scene_lights());
    }

    /// Generate the geometry of every primitive shape.
    pub fn load_scene_meshes(&mut self) {
        for shape in Shape::ALL {
            self.meshes.load(shape);
        }
    }

    pub fn set_view(&mut self, camera: &Camera, projection: &Projection) {
        camera::apply_view(camera, projection, &mut self.shader);
    }

    /// Compose the model matrix of the next draw.
    pub fn set_transformations(&mut self, transform: &Transform) -> Matrix4<f32> {
        transform.apply(&mut self.shader)
    }

    /// Draw the next object in a flat colour.
    pub fn set_shader_colour(&mut self, colour: Vector4<f32>) {
        self.shader.set_bool(names::USE_TEXTURE, false);
        self.shader.set_vec4(names::OBJECT_COLOR, colour);
    }

    /// Sample the texture registered under `tag` for the next draw. An unknown
    /// tag turns texturing off.
    pub fn set_shader_texture(&mut self, tag: &str) -> Result<usize, SceneError> {
        match self.textures.find_slot(tag) {
            Some(slot) => {
                self.shader.set_bool(names::USE_TEXTURE, true);
                self.shader.set_sampler_2d(names::OBJECT_TEXTURE, slot);
                Ok(slot)
            }
            None => {
                self.shader.set_bool(names::USE_TEXTURE, false);
                Err(SceneError::UnknownTexture(tag.to_string()))
            }
        }
    }

    pub fn set_texture_uv_scale(&mut self, u: f32, v: f32) {
        self.shader.set_vec2(names::UV_SCALE, Vector2::new(u, v));
    }

    /// Use the material defined under `tag`. An unknown tag keeps the current
    /// material.
    pub fn set_shader_material(&mut self, tag: &str) -> Result<(), SceneError> {
        let material = self
            .materials
            .find(tag)
            .ok_or_else(|| SceneError::UnknownMaterial(tag.to_string()))?;
        material.apply(&mut self.shader);
        Ok(())
    }

    /// Record this frame's draws, one per scene object in table order.
    pub fn render(&mut self) -> &DrawList {
        self.draws.clear();
        let objects = std::mem::take(&mut self.objects);
        for object in &objects {
            self.render_object(object);
        }
        self.objects = objects;
        &self.draws
    }

    /// Bind the state of `object` and record its draw.
    pub fn render_object(&mut self, object: &SceneObject) -> bool {
        self.set_transformations(&object.transform);
        match &object.surface {
            Surface::Texture { tag, uv_scale } => {
                if let Err(err) = self.set_shader_texture(tag) {
                    log::debug!("{}: {}", object.name, err);
                }
                self.set_texture_uv_scale(uv_scale.x, uv_scale.y);
            }
            Surface::Colour(colour) => self.set_shader_colour(*colour),
        }
        if let Some(material) = object.material {
            if let Err(err) = self.set_shader_material(material) {
                log::debug!("{}: {}", object.name, err);
            }
        }
        self.meshes.draw(object.shape, &self.shader, &mut self.draws)
    }

    /// Texture and material tags of the scene table that do not resolve.
    pub fn unresolved_tags(&self) -> Vec<SceneError> {
        let mut missing = Vec::new();
        for object in &self.objects {
            if let Surface::Texture { tag, .. } = object.surface {
                if self.textures.find_slot(tag).is_none() {
                    missing.push(SceneError::UnknownTexture(tag.to_string()));
                }
            }
            if let Some(tag) = object.material {
                if self.materials.find(tag).is_none() {
                    missing.push(SceneError::UnknownMaterial(tag.to_string()));
                }
            }
        }
        // several objects share a tag, report each once
        let mut unique: Vec<SceneError> = Vec::with_capacity(missing.len());
        for err in missing {
            if !unique.contains(&err) {
                unique.push(err);
            }
        }
        unique
    }

    /// Destroy all GPU textures of the scene.
    pub fn release(&mut self) {
        self.textures.release_all();
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draws
    }

    pub fn shader(&self) -> &ShaderState {
        &self.shader
    }

    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    pub fn meshes(&self) -> &MeshLibrary {
        &self.meshes
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }
}
