//! Phong surface descriptions and the tag-keyed material registry.

use cgmath::Vector3;

use crate::{
    data_structures::registry::TagRegistry,
    shader::{ShaderSink, names},
};

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub ambient_color: Vector3<f32>,
    pub ambient_strength: f32,
    pub diffuse_color: Vector3<f32>,
    pub specular_color: Vector3<f32>,
    pub shininess: f32,
}

impl Material {
    /// Upload all five material fields.
    pub fn apply(&self, shader: &mut impl ShaderSink) {
        shader.set_vec3(names::MATERIAL_AMBIENT_COLOR, self.ambient_color);
        shader.set_float(names::MATERIAL_AMBIENT_STRENGTH, self.ambient_strength);
        shader.set_vec3(names::MATERIAL_DIFFUSE_COLOR, self.diffuse_color);
        shader.set_vec3(names::MATERIAL_SPECULAR_COLOR, self.specular_color);
        shader.set_float(names::MATERIAL_SHININESS, self.shininess);
    }
}

/// Materials by tag, kept in definition order.
#[derive(Debug, Default)]
pub struct MaterialRegistry {
    materials: TagRegistry<Material>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `material` under `tag`. A repeated tag is stored but lookups
    /// keep returning the first definition.
    pub fn define(&mut self, tag: impl Into<String>, material: Material) {
        // unbounded registries never reject an insert
        if let Err(err) = self.materials.insert(tag, material) {
            log::error!("{}", err);
        }
    }

    pub fn find(&self, tag: &str) -> Option<&Material> {
        self.materials.get(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.materials.iter().map(|entry| entry.tag.as_str())
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
