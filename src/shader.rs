//! Name-keyed uniform interface of the scene shader.
//!
//! Scene code talks to the shader the way it would talk to a classic uniform
//! API: it sets values by name and never reads them back ([`ShaderSink`]).
//! [`ShaderState`] is the CPU mirror that turns those writes into the packed
//! uniform blocks of `scene.wgsl`. The renderer uploads the frame block once
//! per frame and one snapshot of the object block per recorded draw call.

use cgmath::{Matrix, Matrix4, SquareMatrix, Vector2, Vector3, Vector4};

use crate::pipelines::uniforms::{FrameUniform, ObjectUniform};

/// Uniform names declared by the scene shader.
pub mod names {
    pub const MODEL: &str = "model";
    pub const VIEW: &str = "view";
    pub const PROJECTION: &str = "projection";
    pub const VIEW_POSITION: &str = "viewPosition";
    pub const OBJECT_COLOR: &str = "objectColor";
    pub const OBJECT_TEXTURE: &str = "objectTexture";
    pub const USE_TEXTURE: &str = "bUseTexture";
    pub const USE_LIGHTING: &str = "bUseLighting";
    pub const UV_SCALE: &str = "UVscale";

    pub const MATERIAL_AMBIENT_COLOR: &str = "material.ambientColor";
    pub const MATERIAL_AMBIENT_STRENGTH: &str = "material.ambientStrength";
    pub const MATERIAL_DIFFUSE_COLOR: &str = "material.diffuseColor";
    pub const MATERIAL_SPECULAR_COLOR: &str = "material.specularColor";
    pub const MATERIAL_SHININESS: &str = "material.shininess";

    /// `lightSources[index].field`
    pub fn light_field(index: usize, field: &str) -> String {
        format!("lightSources[{index}].{field}")
    }

    /// Inverse of [`light_field`].
    pub fn parse_light_field(name: &str) -> Option<(usize, &str)> {
        let rest = name.strip_prefix("lightSources[")?;
        let (index, field) = rest.split_once("].")?;
        Some((index.parse().ok()?, field))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec2(Vector2<f32>),
    Vec3(Vector3<f32>),
    Vec4(Vector4<f32>),
    Mat4(Matrix4<f32>),
    /// Texture slot a sampler reads from.
    Sampler2d(usize),
}

impl UniformValue {
    fn as_bool(self) -> Option<bool> {
        match self {
            UniformValue::Bool(b) => Some(b),
            UniformValue::Int(i) => Some(i != 0),
            _ => None,
        }
    }

    fn as_float(self) -> Option<f32> {
        match self {
            UniformValue::Float(f) => Some(f),
            _ => None,
        }
    }

    fn as_vec2(self) -> Option<Vector2<f32>> {
        match self {
            UniformValue::Vec2(v) => Some(v),
            _ => None,
        }
    }

    fn as_vec3(self) -> Option<Vector3<f32>> {
        match self {
            UniformValue::Vec3(v) => Some(v),
            _ => None,
        }
    }

    fn as_vec4(self) -> Option<Vector4<f32>> {
        match self {
            UniformValue::Vec4(v) => Some(v),
            _ => None,
        }
    }

    fn as_mat4(self) -> Option<Matrix4<f32>> {
        match self {
            UniformValue::Mat4(m) => Some(m),
            _ => None,
        }
    }

    fn as_sampler(self) -> Option<usize> {
        match self {
            UniformValue::Sampler2d(slot) => Some(slot),
            _ => None,
        }
    }
}

/// Write-only uniform sink.
pub trait ShaderSink {
    fn set_value(&mut self, name: &str, value: UniformValue);

    fn set_bool(&mut self, name: &str, value: bool) {
        self.set_value(name, UniformValue::Bool(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.set_value(name, UniformValue::Int(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.set_value(name, UniformValue::Float(value));
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        self.set_value(name, UniformValue::Vec2(value));
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        self.set_value(name, UniformValue::Vec3(value));
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        self.set_value(name, UniformValue::Vec4(value));
    }

    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        self.set_value(name, UniformValue::Mat4(value));
    }

    fn set_sampler_2d(&mut self, name: &str, slot: usize) {
        self.set_value(name, UniformValue::Sampler2d(slot));
    }
}

/// CPU mirror of the scene shader's uniform state.
#[derive(Clone, Debug, Default)]
pub struct ShaderState {
    frame: FrameUniform,
    object: ObjectUniform,
    texture_slot: Option<usize>,
}

impl ShaderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> &FrameUniform {
        &self.frame
    }

    pub fn object(&self) -> &ObjectUniform {
        &self.object
    }

    /// The slot the next draw samples from, if texturing is on.
    pub fn texture_slot(&self) -> Option<usize> {
        if self.object.use_texture == 0 {
            return None;
        }
        self.texture_slot
    }

    fn apply(&mut self, name: &str, value: UniformValue) -> Option<()> {
        match name {
            names::MODEL => {
                let model = value.as_mat4()?;
                self.object.model = model.into();
                // non-invertible models (zero scale on an axis) keep plain normals
                let normal = model
                    .invert()
                    .map(|inverse| inverse.transpose())
                    .unwrap_or_else(Matrix4::identity);
                self.object.normal = normal.into();
            }
            names::OBJECT_COLOR => self.object.object_color = value.as_vec4()?.into(),
            names::OBJECT_TEXTURE => self.texture_slot = Some(value.as_sampler()?),
            names::USE_TEXTURE => self.object.use_texture = value.as_bool()? as u32,
            names::UV_SCALE => self.object.uv_scale = value.as_vec2()?.into(),
            names::USE_LIGHTING => self.frame.use_lighting = value.as_bool()? as u32,
            names::VIEW => self.frame.view = value.as_mat4()?.into(),
            names::PROJECTION => self.frame.projection = value.as_mat4()?.into(),
            names::VIEW_POSITION => self.frame.view_position = value.as_vec3()?.into(),
            names::MATERIAL_AMBIENT_COLOR => {
                self.object.material.ambient_color = value.as_vec3()?.into()
            }
            names::MATERIAL_AMBIENT_STRENGTH => {
                self.object.material.ambient_strength = value.as_float()?
            }
            names::MATERIAL_DIFFUSE_COLOR => {
                self.object.material.diffuse_color = value.as_vec3()?.into()
            }
            names::MATERIAL_SPECULAR_COLOR => {
                self.object.material.specular_color = value.as_vec3()?.into()
            }
            names::MATERIAL_SHININESS => self.object.material.shininess = value.as_float()?,
            _ => {
                let (index, field) = names::parse_light_field(name)?;
                let light = self.frame.lights.get_mut(index)?;
                match field {
                    "position" => light.position = value.as_vec3()?.into(),
                    "ambientColor" => light.ambient_color = value.as_vec3()?.into(),
                    "diffuseColor" => light.diffuse_color = value.as_vec3()?.into(),
                    "specularColor" => light.specular_color = value.as_vec3()?.into(),
                    "focalStrength" => light.focal_strength = value.as_float()?,
                    "specularIntensity" => light.specular_intensity = value.as_float()?,
                    _ => return None,
                }
            }
        }
        Some(())
    }
}

impl ShaderSink for ShaderState {
    fn set_value(&mut self, name: &str, value: UniformValue) {
        if self.apply(name, value).is_none() {
            log::warn!(
                "uniform `{}` is not declared by the scene shader or does not take {:?}; ignored",
                name,
                value
            );
        }
    }
}
