use cgmath::Vector3;

use crate::shader::{ShaderSink, names};

/// Number of light blocks declared by the scene shader.
pub const MAX_LIGHTS: usize = 4;

/// A static point light as the scene describes it.
#[derive(Clone, Debug, PartialEq)]
pub struct LightSource {
    pub position: Vector3<f32>,
    pub ambient_color: Vector3<f32>,
    pub diffuse_color: Vector3<f32>,
    pub specular_color: Vector3<f32>,
    /// Exponent of the specular highlight.
    pub focal_strength: f32,
    pub specular_intensity: f32,
}

impl LightSource {
    /// Write this light's fields into block `index` of the shader.
    pub fn apply(&self, index: usize, shader: &mut impl ShaderSink) {
        shader.set_vec3(&names::light_field(index, "position"), self.position);
        shader.set_vec3(&names::light_field(index, "ambientColor"), self.ambient_color);
        shader.set_vec3(&names::light_field(index, "diffuseColor"), self.diffuse_color);
        shader.set_vec3(&names::light_field(index, "specularColor"), self.specular_color);
        shader.set_float(&names::light_field(index, "focalStrength"), self.focal_strength);
        shader.set_float(
            &names::light_field(index, "specularIntensity"),
            self.specular_intensity,
        );
    }
}

/// Enable custom lighting and upload up to [`MAX_LIGHTS`] light blocks.
///
/// Blocks past `lights.len()` are left untouched (zeroed in a fresh shader
/// state). Returns how many lights were written.
pub fn configure_lights(shader: &mut impl ShaderSink, lights: &[LightSource]) -> usize {
    shader.set_bool(names::USE_LIGHTING, true);
    if lights.len() > MAX_LIGHTS {
        log::warn!(
            "{} lights were configured but the shader only has {} light blocks; ignoring the rest",
            lights.len(),
            MAX_LIGHTS
        );
    }
    lights
        .iter()
        .take(MAX_LIGHTS)
        .enumerate()
        .for_each(|(index, light)| light.apply(index, shader));
    lights.len().min(MAX_LIGHTS)
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub position: [f32; 3],
    pub focal_strength: f32,
    pub ambient_color: [f32; 3],
    pub specular_intensity: f32,
    pub diffuse_color: [f32; 3],
    // Due to uniforms requiring 16 byte (4 float) spacing, we need to use a padding field here
    pub _padding: u32,
    pub specular_color: [f32; 3],
    // Due to uniforms requiring 16 byte (4 float) spacing, we need to use a padding field here
    pub _padding2: u32,
}
