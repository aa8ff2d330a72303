use cgmath::vec3;

use crate::pipelines::light::LightSource;

/// A cool key light from the left and a neutral fill from behind the table.
pub fn scene_lights() -> Vec<LightSource> {
    vec![
        LightSource {
            position: vec3(-30.0, 14.0, -2.0),
            ambient_color: vec3(0.3, 0.3, 0.4),
            diffuse_color: vec3(0.6, 0.5, 0.4),
            specular_color: vec3(0.2, 0.2, 0.2),
            focal_strength: 32.0,
            specular_intensity: 0.4,
        },
        LightSource {
            position: vec3(3.0, 20.0, -26.0),
            ambient_color: vec3(0.3, 0.3, 0.3),
            diffuse_color: vec3(0.6, 0.55, 0.4),
            specular_color: vec3(0.6, 0.6, 0.6),
            focal_strength: 32.0,
            specular_intensity: 0.6,
        },
    ]
}
