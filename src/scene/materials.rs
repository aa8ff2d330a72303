use cgmath::vec3;

use crate::data_structures::material::Material;

/// Every material the scene objects use, by tag.
pub fn scene_materials() -> Vec<(&'static str, Material)> {
    vec![
        (
            "metalMaterial",
            Material {
                ambient_color: vec3(0.2, 0.2, 0.2),
                ambient_strength: 0.3,
                diffuse_color: vec3(0.2, 0.2, 0.2),
                specular_color: vec3(0.5, 0.5, 0.5),
                shininess: 10.0,
            },
        ),
        (
            "woodMaterial",
            Material {
                ambient_color: vec3(0.1, 0.1, 0.1),
                ambient_strength: 0.2,
                diffuse_color: vec3(0.2, 0.2, 0.2),
                specular_color: vec3(0.1, 0.1, 0.1),
                shininess: 0.3,
            },
        ),
        (
            "plasticMaterial",
            Material {
                ambient_color: vec3(0.0, 0.0, 0.3),
                ambient_strength: 0.4,
                diffuse_color: vec3(0.0, 0.0, 0.8),
                specular_color: vec3(0.5, 0.5, 0.5),
                shininess: 6.0,
            },
        ),
        (
            "cardMaterial",
            Material {
                ambient_color: vec3(0.2, 0.2, 0.2),
                ambient_strength: 0.4,
                diffuse_color: vec3(0.3, 0.3, 0.3),
                specular_color: vec3(0.1, 0.1, 0.1),
                shininess: 0.1,
            },
        ),
        (
            "fabricMaterial",
            Material {
                ambient_color: vec3(0.2, 0.2, 0.2),
                ambient_strength: 0.3,
                diffuse_color: vec3(0.3, 0.3, 0.2),
                specular_color: vec3(0.1, 0.1, 0.1),
                shininess: 0.0,
            },
        ),
        (
            "glossyPencilMaterial",
            Material {
                ambient_color: vec3(0.3, 0.2, 0.0),
                ambient_strength: 0.5,
                diffuse_color: vec3(0.2, 0.2, 0.1),
                specular_color: vec3(0.3, 0.3, 0.3),
                shininess: 2.0,
            },
        ),
        (
            "pencilLeadMaterial",
            Material {
                ambient_color: vec3(0.1, 0.1, 0.1),
                ambient_strength: 0.2,
                diffuse_color: vec3(0.2, 0.2, 0.2),
                specular_color: vec3(0.0, 0.0, 0.0),
                shininess: 0.0,
            },
        ),
        (
            "pinkEraserMaterial",
            Material {
                ambient_color: vec3(0.5, 0.2, 0.3),
                ambient_strength: 0.3,
                diffuse_color: vec3(0.3, 0.15, 0.1),
                specular_color: vec3(0.2, 0.2, 0.2),
                shininess: 2.0,
            },
        ),
        (
            "marbleMaterial",
            Material {
                ambient_color: vec3(0.1, 0.3, 0.1),
                ambient_strength: 0.4,
                diffuse_color: vec3(0.1, 0.3, 0.1),
                specular_color: vec3(0.5, 0.5, 0.5),
                shininess: 6.0,
            },
        ),
    ]
}
