use cgmath::{Vector2, Vector4, vec2};

use crate::data_structures::{shapes::Shape, transform::Transform};

/// How an object's base colour is chosen.
#[derive(Clone, Debug, PartialEq)]
pub enum Surface {
    /// Sample a registered texture, repeated `uv_scale` times.
    Texture {
        tag: &'static str,
        uv_scale: Vector2<f32>,
    },
    /// Flat RGBA colour with texturing turned off.
    Colour(Vector4<f32>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub name: &'static str,
    pub shape: Shape,
    pub transform: Transform,
    pub surface: Surface,
    pub material: Option<&'static str>,
}

fn textured(tag: &'static str, u: f32, v: f32) -> Surface {
    Surface::Texture {
        tag,
        uv_scale: vec2(u, v),
    }
}

fn object(
    name: &'static str,
    shape: Shape,
    scale: [f32; 3],
    rotation: [f32; 3],
    position: [f32; 3],
    surface: Surface,
    material: &'static str,
) -> SceneObject {
    SceneObject {
        name,
        shape,
        transform: Transform::new(scale.into(), rotation.into(), position.into()),
        surface,
        material: Some(material),
    }
}

/// Card faces and blue card backs share one size.
const CARD: [f32; 3] = [1.75, 0.0, 2.45];

/// The still life in draw order. Coplanar card layers are drawn bottom up.
pub fn scene_objects() -> Vec<SceneObject> {
    vec![
        object(
            "playmat",
            Shape::Plane,
            [15.0, 1.0, 8.0],
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            textured("playmat", 1.0, 1.0),
            "fabricMaterial",
        ),
        // pencil: body, ferrule, eraser, sharpened wood and lead
        object(
            "pencil body",
            Shape::Cylinder,
            [0.15, 7.0, 0.15],
            [90.0, 0.0, 70.0],
            [12.0, 0.15, 4.0],
            textured("pencilCylinder", 1.0, 1.0),
            "glossyPencilMaterial",
        ),
        object(
            "pencil ferrule",
            Shape::Cylinder,
            [0.155, 0.35, 0.155],
            [90.0, 0.0, 70.0],
            [5.6, 0.15, 6.33],
            textured("metal", 0.7, 0.7),
            "metalMaterial",
        ),
        object(
            "pencil eraser",
            Shape::Cylinder,
            [0.15, 0.5, 0.15],
            [90.0, 0.0, 70.0],
            [5.6, 0.15, 6.33],
            textured("rubber", 0.7, 0.7),
            "pinkEraserMaterial",
        ),
        object(
            "pencil tip",
            Shape::TaperedCylinder,
            [0.15, 0.42, 0.15],
            [90.0, 0.0, -110.0],
            [12.0, 0.15, 4.0],
            textured("wood", 1.0, 1.0),
            "woodMaterial",
        ),
        object(
            "pencil lead",
            Shape::Cone,
            [0.145, 0.75, 0.145],
            [90.0, 0.0, -110.0],
            [12.0, 0.15, 4.0],
            textured("lead", 1.0, 1.0),
            "pencilLeadMaterial",
        ),
        // deck box and its lid
        object(
            "card deck",
            Shape::Box,
            [3.5, 2.0, 4.9],
            [0.0, 5.0, 0.0],
            [-10.0, 1.0, 2.7],
            textured("deck", 1.0, 1.0),
            "plasticMaterial",
        ),
        object(
            "card deck top",
            Shape::Box,
            [3.5, 0.02, 4.9],
            [0.0, 5.0, 0.0],
            [-10.0, 2.01, 2.7],
            textured("plastic", 1.0, 1.0),
            "plasticMaterial",
        ),
        // loose cards
        object(
            "plains card",
            Shape::Plane,
            CARD,
            [0.0, 20.0, 0.0],
            [-1.5, 0.05, 3.0],
            textured("plains", 1.0, 1.0),
            "cardMaterial",
        ),
        object(
            "card back",
            Shape::Plane,
            CARD,
            [0.0, -10.0, 0.0],
            [-0.25, 0.02, 3.0],
            textured("plastic", 1.0, 1.0),
            "plasticMaterial",
        ),
        object(
            "card stack top",
            Shape::Plane,
            CARD,
            [0.0, -20.0, 0.0],
            [0.3, 0.01, 3.25],
            textured("plastic", 1.0, 1.0),
            "plasticMaterial",
        ),
        object(
            "card stack middle",
            Shape::Plane,
            CARD,
            [0.0, -22.0, 0.0],
            [0.3, 0.005, 3.3],
            textured("plastic", 1.0, 1.0),
            "plasticMaterial",
        ),
        object(
            "card stack bottom",
            Shape::Plane,
            CARD,
            [0.0, -22.0, 0.0],
            [0.3, 0.005, 3.3],
            textured("plastic", 1.0, 1.0),
            "plasticMaterial",
        ),
        // dice
        object(
            "pyramid die",
            Shape::Pyramid3,
            [0.8, 0.8, 0.8],
            [0.0, -30.0, 0.0],
            [-3.1, 0.4, -0.64],
            textured("marble", 1.1, 1.1),
            "marbleMaterial",
        ),
        object(
            "cube die",
            Shape::Box,
            [0.8, 0.8, 0.8],
            [0.0, -45.0, 0.0],
            [-1.4, 0.4, -1.5],
            textured("marble", 1.0, 1.0),
            "marbleMaterial",
        ),
    ]
}

