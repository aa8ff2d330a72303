//! tabletop-scene
//!
//! A hand-authored tabletop still life (a pencil, playing cards and two dice
//! on a playmat) rendered with wgpu. Every object is a scaled, rotated and
//! placed primitive mesh with a texture and a Phong material looked up by
//! tag, lit by two static point lights.
//!
//! High-level modules
//! - `camera`: fly camera, projections and the input controller
//! - `config`: window, asset and camera settings
//! - `context`: GPU and window context that owns device/queue/surface
//! - `data_structures`: registries, textures, materials, transforms and shapes
//! - `flow`: the window event loop
//! - `pipelines`: the scene pipeline and its uniform blocks
//! - `resources`: image loading, the texture registry and the mesh library
//! - `render`: draw recording and GPU submission
//! - `scene`: the scene table and the composer that renders it
//! - `shader`: the name-keyed uniform interface of the scene shader
//!

pub mod camera;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod scene;
pub mod shader;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::{Vector2, Vector3, Vector4};
pub use config::SceneConfig;
pub use scene::SceneManager;
