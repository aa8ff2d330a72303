//! Scene data types.
//!
//! - `registry` is the tag-keyed container behind textures and materials
//! - `texture` holds decoded images and the GPU texture wrapper
//! - `material` holds Phong material records and their registry
//! - `transform` composes per-object model matrices
//! - `model` contains the vertex layout and GPU meshes
//! - `shapes` generates the primitive shapes the scene is built from

pub mod material;
pub mod model;
pub mod registry;
pub mod shapes;
pub mod texture;
pub mod transform;
