//! Render pipeline and the uniform blocks it reads.
//!
//! - `basic` builds the scene pipeline
//! - `light` holds the light sources and their uniform block
//! - `uniforms` holds the frame and object uniform blocks

pub mod basic;
pub mod light;
pub mod uniforms;
