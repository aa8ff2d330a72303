//! Startup configuration of the scene viewer.

use std::path::PathBuf;

use cgmath::{Point3, Vector3};

/// Environment variable that overrides [`SceneConfig::texture_dir`].
pub const TEXTURE_DIR_ENV: &str = "TABLETOP_TEXTURES";

#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub position: Point3<f32>,
    /// Viewing direction, need not be normalized.
    pub front: Vector3<f32>,
    /// Vertical field of view of the perspective projection in degrees.
    pub fov_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
    /// Half width and half height of the orthographic view volume.
    pub ortho_extent: f32,
    /// World units per second at a speed multiplier of 1.
    pub movement_speed: f32,
    /// Degrees of rotation per pixel of mouse motion.
    pub mouse_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 5.0, 12.0),
            front: Vector3::new(0.0, -0.5, -2.0),
            fov_degrees: 80.0,
            znear: 0.1,
            zfar: 100.0,
            ortho_extent: 10.0,
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Directory the scene textures are read from.
    pub texture_dir: PathBuf,
    pub clear_colour: wgpu::Color,
    pub camera: CameraConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            title: "Tabletop Scene".to_string(),
            width: 1000,
            height: 800,
            texture_dir: PathBuf::from("Textures"),
            clear_colour: wgpu::Color::BLACK,
            camera: CameraConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Defaults with the texture directory taken from `TABLETOP_TEXTURES` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = std::env::var_os(TEXTURE_DIR_ENV).filter(|dir| !dir.is_empty()) {
            config.texture_dir = PathBuf::from(dir);
        }
        log::info!("reading textures from {}", config.texture_dir.display());
        config
    }
}
