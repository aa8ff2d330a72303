//! Object placement: scale, Euler rotation and translation.

use cgmath::{Deg, Matrix4, Vector3};

use crate::shader::{ShaderSink, names};

/// Placement of one object in world space.
///
/// Rotations are Euler angles in degrees around the X, Y and Z axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: Vector3<f32>,
    pub rotation: Vector3<f32>,
    pub position: Vector3<f32>,
}

impl Transform {
    pub fn new(scale: Vector3<f32>, rotation: Vector3<f32>, position: Vector3<f32>) -> Self {
        Self {
            scale,
            rotation,
            position,
        }
    }

    /// `T * Rx * Ry * Rz * S`: the vertex is scaled first, then rotated around
    /// Z, Y and X (in that order) and finally moved into place.
    pub fn to_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from_angle_x(Deg(self.rotation.x))
            * Matrix4::from_angle_y(Deg(self.rotation.y))
            * Matrix4::from_angle_z(Deg(self.rotation.z))
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }

    /// Compose the model matrix and hand it to the shader.
    pub fn apply(&self, shader: &mut impl ShaderSink) -> Matrix4<f32> {
        let model = self.to_matrix();
        shader.set_mat4(names::MODEL, model);
        model
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            position: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}
