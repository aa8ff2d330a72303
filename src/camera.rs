//! Fly camera, projections and keyboard/mouse control.

use std::time::Duration;

use cgmath::{Angle, Deg, InnerSpace, Matrix4, Point3, Vector3, perspective};
use winit::keyboard::KeyCode;

use crate::{
    config::CameraConfig,
    shader::{ShaderSink, names},
};

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// Pitch stops short of straight up or down so the view never flips.
pub const MAX_PITCH: Deg<f32> = Deg(89.0);

pub const MIN_SPEED_MULTIPLIER: f32 = 0.1;
pub const MAX_SPEED_MULTIPLIER: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
    pub yaw: Deg<f32>,
    pub pitch: Deg<f32>,
}

impl Camera {
    pub fn new<V: Into<Point3<f32>>, Y: Into<Deg<f32>>, P: Into<Deg<f32>>>(
        position: V,
        yaw: Y,
        pitch: P,
    ) -> Self {
        Self {
            position: position.into(),
            yaw: yaw.into(),
            pitch: pitch.into(),
        }
    }

    /// Camera at `position` facing along `front`.
    pub fn looking_along(position: Point3<f32>, front: Vector3<f32>) -> Self {
        let front = front.normalize();
        Self {
            position,
            yaw: Deg::atan2(front.z, front.x),
            pitch: Deg::asin(front.y),
        }
    }

    pub fn front(&self) -> Vector3<f32> {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vector3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize()
    }

    pub fn right(&self) -> Vector3<f32> {
        self.front().cross(Vector3::unit_y()).normalize()
    }

    pub fn up(&self) -> Vector3<f32> {
        self.right().cross(self.front()).normalize()
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_to_rh(self.position, self.front(), Vector3::unit_y())
    }
}

impl From<&CameraConfig> for Camera {
    fn from(config: &CameraConfig) -> Self {
        Camera::looking_along(config.position, config.front)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectionMode {
    Perspective,
    Orthographic,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    pub mode: ProjectionMode,
    aspect: f32,
    fovy: Deg<f32>,
    znear: f32,
    zfar: f32,
    ortho_extent: f32,
}

impl Projection {
    pub fn new<F: Into<Deg<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            mode: ProjectionMode::Perspective,
            aspect: width as f32 / height.max(1) as f32,
            fovy: fovy.into(),
            znear,
            zfar,
            ortho_extent: 10.0,
        }
    }

    pub fn from_config(width: u32, height: u32, config: &CameraConfig) -> Self {
        Self {
            ortho_extent: config.ortho_extent,
            ..Self::new(width, height, Deg(config.fov_degrees), config.znear, config.zfar)
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// The orthographic volume is square and ignores the aspect ratio.
    pub fn calc_matrix(&self) -> Matrix4<f32> {
        let projection = match self.mode {
            ProjectionMode::Perspective => perspective(self.fovy, self.aspect, self.znear, self.zfar),
            ProjectionMode::Orthographic => {
                let e = self.ortho_extent;
                cgmath::ortho(-e, e, -e, e, self.znear, self.zfar)
            }
        };
        OPENGL_TO_WGPU_MATRIX * projection
    }
}

/// Upload `view`, `projection` and `viewPosition`.
pub fn apply_view(camera: &Camera, projection: &Projection, shader: &mut impl ShaderSink) {
    shader.set_mat4(names::VIEW, camera.calc_matrix());
    shader.set_mat4(names::PROJECTION, projection.calc_matrix());
    shader.set_vec3(names::VIEW_POSITION, camera.position.to_homogeneous().truncate());
}

/// Requests a key press makes of the window loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewCommand {
    Exit,
    /// Grab (true) or release (false) the cursor.
    LockMouse(bool),
}

#[derive(Debug)]
pub struct CameraController {
    amount_left: f32,
    amount_right: f32,
    amount_forward: f32,
    amount_backward: f32,
    amount_up: f32,
    amount_down: f32,
    rotate_horizontal: f32,
    rotate_vertical: f32,
    speed: f32,
    speed_multiplier: f32,
    sensitivity: f32,
    mouse_locked: bool,
}

impl CameraController {
    pub fn new(speed: f32, sensitivity: f32) -> Self {
        Self {
            amount_left: 0.0,
            amount_right: 0.0,
            amount_forward: 0.0,
            amount_backward: 0.0,
            amount_up: 0.0,
            amount_down: 0.0,
            rotate_horizontal: 0.0,
            rotate_vertical: 0.0,
            speed,
            speed_multiplier: 1.0,
            sensitivity,
            // the viewer opens with the cursor captured
            mouse_locked: true,
        }
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    pub fn is_mouse_locked(&self) -> bool {
        self.mouse_locked
    }

    /// React to a key changing state. Key repeats must be filtered by the caller.
    pub fn handle_key(
        &mut self,
        key: KeyCode,
        pressed: bool,
        projection: &mut Projection,
    ) -> Option<ViewCommand> {
        let amount = if pressed { 1.0 } else { 0.0 };
        match key {
            KeyCode::KeyW => self.amount_forward = amount,
            KeyCode::KeyS => self.amount_backward = amount,
            KeyCode::KeyA => self.amount_left = amount,
            KeyCode::KeyD => self.amount_right = amount,
            KeyCode::KeyQ => self.amount_up = amount,
            KeyCode::KeyE => self.amount_down = amount,
            KeyCode::KeyO if pressed => projection.mode = ProjectionMode::Orthographic,
            KeyCode::KeyP if pressed => projection.mode = ProjectionMode::Perspective,
            KeyCode::KeyM if pressed => {
                self.mouse_locked = !self.mouse_locked;
                if !self.mouse_locked {
                    self.rotate_horizontal = 0.0;
                    self.rotate_vertical = 0.0;
                }
                return Some(ViewCommand::LockMouse(self.mouse_locked));
            }
            KeyCode::Escape if pressed => return Some(ViewCommand::Exit),
            _ => (),
        }
        None
    }

    /// Accumulate raw mouse motion; ignored unless the mouse is locked.
    pub fn handle_mouse(&mut self, mouse_dx: f64, mouse_dy: f64) {
        if !self.mouse_locked {
            return;
        }
        self.rotate_horizontal += mouse_dx as f32;
        self.rotate_vertical += mouse_dy as f32;
    }

    /// Scrolling changes how fast the camera moves.
    pub fn handle_scroll(&mut self, lines: f32) {
        self.speed_multiplier =
            (self.speed_multiplier + lines).clamp(MIN_SPEED_MULTIPLIER, MAX_SPEED_MULTIPLIER);
    }

    pub fn update(&mut self, camera: &mut Camera, dt: Duration) {
        let velocity = self.speed * dt.as_secs_f32() * self.speed_multiplier;

        let front = camera.front();
        let right = camera.right();
        let up = camera.up();
        camera.position += front * (self.amount_forward - self.amount_backward) * velocity;
        camera.position += right * (self.amount_right - self.amount_left) * velocity;
        camera.position += up * (self.amount_up - self.amount_down) * velocity;

        camera.yaw += Deg(self.rotate_horizontal * self.sensitivity);
        // screen y grows downwards
        camera.pitch += Deg(-self.rotate_vertical * self.sensitivity);
        self.rotate_horizontal = 0.0;
        self.rotate_vertical = 0.0;

        if camera.pitch < -MAX_PITCH {
            camera.pitch = -MAX_PITCH;
        } else if camera.pitch > MAX_PITCH {
            camera.pitch = MAX_PITCH;
        }
    }
}

impl From<&CameraConfig> for CameraController {
    fn from(config: &CameraConfig) -> Self {
        CameraController::new(config.movement_speed, config.mouse_sensitivity)
    }
}
