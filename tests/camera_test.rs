use std::time::Duration;

use approx::assert_abs_diff_eq;
use cgmath::{InnerSpace, Point3, vec3};
use tabletop_scene::{
    camera::{
        Camera, CameraController, MAX_PITCH, MAX_SPEED_MULTIPLIER, MIN_SPEED_MULTIPLIER,
        Projection, ProjectionMode, ViewCommand, apply_view,
    },
    config::CameraConfig,
    shader::{UniformValue, names},
};
use winit::keyboard::KeyCode;

mod common;
use common::test_utils::RecordingSink;

fn setup() -> (Camera, CameraController, Projection) {
    let config = CameraConfig::default();
    (
        Camera::from(&config),
        CameraController::from(&config),
        Projection::from_config(1000, 800, &config),
    )
}

#[test]
fn should_start_looking_down_at_the_table() {
    let (camera, _, projection) = setup();

    assert_eq!(camera.position, Point3::new(0.0, 5.0, 12.0));
    assert_abs_diff_eq!(camera.yaw.0, -90.0, epsilon = 1e-4);
    assert_abs_diff_eq!(camera.pitch.0, -14.036_243, epsilon = 1e-4);
    let expected = vec3(0.0, -0.5, -2.0).normalize();
    let front = camera.front();
    assert_abs_diff_eq!(front.x, expected.x, epsilon = 1e-5);
    assert_abs_diff_eq!(front.y, expected.y, epsilon = 1e-5);
    assert_abs_diff_eq!(front.z, expected.z, epsilon = 1e-5);

    assert_eq!(projection.mode, ProjectionMode::Perspective);
    assert_abs_diff_eq!(projection.aspect(), 1.25);
}

#[test]
fn should_move_forward_with_w_and_strafe_with_d() {
    let (mut camera, mut controller, mut projection) = setup();
    let start = camera.position;

    assert_eq!(controller.handle_key(KeyCode::KeyW, true, &mut projection), None);
    controller.update(&mut camera, Duration::from_secs(1));
    let moved = camera.position - start;
    // speed 2.5 at multiplier 1
    assert_abs_diff_eq!(moved.magnitude(), 2.5, epsilon = 1e-4);
    assert!(moved.dot(camera.front()) > 0.0);

    controller.handle_key(KeyCode::KeyW, false, &mut projection);
    controller.handle_key(KeyCode::KeyD, true, &mut projection);
    let before = camera.position;
    controller.update(&mut camera, Duration::from_millis(500));
    let moved = camera.position - before;
    assert_abs_diff_eq!(moved.magnitude(), 1.25, epsilon = 1e-4);
    assert!(moved.x > 0.0);
}

#[test]
fn should_stay_in_place_with_opposite_keys_held() {
    let (mut camera, mut controller, mut projection) = setup();
    let start = camera.position;

    controller.handle_key(KeyCode::KeyQ, true, &mut projection);
    controller.handle_key(KeyCode::KeyE, true, &mut projection);
    controller.update(&mut camera, Duration::from_secs(1));

    assert_abs_diff_eq!((camera.position - start).magnitude(), 0.0, epsilon = 1e-6);
}

#[test]
fn should_switch_projection_with_o_and_p() {
    let (_, mut controller, mut projection) = setup();
    let perspective = projection.calc_matrix();

    controller.handle_key(KeyCode::KeyO, true, &mut projection);
    assert_eq!(projection.mode, ProjectionMode::Orthographic);
    assert_ne!(projection.calc_matrix(), perspective);

    // releasing the key changes nothing
    controller.handle_key(KeyCode::KeyP, false, &mut projection);
    assert_eq!(projection.mode, ProjectionMode::Orthographic);

    controller.handle_key(KeyCode::KeyP, true, &mut projection);
    assert_eq!(projection.mode, ProjectionMode::Perspective);
    assert_eq!(projection.calc_matrix(), perspective);
}

#[test]
fn should_toggle_mouse_lock_with_m() {
    let (_, mut controller, mut projection) = setup();
    assert!(controller.is_mouse_locked());

    assert_eq!(
        controller.handle_key(KeyCode::KeyM, true, &mut projection),
        Some(ViewCommand::LockMouse(false))
    );
    assert_eq!(controller.handle_key(KeyCode::KeyM, false, &mut projection), None);
    assert!(!controller.is_mouse_locked());
    assert_eq!(
        controller.handle_key(KeyCode::KeyM, true, &mut projection),
        Some(ViewCommand::LockMouse(true))
    );
    assert!(controller.is_mouse_locked());
}

#[test]
fn should_exit_on_escape() {
    let (_, mut controller, mut projection) = setup();
    assert_eq!(
        controller.handle_key(KeyCode::Escape, true, &mut projection),
        Some(ViewCommand::Exit)
    );
}

#[test]
fn should_turn_with_mouse_right_after_start() {
    let (mut camera, mut controller, _) = setup();
    let yaw_before = camera.yaw;

    controller.handle_mouse(100.0, 0.0);
    controller.update(&mut camera, Duration::ZERO);

    assert_ne!(camera.yaw, yaw_before);
    assert_abs_diff_eq!(camera.yaw.0, -80.0, epsilon = 1e-4);
}

#[test]
fn should_ignore_mouse_motion_while_unlocked() {
    let (mut camera, mut controller, mut projection) = setup();
    controller.handle_key(KeyCode::KeyM, true, &mut projection);
    let before = camera;

    controller.handle_mouse(250.0, -40.0);
    controller.update(&mut camera, Duration::from_millis(16));

    assert_eq!(camera, before);
}

#[test]
fn should_drop_pending_rotation_when_unlocking() {
    let (mut camera, mut controller, mut projection) = setup();
    let before = camera;

    controller.handle_mouse(250.0, -40.0);
    controller.handle_key(KeyCode::KeyM, true, &mut projection);
    controller.update(&mut camera, Duration::ZERO);

    assert_eq!(camera, before);
}

#[test]
fn should_turn_with_locked_mouse() {
    let (mut camera, mut controller, _) = setup();

    controller.handle_mouse(100.0, 50.0);
    controller.update(&mut camera, Duration::ZERO);

    // sensitivity 0.1, mouse down looks down
    assert_abs_diff_eq!(camera.yaw.0, -80.0, epsilon = 1e-4);
    assert_abs_diff_eq!(camera.pitch.0, -19.036_243, epsilon = 1e-4);
}

#[test]
fn should_clamp_pitch() {
    let (mut camera, mut controller, _) = setup();

    controller.handle_mouse(0.0, -10_000.0);
    controller.update(&mut camera, Duration::ZERO);
    assert_eq!(camera.pitch, MAX_PITCH);

    controller.handle_mouse(0.0, 10_000.0);
    controller.update(&mut camera, Duration::ZERO);
    assert_eq!(camera.pitch, -MAX_PITCH);
}

#[test]
fn should_clamp_speed_multiplier() {
    let (_, mut controller, _) = setup();

    controller.handle_scroll(-5.0);
    assert_abs_diff_eq!(controller.speed_multiplier(), MIN_SPEED_MULTIPLIER);

    controller.handle_scroll(2.0);
    assert_abs_diff_eq!(controller.speed_multiplier(), 2.1, epsilon = 1e-6);

    controller.handle_scroll(100.0);
    assert_abs_diff_eq!(controller.speed_multiplier(), MAX_SPEED_MULTIPLIER);
}

#[test]
fn should_scale_movement_by_speed_multiplier() {
    let (mut camera, mut controller, mut projection) = setup();
    controller.handle_scroll(1.0);
    controller.handle_key(KeyCode::KeyS, true, &mut projection);
    let start = camera.position;

    controller.update(&mut camera, Duration::from_secs(1));

    assert_abs_diff_eq!((camera.position - start).magnitude(), 5.0, epsilon = 1e-4);
}

#[test]
fn should_keep_aspect_on_zero_height_resize() {
    let (_, _, mut projection) = setup();
    projection.resize(1920, 1080);
    assert_abs_diff_eq!(projection.aspect(), 1920.0 / 1080.0);
    projection.resize(640, 0);
    assert_abs_diff_eq!(projection.aspect(), 1920.0 / 1080.0);
}

#[test]
fn should_upload_view_projection_and_eye_position() {
    let (camera, _, projection) = setup();
    let mut sink = RecordingSink::new();

    apply_view(&camera, &projection, &mut sink);

    assert_eq!(
        sink.last(names::VIEW),
        Some(UniformValue::Mat4(camera.calc_matrix()))
    );
    assert_eq!(
        sink.last(names::PROJECTION),
        Some(UniformValue::Mat4(projection.calc_matrix()))
    );
    assert_eq!(
        sink.last(names::VIEW_POSITION),
        Some(UniformValue::Vec3(vec3(0.0, 5.0, 12.0)))
    );
}
