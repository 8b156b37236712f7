use glam::{Mat4, Vec3};
use crate::config::ViewerConfig;
use crate::error::Error;
use crate::input::{InputEvent, InputOutcome, Key, MouseButton};
use crate::scene::{Control, CubeTransform};
use super::*;

fn state() -> SceneState {
    SceneState::new(&ViewerConfig::default())
}

fn press(x: i32, y: i32) -> InputEvent {
    InputEvent::MouseButtonPressed { button: MouseButton::Left, x, y, over_ui: false }
}

// ============================================================================
// Initial state / resets
// ============================================================================

#[test]
fn test_initial_state() {
    let state = state();
    assert_eq!(state.mode, CameraMode::Objective);
    assert!(state.show_scene_camera);
    assert_eq!(state.cube, CubeTransform::INITIAL);
    assert_eq!(state.controller.yaw, -90.0);
    assert_eq!(state.controller.pitch, 0.0);
    assert_eq!(state.controller.move_speed, 0.1);
    assert_eq!(state.active_camera(), &state.free_camera);
}

#[test]
fn test_reset_cube_transform() {
    let mut state = state();
    state.set_control(Control::CubeTranslateX, 3.0);
    state.set_control(Control::CubeScaleY, 4.0);
    state.set_control(Control::CubeRotateZ, -2.0);

    state.reset_cube_transform();
    assert_eq!(state.cube, CubeTransform::INITIAL);
}

#[test]
fn test_reset_scene_camera() {
    let mut state = state();
    let initial = state.scene_camera;
    state.set_control(Control::CameraPositionY, 4.0);
    state.set_control(Control::FieldOfView, 100.0);
    state.set_control(Control::Near, 2.0);
    state.mode = CameraMode::Projection;
    state.show_scene_camera = false;

    state.reset_scene_camera();

    assert_eq!(state.scene_camera, initial);
    assert_eq!(state.mode, CameraMode::Objective);
    assert!(state.show_scene_camera);
}

#[test]
fn test_reset_leaves_free_camera_alone() {
    let mut state = state();
    state.handle_input(&InputEvent::KeyPressed(Key::W));
    let moved = state.free_camera;

    state.reset_scene_camera();
    state.reset_cube_transform();
    assert_eq!(state.free_camera, moved);
}

// ============================================================================
// Input
// ============================================================================

#[test]
fn test_quit_events() {
    let mut state = state();
    assert_eq!(state.handle_input(&InputEvent::Quit), InputOutcome::Quit);
    assert_eq!(state.handle_input(&InputEvent::KeyPressed(Key::Q)), InputOutcome::Quit);
}

#[test]
fn test_keys_move_free_camera_only() {
    let mut state = state();
    let scene_camera = state.scene_camera;

    assert_eq!(state.handle_input(&InputEvent::KeyPressed(Key::W)), InputOutcome::Continue);
    let expected = Vec3::new(5.75, 2.0, 4.0) + Vec3::new(-5.0, -2.0, -4.0) * 0.1;
    assert_eq!(state.free_camera.orientation.eye, expected);

    state.handle_input(&InputEvent::KeyPressed(Key::S));
    assert!(state.free_camera.orientation.eye.abs_diff_eq(Vec3::new(5.75, 2.0, 4.0), 1e-6));
    assert_eq!(state.scene_camera, scene_camera);
}

#[test]
fn test_keys_move_free_camera_in_projection_mode() {
    let mut state = state();
    state.mode = CameraMode::Projection;
    state.handle_input(&InputEvent::KeyPressed(Key::D));
    assert_ne!(state.free_camera.orientation.eye, Vec3::new(5.75, 2.0, 4.0));
}

#[test]
fn test_mouse_look_requires_left_press_outside_ui() {
    let mut state = state();
    let direction = state.free_camera.orientation.direction;

    state.handle_input(&InputEvent::MouseButtonPressed {
        button: MouseButton::Left, x: 10, y: 10, over_ui: true,
    });
    state.handle_input(&InputEvent::MouseMoved { x: 50, y: 10 });
    assert_eq!(state.free_camera.orientation.direction, direction);

    state.handle_input(&InputEvent::MouseButtonPressed {
        button: MouseButton::Right, x: 10, y: 10, over_ui: false,
    });
    state.handle_input(&InputEvent::MouseMoved { x: 50, y: 10 });
    assert_eq!(state.free_camera.orientation.direction, direction);
}

#[test]
fn test_mouse_look_drag() {
    let mut state = state();

    state.handle_input(&press(100, 100));
    state.handle_input(&InputEvent::MouseMoved { x: 190, y: 100 });
    // yaw -90 + 90 = 0, pitch 0: looking down +X
    assert_eq!(state.controller.yaw, 0.0);
    assert!(state.free_camera.orientation.direction.abs_diff_eq(Vec3::X, 1e-6));

    state.handle_input(&InputEvent::MouseButtonReleased { button: MouseButton::Left });
    state.handle_input(&InputEvent::MouseMoved { x: 300, y: 0 });
    assert_eq!(state.controller.yaw, 0.0);
    assert_eq!(state.controller.pitch, 0.0);
}

// ============================================================================
// Frame preparation
// ============================================================================

#[test]
fn test_objective_frame() {
    let state = state();
    let frame = state.prepare_frame().unwrap();

    let view = state.free_camera.view_matrix();
    let projection = state.free_camera.projection_matrix().unwrap();
    assert_eq!(frame.mode, CameraMode::Objective);
    assert_eq!(frame.cube_model, Mat4::IDENTITY);
    assert_eq!(frame.cube_view, view);
    assert_eq!(frame.cube_projection, projection);
    assert_eq!(frame.grid_mvp, projection * view);
    assert_eq!(frame.cube_mvp, projection * view * Mat4::IDENTITY);

    let overlay = frame.overlay.unwrap();
    assert_eq!(overlay.frustum_mvp, projection * view);
    let gizmo_model = state.gizmo.model_matrix(Vec3::new(3.5, 0.0, 0.0));
    assert_eq!(overlay.gizmo_mvp, projection * view * gizmo_model);

    assert_eq!(frame.frustum, state.scene_camera.frustum_corners().unwrap());
}

#[test]
fn test_hidden_scene_camera_has_no_overlay() {
    let mut state = state();
    state.show_scene_camera = false;
    assert!(state.prepare_frame().unwrap().overlay.is_none());
}

#[test]
fn test_projection_frame_uses_scene_camera() {
    let mut state = state();
    state.mode = CameraMode::Projection;
    let frame = state.prepare_frame().unwrap();

    let view = state.scene_camera.view_matrix();
    let projection = state.scene_camera.projection_matrix().unwrap();
    assert_eq!(frame.cube_view, view);
    assert_eq!(frame.cube_projection, projection);
    assert_eq!(frame.grid_mvp, projection * view);
    assert!(frame.overlay.is_none());
}

#[test]
fn test_slider_change_visible_next_frame() {
    let mut state = state();
    state.set_control(Control::CubeScaleX, 2.0);
    let frame = state.prepare_frame().unwrap();
    assert_eq!(frame.cube_model.transform_vector3(Vec3::X), Vec3::new(2.0, 0.0, 0.0));
}

#[test]
fn test_mouse_look_to_vertical_keeps_frame_finite() {
    let mut state = state();

    state.handle_input(&press(100, 100));
    state.handle_input(&InputEvent::MouseMoved { x: 100, y: 10 });
    assert_eq!(state.controller.pitch, 0.0);

    let frame = state.prepare_frame().unwrap();
    assert!(frame.cube_mvp.is_finite());
    assert!(frame.grid_mvp.is_finite());
    assert!(frame.overlay.unwrap().gizmo_mvp.is_finite());

    state.handle_input(&InputEvent::MouseMoved { x: 100, y: 90 });
    assert_eq!(state.controller.pitch, -80.0);
    assert!(state.prepare_frame().unwrap().cube_mvp.is_finite());
}

#[test]
fn test_vertical_look_direction_fails_frame() {
    let mut objective = state();
    let mut projection = state();

    objective.free_camera.orientation.direction = Vec3::new(0.0, 2.0, 0.0);
    assert!(matches!(objective.prepare_frame(), Err(Error::DegenerateView(_))));

    projection.mode = CameraMode::Projection;
    projection.scene_camera.orientation.direction = Vec3::NEG_Y;
    assert!(matches!(projection.prepare_frame(), Err(Error::DegenerateView(_))));
}

#[test]
fn test_invalid_scene_camera_fails_frame() {
    let mut state = state();
    state.scene_camera.perspective.far = 0.0;
    assert!(matches!(state.prepare_frame(), Err(Error::InvalidProjection(_))));
}
