use glam::Vec3;
use crate::config::ViewerConfig;
use crate::scene::{CameraMode, SceneState};
use super::*;

fn state() -> SceneState {
    SceneState::new(&ViewerConfig::default())
}

#[test]
fn test_ranges() {
    assert_eq!(Control::CubeTranslateX.range(), ControlRange { min: -10.0, max: 10.0, step: 0.01 });
    assert_eq!(Control::CubeScaleY.range(), ControlRange { min: 0.0, max: 5.0, step: 0.01 });
    assert_eq!(Control::CubeRotateZ.range(), ControlRange { min: -10.0, max: 10.0, step: 0.01 });
    assert_eq!(Control::CameraPositionX.range(), ControlRange { min: -10.0, max: 10.0, step: 0.01 });
    assert_eq!(Control::FieldOfView.range(), ControlRange { min: 30.0, max: 120.0, step: 1.0 });
    assert_eq!(Control::AspectRatio.range(), ControlRange { min: 1.0, max: 2.0, step: 0.01 });
    assert_eq!(Control::Near.range(), ControlRange { min: 0.1, max: 10.0, step: 0.01 });
    assert_eq!(Control::Far.range(), ControlRange { min: 0.0, max: 15.0, step: 0.1 });
}

#[test]
fn test_all_controls_listed_once() {
    for (i, a) in Control::ALL.iter().enumerate() {
        for b in &Control::ALL[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(Control::ALL.iter().filter(|c| c.is_cube_control()).count(), 9);
}

#[test]
fn test_initial_values_read_back() {
    let state = state();
    assert_eq!(state.control_value(Control::CubeScaleX), 1.0);
    assert_eq!(state.control_value(Control::CameraPositionX), 3.5);
    assert_eq!(state.control_value(Control::FieldOfView), 45.0);
    assert_eq!(state.control_value(Control::Far), 10.0);
}

#[test]
fn test_set_control_writes_through() {
    let mut state = state();

    assert_eq!(state.set_control(Control::CubeTranslateY, 2.5), 2.5);
    assert_eq!(state.set_control(Control::CubeRotateX, -3.0), -3.0);
    assert_eq!(state.set_control(Control::CameraPositionZ, 1.25), 1.25);
    assert_eq!(state.set_control(Control::AspectRatio, 1.5), 1.5);

    assert_eq!(state.cube.translation, Vec3::new(0.0, 2.5, 0.0));
    assert_eq!(state.cube.rotation.x, -3.0);
    assert_eq!(state.scene_camera.orientation.eye, Vec3::new(3.5, 0.0, 1.25));
    assert_eq!(state.scene_camera.perspective.aspect_ratio, 1.5);
}

#[test]
fn test_set_control_clamps() {
    let mut state = state();

    assert_eq!(state.set_control(Control::CubeTranslateX, 25.0), 10.0);
    assert_eq!(state.set_control(Control::CubeScaleZ, -1.0), 0.0);
    assert_eq!(state.set_control(Control::FieldOfView, 10.0), 30.0);
    assert_eq!(state.set_control(Control::FieldOfView, 170.0), 120.0);
    assert_eq!(state.control_value(Control::FieldOfView), 120.0);
}

#[test]
fn test_near_far_stay_ordered() {
    let mut state = state();

    // far defaults to 10, so near cannot reach its 10 maximum
    let near = state.set_control(Control::Near, 10.0);
    assert!((near - (10.0 - MIN_DEPTH_SPAN)).abs() < 1e-6);

    let far = state.set_control(Control::Far, 0.0);
    assert!((far - (near + MIN_DEPTH_SPAN)).abs() < 1e-6);
    assert!(state.scene_camera.perspective.is_valid());
}

#[test]
fn test_non_finite_value_ignored() {
    let mut state = state();
    assert_eq!(state.set_control(Control::CubeTranslateX, f32::NAN), 0.0);
    assert_eq!(state.cube.translation.x, 0.0);
}

#[test]
fn test_toggles() {
    let mut state = state();
    assert!(!state.toggle_value(Toggle::FixEyeToSceneCamera));
    assert!(state.toggle_value(Toggle::ShowSceneCamera));

    state.set_toggle(Toggle::FixEyeToSceneCamera, true);
    assert_eq!(state.mode, CameraMode::Projection);
    assert!(state.toggle_value(Toggle::FixEyeToSceneCamera));

    state.set_toggle(Toggle::ShowSceneCamera, false);
    assert!(!state.show_scene_camera);

    state.set_toggle(Toggle::FixEyeToSceneCamera, false);
    assert_eq!(state.mode, CameraMode::Objective);
}
