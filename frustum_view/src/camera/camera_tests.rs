use glam::{Mat4, Vec3};
use crate::camera::{CameraOrientation, CameraPerspective};
use crate::error::Error;
use super::*;

fn scene_camera() -> Camera {
    Camera::new(
        CameraOrientation::new(Vec3::new(3.5, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0), Vec3::Y),
        CameraPerspective::new(45.0, 4.0 / 3.0, 0.1, 10.0),
    )
}

// ============================================================================
// Orientation / perspective
// ============================================================================

#[test]
fn test_target_is_eye_plus_direction() {
    let camera = scene_camera();
    assert_eq!(camera.orientation.target(), Vec3::new(2.5, 0.0, 0.0));
}

#[test]
fn test_view_matrix_matches_look_at() {
    let camera = scene_camera();
    let expected = Mat4::look_at_rh(Vec3::new(3.5, 0.0, 0.0), Vec3::new(2.5, 0.0, 0.0), Vec3::Y);
    assert_eq!(camera.view_matrix(), expected);
}

#[test]
fn test_perspective_validity() {
    assert!(CameraPerspective::new(45.0, 4.0 / 3.0, 0.1, 10.0).is_valid());
    // far slider can go below near
    assert!(!CameraPerspective::new(45.0, 4.0 / 3.0, 5.0, 1.0).is_valid());
}

// ============================================================================
// Derived matrices
// ============================================================================

#[test]
fn test_view_projection_order() {
    let camera = scene_camera();
    let expected = camera.projection_matrix().unwrap() * camera.view_matrix();
    assert_eq!(camera.view_projection_matrix().unwrap(), expected);
}

#[test]
fn test_inverse_view_projection() {
    let camera = scene_camera();
    let vp = camera.view_projection_matrix().unwrap();
    let inv = camera.inverse_view_projection_matrix().unwrap();
    assert!((vp * inv).abs_diff_eq(Mat4::IDENTITY, 1e-4));
}

#[test]
fn test_checked_view_matrix() {
    let mut camera = scene_camera();
    assert_eq!(camera.checked_view_matrix().unwrap(), camera.view_matrix());

    // Pitch of exactly 90 degrees in f32: a few 1e-8 off the up axis
    camera.orientation.direction = Vec3::new(1.9e-15, 1.0, 4.37e-8);
    assert!(matches!(camera.checked_view_matrix(), Err(Error::DegenerateView(_))));
    assert!(matches!(camera.view_projection_matrix(), Err(Error::DegenerateView(_))));
    assert!(matches!(camera.frustum_corners(), Err(Error::DegenerateView(_))));

    camera.orientation.direction = Vec3::ZERO;
    assert!(matches!(camera.checked_view_matrix(), Err(Error::DegenerateView(_))));
}

#[test]
fn test_invalid_projection_propagates() {
    let mut camera = scene_camera();
    camera.perspective.far = 0.0;

    assert!(matches!(camera.projection_matrix(), Err(Error::InvalidProjection(_))));
    assert!(matches!(camera.view_projection_matrix(), Err(Error::InvalidProjection(_))));
    assert!(matches!(camera.frustum_corners(), Err(Error::InvalidProjection(_))));
}

#[test]
fn test_frustum_corners_follow_camera() {
    let mut camera = scene_camera();
    let before = camera.frustum_corners().unwrap();

    camera.orientation.eye.y += 2.0;
    let after = camera.frustum_corners().unwrap();

    for (b, a) in before.corners.iter().zip(after.corners.iter()) {
        assert!((*a - *b).abs_diff_eq(Vec3::new(0.0, 2.0, 0.0), 1e-3));
    }
}
