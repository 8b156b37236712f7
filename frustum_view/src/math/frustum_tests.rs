use glam::{Mat4, Vec3};
use crate::error::Error;
use crate::math::{look_at, perspective};
use super::*;

fn assert_close(actual: f32, expected: f32, rel: f32) {
    let tolerance = rel * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} got {}", expected, actual
    );
}

fn origin_camera(fov: f32, aspect: f32, near: f32, far: f32) -> FrustumCorners {
    let projection = perspective(fov, aspect, near, far).unwrap();
    let view = look_at(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y);
    FrustumCorners::from_view_projection(&(projection * view)).unwrap()
}

// ============================================================================
// Extraction
// ============================================================================

#[test]
fn test_identity_matrix_yields_ndc_cube() {
    let frustum = FrustumCorners::from_inverse_view_projection(&Mat4::IDENTITY);
    for (corner, ndc) in frustum.corners.iter().zip(NDC_CORNERS.iter()) {
        assert_eq!(*corner, ndc.truncate());
    }
}

#[test]
fn test_symmetric_about_view_axis() {
    let frustum = origin_camera(60.0, 4.0 / 3.0, 0.5, 20.0);
    let c = &frustum.corners;

    for (left, right) in [(CORNER_LBN, CORNER_RBN), (CORNER_LTN, CORNER_RTN),
                          (CORNER_LBF, CORNER_RBF), (CORNER_LTF, CORNER_RTF)] {
        assert_close(c[left].x, -c[right].x, 1e-4);
        assert_close(c[left].y, c[right].y, 1e-4);
    }
    for (bottom, top) in [(CORNER_LBN, CORNER_LTN), (CORNER_RBF, CORNER_RTF)] {
        assert_close(c[bottom].y, -c[top].y, 1e-4);
    }
    // Near corners are closer to the eye than their far counterparts
    for i in 0..4 {
        assert!(c[i].length() < c[i + 4].length());
        assert!(c[i].z > c[i + 4].z);
    }
}

#[test]
fn test_wide_fov_scenario() {
    let aspect = 16.0 / 9.0;
    let frustum = origin_camera(90.0, aspect, 0.1, 100.0);

    // Vertical fov: half height = near * tan(45°), half width = half height * aspect
    for corner in frustum.near() {
        assert_close(corner.z, -0.1, 1e-3);
        assert_close(corner.y.abs(), 0.1, 1e-3);
        assert_close(corner.x.abs(), 0.1 * aspect, 1e-3);
    }
    for corner in frustum.far() {
        assert_close(corner.z, -100.0, 1e-3);
        assert_close(corner.y.abs(), 100.0, 1e-3);
        assert_close(corner.x.abs(), 100.0 * aspect, 1e-3);
    }

    let lbn = frustum.corner(CORNER_LBN);
    assert!(lbn.x < 0.0 && lbn.y < 0.0);
    let rtf = frustum.corner(CORNER_RTF);
    assert!(rtf.x > 0.0 && rtf.y > 0.0);
}

#[test]
fn test_translated_camera_moves_corners() {
    let projection = perspective(45.0, 4.0 / 3.0, 0.1, 10.0).unwrap();
    let eye = Vec3::new(3.5, 0.0, 0.0);
    let view = look_at(eye, eye + Vec3::new(-1.0, 0.0, 0.0), Vec3::Y);
    let frustum = FrustumCorners::from_view_projection(&(projection * view)).unwrap();

    for corner in frustum.near() {
        assert_close(corner.x, 3.4, 1e-4);
    }
    for corner in frustum.far() {
        assert_close(corner.x, -6.5, 1e-3);
    }
}

#[test]
fn test_singular_view_projection() {
    assert_eq!(
        FrustumCorners::from_view_projection(&Mat4::ZERO),
        Err(Error::SingularMatrix)
    );
}

// ============================================================================
// Derived outputs
// ============================================================================

#[test]
fn test_edge_centers_and_center() {
    let frustum = FrustumCorners::from_inverse_view_projection(&Mat4::IDENTITY);
    let centers = frustum.edge_centers();
    assert_eq!(centers[CORNER_LBN], Vec3::new(-1.0, -1.0, 0.0));
    assert_eq!(centers[CORNER_RTN], Vec3::new(1.0, 1.0, 0.0));
    assert_eq!(frustum.center(), Vec3::ZERO);
}

#[test]
fn test_line_list_covers_twelve_edges() {
    let frustum = origin_camera(45.0, 1.0, 1.0, 10.0);
    let lines = frustum.line_list();

    assert_eq!(lines.len(), 24);
    // Side edges connect corner i to corner i + 4
    for i in 0..4 {
        assert_eq!(lines[16 + 2 * i], frustum.corner(i));
        assert_eq!(lines[17 + 2 * i], frustum.corner(i + 4));
    }
    // Every corner appears in exactly three edges
    for i in 0..8u16 {
        assert_eq!(FRUSTUM_EDGE_INDICES.iter().filter(|&&idx| idx == i).count(), 3);
    }
}

#[test]
fn test_vertex_data_layout() {
    let frustum = origin_camera(45.0, 1.0, 1.0, 10.0);
    let data = frustum.to_vertex_data();
    for i in 0..8 {
        assert_eq!(data[i * 3], frustum.corners[i].x);
        assert_eq!(data[i * 3 + 1], frustum.corners[i].y);
        assert_eq!(data[i * 3 + 2], frustum.corners[i].z);
    }
}

#[test]
fn test_face_indices_in_range() {
    assert_eq!(FRUSTUM_FACE_INDICES.len() % 3, 0);
    assert!(FRUSTUM_FACE_INDICES.iter().all(|&i| i < 8));
}

#[test]
fn test_corner_constants() {
    assert_eq!(CORNER_LBN + 4, CORNER_LBF);
    assert_eq!(CORNER_LTN + 4, CORNER_LTF);
    assert_eq!(CORNER_RTN + 4, CORNER_RTF);
    assert_eq!(CORNER_RBN + 4, CORNER_RBF);
}
