/// Matrix construction and inversion helpers.
///
/// All matrices are glam column-major `Mat4` with the column-vector
/// convention (`clip = projection * view * model * p`). They can be uploaded
/// to GL with `transpose = false`.

use glam::{Mat4, Vec3};
use crate::error::{Error, Result};

/// Build an OpenGL perspective projection (clip z in [-1, 1]).
///
/// `fov_degrees` is the vertical field of view. Rejects fov outside of
/// (0, 180), a non-positive aspect ratio, `near <= 0` and `far <= near`.
pub fn perspective(fov_degrees: f32, aspect_ratio: f32, near: f32, far: f32) -> Result<Mat4> {
    if !(fov_degrees > 0.0 && fov_degrees < 180.0) {
        return Err(Error::InvalidProjection(format!(
            "fov must be in (0, 180) degrees, got {}", fov_degrees
        )));
    }
    if !(aspect_ratio > 0.0) || !aspect_ratio.is_finite() {
        return Err(Error::InvalidProjection(format!(
            "aspect ratio must be > 0, got {}", aspect_ratio
        )));
    }
    if !(near > 0.0) {
        return Err(Error::InvalidProjection(format!("near must be > 0, got {}", near)));
    }
    if !(far > near) || !far.is_finite() {
        return Err(Error::InvalidProjection(format!(
            "far ({}) must be greater than near ({})", far, near
        )));
    }

    let cotangent = 1.0 / (fov_degrees * (std::f32::consts::PI / 360.0)).tan();

    let mut m = [[0.0f32; 4]; 4];
    m[0][0] = cotangent / aspect_ratio;
    m[1][1] = cotangent;
    m[2][2] = (near + far) / (near - far);
    m[2][3] = -1.0;
    m[3][2] = (2.0 * near * far) / (near - far);

    Ok(Mat4::from_cols_array_2d(&m))
}

/// Right-handed look-at view matrix from eye, target point and up vector.
#[inline]
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, target, up)
}

/// Rotation of `angle_degrees` about `axis` (normalized internally).
#[inline]
pub fn rotation_degrees(angle_degrees: f32, axis: Vec3) -> Mat4 {
    Mat4::from_axis_angle(axis.normalize(), angle_degrees.to_radians())
}

/// General 4x4 inverse by cofactor expansion.
///
/// Builds the adjugate from two passes of six 2x2 sub-determinants, takes
/// the determinant from the first column's cofactors and scales the
/// adjugate by its reciprocal. No affine shortcut is taken.
///
/// # Errors
///
/// `Error::SingularMatrix` when the determinant is zero or not finite.
pub fn invert(mat: &Mat4) -> Result<Mat4> {
    let m = mat.to_cols_array_2d();
    let (a, b, c, d) = (m[0][0], m[0][1], m[0][2], m[0][3]);
    let (e, f, g, h) = (m[1][0], m[1][1], m[1][2], m[1][3]);
    let (i, j, k, l) = (m[2][0], m[2][1], m[2][2], m[2][3]);
    let (mm, n, o, p) = (m[3][0], m[3][1], m[3][2], m[3][3]);

    let mut dest = [[0.0f32; 4]; 4];

    let t0 = k * p - o * l;
    let t1 = j * p - n * l;
    let t2 = j * o - n * k;
    let t3 = i * p - mm * l;
    let t4 = i * o - mm * k;
    let t5 = i * n - mm * j;

    dest[0][0] = f * t0 - g * t1 + h * t2;
    dest[1][0] = -(e * t0 - g * t3 + h * t4);
    dest[2][0] = e * t1 - f * t3 + h * t5;
    dest[3][0] = -(e * t2 - f * t4 + g * t5);

    dest[0][1] = -(b * t0 - c * t1 + d * t2);
    dest[1][1] = a * t0 - c * t3 + d * t4;
    dest[2][1] = -(a * t1 - b * t3 + d * t5);
    dest[3][1] = a * t2 - b * t4 + c * t5;

    let t0 = g * p - o * h;
    let t1 = f * p - n * h;
    let t2 = f * o - n * g;
    let t3 = e * p - mm * h;
    let t4 = e * o - mm * g;
    let t5 = e * n - mm * f;

    dest[0][2] = b * t0 - c * t1 + d * t2;
    dest[1][2] = -(a * t0 - c * t3 + d * t4);
    dest[2][2] = a * t1 - b * t3 + d * t5;
    dest[3][2] = -(a * t2 - b * t4 + c * t5);

    let t0 = g * l - k * h;
    let t1 = f * l - j * h;
    let t2 = f * k - j * g;
    let t3 = e * l - i * h;
    let t4 = e * k - i * g;
    let t5 = e * j - i * f;

    dest[0][3] = -(b * t0 - c * t1 + d * t2);
    dest[1][3] = a * t0 - c * t3 + d * t4;
    dest[2][3] = -(a * t1 - b * t3 + d * t5);
    dest[3][3] = a * t2 - b * t4 + c * t5;

    let det = a * dest[0][0] + b * dest[1][0] + c * dest[2][0] + d * dest[3][0];
    if det == 0.0 || !det.is_finite() {
        return Err(Error::SingularMatrix);
    }

    Ok(Mat4::from_cols_array_2d(&dest) * (1.0 / det))
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
