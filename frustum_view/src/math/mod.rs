//! Math module: matrix construction, inversion and frustum corners.

mod matrix;
mod frustum;

pub use matrix::{perspective, look_at, rotation_degrees, invert};
pub use frustum::{
    FrustumCorners, FRUSTUM_EDGE_INDICES, FRUSTUM_FACE_INDICES, NDC_CORNERS,
    CORNER_LBN, CORNER_LTN, CORNER_RTN, CORNER_RBN,
    CORNER_LBF, CORNER_LTF, CORNER_RTF, CORNER_RBF,
};
