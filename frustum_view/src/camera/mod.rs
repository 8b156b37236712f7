//! Camera module: orientation, perspective, derived matrices and the
//! free-fly controller.
//!
//! Cameras are plain values owned by the scene state. Matrices are derived
//! on demand so slider and input changes take effect on the next frame.

mod camera;
mod controller;
mod orientation;

pub use camera::Camera;
pub use controller::{FlyController, MoveDirection};
pub use orientation::{CameraOrientation, CameraPerspective, MIN_LOOK_UP_SEPARATION};
