//! Error types for the frustum viewer
//!
//! This module defines the error types used throughout the crate,
//! covering matrix math, projection setup, shader programs and
//! backend resources.

use std::fmt;

use crate::renderer::ShaderStage;

/// Result type for viewer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Viewer errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The matrix has a zero (or non-finite) determinant and cannot be inverted
    SingularMatrix,

    /// Perspective parameters outside of their valid domain
    InvalidProjection(String),

    /// Look direction is zero or parallel to the up vector
    DegenerateView(String),

    /// A shader stage failed to compile
    ShaderCompile {
        /// Stage that failed
        stage: ShaderStage,
        /// Compiler info log
        log: String,
    },

    /// A program failed to link
    ProgramLink(String),

    /// Invalid resource (buffer, program, handle)
    InvalidResource(String),

    /// Backend-specific error (GL, GLES, headless, ...)
    BackendError(String),

    /// Configuration value out of range
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SingularMatrix => write!(f, "Singular matrix"),
            Error::InvalidProjection(msg) => write!(f, "Invalid projection: {}", msg),
            Error::DegenerateView(msg) => write!(f, "Degenerate view: {}", msg),
            Error::ShaderCompile { stage, log } => {
                write!(f, "Shader compile error ({:?}): {}", stage, log)
            }
            Error::ProgramLink(msg) => write!(f, "Program link error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error with file:line and build an `Error::BackendError` from it.
///
/// Accepts either a source plus a format string, or a source plus an
/// already-built `Error` value (prefixed with `error =`).
///
/// # Example
///
/// ```no_run
/// # use frustum_view::engine_err;
/// let err = engine_err!("fv::Backend", "buffer {} not found", 3);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, error = $err:expr) => {{
        let err: $crate::fv::Error = $err;
        $crate::engine_error!($source, "{}", err);
        err
    }};
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::fv::Error::BackendError(message)
    }};
}

/// Log an error and return it from the enclosing function.
///
/// Same forms as [`engine_err!`].
#[macro_export]
macro_rules! engine_bail {
    ($($arg:tt)*) => {
        return Err($crate::engine_err!($($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
