//! Error types for the bindless scene encoder
//!
//! Every fallible encoder operation returns [`Result`]. Order violations,
//! malformed meshes or instance batches, and arena exhaustion are reported
//! here instead of corrupting the GPU-visible layout.

use std::fmt;

/// Result type for scene encoder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Scene encoder errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Appending would write past the fixed arena capacity
    CapacityExceeded {
        /// Logical size the arena would need after the write
        requested: usize,
        /// Fixed capacity of the arena
        capacity: usize,
    },

    /// An operation was called in the wrong frame phase
    OutOfOrder(String),

    /// An instance batch referenced a mesh that was not pushed this frame
    UnknownMesh {
        index: usize,
        mesh_count: usize,
    },

    /// Empty batch, mixed sub-ranges, or a sub-range outside the mesh
    InvalidInstanceBatch(String),

    /// Mesh data is not a valid triangle list
    InvalidMesh(String),

    /// Encoder configuration cannot hold the fixed header
    InvalidConfig(String),

    /// The light set is full
    LightLimitReached(usize),

    /// The upload collaborator rejected the frame
    UploadFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CapacityExceeded { requested, capacity } => write!(
                f,
                "Capacity exceeded: {} bytes requested, capacity is {} bytes",
                requested, capacity
            ),
            Error::OutOfOrder(msg) => write!(f, "Out of order: {}", msg),
            Error::UnknownMesh { index, mesh_count } => write!(
                f,
                "Unknown mesh: index {} (meshes pushed this frame: {})",
                index, mesh_count
            ),
            Error::InvalidInstanceBatch(msg) => write!(f, "Invalid instance batch: {}", msg),
            Error::InvalidMesh(msg) => write!(f, "Invalid mesh: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            Error::LightLimitReached(capacity) => {
                write!(f, "Light limit reached: capacity is {} lights", capacity)
            }
            Error::UploadFailed(msg) => write!(f, "Upload failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error at ERROR severity before handing it back to the caller.
///
/// The entry carries the caller's file:line, not this function's.
#[track_caller]
pub(crate) fn log_and_return_error(source: &str, error: Error) -> Error {
    let location = std::panic::Location::caller();
    crate::log::log_detailed(
        crate::log::LogSeverity::Error,
        source,
        error.to_string(),
        location.file(),
        location.line(),
    );
    error
}

/// Build an error of the given variant from a formatted message, logging it
///
/// # Example
///
/// ```ignore
/// let err = scene_err!("bindless::Mesh", InvalidMesh, "index {} out of range", i);
/// ```
#[macro_export]
macro_rules! scene_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::scene_error!($source, "{}", message);
        $crate::error::Error::$variant(message)
    }};
}

/// Return early with an error built by [`scene_err!`]
#[macro_export]
macro_rules! scene_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::scene_err!($source, $variant, $($arg)*))
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
