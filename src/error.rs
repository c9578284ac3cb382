//! Error types for trimesh_collide
//!
//! The acceleration structures in this crate are built once per query and
//! have no recoverable error paths of their own: an empty triangle set or
//! an out-of-range subdivision level is a caller bug, and the `new`
//! constructors treat it as such via `debug_assert!`. The `try_new`
//! counterparts exist for callers who would rather get a `Result` than a
//! panic.

use std::fmt;

/// Result type for trimesh_collide operations.
pub type Result<T> = std::result::Result<T, CollisionError>;

/// Errors surfaced by the fallible `try_new` constructors.
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionError {
    /// An acceleration structure was asked to index zero triangles.
    EmptyTriangleSet,

    /// A spatial hash map was asked to subdivide past `DEPTH_LIMIT`.
    InvalidSubdivisionLevel { levels: u32, max: u32 },
}

impl fmt::Display for CollisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionError::EmptyTriangleSet => {
                write!(f, "cannot build an acceleration structure over zero triangles")
            }
            CollisionError::InvalidSubdivisionLevel { levels, max } => write!(
                f,
                "subdivision level {} exceeds the maximum of {}",
                levels, max
            ),
        }
    }
}

impl std::error::Error for CollisionError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
