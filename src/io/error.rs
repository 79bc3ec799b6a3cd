//! Error types for tile parsing, reassembly and template search

use crate::spatial::tiles::{Side, TileId};
use std::fmt;
use std::path::PathBuf;

/// Main error type for all reassembly operations
#[derive(Debug)]
pub enum TilestitchError {
    /// Tile input could not be parsed or does not form a square tiling
    MalformedInput {
        /// One-based input line where the problem was detected (0 when not line-specific)
        line: usize,
        /// Description of what's wrong with the input
        reason: String,
    },

    /// A tile boundary matches boundaries of more than one other tile
    AmbiguousAdjacency {
        /// Tile whose boundary is ambiguous
        tile: TileId,
        /// Side of that tile carrying the ambiguous boundary
        side: Side,
        /// Every other tile whose boundaries match it
        candidates: Vec<TileId>,
    },

    /// Grid placement found zero or several tiles for a cell
    ///
    /// Occurs when the adjacency graph is not the graph of a single
    /// rectangular tiling.
    PlacementInconsistency {
        /// Grid cell (row, col) being filled
        position: (usize, usize),
        /// Tiles that satisfied the placement criterion
        candidates: Vec<TileId>,
    },

    /// The sides facing a tile's neighbors admit no orientation
    OrientationInconsistency {
        /// Tile being oriented
        tile: TileId,
        /// Side that should end up on top, if one was found
        top: Option<Side>,
        /// Side that should end up on the left, if one was found
        left: Option<Side>,
    },

    /// None of the searched orientations contains the template
    NoPatternMatch {
        /// Number of orientations searched
        orientations: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the composite image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TilestitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedInput { line, reason } => {
                if *line == 0 {
                    write!(f, "Malformed input: {reason}")
                } else {
                    write!(f, "Malformed input at line {line}: {reason}")
                }
            }
            Self::AmbiguousAdjacency {
                tile,
                side,
                candidates,
            } => {
                write!(
                    f,
                    "Ambiguous adjacency: {side} boundary of tile {tile} matches tiles {candidates:?}"
                )
            }
            Self::PlacementInconsistency {
                position,
                candidates,
            } => {
                write!(
                    f,
                    "Placement inconsistency at cell ({}, {}): expected exactly one candidate, found {candidates:?}",
                    position.0, position.1
                )
            }
            Self::OrientationInconsistency { tile, top, left } => {
                let describe = |side: &Option<Side>| {
                    side.map_or_else(|| "none".to_string(), |s| s.to_string())
                };
                write!(
                    f,
                    "Orientation inconsistency for tile {tile}: top side {}, left side {}",
                    describe(top),
                    describe(left)
                )
            }
            Self::NoPatternMatch { orientations } => {
                write!(
                    f,
                    "Template not found in any of {orientations} orientations of the composite image"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TilestitchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for reassembly results
pub type Result<T> = std::result::Result<T, TilestitchError>;

impl From<image::ImageError> for TilestitchError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for TilestitchError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a malformed input error
pub fn malformed_input(line: usize, reason: &impl ToString) -> TilestitchError {
    TilestitchError::MalformedInput {
        line,
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilestitchError {
    TilestitchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
