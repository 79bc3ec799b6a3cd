//! Reassembly of rotated and mirrored square tiles into one image
//!
//! Tiles are matched by their borders, placed on a square grid, turned so
//! every shared border lines up, trimmed and stitched. The stitched image is
//! then searched in all eight orientations for a template, marking every
//! matched cell.

/// Edge matching, placement, orientation, stitching and template search
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Tile storage, grid transforms and the composite image
pub mod spatial;

pub use algorithm::pipeline::{Solution, SolveConfig, solve};
pub use io::error::{Result, TilestitchError};
