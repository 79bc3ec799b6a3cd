//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Tile storage and boundary extraction
//! - Rotation and mirror transforms
//! - The tri-state composite image

/// Grid transforms, orientations and the composite image
pub mod grid;
/// Tile storage and boundary sequences
pub mod tiles;

pub use grid::{Composite, Orientation, Pixel};
pub use tiles::{Side, Tile, TileId, TileStore};
