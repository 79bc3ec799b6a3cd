//! Tile storage and boundary extraction
//!
//! A tile is an immutable square grid of pixels identified by a positive
//! integer. Boundaries are read in a fixed direction per side (top and bottom
//! left to right, left and right top to bottom) so that two touching tiles
//! share a boundary either exactly or reversed.

use bitvec::prelude::*;
use ndarray::Array2;
use std::collections::BTreeMap;
use std::fmt;

/// Tile identifier as given in the input
pub type TileId = u64;

/// Boundary sequence read along one side of a tile
pub type Boundary = BitVec;

/// One of the four boundary slots of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// First row, read left to right
    Top,
    /// Last column, read top to bottom
    Right,
    /// Last row, read left to right
    Bottom,
    /// First column, read top to bottom
    Left,
}

impl Side {
    /// All sides in slot order
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Side across the tile from this one
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Slot index matching the order of [`Side::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

/// A square tile of boolean pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    pixels: Array2<bool>,
}

impl Tile {
    /// Create a tile from its identifier and pixels
    pub const fn new(id: TileId, pixels: Array2<bool>) -> Self {
        Self { id, pixels }
    }

    /// Tile identifier
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Pixel grid as parsed
    pub const fn pixels(&self) -> &Array2<bool> {
        &self.pixels
    }

    /// Side length in pixels
    pub fn size(&self) -> usize {
        self.pixels.nrows()
    }

    /// Read the boundary on one side in its canonical direction
    pub fn boundary(&self, side: Side) -> Boundary {
        boundary_of(&self.pixels, side)
    }

    /// All four boundaries in slot order
    pub fn boundaries(&self) -> [Boundary; 4] {
        Side::ALL.map(|side| self.boundary(side))
    }
}

/// Read one boundary of any boolean grid
pub fn boundary_of(pixels: &Array2<bool>, side: Side) -> Boundary {
    let (rows, cols) = pixels.dim();
    match side {
        Side::Top => pixels.row(0).iter().copied().collect(),
        Side::Bottom => pixels.row(rows.saturating_sub(1)).iter().copied().collect(),
        Side::Left => pixels.column(0).iter().copied().collect(),
        Side::Right => pixels
            .column(cols.saturating_sub(1))
            .iter()
            .copied()
            .collect(),
    }
}

/// Boundary read in the opposite direction
pub fn reversed(boundary: &Boundary) -> Boundary {
    let mut flipped = boundary.clone();
    flipped.reverse();
    flipped
}

/// Whether two boundaries line up, allowing one of them to be reversed
pub fn boundaries_match(a: &Boundary, b: &Boundary) -> bool {
    a == b || *a == reversed(b)
}

/// Canonical form shared by a boundary and its reversal
pub fn canonical(boundary: &Boundary) -> Boundary {
    let flipped = reversed(boundary);
    if flipped < *boundary {
        flipped
    } else {
        boundary.clone()
    }
}

/// All parsed tiles keyed by identifier
///
/// Populated once from input and never mutated afterwards. Iteration is in
/// ascending identifier order so every later stage is deterministic.
#[derive(Debug, Clone, Default)]
pub struct TileStore {
    tiles: BTreeMap<TileId, Tile>,
    tile_size: usize,
}

impl TileStore {
    /// Build a store from tiles that were already validated
    ///
    /// Callers guarantee identifiers are unique and all tiles share one size;
    /// [`crate::io::parser::parse_tiles`] enforces both.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        let tiles: BTreeMap<TileId, Tile> = tiles.into_iter().map(|t| (t.id(), t)).collect();
        let tile_size = tiles.values().next().map_or(0, Tile::size);
        Self { tiles, tile_size }
    }

    /// Look up a tile by identifier
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the store holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Shared side length of every tile
    pub const fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Identifiers in ascending order
    pub fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles.keys().copied()
    }

    /// Tiles in ascending identifier order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }
}
