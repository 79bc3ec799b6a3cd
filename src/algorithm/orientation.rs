//! Orientation of placed tiles and stitching of the composite image
//!
//! Sides are labelled in the tile's parsed orientation. For every placed tile
//! the side facing the tile above must end on top and the side facing the
//! tile to the left must end on the left. Tiles in row 0 (column 0) have no
//! such neighbor and use the opposite of the side facing the tile below (to
//! the right) instead.

use crate::algorithm::edges::EdgeIndex;
use crate::algorithm::placement::GridPlacement;
use crate::io::error::{Result, TilestitchError};
use crate::spatial::grid::{Composite, Orientation, trim_border};
use crate::spatial::tiles::{Side, TileId, TileStore};
use ndarray::{Array2, s};

/// Orientation bringing `top` to the top and `left` to the left
///
/// Returns `None` when the two sides are equal or opposite, which no
/// rotation or mirror can satisfy.
pub const fn orientation_for(top: Side, left: Side) -> Option<Orientation> {
    let (quarter_turns, mirrored) = match (top, left) {
        (Side::Top, Side::Left) => (0, false),
        (Side::Left, Side::Bottom) => (1, false),
        (Side::Bottom, Side::Right) => (2, false),
        (Side::Right, Side::Top) => (3, false),
        (Side::Top, Side::Right) => (0, true),
        (Side::Left, Side::Top) => (1, true),
        (Side::Bottom, Side::Left) => (2, true),
        (Side::Right, Side::Bottom) => (3, true),
        _ => return None,
    };
    Some(Orientation::new(quarter_turns, mirrored))
}

fn facing(index: &EdgeIndex, tile: TileId, neighbor: Option<TileId>) -> Option<Side> {
    let neighbor = neighbor?;
    match index.sides_facing(tile, neighbor).as_slice() {
        [side] => Some(*side),
        _ => None,
    }
}

/// Orientation of the tile placed at (`row`, `col`)
///
/// # Errors
///
/// Returns [`TilestitchError::OrientationInconsistency`] if the sides facing
/// the neighbors cannot be found or do not form one of the eight cases
pub fn resolve_orientation(
    index: &EdgeIndex,
    placement: &GridPlacement,
    row: usize,
    col: usize,
) -> Result<Orientation> {
    let Some(tile) = placement.tile_at(row, col) else {
        return Err(TilestitchError::PlacementInconsistency {
            position: (row, col),
            candidates: Vec::new(),
        });
    };
    if placement.side() == 1 {
        return Ok(Orientation::IDENTITY);
    }

    let top = if row > 0 {
        facing(index, tile, placement.tile_at(row - 1, col))
    } else {
        facing(index, tile, placement.tile_at(row + 1, col)).map(Side::opposite)
    };
    let left = if col > 0 {
        facing(index, tile, placement.tile_at(row, col - 1))
    } else {
        facing(index, tile, placement.tile_at(row, col + 1)).map(Side::opposite)
    };

    match (top, left) {
        (Some(t), Some(l)) => orientation_for(t, l),
        _ => None,
    }
    .ok_or_else(|| TilestitchError::OrientationInconsistency { tile, top, left })
}

/// Orientation of every placed tile, indexed like the placement grid
///
/// # Errors
///
/// Returns the first orientation error encountered in row-major order
pub fn resolve_orientations(
    index: &EdgeIndex,
    placement: &GridPlacement,
) -> Result<Array2<Orientation>> {
    let side = placement.side();
    let mut orientations = Array2::from_elem((side, side), Orientation::IDENTITY);
    for ((row, col), slot) in orientations.indexed_iter_mut() {
        *slot = resolve_orientation(index, placement, row, col)?;
    }
    Ok(orientations)
}

/// Orient, trim and join every tile into the composite image
///
/// The composite has side `N * (S - 2)` for an `N×N` grid of `S×S` tiles.
///
/// # Errors
///
/// Returns an error if a placed tile is missing from the store or any
/// orientation cannot be resolved
pub fn stitch(
    store: &TileStore,
    index: &EdgeIndex,
    placement: &GridPlacement,
) -> Result<Composite> {
    let orientations = resolve_orientations(index, placement)?;
    let inner = store.tile_size().saturating_sub(2);
    let side = placement.side();
    let mut pixels = Array2::from_elem((side * inner, side * inner), false);

    for ((row, col), &id) in placement.cells().indexed_iter() {
        let (Some(tile), Some(orientation)) = (store.get(id), orientations.get((row, col)))
        else {
            return Err(TilestitchError::PlacementInconsistency {
                position: (row, col),
                candidates: vec![id],
            });
        };
        let trimmed = trim_border(&orientation.apply(tile.pixels()));
        pixels
            .slice_mut(s![
                row * inner..(row + 1) * inner,
                col * inner..(col + 1) * inner
            ])
            .assign(&trimmed);
    }

    Ok(Composite::from_bools(&pixels))
}
