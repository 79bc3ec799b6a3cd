//! Placement of tiles into their grid cells
//!
//! The corner at (0, 0) is any tile of degree 2. The top row and first column
//! follow border tiles (degree below 4) out of that corner, and every interior
//! cell is the single unplaced tile adjacent to both the cell above and the
//! cell to the left.

use crate::algorithm::edges::AdjacencyGraph;
use crate::io::error::{Result, TilestitchError, malformed_input};
use crate::spatial::tiles::TileId;
use ndarray::Array2;
use std::collections::BTreeMap;

/// Degree of a tile with a neighbor on every side
const INTERIOR_DEGREE: usize = 4;

/// Side length of the square grid holding `tile_count` tiles
///
/// # Errors
///
/// Returns a malformed input error when the count is zero or not a perfect square
pub fn grid_side(tile_count: usize) -> Result<usize> {
    if tile_count == 0 {
        return Err(malformed_input(0, &"input contains no tiles"));
    }
    let side = num_traits::cast::<f64, usize>((tile_count as f64).sqrt().round())
        .ok_or_else(|| malformed_input(0, &format!("tile count {tile_count} is out of range")))?;
    if side.checked_mul(side) != Some(tile_count) {
        return Err(malformed_input(
            0,
            &format!("tile count {tile_count} is not a perfect square"),
        ));
    }
    Ok(side)
}

/// Bijection between tile identifiers and grid cells
#[derive(Debug, Clone)]
pub struct GridPlacement {
    cells: Array2<TileId>,
    positions: BTreeMap<TileId, (usize, usize)>,
}

impl GridPlacement {
    /// Assign every tile of the graph to its grid cell
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile count is not a perfect square
    /// - No corner tile exists
    /// - Any walk or interior step finds zero or several candidates
    pub fn solve(graph: &AdjacencyGraph) -> Result<Self> {
        let side = grid_side(graph.tile_count())?;
        let mut placement = Self {
            cells: Array2::zeros((side, side)),
            positions: BTreeMap::new(),
        };

        if side == 1 {
            if let Some(only) = graph.ids().next() {
                placement.place((0, 0), only);
            }
            return Ok(placement);
        }

        let corners = graph.corners();
        let Some(&origin) = corners.first() else {
            return Err(TilestitchError::PlacementInconsistency {
                position: (0, 0),
                candidates: corners,
            });
        };
        placement.place((0, 0), origin);

        // Either border neighbor of the corner may start the top row
        let mut current = origin;
        for col in 1..side {
            let candidates = placement.unplaced_border_neighbors(graph, current);
            let next = if col == 1 {
                candidates.first().copied()
            } else {
                single(&candidates)
            };
            let Some(next) = next else {
                return Err(TilestitchError::PlacementInconsistency {
                    position: (0, col),
                    candidates,
                });
            };
            placement.place((0, col), next);
            current = next;
        }

        current = origin;
        for row in 1..side {
            let candidates = placement.unplaced_border_neighbors(graph, current);
            let Some(next) = single(&candidates) else {
                return Err(TilestitchError::PlacementInconsistency {
                    position: (row, 0),
                    candidates,
                });
            };
            placement.place((row, 0), next);
            current = next;
        }

        for row in 1..side {
            for col in 1..side {
                let above = placement.tile_at(row - 1, col);
                let left = placement.tile_at(row, col - 1);
                let candidates: Vec<TileId> = match (above, left) {
                    (Some(above), Some(left)) => graph
                        .neighbors(above)
                        .iter()
                        .copied()
                        .filter(|&t| !placement.is_placed(t) && graph.are_adjacent(left, t))
                        .collect(),
                    _ => Vec::new(),
                };
                let Some(next) = single(&candidates) else {
                    return Err(TilestitchError::PlacementInconsistency {
                        position: (row, col),
                        candidates,
                    });
                };
                placement.place((row, col), next);
            }
        }

        Ok(placement)
    }

    fn place(&mut self, position: (usize, usize), id: TileId) {
        if let Some(cell) = self.cells.get_mut(position) {
            *cell = id;
        }
        self.positions.insert(id, position);
    }

    fn is_placed(&self, id: TileId) -> bool {
        self.positions.contains_key(&id)
    }

    fn unplaced_border_neighbors(&self, graph: &AdjacencyGraph, id: TileId) -> Vec<TileId> {
        graph
            .neighbors(id)
            .iter()
            .copied()
            .filter(|&t| graph.degree(t) < INTERIOR_DEGREE && !self.is_placed(t))
            .collect()
    }

    /// Side length of the grid
    pub fn side(&self) -> usize {
        self.cells.nrows()
    }

    /// Tile at a cell
    pub fn tile_at(&self, row: usize, col: usize) -> Option<TileId> {
        self.cells.get((row, col)).copied()
    }

    /// Cell holding a tile
    pub fn position_of(&self, id: TileId) -> Option<(usize, usize)> {
        self.positions.get(&id).copied()
    }

    /// All cells, row-major
    pub const fn cells(&self) -> &Array2<TileId> {
        &self.cells
    }

    /// Tiles in the four corner cells (the same tile four times for a 1×1 grid)
    pub fn corner_tiles(&self) -> [Option<TileId>; 4] {
        let last = self.side().saturating_sub(1);
        [
            self.tile_at(0, 0),
            self.tile_at(0, last),
            self.tile_at(last, 0),
            self.tile_at(last, last),
        ]
    }
}

fn single(candidates: &[TileId]) -> Option<TileId> {
    match candidates {
        [only] => Some(*only),
        _ => None,
    }
}
