//! Boundary matching and the tile adjacency graph
//!
//! Every boundary is keyed by its canonical form (the smaller of the sequence
//! and its reversal), so exact and reversed matches land in the same bucket
//! and one pass over the buckets finds every shared border.

use crate::io::error::{Result, TilestitchError, malformed_input};
use crate::spatial::tiles::{Boundary, Side, TileId, TileStore, canonical};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Undirected graph of tiles sharing a boundary
///
/// Stored as identifier to sorted neighbor list; tiles without neighbors are
/// still present with an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    neighbors: BTreeMap<TileId, Vec<TileId>>,
}

impl AdjacencyGraph {
    /// Build a graph from an explicit neighbor map
    ///
    /// Edges are symmetrised and neighbor lists sorted and deduplicated.
    pub fn from_neighbors(map: &BTreeMap<TileId, Vec<TileId>>) -> Self {
        let mut sets: BTreeMap<TileId, BTreeSet<TileId>> = BTreeMap::new();
        for (&id, list) in map {
            sets.entry(id).or_default();
            for &other in list {
                if other != id {
                    sets.entry(id).or_default().insert(other);
                    sets.entry(other).or_default().insert(id);
                }
            }
        }
        Self {
            neighbors: sets
                .into_iter()
                .map(|(id, set)| (id, set.into_iter().collect()))
                .collect(),
        }
    }

    /// Sorted neighbors of a tile (empty for unknown tiles)
    pub fn neighbors(&self, id: TileId) -> &[TileId] {
        self.neighbors
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of neighbors of a tile
    pub fn degree(&self, id: TileId) -> usize {
        self.neighbors(id).len()
    }

    /// Whether two tiles share a boundary
    pub fn are_adjacent(&self, a: TileId, b: TileId) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }

    /// Number of tiles in the graph
    pub fn tile_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Tile identifiers in ascending order
    pub fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.neighbors.keys().copied()
    }

    /// Tiles with exactly two neighbors, in ascending order
    pub fn corners(&self) -> Vec<TileId> {
        self.neighbors
            .iter()
            .filter(|(_, list)| list.len() == 2)
            .map(|(&id, _)| id)
            .collect()
    }

    /// How many tiles have each degree
    pub fn degree_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for list in self.neighbors.values() {
            *histogram.entry(list.len()).or_insert(0) += 1;
        }
        histogram
    }

    /// Product of the corner tile identifiers
    ///
    /// A single tile is its own (only) corner.
    ///
    /// # Errors
    ///
    /// Returns an error if the graph does not have exactly four corners
    /// (or one tile) or the product overflows `u64`
    pub fn corner_product(&self) -> Result<u64> {
        if self.tile_count() == 1 {
            return self
                .ids()
                .next()
                .ok_or_else(|| malformed_input(0, &"input contains no tiles"));
        }

        let corners = self.corners();
        if corners.len() != 4 {
            return Err(TilestitchError::PlacementInconsistency {
                position: (0, 0),
                candidates: corners,
            });
        }
        corners.iter().try_fold(1_u64, |product, &id| {
            product
                .checked_mul(id)
                .ok_or_else(|| malformed_input(0, &"corner identifier product overflows u64"))
        })
    }
}

/// Boundaries of every tile and the neighbor across each of them
#[derive(Debug, Clone)]
pub struct EdgeIndex {
    boundaries: BTreeMap<TileId, [Boundary; 4]>,
    links: BTreeMap<TileId, [Option<TileId>; 4]>,
    graph: AdjacencyGraph,
}

impl EdgeIndex {
    /// Match every boundary against every boundary of every other tile
    ///
    /// # Errors
    ///
    /// Returns [`TilestitchError::AmbiguousAdjacency`] if a boundary matches
    /// boundaries of more than one other tile
    pub fn build(store: &TileStore) -> Result<Self> {
        let boundaries: BTreeMap<TileId, [Boundary; 4]> =
            store.iter().map(|t| (t.id(), t.boundaries())).collect();

        let mut buckets: HashMap<Boundary, Vec<TileId>> = HashMap::new();
        for (&id, sides) in &boundaries {
            for boundary in sides {
                buckets.entry(canonical(boundary)).or_default().push(id);
            }
        }

        let mut links = BTreeMap::new();
        let mut adjacency: BTreeMap<TileId, Vec<TileId>> = BTreeMap::new();
        for (&id, sides) in &boundaries {
            let mut tile_links = [None; 4];
            for (side, boundary) in Side::ALL.into_iter().zip(sides) {
                let mut candidates: Vec<TileId> = buckets
                    .get(&canonical(boundary))
                    .map(|bucket| bucket.iter().copied().filter(|&o| o != id).collect())
                    .unwrap_or_default();
                candidates.sort_unstable();
                candidates.dedup();

                match candidates.as_slice() {
                    [] => {}
                    [other] => {
                        if let Some(slot) = tile_links.get_mut(side.index()) {
                            *slot = Some(*other);
                        }
                        adjacency.entry(id).or_default().push(*other);
                    }
                    _ => {
                        return Err(TilestitchError::AmbiguousAdjacency {
                            tile: id,
                            side,
                            candidates,
                        });
                    }
                }
            }
            adjacency.entry(id).or_default();
            links.insert(id, tile_links);
        }

        Ok(Self {
            boundaries,
            links,
            graph: AdjacencyGraph::from_neighbors(&adjacency),
        })
    }

    /// The adjacency graph
    pub const fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    /// Consume the index, keeping only the graph
    pub fn into_graph(self) -> AdjacencyGraph {
        self.graph
    }

    /// Boundaries of a tile in slot order
    pub fn boundaries(&self, id: TileId) -> Option<&[Boundary; 4]> {
        self.boundaries.get(&id)
    }

    /// Tile sharing the given boundary of `id`, if any
    pub fn neighbor_across(&self, id: TileId, side: Side) -> Option<TileId> {
        self.links
            .get(&id)
            .and_then(|slots| slots.get(side.index()).copied().flatten())
    }

    /// Sides of `id` whose boundary is shared with `neighbor`
    pub fn sides_facing(&self, id: TileId, neighbor: TileId) -> Vec<Side> {
        Side::ALL
            .into_iter()
            .filter(|&side| self.neighbor_across(id, side) == Some(neighbor))
            .collect()
    }
}
