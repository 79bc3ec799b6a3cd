//! Runs the reassembly stages in order and collects both answers

use crate::algorithm::edges::{AdjacencyGraph, EdgeIndex};
use crate::algorithm::orientation::stitch;
use crate::algorithm::placement::GridPlacement;
use crate::algorithm::search::{SearchReport, search};
use crate::algorithm::template::Template;
use crate::io::error::Result;
use crate::spatial::grid::Composite;
use crate::spatial::tiles::TileStore;
use std::fmt;

/// Pipeline stages after parsing, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Boundary matching and adjacency graph construction
    EdgeIndex,
    /// Assignment of tiles to grid cells
    Placement,
    /// Orientation, border trimming and stitching
    Stitching,
    /// Template search over all orientations
    Search,
}

impl Stage {
    /// All stages in execution order
    pub const ALL: [Self; 4] = [Self::EdgeIndex, Self::Placement, Self::Stitching, Self::Search];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EdgeIndex => "matching edges",
            Self::Placement => "placing tiles",
            Self::Stitching => "stitching image",
            Self::Search => "searching template",
        };
        f.write_str(name)
    }
}

/// Parameters of a reassembly run
#[derive(Debug, Clone, Default)]
pub struct SolveConfig {
    /// Template searched for in the stitched image
    pub template: Template,
}

/// Everything produced by a successful run
#[derive(Debug, Clone)]
pub struct Solution {
    /// Product of the corner tile identifiers
    pub corner_product: u64,
    /// Set cells of the composite not covered by any template match
    pub roughness: usize,
    /// Tile adjacency graph
    pub graph: AdjacencyGraph,
    /// Grid position of every tile
    pub placement: GridPlacement,
    /// Composite image with matches marked
    pub composite: Composite,
    /// Per-orientation search results
    pub report: SearchReport,
}

/// Run every stage on a parsed tile store
///
/// # Errors
///
/// Returns the first error of any stage
pub fn solve(store: &TileStore, config: &SolveConfig) -> Result<Solution> {
    solve_with_observer(store, config, |_| {})
}

/// Run every stage, reporting each one before it starts
///
/// # Errors
///
/// Returns the first error of any stage
pub fn solve_with_observer(
    store: &TileStore,
    config: &SolveConfig,
    mut on_stage: impl FnMut(Stage),
) -> Result<Solution> {
    on_stage(Stage::EdgeIndex);
    let index = EdgeIndex::build(store)?;
    let corner_product = index.graph().corner_product()?;

    on_stage(Stage::Placement);
    let placement = GridPlacement::solve(index.graph())?;

    on_stage(Stage::Stitching);
    let mut composite = stitch(store, &index, &placement)?;

    on_stage(Stage::Search);
    let report = search(&mut composite, &config.template)?;

    Ok(Solution {
        corner_product,
        roughness: report.roughness,
        graph: index.into_graph(),
        placement,
        composite,
        report,
    })
}
