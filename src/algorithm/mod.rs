/// Boundary matching and the adjacency graph
pub mod edges;
/// Tile orientation and composite stitching
pub mod orientation;
/// Stage-by-stage driver producing both answers
pub mod pipeline;
/// Grid placement of tiles
pub mod placement;
/// Template search and marking
pub mod search;
/// Relative-offset templates
pub mod template;
