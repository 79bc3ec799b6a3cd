/// Command-line interface and run orchestration
pub mod cli;
/// Notation, default template and export constants
pub mod configuration;
/// Error types
pub mod error;
/// PNG export of the composite image
pub mod image;
/// Tile block parsing
pub mod parser;
/// Stage progress display
pub mod progress;
