//! Command-line interface for reassembling a tile file and searching the result

use crate::algorithm::pipeline::{Solution, SolveConfig, solve_with_observer};
use crate::algorithm::template::Template;
use crate::io::configuration::{DEFAULT_EXPORT_SCALE, OUTPUT_SUFFIX};
use crate::io::error::{Result, TilestitchError, invalid_parameter};
use crate::io::image::export_composite_as_png;
use crate::io::parser::read_tiles;
use crate::io::progress::StageProgress;
use clap::Parser;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tilestitch")]
#[command(
    author,
    version,
    about = "Reassemble rotated and mirrored tiles and search the image for a template"
)]
/// Command-line arguments for the reassembly tool
pub struct Cli {
    /// Tile file to reassemble
    #[arg(value_name = "TILES")]
    pub target: PathBuf,

    /// Template picture file ('#' cells are required, anything else is a wildcard)
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Export the marked composite next to the input as <name>_stitched.png
    #[arg(short, long)]
    pub export: bool,

    /// Export the marked composite to this path instead
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<PathBuf>,

    /// Pixels per composite cell in exported images
    #[arg(short, long, default_value_t = DEFAULT_EXPORT_SCALE)]
    pub scale: u32,

    /// Print the marked composite as text
    #[arg(short, long)]
    pub render: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs one reassembly with progress display and optional export
pub struct PuzzleRunner {
    cli: Cli,
}

impl PuzzleRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse, solve and export according to the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not a file, the tiles or template
    /// cannot be read, any pipeline stage fails or the export fails
    pub fn run(&self) -> Result<Solution> {
        if !self.cli.target.is_file() {
            return Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"must be an existing tile file",
            ));
        }

        let mut progress = if self.cli.should_show_progress() {
            StageProgress::new(&self.cli.target)
        } else {
            StageProgress::hidden()
        };

        let outcome = self.solve(&mut progress);
        match outcome {
            Ok(_) => progress.finish(),
            Err(_) => progress.abandon(),
        }
        outcome
    }

    fn solve(&self, progress: &mut StageProgress) -> Result<Solution> {
        let store = read_tiles(&self.cli.target)?;
        let config = self.solve_config()?;
        let solution =
            solve_with_observer(&store, &config, |stage| progress.start_stage(stage))?;

        // Allow print for user feedback on ambiguous matches and exports
        #[allow(clippy::print_stderr)]
        if !self.cli.quiet {
            let orientations = solution.report.matching_orientations();
            if orientations.len() > 1 {
                eprintln!(
                    "Warning: template matched in {} orientations, marks from all are kept",
                    orientations.len()
                );
            }
        }

        if let Some(path) = self.export_path() {
            export_composite_as_png(&solution.composite, self.cli.scale, &path)?;
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Exported: {}", path.display());
            }
        }
        Ok(solution)
    }

    /// Pipeline configuration, loading the template file when one was given
    ///
    /// # Errors
    ///
    /// Returns an error if the template file cannot be read or has no set cell
    pub fn solve_config(&self) -> Result<SolveConfig> {
        let template = match &self.cli.template {
            Some(path) => {
                let picture =
                    std::fs::read_to_string(path).map_err(|e| TilestitchError::FileSystem {
                        path: path.clone(),
                        operation: "read template",
                        source: e,
                    })?;
                Template::parse(&picture)?
            }
            None => Template::sea_monster(),
        };
        Ok(SolveConfig { template })
    }

    /// Where the composite is exported, if anywhere
    pub fn export_path(&self) -> Option<PathBuf> {
        self.cli.output.clone().or_else(|| {
            self.cli
                .export
                .then(|| Self::get_output_path(&self.cli.target))
        })
    }

    /// Text printed after a successful run
    pub fn summary(&self, solution: &Solution) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "corner product: {}", solution.corner_product);
        let _ = writeln!(text, "roughness: {}", solution.roughness);
        if self.cli.render {
            let _ = write!(text, "{}", solution.composite);
        }
        text
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
