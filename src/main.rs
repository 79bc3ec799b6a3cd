//! CLI entry point for tile reassembly and template search

use clap::Parser;
use tilestitch::io::cli::{Cli, PuzzleRunner};

// Results are the program's output
#[allow(clippy::print_stdout)]
fn main() -> tilestitch::Result<()> {
    let cli = Cli::parse();
    let runner = PuzzleRunner::new(cli);
    let solution = runner.run()?;
    print!("{}", runner.summary(&solution));
    Ok(())
}
