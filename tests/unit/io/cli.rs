//! Tests for command-line parsing and run orchestration

#[cfg(test)]
mod tests {
    use crate::support::{SAMPLE, SAMPLE_CORNER_PRODUCT, SAMPLE_ROUGHNESS};
    use clap::Parser;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use tilestitch::TilestitchError;
    use tilestitch::io::cli::{Cli, PuzzleRunner};
    use tilestitch::io::configuration::DEFAULT_EXPORT_SCALE;

    fn write_sample(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("tiles.txt");
        fs::write(&path, SAMPLE).unwrap();
        path
    }

    fn runner(target: &Path, extra: &[&str]) -> PuzzleRunner {
        let mut args = vec!["tilestitch", target.to_str().unwrap(), "--quiet"];
        args.extend_from_slice(extra);
        PuzzleRunner::new(Cli::parse_from(args))
    }

    // Tests CLI parsing with only the required tile file
    // Verified by changing the default scale
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["tilestitch", "tiles.txt"]);

        assert_eq!(cli.target, PathBuf::from("tiles.txt"));
        assert_eq!(cli.template, None);
        assert_eq!(cli.output, None);
        assert_eq!(cli.scale, DEFAULT_EXPORT_SCALE);
        assert!(!cli.export);
        assert!(!cli.render);
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with every short flag
    // Verified by swapping the short flags of render and export
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "tilestitch",
            "tiles.txt",
            "-t",
            "shape.txt",
            "-e",
            "-o",
            "out.png",
            "-s",
            "9",
            "-r",
            "-q",
        ]);

        assert_eq!(cli.template, Some(PathBuf::from("shape.txt")));
        assert_eq!(cli.output, Some(PathBuf::from("out.png")));
        assert_eq!(cli.scale, 9);
        assert!(cli.export);
        assert!(cli.render);
        assert!(!cli.should_show_progress());
    }

    // Tests a full run on the sample file
    // Verified by printing roughness before the corner product
    #[test]
    fn test_run_sample() {
        let dir = TempDir::new().unwrap();
        let target = write_sample(&dir);
        let runner = runner(&target, &[]);

        let solution = runner.run().unwrap();
        assert_eq!(solution.corner_product, SAMPLE_CORNER_PRODUCT);
        assert_eq!(
            runner.summary(&solution),
            format!("corner product: {SAMPLE_CORNER_PRODUCT}\nroughness: {SAMPLE_ROUGHNESS}\n")
        );
        assert_eq!(runner.export_path(), None);
    }

    // Tests the rendered summary appends the marked composite
    // Verified by rendering the composite before marking
    #[test]
    fn test_summary_with_render() {
        let dir = TempDir::new().unwrap();
        let target = write_sample(&dir);
        let runner = runner(&target, &["--render"]);

        let solution = runner.run().unwrap();
        let summary = runner.summary(&solution);
        assert_eq!(summary.lines().count(), 2 + 24);
        assert_eq!(summary.matches('O').count(), 30);
    }

    // Tests a template file replaces the sea monster
    // Verified by ignoring the template argument
    #[test]
    fn test_run_with_template_file() {
        let dir = TempDir::new().unwrap();
        let target = write_sample(&dir);
        let template = dir.path().join("dot.txt");
        fs::write(&template, "#\n").unwrap();

        let solution = runner(&target, &["--template", template.to_str().unwrap()])
            .run()
            .unwrap();
        assert_eq!(solution.roughness, 0);

        let missing = dir.path().join("missing.txt");
        let result = runner(&target, &["-t", missing.to_str().unwrap()]).solve_config();
        assert!(matches!(
            result,
            Err(TilestitchError::FileSystem {
                operation: "read template",
                ..
            })
        ));
    }

    // Tests export paths for the default name and an explicit output
    // Verified by dropping the suffix from the default name
    #[test]
    fn test_export_paths() {
        let dir = TempDir::new().unwrap();
        let target = write_sample(&dir);

        let default = runner(&target, &["--export"]);
        assert_eq!(
            default.export_path(),
            Some(dir.path().join("tiles_stitched.png"))
        );
        default.run().unwrap();
        assert!(dir.path().join("tiles_stitched.png").is_file());

        let explicit = dir.path().join("out").join("image.png");
        let runner = runner(&target, &["--export", "-o", explicit.to_str().unwrap()]);
        assert_eq!(runner.export_path(), Some(explicit.clone()));
        runner.run().unwrap();
        assert!(explicit.is_file());
    }

    // Tests missing targets and directories are rejected
    // Verified by removing the file check
    #[test]
    fn test_run_rejects_non_files() {
        let dir = TempDir::new().unwrap();

        let result = runner(dir.path(), &[]).run();
        assert!(matches!(
            result,
            Err(TilestitchError::InvalidParameter {
                parameter: "target",
                ..
            })
        ));
        assert!(runner(&dir.path().join("nope.txt"), &[]).run().is_err());
    }

    // Tests parse errors from the tile file surface unchanged
    // Verified by replacing parse errors with an empty store
    #[test]
    fn test_run_malformed_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("bad.txt");
        fs::write(&target, "Tile 1:\n#.x\n").unwrap();

        assert!(matches!(
            runner(&target, &[]).run(),
            Err(TilestitchError::MalformedInput { line: 2, .. })
        ));
    }
}
