//! Tests for tile block parsing

#[cfg(test)]
mod tests {
    use crate::support::{SAMPLE, bools};
    use std::fs;
    use tempfile::TempDir;
    use tilestitch::TilestitchError;
    use tilestitch::io::parser::{parse_tiles, read_tiles};

    fn failing_line(input: &str) -> usize {
        match parse_tiles(input) {
            Err(TilestitchError::MalformedInput { line, .. }) => line,
            other => panic!("expected malformed input, got {other:?}"),
        }
    }

    // Tests the sample parses into nine 10×10 tiles
    // Verified by skipping the last block when input lacks a trailing blank line
    #[test]
    fn test_parse_sample() {
        let store = parse_tiles(SAMPLE).unwrap();

        assert_eq!(store.len(), 9);
        assert_eq!(store.tile_size(), 10);
        assert_eq!(store.ids().next(), Some(1171));
        let tile = store.get(2311).unwrap();
        assert_eq!(tile.pixels().row(0).iter().filter(|&&p| p).count(), 4);
        assert!(parse_tiles(SAMPLE.trim_end()).is_ok());
    }

    // Tests blocks parse without blank separators and with CRLF endings
    // Verified by requiring a blank line before every header
    #[test]
    fn test_parse_lenient_layout() {
        let input = "Tile 5:\r\n#..\r\n.#.\r\n..#\r\nTile 6:\r\n###\r\n...\r\n#.#\r\n";
        let store = parse_tiles(input).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(5).unwrap().pixels(), &bools("#..\n.#.\n..#"));
        assert_eq!(store.get(6).unwrap().pixels(), &bools("###\n...\n#.#"));
    }

    // Tests header errors name the offending line
    // Verified by parsing identifiers with a lenient integer parser
    #[test]
    fn test_bad_headers() {
        assert_eq!(failing_line("Tile x:\n#..\n...\n..#\n"), 1);
        assert_eq!(failing_line("Tile 3\n#..\n...\n..#\n"), 1);
        assert_eq!(failing_line("Tile 0:\n#..\n...\n..#\n"), 1);
        assert_eq!(failing_line("#..\nTile 3:\n"), 1);
        assert_eq!(
            failing_line("Tile 3:\n#..\n...\n..#\n\nTile 3:\n#..\n...\n..#\n"),
            6
        );
    }

    // Tests pixel and shape errors
    // Verified by padding short rows with unset pixels
    #[test]
    fn test_bad_tiles() {
        assert_eq!(failing_line("Tile 3:\n#..\n.?.\n..#\n"), 3);
        assert_eq!(failing_line("Tile 3:\n#..\n..\n..#\n"), 3);
        assert_eq!(failing_line("Tile 3:\n#...\n....\n..#.\n"), 2);
        assert_eq!(failing_line("Tile 3:\n#.\n.#\n"), 1);
        assert_eq!(failing_line("Tile 3:\n"), 1);
    }

    // Tests inputs without tiles or with mixed sizes are rejected
    // Verified by accepting the first tile's size for every tile
    #[test]
    fn test_store_level_errors() {
        assert_eq!(failing_line(""), 0);
        assert_eq!(failing_line("\n\n"), 0);
        assert_eq!(
            failing_line("Tile 1:\n#..\n...\n..#\n\nTile 2:\n#...\n....\n....\n...#\n"),
            0
        );
    }

    // Tests reading from disk and reporting missing files
    // Verified by returning an empty store for unreadable paths
    #[test]
    fn test_read_tiles() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tiles.txt");
        fs::write(&path, SAMPLE).unwrap();
        assert_eq!(read_tiles(&path).unwrap().len(), 9);

        assert!(matches!(
            read_tiles(&dir.path().join("missing.txt")),
            Err(TilestitchError::FileSystem {
                operation: "read tiles",
                ..
            })
        ));
    }
}
