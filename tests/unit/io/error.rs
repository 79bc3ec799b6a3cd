//! Tests for error construction and display

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use tilestitch::TilestitchError;
    use tilestitch::io::error::{invalid_parameter, malformed_input};
    use tilestitch::spatial::Side;

    // Tests helper constructors fill every field
    // Verified by swapping value and reason
    #[test]
    fn test_helper_constructors() {
        match invalid_parameter("scale", &0, &"must be positive") {
            TilestitchError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                assert_eq!(parameter, "scale");
                assert_eq!(value, "0");
                assert_eq!(reason, "must be positive");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            malformed_input(4, &"bad row"),
            TilestitchError::MalformedInput { line: 4, .. }
        ));
    }

    // Tests messages name the tiles, sides and cells involved
    // Verified by omitting candidates from the messages
    #[test]
    fn test_display_messages() {
        let ambiguous = TilestitchError::AmbiguousAdjacency {
            tile: 12,
            side: Side::Left,
            candidates: vec![3, 4],
        };
        assert_eq!(
            ambiguous.to_string(),
            "Ambiguous adjacency: left boundary of tile 12 matches tiles [3, 4]"
        );

        let placement = TilestitchError::PlacementInconsistency {
            position: (2, 5),
            candidates: Vec::new(),
        };
        assert!(placement.to_string().contains("cell (2, 5)"));

        let orientation = TilestitchError::OrientationInconsistency {
            tile: 9,
            top: Some(Side::Top),
            left: None,
        };
        assert_eq!(
            orientation.to_string(),
            "Orientation inconsistency for tile 9: top side top, left side none"
        );

        let missing = TilestitchError::NoPatternMatch { orientations: 8 };
        assert!(missing.to_string().contains('8'));
    }

    // Tests I/O errors keep their source
    // Verified by returning no source for file system errors
    #[test]
    fn test_error_sources() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = TilestitchError::FileSystem {
            path: PathBuf::from("tiles.txt"),
            operation: "read tiles",
            source: io,
        };
        assert!(error.source().is_some());
        assert!(error.to_string().contains("read tiles"));
        assert!(error.to_string().contains("tiles.txt"));

        let converted: TilestitchError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(converted, TilestitchError::FileSystem { .. }));

        assert!(malformed_input(1, &"x").source().is_none());
    }
}
