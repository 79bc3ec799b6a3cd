//! Tests for template search and marking

#[cfg(test)]
mod tests {

    use crate::support::{SAMPLE_MARKED, SAMPLE_ROUGHNESS, sample_store};
    use ndarray::Array2;
    use tilestitch::TilestitchError;
    use tilestitch::algorithm::edges::EdgeIndex;
    use tilestitch::algorithm::orientation::stitch;
    use tilestitch::algorithm::placement::GridPlacement;
    use tilestitch::algorithm::search::{mark_matches, matches_at, search};
    use tilestitch::algorithm::template::Template;
    use tilestitch::spatial::{Composite, Orientation, Pixel};

    fn unmarked_sample() -> Composite {
        Composite::from_text(&SAMPLE_MARKED.replace('O', "#")).unwrap()
    }

    // Tests the sample's two sea monsters are found in exactly one orientation
    // Verified by resetting marks between orientations
    #[test]
    fn test_search_sample() {
        let store = sample_store();
        let index = EdgeIndex::build(&store).unwrap();
        let placement = GridPlacement::solve(index.graph()).unwrap();
        let mut composite = stitch(&store, &index, &placement).unwrap();

        let report = search(&mut composite, &Template::sea_monster()).unwrap();
        assert_eq!(report.visits.len(), 8);
        assert_eq!(report.total_matches(), 2);
        assert_eq!(report.matching_orientations().len(), 1);
        assert_eq!(report.roughness, SAMPLE_ROUGHNESS);
        assert_eq!(report.marked, 30);
        assert_eq!(composite.roughness(), SAMPLE_ROUGHNESS);
    }

    // Tests visits follow four rotations, a mirror, then four more rotations
    // Verified by mirroring before the first scan
    #[test]
    fn test_visit_order() {
        let mut composite = unmarked_sample();
        let report = search(&mut composite, &Template::sea_monster()).unwrap();

        let expected = [
            Orientation::new(0, false),
            Orientation::new(1, false),
            Orientation::new(2, false),
            Orientation::new(3, false),
            Orientation::new(3, true),
            Orientation::new(2, true),
            Orientation::new(1, true),
            Orientation::new(0, true),
        ];
        let visited: Vec<Orientation> = report.visits.iter().map(|v| v.orientation).collect();
        assert_eq!(visited, expected);
        assert_eq!(report.visits[0].matches, 2);
        assert_eq!(report.matching_orientations(), vec![Orientation::IDENTITY]);
    }

    // Tests marking the sample in its monster orientation
    // Verified by marking only the anchor cell of each match
    #[test]
    fn test_mark_matches_sample() {
        let mut composite = unmarked_sample();
        let monster = Template::sea_monster();

        assert!(matches_at(&composite, &monster, 2, 2));
        assert!(matches_at(&composite, &monster, 16, 1));
        assert!(!matches_at(&composite, &monster, 0, 0));
        assert_eq!(mark_matches(&mut composite, &monster), 2);
        assert_eq!(composite.to_string(), SAMPLE_MARKED);
        assert_eq!(composite.roughness(), 273);
    }

    // Tests marked cells still satisfy the template on a second scan
    // Verified by matching set cells only
    #[test]
    fn test_marking_is_idempotent() {
        let mut composite = unmarked_sample();
        let monster = Template::sea_monster();
        mark_matches(&mut composite, &monster);
        let once = composite.clone();

        assert_eq!(mark_matches(&mut composite, &monster), 2);
        assert_eq!(composite, once);

        composite.rotate_clockwise();
        composite.mirror();
        assert_eq!(composite.count(Pixel::Marked), once.count(Pixel::Marked));
    }

    // Tests a grid without any match reports every orientation searched
    // Verified by returning a zero-match report
    #[test]
    fn test_no_pattern_match() {
        let mut composite = Composite::from_bools(&Array2::from_elem((24, 24), false));
        match search(&mut composite, &Template::sea_monster()) {
            Err(TilestitchError::NoPatternMatch { orientations }) => assert_eq!(orientations, 8),
            other => panic!("expected no pattern match, got {other:?}"),
        }
    }

    // Tests a template larger than the grid never matches
    // Verified by skipping the bounding box check
    #[test]
    fn test_template_larger_than_grid() {
        let mut composite = Composite::from_bools(&Array2::from_elem((3, 3), true));
        assert_eq!(mark_matches(&mut composite, &Template::sea_monster()), 0);
        assert_eq!(composite.count(Pixel::Marked), 0);
    }

    // Tests overlapping matches are all counted and shared cells marked once
    // Verified by skipping anchors inside an earlier match
    #[test]
    fn test_overlapping_matches() {
        let pair = Template::parse("##").unwrap();
        let mut composite = Composite::from_text("###\n").unwrap();

        assert_eq!(mark_matches(&mut composite, &pair), 2);
        assert_eq!(composite.to_string(), "OOO\n");

        let mut composite = Composite::from_text("###\n").unwrap();
        let report = search(&mut composite, &pair).unwrap();
        assert_eq!(report.total_matches(), 8);
        assert_eq!(report.marked, 3);
        assert_eq!(report.roughness, 0);
    }
}
