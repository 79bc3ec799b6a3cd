//! Template search with cumulative marking across all eight orientations
//!
//! The composite is scanned, rotated a quarter turn and scanned again until
//! all four rotations were seen, then mirrored and scanned through four more
//! rotations. Every transform rebuilds the grid from the current tri-state
//! cells, so marks made in one orientation are still present in the next.

use crate::algorithm::template::Template;
use crate::io::configuration::ORIENTATION_COUNT;
use crate::io::error::{Result, TilestitchError, invalid_parameter};
use crate::spatial::grid::{Composite, Orientation, Pixel};

/// Matches found while the composite was in one orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationVisit {
    /// Orientation of the grid relative to the stitched composite
    pub orientation: Orientation,
    /// Template matches found in that orientation
    pub matches: usize,
}

/// Outcome of a full eight-orientation search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Every visited orientation in visiting order
    pub visits: Vec<OrientationVisit>,
    /// Set cells not covered by any match
    pub roughness: usize,
    /// Cells covered by at least one match
    pub marked: usize,
}

impl SearchReport {
    /// Matches summed over every orientation
    pub fn total_matches(&self) -> usize {
        self.visits.iter().map(|v| v.matches).sum()
    }

    /// Orientations in which the template was found
    pub fn matching_orientations(&self) -> Vec<Orientation> {
        self.visits
            .iter()
            .filter(|v| v.matches > 0)
            .map(|v| v.orientation)
            .collect()
    }
}

/// Whether every template cell anchored at (`row`, `col`) is set or marked
pub fn matches_at(composite: &Composite, template: &Template, row: usize, col: usize) -> bool {
    template.offsets().iter().all(|&(dr, dc)| {
        composite
            .cells()
            .get((row + dr, col + dc))
            .is_some_and(|p| p.is_set())
    })
}

/// Scan the composite in its current orientation and mark every match
///
/// Anchors are visited row-major. Overlapping matches are all honored; a
/// cell covered twice stays marked once. Returns the number of matches.
pub fn mark_matches(composite: &mut Composite, template: &Template) -> usize {
    let (rows, cols) = composite.dim();
    if template.is_empty() || template.height() > rows || template.width() > cols {
        return 0;
    }

    let mut found = 0;
    for row in 0..=rows - template.height() {
        for col in 0..=cols - template.width() {
            if !matches_at(composite, template, row, col) {
                continue;
            }
            found += 1;
            for &(dr, dc) in template.offsets() {
                if let Some(cell) = composite.cells_mut().get_mut((row + dr, col + dc)) {
                    *cell = Pixel::Marked;
                }
            }
        }
    }
    found
}

/// Search all eight orientations, accumulating marks
///
/// Leaves the composite mirrored relative to its input orientation, which
/// does not change any count.
///
/// # Errors
///
/// Returns an error if:
/// - The template has no required cells
/// - No orientation contains a single match
pub fn search(composite: &mut Composite, template: &Template) -> Result<SearchReport> {
    if template.is_empty() {
        return Err(invalid_parameter(
            "template",
            &"<empty>",
            &"template requires at least one set cell",
        ));
    }

    let mut visits = Vec::with_capacity(ORIENTATION_COUNT);
    let mut orientation = Orientation::IDENTITY;
    for mirrored in [false, true] {
        if mirrored {
            composite.mirror();
            orientation = orientation.then_mirror();
        }
        for turn in 0..4 {
            if turn > 0 {
                composite.rotate_clockwise();
                orientation = orientation.then_rotate_clockwise();
            }
            let matches = mark_matches(composite, template);
            visits.push(OrientationVisit {
                orientation,
                matches,
            });
        }
    }

    let report = SearchReport {
        visits,
        roughness: composite.roughness(),
        marked: composite.count(Pixel::Marked),
    };
    if report.total_matches() == 0 {
        return Err(TilestitchError::NoPatternMatch {
            orientations: report.visits.len(),
        });
    }
    Ok(report)
}
