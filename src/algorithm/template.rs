//! Relative-offset templates searched for in the composite image

use crate::io::configuration::{SEA_MONSTER, SET_CHAR};
use crate::io::error::{Result, invalid_parameter};

/// A fixed shape of required cells inside a bounding box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    offsets: Vec<(usize, usize)>,
    height: usize,
    width: usize,
}

impl Template {
    /// Build a template from an ASCII picture
    ///
    /// `#` marks a required cell, every other character is a wildcard. The
    /// bounding box spans the picture's rows and its longest line, so
    /// trailing wildcards still count toward the width.
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the picture has no `#` cell
    pub fn parse(picture: &str) -> Result<Self> {
        Self::from_lines(&picture.lines().collect::<Vec<_>>())
    }

    /// Build a template from picture lines
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if no line contains a `#` cell
    pub fn from_lines(lines: &[&str]) -> Result<Self> {
        // Blank lines above or below the shape would only shrink the search area
        let first = lines.iter().position(|l| l.contains(SET_CHAR));
        let last = lines.iter().rposition(|l| l.contains(SET_CHAR));
        let (Some(first), Some(last)) = (first, last) else {
            return Err(invalid_parameter(
                "template",
                &lines.join("\n"),
                &format!("contains no '{SET_CHAR}' cell"),
            ));
        };

        Ok(Self::from_rows(lines.get(first..=last).unwrap_or_default()))
    }

    fn from_rows(rows: &[&str]) -> Self {
        let offsets = rows
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .filter(|&(_, ch)| ch == SET_CHAR)
                    .map(move |(col, _)| (row, col))
            })
            .collect();
        let width = rows.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        Self {
            offsets,
            height: rows.len(),
            width,
        }
    }

    /// The default three-line sea monster (15 cells in a 3×20 box)
    pub fn sea_monster() -> Self {
        Self::from_rows(&SEA_MONSTER)
    }

    /// Required cells relative to the top-left anchor
    pub fn offsets(&self) -> &[(usize, usize)] {
        &self.offsets
    }

    /// Bounding box height
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Bounding box width
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of required cells
    pub const fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the template requires no cells
    pub const fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::sea_monster()
    }
}
