//! Grid transforms and the tri-state composite image
//!
//! All eight rotation/mirror transforms are pure functions that build a new
//! array. The composite image reuses them to reorient itself in place, so
//! marked cells travel with their pixels through every transform.

use crate::io::configuration::{MARKED_CHAR, SET_CHAR, UNSET_CHAR};
use ndarray::{Array2, ArrayView2, s};
use std::fmt;

/// State of a single composite pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pixel {
    /// Background pixel
    #[default]
    Unset,
    /// Foreground pixel not covered by any template match
    Set,
    /// Foreground pixel covered by at least one template match
    Marked,
}

impl Pixel {
    /// Whether the pixel was set in the source image, marked or not
    pub const fn is_set(self) -> bool {
        matches!(self, Self::Set | Self::Marked)
    }

    /// Character used by the text rendering
    pub const fn symbol(self) -> char {
        match self {
            Self::Unset => UNSET_CHAR,
            Self::Set => SET_CHAR,
            Self::Marked => MARKED_CHAR,
        }
    }
}

impl From<bool> for Pixel {
    fn from(set: bool) -> Self {
        if set { Self::Set } else { Self::Unset }
    }
}

fn materialize<T: Clone>(view: ArrayView2<'_, T>) -> Array2<T> {
    view.as_standard_layout().into_owned()
}

/// Rotate a grid a quarter turn clockwise
///
/// `out[(r, c)] = grid[(rows - 1 - c, r)]`
pub fn rotate_clockwise<T: Clone>(grid: &Array2<T>) -> Array2<T> {
    materialize(grid.t().slice_move(s![.., ..;-1]))
}

/// Mirror a grid about its vertical axis (reverse every row)
pub fn mirror<T: Clone>(grid: &Array2<T>) -> Array2<T> {
    materialize(grid.slice(s![.., ..;-1]))
}

/// Drop the outermost row and column on every side
pub fn trim_border<T: Clone>(grid: &Array2<T>) -> Array2<T> {
    let (rows, cols) = grid.dim();
    if rows < 2 || cols < 2 {
        return materialize(grid.slice(s![0..0, 0..0]));
    }
    materialize(grid.slice(s![1..rows - 1, 1..cols - 1]))
}

/// One of the eight rotation/mirror states of a square grid
///
/// Applied as `quarter_turns` clockwise rotations followed, when `mirrored`,
/// by a horizontal mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation {
    quarter_turns: u8,
    mirrored: bool,
}

impl Orientation {
    /// Leaves the grid untouched
    pub const IDENTITY: Self = Self::new(0, false);

    /// Every orientation, unmirrored rotations first
    pub const ALL: [Self; 8] = [
        Self::new(0, false),
        Self::new(1, false),
        Self::new(2, false),
        Self::new(3, false),
        Self::new(0, true),
        Self::new(1, true),
        Self::new(2, true),
        Self::new(3, true),
    ];

    /// Create an orientation; turns are taken modulo four
    pub const fn new(quarter_turns: u8, mirrored: bool) -> Self {
        Self {
            quarter_turns: quarter_turns % 4,
            mirrored,
        }
    }

    /// Clockwise quarter turns applied before mirroring
    pub const fn quarter_turns(self) -> u8 {
        self.quarter_turns
    }

    /// Whether a mirror follows the rotation
    pub const fn is_mirrored(self) -> bool {
        self.mirrored
    }

    /// Orientation undoing this one
    ///
    /// Mirrored orientations are their own inverse since `M R^k M = R^-k`.
    #[must_use]
    pub const fn inverse(self) -> Self {
        if self.mirrored {
            self
        } else {
            Self::new((4 - self.quarter_turns) % 4, false)
        }
    }

    /// Orientation of a grid in this orientation after one more clockwise quarter turn
    #[must_use]
    pub const fn then_rotate_clockwise(self) -> Self {
        if self.mirrored {
            // R M R^k = M R^(k-1)
            Self::new((self.quarter_turns + 3) % 4, true)
        } else {
            Self::new(self.quarter_turns + 1, false)
        }
    }

    /// Orientation of a grid in this orientation after one more mirror
    #[must_use]
    pub const fn then_mirror(self) -> Self {
        Self::new(self.quarter_turns, !self.mirrored)
    }

    /// Build the transformed grid
    pub fn apply<T: Clone>(self, grid: &Array2<T>) -> Array2<T> {
        let mut result = grid.clone();
        for _ in 0..self.quarter_turns {
            result = rotate_clockwise(&result);
        }
        if self.mirrored {
            result = mirror(&result);
        }
        result
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rotated {}°", u16::from(self.quarter_turns) * 90)?;
        if self.mirrored {
            f.write_str(" and mirrored")?;
        }
        Ok(())
    }
}

/// The stitched image with per-pixel match marks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
    cells: Array2<Pixel>,
}

impl Composite {
    /// Wrap an existing tri-state grid
    pub const fn new(cells: Array2<Pixel>) -> Self {
        Self { cells }
    }

    /// Build an unmarked composite from boolean pixels
    pub fn from_bools(pixels: &Array2<bool>) -> Self {
        Self {
            cells: pixels.mapv(Pixel::from),
        }
    }

    /// Parse a composite from its text rendering (`#`, `.` and `O`)
    ///
    /// Returns `None` for ragged rows or unknown characters.
    pub fn from_text(text: &str) -> Option<Self> {
        let rows: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut cells = Vec::with_capacity(rows.len() * width);
        for row in &rows {
            if row.chars().count() != width {
                return None;
            }
            for ch in row.chars() {
                cells.push(match ch {
                    SET_CHAR => Pixel::Set,
                    UNSET_CHAR => Pixel::Unset,
                    MARKED_CHAR => Pixel::Marked,
                    _ => return None,
                });
            }
        }
        Array2::from_shape_vec((rows.len(), width), cells)
            .ok()
            .map(Self::new)
    }

    /// Underlying cells
    pub const fn cells(&self) -> &Array2<Pixel> {
        &self.cells
    }

    /// Mutable access to the cells for marking
    pub const fn cells_mut(&mut self) -> &mut Array2<Pixel> {
        &mut self.cells
    }

    /// Grid dimensions as (rows, cols)
    pub fn dim(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Rebuild the grid rotated a quarter turn clockwise, keeping marks
    pub fn rotate_clockwise(&mut self) {
        self.cells = rotate_clockwise(&self.cells);
    }

    /// Rebuild the grid mirrored, keeping marks
    pub fn mirror(&mut self) {
        self.cells = mirror(&self.cells);
    }

    /// Number of cells in the given state
    pub fn count(&self, state: Pixel) -> usize {
        self.cells.iter().filter(|&&p| p == state).count()
    }

    /// Number of cells that were set in the source image
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|p| p.is_set()).count()
    }

    /// Set cells not covered by any template match
    pub fn roughness(&self) -> usize {
        self.count(Pixel::Set)
    }
}

impl fmt::Display for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line: String = row.iter().map(|p| p.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
