//! Input notation, default template and export defaults

// Tile input notation
/// Prefix of the line that introduces a tile block
pub const TILE_HEADER_PREFIX: &str = "Tile ";
/// Suffix terminating the tile header line
pub const TILE_HEADER_SUFFIX: char = ':';
/// Character of a set pixel
pub const SET_CHAR: char = '#';
/// Character of an unset pixel
pub const UNSET_CHAR: char = '.';
/// Character used when rendering a pixel covered by a template match
pub const MARKED_CHAR: char = 'O';

// Tiles need at least one interior row and column to survive border trimming
/// Smallest tile side length accepted by the parser
pub const MIN_TILE_SIZE: usize = 3;

/// Default template searched for in the composite image
///
/// Only `#` cells are required; every other character is a wildcard.
pub const SEA_MONSTER: [&str; 3] = [
    "                  # ",
    "#    ##    ##    ###",
    " #  #  #  #  #  #   ",
];

/// Number of orientations visited by the template search
pub const ORIENTATION_COUNT: usize = 8;

// Progress display settings
/// Width of the stage progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;

// Export settings
/// Suffix added to exported image filenames
pub const OUTPUT_SUFFIX: &str = "_stitched";
/// Default integer upscaling applied to exported images
pub const DEFAULT_EXPORT_SCALE: u32 = 4;
/// Largest accepted export scale
pub const MAX_EXPORT_SCALE: u32 = 64;
/// RGBA colour of unset pixels in exported images
pub const UNSET_COLOR: [u8; 4] = [12, 34, 64, 255];
/// RGBA colour of set pixels in exported images
pub const SET_COLOR: [u8; 4] = [110, 170, 220, 255];
/// RGBA colour of pixels covered by a template match
pub const MARKED_COLOR: [u8; 4] = [230, 90, 40, 255];
