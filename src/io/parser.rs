//! Parsing of labelled tile blocks
//!
//! Input is a sequence of blocks, each a `Tile <id>:` header followed by the
//! rows of a square tile drawn with `#` and `.`, separated by blank lines.

use crate::io::configuration::{
    MIN_TILE_SIZE, SET_CHAR, TILE_HEADER_PREFIX, TILE_HEADER_SUFFIX, UNSET_CHAR,
};
use crate::io::error::{Result, malformed_input};
use crate::spatial::tiles::{Tile, TileId, TileStore};
use ndarray::Array2;
use std::collections::HashSet;
use std::path::Path;

struct PendingTile {
    id: TileId,
    header_line: usize,
    rows: Vec<Vec<bool>>,
}

/// Parse every tile block in `input`
///
/// # Errors
///
/// Returns a malformed input error if:
/// - The input contains no tiles
/// - A header is missing or carries an unparsable, zero or duplicate identifier
/// - A row contains characters other than `#` and `.`
/// - A tile is ragged, not square, smaller than 3×3 or differs in size from the first tile
pub fn parse_tiles(input: &str) -> Result<TileStore> {
    let mut tiles = Vec::new();
    let mut seen = HashSet::new();
    let mut pending: Option<PendingTile> = None;

    for (index, raw_line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim_end();

        if line.is_empty() {
            if let Some(block) = pending.take() {
                tiles.push(finish_tile(block)?);
            }
            continue;
        }

        if line.starts_with(TILE_HEADER_PREFIX) {
            if let Some(block) = pending.take() {
                tiles.push(finish_tile(block)?);
            }
            let id = parse_header(line, line_number)?;
            if !seen.insert(id) {
                return Err(malformed_input(
                    line_number,
                    &format!("duplicate tile identifier {id}"),
                ));
            }
            pending = Some(PendingTile {
                id,
                header_line: line_number,
                rows: Vec::new(),
            });
            continue;
        }

        let Some(block) = pending.as_mut() else {
            return Err(malformed_input(
                line_number,
                &"pixel row found before any tile header",
            ));
        };
        block.rows.push(parse_row(line, line_number)?);
    }

    if let Some(block) = pending.take() {
        tiles.push(finish_tile(block)?);
    }

    let Some(size) = tiles.first().map(Tile::size) else {
        return Err(malformed_input(0, &"input contains no tiles"));
    };
    if let Some(odd) = tiles.iter().find(|t| t.size() != size) {
        return Err(malformed_input(
            0,
            &format!(
                "tile {} is {}x{} but tile {} is {size}x{size}",
                odd.id(),
                odd.size(),
                odd.size(),
                tiles.first().map_or(0, Tile::id)
            ),
        ));
    }

    Ok(TileStore::from_tiles(tiles))
}

/// Read and parse a tile file
///
/// # Errors
///
/// Returns a file system error if the file cannot be read, otherwise any
/// error of [`parse_tiles`]
pub fn read_tiles(path: &Path) -> Result<TileStore> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::io::error::TilestitchError::FileSystem {
            path: path.to_path_buf(),
            operation: "read tiles",
            source: e,
        }
    })?;
    parse_tiles(&content)
}

fn parse_header(line: &str, line_number: usize) -> Result<TileId> {
    let body = line
        .strip_prefix(TILE_HEADER_PREFIX)
        .and_then(|rest| rest.strip_suffix(TILE_HEADER_SUFFIX))
        .ok_or_else(|| malformed_input(line_number, &format!("bad tile header '{line}'")))?;

    let id = body.trim().parse::<TileId>().map_err(|e| {
        malformed_input(line_number, &format!("bad tile identifier '{body}': {e}"))
    })?;

    if id == 0 {
        return Err(malformed_input(
            line_number,
            &"tile identifiers must be positive",
        ));
    }
    Ok(id)
}

fn parse_row(line: &str, line_number: usize) -> Result<Vec<bool>> {
    line.chars()
        .enumerate()
        .map(|(column, ch)| match ch {
            SET_CHAR => Ok(true),
            UNSET_CHAR => Ok(false),
            other => Err(malformed_input(
                line_number,
                &format!("unexpected character '{other}' in column {}", column + 1),
            )),
        })
        .collect()
}

fn finish_tile(block: PendingTile) -> Result<Tile> {
    let PendingTile {
        id,
        header_line,
        rows,
    } = block;
    let size = rows.len();

    if size < MIN_TILE_SIZE {
        return Err(malformed_input(
            header_line,
            &format!("tile {id} has {size} rows, at least {MIN_TILE_SIZE} are required"),
        ));
    }
    if let Some((offset, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
        return Err(malformed_input(
            header_line + offset + 1,
            &format!(
                "tile {id} row has {} pixels, expected {size} for a square tile",
                row.len()
            ),
        ));
    }

    let pixels = Array2::from_shape_vec((size, size), rows.into_iter().flatten().collect())
        .map_err(|e| malformed_input(header_line, &format!("tile {id}: {e}")))?;
    Ok(Tile::new(id, pixels))
}
