//! PNG export of the composite image with match highlighting

use crate::io::configuration::{MARKED_COLOR, MAX_EXPORT_SCALE, SET_COLOR, UNSET_COLOR};
use crate::io::error::{Result, TilestitchError, invalid_parameter};
use crate::spatial::grid::{Composite, Pixel};
use image::{ImageBuffer, Rgba};
use num_traits::ToPrimitive;
use std::path::Path;

const fn pixel_color(pixel: Pixel) -> Rgba<u8> {
    match pixel {
        Pixel::Unset => Rgba(UNSET_COLOR),
        Pixel::Set => Rgba(SET_COLOR),
        Pixel::Marked => Rgba(MARKED_COLOR),
    }
}

/// Render the composite into an RGBA buffer, each cell `scale` pixels wide
///
/// # Errors
///
/// Returns an invalid parameter error if:
/// - The scale is zero or above the supported maximum
/// - The composite is empty
/// - The scaled image would not fit `u32` dimensions
pub fn render_composite(
    composite: &Composite,
    scale: u32,
) -> Result<ImageBuffer<Rgba<u8>, Vec<u8>>> {
    if scale == 0 || scale > MAX_EXPORT_SCALE {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!("must be between 1 and {MAX_EXPORT_SCALE}"),
        ));
    }

    let (rows, cols) = composite.dim();
    if rows == 0 || cols == 0 {
        return Err(invalid_parameter(
            "composite",
            &format!("{rows}x{cols}"),
            &"nothing to export",
        ));
    }

    let scaled = |cells: usize| {
        cells
            .to_u32()
            .and_then(|c| c.checked_mul(scale))
            .ok_or_else(|| invalid_parameter("scale", &scale, &"image dimensions overflow"))
    };
    let width = scaled(cols)?;
    let height = scaled(rows)?;

    let cells = composite.cells();
    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        let row = (y / scale) as usize;
        let col = (x / scale) as usize;
        cells
            .get((row, col))
            .copied()
            .map_or(Rgba(UNSET_COLOR), pixel_color)
    }))
}

/// Export the composite as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The composite cannot be rendered at the requested scale
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_composite_as_png(composite: &Composite, scale: u32, output_path: &Path) -> Result<()> {
    let img = render_composite(composite, scale)?;

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| TilestitchError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| TilestitchError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
