//! PNG sample loading and headless rendering of patterns and grids

use image::{ImageBuffer, Rgba, RgbaImage};
use ndarray::{ArrayD, ArrayView3, ArrayViewD, Axis, Ix3, IxDyn};
use std::path::Path;

use crate::analysis::patterns::SampleCatalog;
use crate::io::configuration::{PATTERN_SHEET_COLUMNS, PATTERN_SHEET_GUTTER};
use crate::io::error::{CatalogError, Result, invalid_parameter, invalid_source_data};

/// Load a PNG as an RGBA sample of shape (height, width, 4)
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a valid image format
pub fn load_png_sample<P: AsRef<Path>>(path: P) -> Result<ArrayD<u8>> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| CatalogError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();

    // Raw buffer is row-major with interleaved channels
    Ok(ArrayD::from_shape_vec(
        IxDyn(&[height as usize, width as usize, 4]),
        rgba_img.into_raw(),
    )?)
}

/// Export raw channel values as a PNG
///
/// Accepts (height, width, channels) or (width, channels) arrays with 1 to 4
/// channels: gray, gray+alpha, RGB or RGBA.
///
/// # Errors
///
/// Returns an error if:
/// - The array layout is not one of the accepted shapes
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_symbol_grid_png<P: AsRef<Path>>(grid: ArrayViewD<'_, u8>, path: P) -> Result<()> {
    let planar = as_planar(grid)?;
    let (height, width, _) = planar.dim();
    let mut img = ImageBuffer::new(width as u32, height as u32);
    paint(&mut img, planar, 0, 0, 1);
    save_png(&img, path.as_ref())
}

/// Export every pattern of a catalog as a tiled sheet
///
/// Patterns are laid out in index order, `PATTERN_SHEET_COLUMNS` per row,
/// each cell drawn as a `scale` x `scale` block and separated by a transparent
/// gutter. Only 1D and 2D patterns can be drawn.
///
/// # Errors
///
/// Returns an error if:
/// - The catalog is empty or its patterns have more than two axes
/// - `scale` is zero
/// - A pattern cannot be decoded or the image cannot be saved
pub fn export_pattern_sheet<P: AsRef<Path>>(
    session: &SampleCatalog<u8>,
    path: P,
    scale: u32,
) -> Result<()> {
    let img = render_pattern_sheet(session, scale)?;
    save_png(&img, path.as_ref())
}

/// Render the pattern sheet without writing it
///
/// # Errors
///
/// Same conditions as [`export_pattern_sheet`] except saving
pub fn render_pattern_sheet(session: &SampleCatalog<u8>, scale: u32) -> Result<RgbaImage> {
    let catalog = session.catalog();
    if catalog.is_empty() {
        return Err(invalid_source_data(&"catalog has no patterns to render"));
    }
    if scale == 0 {
        return Err(invalid_parameter("scale", &scale, &"must be positive"));
    }

    let (tile_rows, tile_cols) = match *catalog.pattern_shape() {
        [cols] => (1, cols),
        [rows, cols] => (rows, cols),
        _ => {
            return Err(invalid_source_data(&format!(
                "cannot draw patterns with {} axes",
                catalog.arity()
            )));
        }
    };

    let columns = PATTERN_SHEET_COLUMNS.min(catalog.len());
    let rows = catalog.len().div_ceil(columns);
    let gutter = PATTERN_SHEET_GUTTER as usize;
    let pitch_x = tile_cols + gutter;
    let pitch_y = tile_rows + gutter;
    let width = (columns * pitch_x + gutter) as u32 * scale;
    let height = (rows * pitch_y + gutter) as u32 * scale;

    let mut img = ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    for pattern in catalog {
        let decoded = session.decode_pattern(pattern.index())?;
        let planar = as_planar(decoded.view())?;
        let slot_x = pattern.index() % columns;
        let slot_y = pattern.index() / columns;
        let origin_x = ((slot_x * pitch_x + gutter) as u32) * scale;
        let origin_y = ((slot_y * pitch_y + gutter) as u32) * scale;
        paint(&mut img, planar, origin_x, origin_y, scale);
    }

    Ok(img)
}

// Lifts a 1D strip to a single-row image and checks the channel count
fn as_planar(grid: ArrayViewD<'_, u8>) -> Result<ArrayView3<'_, u8>> {
    let lifted = match grid.ndim() {
        2 => grid.insert_axis(Axis(0)),
        3 => grid,
        n => {
            return Err(invalid_source_data(&format!(
                "expected 2 or 3 axes for rendering, got {n}"
            )));
        }
    };
    let planar = lifted.into_dimensionality::<Ix3>()?;
    let channels = planar.len_of(Axis(2));
    if !(1..=4).contains(&channels) {
        return Err(invalid_source_data(&format!(
            "cannot render {channels} channels"
        )));
    }
    Ok(planar)
}

fn paint(img: &mut RgbaImage, planar: ArrayView3<'_, u8>, origin_x: u32, origin_y: u32, scale: u32) {
    let (height, width, _) = planar.dim();
    for row in 0..height {
        for col in 0..width {
            let channels: Vec<u8> = planar
                .slice(ndarray::s![row, col, ..])
                .iter()
                .copied()
                .collect();
            let color = to_rgba(&channels);
            for dy in 0..scale {
                for dx in 0..scale {
                    let x = origin_x + col as u32 * scale + dx;
                    let y = origin_y + row as u32 * scale + dy;
                    if x < img.width() && y < img.height() {
                        img.put_pixel(x, y, color);
                    }
                }
            }
        }
    }
}

fn to_rgba(channels: &[u8]) -> Rgba<u8> {
    match *channels {
        [v] => Rgba([v, v, v, 255]),
        [v, a] => Rgba([v, v, v, a]),
        [r, g, b] => Rgba([r, g, b, 255]),
        [r, g, b, a, ..] => Rgba([r, g, b, a]),
        [] => Rgba([0, 0, 0, 0]),
    }
}

fn save_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| CatalogError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| CatalogError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
