//! Tests for PNG sample loading, grid export and pattern sheet rendering

#[cfg(test)]
mod tests {
    use ::image::{Rgba, RgbaImage};
    use ndarray::{ArrayD, IxDyn};
    use tempfile::TempDir;
    use wfc_overlap::analysis::patterns::SampleCatalog;
    use wfc_overlap::io::configuration::CatalogConfig;
    use wfc_overlap::io::error::CatalogError;
    use wfc_overlap::io::image::{
        export_pattern_sheet, export_symbol_grid_png, load_png_sample, render_pattern_sheet,
    };

    const BLACK: [u8; 4] = [0, 0, 0, 255];
    const WHITE: [u8; 4] = [255, 255, 255, 255];

    fn checkerboard_rgba() -> ArrayD<u8> {
        let mut cells = Vec::new();
        for row in 0..4 {
            for col in 0..4 {
                let color = if (row + col) % 2 == 0 { BLACK } else { WHITE };
                cells.extend_from_slice(&color);
            }
        }
        ArrayD::from_shape_vec(IxDyn(&[4, 4, 4]), cells).unwrap()
    }

    // Tests a written grid loads back with identical channels
    // Verified by swapping width and height in the loader
    #[test]
    fn test_grid_png_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("grid.png");

        let mut cells = Vec::new();
        for value in 0..6u8 {
            cells.extend_from_slice(&[value * 40, 10, 20, 255]);
        }
        let grid = ArrayD::from_shape_vec(IxDyn(&[2, 3, 4]), cells).unwrap();

        export_symbol_grid_png(grid.view(), &path).unwrap();
        let loaded = load_png_sample(&path).unwrap();

        assert_eq!(loaded.shape(), [2, 3, 4]);
        assert_eq!(loaded, grid);
    }

    // Tests RGB and grayscale grids are expanded to opaque RGBA
    #[test]
    fn test_export_expands_channels() {
        let dir = TempDir::new().unwrap();

        let rgb_path = dir.path().join("rgb.png");
        let rgb = ArrayD::from_shape_vec(IxDyn(&[1, 2, 3]), vec![1, 2, 3, 4, 5, 6]).unwrap();
        export_symbol_grid_png(rgb.view(), &rgb_path).unwrap();
        let loaded = load_png_sample(&rgb_path).unwrap();
        assert_eq!(loaded.iter().copied().collect::<Vec<_>>(), vec![
            1, 2, 3, 255, 4, 5, 6, 255
        ]);

        let gray_path = dir.path().join("gray.png");
        let gray = ArrayD::from_shape_vec(IxDyn(&[3, 1]), vec![7, 8, 9]).unwrap();
        export_symbol_grid_png(gray.view(), &gray_path).unwrap();
        let loaded = load_png_sample(&gray_path).unwrap();
        assert_eq!(loaded.shape(), [1, 3, 4]);
        assert_eq!(loaded.iter().copied().collect::<Vec<_>>(), vec![
            7, 7, 7, 255, 8, 8, 8, 255, 9, 9, 9, 255
        ]);
    }

    // Tests export creates missing parent directories
    #[test]
    fn test_export_creates_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("grid.png");

        export_symbol_grid_png(checkerboard_rgba().view(), &path).unwrap();
        assert!(path.exists());
    }

    // Tests unsupported layouts are rejected before writing
    #[test]
    fn test_export_rejects_bad_layouts() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.png");

        let five_channels = ArrayD::<u8>::zeros(IxDyn(&[2, 2, 5]));
        assert!(matches!(
            export_symbol_grid_png(five_channels.view(), &path),
            Err(CatalogError::InvalidSourceData { .. })
        ));

        let four_axes = ArrayD::<u8>::zeros(IxDyn(&[1, 2, 2, 4]));
        assert!(matches!(
            export_symbol_grid_png(four_axes.view(), &path),
            Err(CatalogError::InvalidSourceData { .. })
        ));
        assert!(!path.exists());
    }

    // Tests a missing file reports its path
    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.png");

        match load_png_sample(&path) {
            Err(CatalogError::ImageLoad { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected ImageLoad error, got {other:?}"),
        }
    }

    // Tests sheet dimensions and tile placement for the checkerboard catalog
    // Verified by dropping the leading gutter
    #[test]
    fn test_render_pattern_sheet_layout() {
        let sample = checkerboard_rgba();
        let session = SampleCatalog::from_sample(sample.view(), &CatalogConfig::default()).unwrap();
        assert_eq!(session.catalog().len(), 2);

        let sheet = render_pattern_sheet(&session, 2).unwrap();
        assert_eq!(sheet.dimensions(), (14, 8));

        // Gutter is transparent
        assert_eq!(*sheet.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(*sheet.get_pixel(6, 2), Rgba([0, 0, 0, 0]));

        // Pattern 0 starts with the sample's top-left color, pattern 1 with the other
        assert_eq!(*sheet.get_pixel(2, 2), Rgba(BLACK));
        assert_eq!(*sheet.get_pixel(3, 3), Rgba(BLACK));
        assert_eq!(*sheet.get_pixel(4, 2), Rgba(WHITE));
        assert_eq!(*sheet.get_pixel(8, 2), Rgba(WHITE));
        assert_eq!(*sheet.get_pixel(10, 2), Rgba(BLACK));
    }

    // Tests sheet export writes a readable PNG
    #[test]
    fn test_export_pattern_sheet() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sheet.png");
        let sample = checkerboard_rgba();
        let session = SampleCatalog::from_sample(sample.view(), &CatalogConfig::default()).unwrap();

        export_pattern_sheet(&session, &path, 1).unwrap();

        let written: RgbaImage = ::image::open(&path).unwrap().to_rgba8();
        assert_eq!(written.dimensions(), (7, 4));
    }

    // Tests a zero scale is rejected
    #[test]
    fn test_render_rejects_zero_scale() {
        let sample = checkerboard_rgba();
        let session = SampleCatalog::from_sample(sample.view(), &CatalogConfig::default()).unwrap();

        assert!(matches!(
            render_pattern_sheet(&session, 0),
            Err(CatalogError::InvalidParameter {
                parameter: "scale",
                ..
            })
        ));
    }
}
