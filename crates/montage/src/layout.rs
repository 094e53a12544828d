//! Grid arithmetic for montages.

use deck_core::{Error, Result};

/// Montage layout options as supplied by the caller.
///
/// Values are signed so that out-of-range input reaches
/// [`crate::validate_inputs`] and is reported there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MontageOptions {
    pub columns: i64,
    pub tile_width: i64,
    pub tile_height: i64,
    pub spacing: i64,
}

impl Default for MontageOptions {
    fn default() -> Self {
        Self {
            columns: 3,
            tile_width: 200,
            tile_height: 200,
            spacing: 10,
        }
    }
}

impl MontageOptions {
    /// Create options with the defaults (3 columns, 200x200 tiles, 10px spacing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of grid columns.
    pub fn with_columns(mut self, columns: i64) -> Self {
        self.columns = columns;
        self
    }

    /// Set the tile size each image is shrunk to fit within.
    pub fn with_tile_size(mut self, width: i64, height: i64) -> Self {
        self.tile_width = width;
        self.tile_height = height;
        self
    }

    /// Set the gap between tiles, in pixels.
    pub fn with_spacing(mut self, spacing: i64) -> Self {
        self.spacing = spacing;
        self
    }
}

/// Validated grid geometry, in pixels.
///
/// Columns and tile sides are always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub(crate) columns: u32,
    pub(crate) tile_width: u32,
    pub(crate) tile_height: u32,
    pub(crate) spacing: u32,
}

impl GridLayout {
    /// Create a layout, rejecting zero columns or an empty tile.
    pub fn new(columns: u32, tile_width: u32, tile_height: u32, spacing: u32) -> Result<Self> {
        if columns == 0 {
            return Err(Error::validation(
                "The number of columns must be greater than zero.",
            ));
        }
        if tile_width == 0 || tile_height == 0 {
            return Err(Error::validation(
                "Tile width and height must be greater than zero.",
            ));
        }
        Ok(Self {
            columns,
            tile_width,
            tile_height,
            spacing,
        })
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Tile size as `(width, height)`.
    pub fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    pub fn spacing(&self) -> u32 {
        self.spacing
    }

    /// Number of rows needed for `count` images.
    pub fn rows(&self, count: usize) -> usize {
        count.div_ceil(self.columns as usize)
    }

    /// Canvas size for `count` images.
    ///
    /// Width always spans every column, even when fewer images than columns are given.
    pub fn canvas_size(&self, count: usize) -> Result<(u32, u32)> {
        let rows = u64::try_from(self.rows(count)).unwrap_or(u64::MAX);
        let width = span(u64::from(self.columns), self.tile_width, self.spacing);
        let height = span(rows, self.tile_height, self.spacing);

        match (width, height) {
            (Some(width), Some(height)) => Ok((width, height)),
            _ => Err(Error::validation(format!(
                "A montage of {} images does not fit in a single image",
                count
            ))),
        }
    }

    /// Top-left pixel of the tile for the image at `index`, in row-major order.
    pub fn cell_origin(&self, index: usize) -> (u32, u32) {
        let columns = self.columns as usize;
        let (row, col) = (index / columns, index % columns);
        let x = col as u64 * (u64::from(self.tile_width) + u64::from(self.spacing));
        let y = row as u64 * (u64::from(self.tile_height) + u64::from(self.spacing));
        (
            u32::try_from(x).unwrap_or(u32::MAX),
            u32::try_from(y).unwrap_or(u32::MAX),
        )
    }
}

/// `cells * tile + spacing * (cells - 1)`, or `None` when it exceeds `u32`.
fn span(cells: u64, tile: u32, spacing: u32) -> Option<u32> {
    let gaps = cells.saturating_sub(1);
    let total = cells
        .checked_mul(u64::from(tile))?
        .checked_add(gaps.checked_mul(u64::from(spacing))?)?;
    u32::try_from(total).ok()
}

/// Size of a `width` x `height` image shrunk to fit within `max_width` x `max_height`.
///
/// Aspect ratio is kept and images are never enlarged. Each side is at least one pixel.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let scale = f64::min(
        f64::from(max_width) / f64::from(width),
        f64::from(max_height) / f64::from(height),
    );
    let fit = |side: u32, max: u32| ((f64::from(side) * scale).round() as u32).clamp(1, max.max(1));
    (fit(width, max_width), fit(height, max_height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(columns: u32, tile: (u32, u32), spacing: u32) -> GridLayout {
        GridLayout {
            columns,
            tile_width: tile.0,
            tile_height: tile.1,
            spacing,
        }
    }

    #[test]
    fn test_new_rejects_empty_grid() {
        assert!(matches!(GridLayout::new(0, 10, 10, 0), Err(Error::Validation(_))));
        assert!(matches!(GridLayout::new(2, 0, 10, 0), Err(Error::Validation(_))));
        assert!(matches!(GridLayout::new(2, 10, 0, 0), Err(Error::Validation(_))));

        let grid = GridLayout::new(2, 10, 20, 0).unwrap();
        assert_eq!(grid.columns(), 2);
        assert_eq!(grid.tile_size(), (10, 20));
        assert_eq!(grid.spacing(), 0);
    }

    #[test]
    fn test_rows_round_up() {
        let grid = layout(3, (200, 200), 10);
        assert_eq!(grid.rows(1), 1);
        assert_eq!(grid.rows(3), 1);
        assert_eq!(grid.rows(4), 2);
        assert_eq!(grid.rows(7), 3);
    }

    #[test]
    fn test_canvas_size() {
        let grid = layout(3, (200, 150), 10);
        assert_eq!(grid.canvas_size(1).unwrap(), (620, 150));
        assert_eq!(grid.canvas_size(4).unwrap(), (620, 310));

        let tight = layout(2, (50, 40), 0);
        assert_eq!(tight.canvas_size(5).unwrap(), (100, 120));
    }

    #[test]
    fn test_canvas_size_matches_formula() {
        for columns in 1..5u32 {
            for count in 1..10usize {
                for spacing in [0u32, 3, 10] {
                    let grid = layout(columns, (30, 20), spacing);
                    let rows = count.div_ceil(columns as usize) as u32;
                    assert_eq!(
                        grid.canvas_size(count).unwrap(),
                        (
                            columns * 30 + spacing * (columns - 1),
                            rows * 20 + spacing * (rows - 1)
                        )
                    );
                }
            }
        }
    }

    #[test]
    fn test_canvas_too_large() {
        let grid = layout(u32::MAX, (u32::MAX, 1), 0);
        assert!(matches!(grid.canvas_size(1), Err(Error::Validation(_))));
    }

    #[test]
    fn test_cell_origin_row_major() {
        let grid = layout(3, (200, 100), 10);
        assert_eq!(grid.cell_origin(0), (0, 0));
        assert_eq!(grid.cell_origin(2), (420, 0));
        assert_eq!(grid.cell_origin(3), (0, 110));
        assert_eq!(grid.cell_origin(5), (420, 110));
    }

    #[test]
    fn test_fit_within_shrinks_keeping_aspect() {
        assert_eq!(fit_within(400, 200, 200, 200), (200, 100));
        assert_eq!(fit_within(100, 400, 200, 200), (50, 200));
        assert_eq!(fit_within(1000, 1, 100, 100), (100, 1));
    }

    #[test]
    fn test_fit_within_never_enlarges() {
        assert_eq!(fit_within(50, 20, 200, 200), (50, 20));
        assert_eq!(fit_within(200, 200, 200, 200), (200, 200));
    }

    #[test]
    fn test_default_options() {
        let options = MontageOptions::new();
        assert_eq!(options.columns, 3);
        assert_eq!((options.tile_width, options.tile_height), (200, 200));
        assert_eq!(options.spacing, 10);
    }
}
