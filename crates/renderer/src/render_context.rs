//! Per-pass render context shared by the rasterizers

use ratatui::{layout::Rect, style::Color};
use term_charts_shared::{select_color, Bounds, ChartVariant, LineSeeding, PlotTheme};

use crate::calcables::{normalize, row_height};
use crate::canvas::SubPixel;

/// Everything a rasterizer needs for one draw pass.
///
/// Built fresh by the plot on every draw; nothing here outlives the pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub data: &'a [Vec<f64>],
    pub data_labels: &'a [String],
    pub draw_area: Rect,
    pub bounds: Bounds,
    pub variant: ChartVariant,
    pub horizontal_scale: u16,
    pub line_colors: &'a [Color],
    pub theme: &'a PlotTheme,
    pub dot_marker: char,
    pub line_seeding: LineSeeding,
}

impl RenderContext<'_> {
    pub fn series_color(&self, index: usize) -> Color {
        select_color(self.line_colors, index)
    }

    pub fn series_label(&self, index: usize) -> String {
        self.data_labels
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("series {index}"))
    }

    /// Column offset of sample `index` from the left edge of the draw area.
    pub fn column_offset(&self, index: usize) -> i32 {
        i32::try_from(index)
            .unwrap_or(i32::MAX)
            .saturating_mul(i32::from(self.horizontal_scale.max(1)))
    }

    /// Absolute terminal column of sample `index`.
    pub fn column(&self, index: usize) -> i32 {
        i32::from(self.draw_area.x).saturating_add(self.column_offset(index))
    }

    /// Row height of `value` inside the draw area, `None` for non-finite
    /// samples.
    pub fn sample_height(&self, value: f64) -> Option<i32> {
        normalize(value, self.bounds, self.variant.scaling())
            .map(|normalized| row_height(normalized, self.draw_area.height))
    }

    /// Absolute terminal row for a row height (heights grow upward).
    pub fn row(&self, height: i32) -> i32 {
        (i32::from(self.draw_area.bottom()) - 1).saturating_sub(height)
    }

    /// Sub-pixel at the top-left dot of the cell for sample `index`.
    pub fn sub_pixel(&self, index: usize, height: i32) -> SubPixel {
        SubPixel::new(
            self.column(index).saturating_mul(2),
            self.row(height).saturating_mul(4),
        )
    }
}
