//! Whole-cell ("dot") rasterizer

use ratatui::{buffer::Buffer, style::Style};
use term_charts_shared::{ChartShape, Marker, Result};

use super::{candlestick_chart, ChartRenderer};
use crate::drawables::shared_utils::set_cell;
use crate::RenderContext;

/// Plots one marker glyph per sample directly onto the cell grid.
///
/// Line and scatter differ only in intent: no connecting glyphs are drawn,
/// consecutive samples read as a line through density alone.
pub struct CellChartRenderer;

impl ChartRenderer for CellChartRenderer {
    fn render(&self, buf: &mut Buffer, context: &RenderContext) -> Result<()> {
        match context.variant.shape() {
            ChartShape::Candlestick => candlestick_chart::render_candles(buf, context),
            ChartShape::Line | ChartShape::Scatter => {
                render_markers(buf, context);
                Ok(())
            }
        }
    }

    fn marker(&self) -> Marker {
        Marker::Dot
    }
}

fn render_markers(buf: &mut Buffer, context: &RenderContext) {
    let area = context.draw_area;
    let width = i32::from(area.width);
    let mut written = 0usize;

    for (i, series) in context.data.iter().enumerate() {
        let style = Style::new().fg(context.series_color(i));
        log::trace!("[cell_chart] {}: {} samples", context.series_label(i), series.len());
        for (j, &value) in series.iter().enumerate() {
            if context.column_offset(j) >= width {
                break;
            }
            let Some(height) = context.sample_height(value) else {
                continue;
            };
            if set_cell(
                buf,
                area,
                context.column(j),
                context.row(height),
                context.dot_marker,
                style,
            ) {
                written += 1;
            }
        }
    }

    log::debug!(
        "[cell_chart] {} series, {} cells written into {:?}",
        context.data.len(),
        written,
        area
    );
}
