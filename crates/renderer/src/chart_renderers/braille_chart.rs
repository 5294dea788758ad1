//! Sub-pixel ("braille") rasterizer

use ratatui::buffer::Buffer;
use term_charts_shared::{ChartShape, LineSeeding, Marker, PlotError, Result};

use super::ChartRenderer;
use crate::canvas::BrailleCanvas;
use crate::RenderContext;

/// Plots onto a canvas with 2x horizontal and 4x vertical resolution and
/// folds it into braille glyphs.
pub struct BrailleChartRenderer;

impl ChartRenderer for BrailleChartRenderer {
    fn render(&self, buf: &mut Buffer, context: &RenderContext) -> Result<()> {
        let mut canvas = BrailleCanvas::new(context.draw_area);

        match context.variant.shape() {
            ChartShape::Candlestick => {
                return Err(PlotError::UnsupportedMarker {
                    variant: context.variant.to_string(),
                    marker: "braille".to_string(),
                });
            }
            ChartShape::Scatter => plot_points(&mut canvas, context),
            ChartShape::Line => plot_lines(&mut canvas, context),
        }

        if canvas.is_empty() {
            log::debug!("[braille_chart] no sub-pixels lit in {:?}", canvas.area());
        }
        canvas.draw(buf);
        Ok(())
    }

    fn marker(&self) -> Marker {
        Marker::Braille
    }
}

fn plot_points(canvas: &mut BrailleCanvas, context: &RenderContext) {
    let width = i32::from(context.draw_area.width);

    for (i, series) in context.data.iter().enumerate() {
        let color = context.series_color(i);
        for (j, &value) in series.iter().enumerate() {
            if context.column_offset(j) >= width {
                break;
            }
            if let Some(height) = context.sample_height(value) {
                canvas.set_point(context.sub_pixel(j, height), color);
            }
        }
    }
}

fn plot_lines(canvas: &mut BrailleCanvas, context: &RenderContext) {
    let width = i32::from(context.draw_area.width);

    for (i, series) in context.data.iter().enumerate() {
        let color = context.series_color(i);
        log::trace!("[braille_chart] {}: {} samples", context.series_label(i), series.len());

        let seed = match context.line_seeding {
            LineSeeding::SecondSample => 1,
            LineSeeding::FirstSample => 0,
        };
        let Some(&first) = series.get(seed) else {
            continue;
        };
        let mut previous = context.sample_height(first);

        if context.line_seeding == LineSeeding::FirstSample && series.len() == 1 {
            if let Some(height) = previous {
                canvas.set_point(context.sub_pixel(0, height), color);
            }
            continue;
        }

        // Segment j joins column j to column j + 1, starting from sample 1
        // whatever the seed.
        for (j, &value) in series[1..].iter().enumerate() {
            if context.column_offset(j) >= width {
                break;
            }
            let height = context.sample_height(value);
            if let (Some(from), Some(to)) = (previous, height) {
                canvas.set_line(context.sub_pixel(j, from), context.sub_pixel(j + 1, to), color);
            }
            previous = height;
        }
    }

    log::debug!(
        "[braille_chart] {} line series, seeding {:?}",
        context.data.len(),
        context.line_seeding
    );
}
