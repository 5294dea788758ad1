//! Chart rasterizers

use ratatui::buffer::Buffer;
use term_charts_shared::{Marker, Result};

use crate::RenderContext;

/// Trait for the rasterizers, one per addressing resolution
pub trait ChartRenderer {
    /// Rasterize the context's series into `buf`, writing only inside the
    /// draw area.
    fn render(&self, buf: &mut Buffer, context: &RenderContext) -> Result<()>;

    /// The resolution this renderer addresses
    fn marker(&self) -> Marker;
}

mod braille_chart;
mod candlestick_chart;
mod cell_chart;

pub use braille_chart::BrailleChartRenderer;
pub use candlestick_chart::{fold_candles, render_candles};
pub use cell_chart::CellChartRenderer;

/// Renderer for a marker mode
pub fn renderer_for(marker: Marker) -> &'static dyn ChartRenderer {
    match marker {
        Marker::Braille => &BrailleChartRenderer,
        Marker::Dot => &CellChartRenderer,
    }
}
