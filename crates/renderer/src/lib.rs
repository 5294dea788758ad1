//! Terminal chart rasterization engine
//!
//! Converts numeric series into glyphs inside a rectangle of a terminal cell
//! buffer. Two resolutions are supported: whole-cell "dot" mode, which also
//! renders OHLC candlesticks at quarter-cell precision, and braille mode with
//! 2x horizontal and 4x vertical sub-pixels per cell.
//!
//! A draw pass runs bounds resolution, then axis layout, then one of the
//! rasterizers. It is synchronous and keeps no state between passes.

pub mod calcables;
pub mod canvas;
pub mod chart_renderers;
pub mod drawables;
pub mod plot;
pub mod render_context;

pub use calcables::{normalize, resolve_bounds, series_max, series_min};
pub use canvas::{BrailleCanvas, SubPixel};
pub use chart_renderers::{
    fold_candles, renderer_for, BrailleChartRenderer, CellChartRenderer, ChartRenderer,
};
pub use drawables::{select_candle_glyph, AxisLayout, CandleGlyph, ScaledCandle};
pub use plot::Plot;
pub use render_context::RenderContext;
