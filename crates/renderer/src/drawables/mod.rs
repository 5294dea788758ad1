pub mod axes;
pub mod candlestick;
pub mod shared_utils;
pub mod x_axis;
pub mod y_axis;

pub use axes::AxisLayout;
pub use candlestick::{candle_color, select_candle_glyph, CandleGlyph, ScaledCandle};
