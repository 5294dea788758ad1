//! Candle glyph selection at quarter-cell resolution
//!
//! A candle column is rendered one terminal row at a time. Each row picks one
//! of nine box-drawing glyphs by comparing the row index against the
//! continuous row positions of the wick and body ends. Row `r` covers the
//! value span `[r, r + 1)`; thresholds at 0.25 and 0.75 decide whether a
//! half cell or a full cell is lit.

use ratatui::style::Color;
use term_charts_shared::{Bounds, Candle, PlotTheme};

use crate::calcables::scaled_position;

/// The fixed candle alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandleGlyph {
    Empty,
    /// Wick through the whole cell
    Stick,
    /// Body through the whole cell
    Body,
    /// Body in the lower half, wick above it
    HalfTop,
    /// Body in the upper half, wick below it
    HalfBottom,
    /// Body in the lower half only
    HalfBodyTop,
    /// Body in the upper half only
    HalfBodyBottom,
    /// Wick ending halfway up the cell
    HalfStickTop,
    /// Wick starting halfway up the cell
    HalfStickBottom,
}

impl CandleGlyph {
    pub fn symbol(self) -> char {
        match self {
            CandleGlyph::Empty => ' ',
            CandleGlyph::Stick => '│',
            CandleGlyph::Body => '┃',
            CandleGlyph::HalfTop => '╽',
            CandleGlyph::HalfBottom => '╿',
            CandleGlyph::HalfBodyTop => '╻',
            CandleGlyph::HalfBodyBottom => '╹',
            CandleGlyph::HalfStickTop => '╷',
            CandleGlyph::HalfStickBottom => '╵',
        }
    }
}

/// Candle thresholds expressed as continuous row positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledCandle {
    pub wick_low: f64,
    pub wick_high: f64,
    pub body_low: f64,
    pub body_high: f64,
}

impl ScaledCandle {
    pub fn new(wick_low: f64, wick_high: f64, body_low: f64, body_high: f64) -> Self {
        Self {
            wick_low,
            wick_high,
            body_low,
            body_high,
        }
    }

    /// Scale a candle onto `rows` rows using relative scaling.
    pub fn from_candle(candle: &Candle, bounds: Bounds, rows: u16) -> Self {
        Self {
            wick_low: scaled_position(candle.low, bounds, rows),
            wick_high: scaled_position(candle.high, bounds, rows),
            body_low: scaled_position(candle.body_low(), bounds, rows),
            body_high: scaled_position(candle.body_high(), bounds, rows),
        }
    }
}

/// Pick the glyph for `row` (rows grow upward in value space).
///
/// Zones are tested top to bottom: upper wick-to-body, solid body, lower
/// body-to-wick. The first zone containing the row decides.
pub fn select_candle_glyph(candle: &ScaledCandle, row: i32) -> CandleGlyph {
    let h = f64::from(row);

    if candle.wick_high.ceil() >= h && h >= candle.body_high.floor() {
        let body = candle.body_high - h;
        let wick = candle.wick_high - h;
        if body > 0.75 {
            CandleGlyph::Body
        } else if body > 0.25 {
            if wick > 0.75 {
                CandleGlyph::HalfTop
            } else {
                CandleGlyph::HalfBodyTop
            }
        } else if wick > 0.75 {
            CandleGlyph::Stick
        } else if wick > 0.25 {
            CandleGlyph::HalfStickTop
        } else {
            CandleGlyph::Empty
        }
    } else if candle.body_high.floor() >= h && h >= candle.body_low.ceil() {
        CandleGlyph::Body
    } else if candle.body_low.ceil() >= h && h >= candle.wick_low.floor() {
        let body = candle.body_low - h;
        let wick = candle.wick_low - h;
        if body < 0.25 {
            CandleGlyph::Body
        } else if body < 0.75 {
            if wick < 0.25 {
                CandleGlyph::HalfBottom
            } else {
                CandleGlyph::HalfBodyBottom
            }
        } else if wick < 0.25 {
            CandleGlyph::Stick
        } else if wick < 0.75 {
            CandleGlyph::HalfStickBottom
        } else {
            CandleGlyph::Empty
        }
    } else {
        CandleGlyph::Empty
    }
}

/// Bullish when `close >= open`. Empty cells always take the neutral color.
pub fn candle_color(candle: &Candle, glyph: CandleGlyph, theme: &PlotTheme) -> Color {
    if glyph == CandleGlyph::Empty {
        theme.neutral
    } else if candle.is_bullish() {
        theme.bullish
    } else {
        theme.bearish
    }
}
