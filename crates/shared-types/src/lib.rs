//! Shared types for the terminal charts crates
//!
//! This crate contains the plain data types that are shared between the
//! renderer and the configuration system: chart variants, marker modes,
//! value bounds, OHLC candles and the plot theme.

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod theme;

pub use errors::{PlotError, Result};
pub use theme::{select_color, PlotTheme};

/// Fixed-width left margin reserved for y-axis labels
pub const Y_AXIS_LABELS_WIDTH: u16 = 4;
/// Fixed-height bottom margin reserved for x-axis labels
pub const X_AXIS_LABELS_HEIGHT: u16 = 1;
/// Label spacing (in samples) between consecutive x-axis labels
pub const X_AXIS_LABELS_GAP: u16 = 2;
/// Blank rows between consecutive y-axis labels
pub const Y_AXIS_LABELS_GAP: u16 = 1;

/// Default whole-cell marker glyph
pub const DOT: char = '•';

/// Shape of the rendered trace
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChartShape {
    Line,
    Scatter,
    Candlestick,
}

/// How a sample value is mapped into the `[0, 1]` height range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ScalingPolicy {
    /// `value / max`, with an implicit zero baseline
    Absolute,
    /// `(value - min) / (max - min)`
    Relative,
}

/// Chart variants supported by the rasterizers
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChartVariant {
    #[default]
    Line,
    Scatter,
    Candlestick,
    LineScaled,
    ScatterScaled,
}

impl ChartVariant {
    pub fn shape(self) -> ChartShape {
        match self {
            ChartVariant::Line | ChartVariant::LineScaled => ChartShape::Line,
            ChartVariant::Scatter | ChartVariant::ScatterScaled => ChartShape::Scatter,
            ChartVariant::Candlestick => ChartShape::Candlestick,
        }
    }

    /// Candlesticks always use relative scaling.
    pub fn scaling(self) -> ScalingPolicy {
        match self {
            ChartVariant::Line | ChartVariant::Scatter => ScalingPolicy::Absolute,
            ChartVariant::Candlestick | ChartVariant::LineScaled | ChartVariant::ScatterScaled => {
                ScalingPolicy::Relative
            }
        }
    }
}

impl std::fmt::Display for ChartVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartVariant::Line => write!(f, "Line"),
            ChartVariant::Scatter => write!(f, "Scatter"),
            ChartVariant::Candlestick => write!(f, "Candlestick"),
            ChartVariant::LineScaled => write!(f, "LineScaled"),
            ChartVariant::ScatterScaled => write!(f, "ScatterScaled"),
        }
    }
}

/// Addressing resolution of the rasterizer
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    /// 2x4 sub-pixels per cell, folded into braille glyphs
    #[default]
    Braille,
    /// One glyph per terminal cell
    Dot,
}

/// Direction in which samples are laid out along the x axis.
///
/// Only `Right` is rendered; `Left` is accepted and stored.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DrawDirection {
    Left,
    #[default]
    Right,
}

/// Which sample seeds the first braille line segment
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LineSeeding {
    /// Seeds from the second sample and starts iterating there, so the first
    /// sample is never drawn and the first segment is flat.
    #[default]
    SecondSample,
    /// Seeds from the first sample; every sample lands on its own column.
    FirstSample,
}

/// Effective value range used for normalization
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// True when relative normalization would divide by zero or produce a
    /// non-finite height.
    pub fn is_degenerate(&self) -> bool {
        !self.min.is_finite() || !self.max.is_finite() || self.max == self.min
    }
}

/// One OHLC sample folded from the four candlestick channels
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            open,
            high,
            low,
            close,
        }
    }

    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    pub fn body_low(&self) -> f64 {
        self.open.min(self.close)
    }

    pub fn body_high(&self) -> f64 {
        self.open.max(self.close)
    }
}
