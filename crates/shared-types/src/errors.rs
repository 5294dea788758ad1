//! Common error types used across the terminal charts crates

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors detected before or during a draw pass.
///
/// Numeric degradation (empty data, zero range) is never an error; only
/// plot shapes the rasterizers cannot interpret are reported.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum PlotError {
    #[error("Candlestick plot needs {expected} channels (open, high, low, close) but got {actual}")]
    CandleChannelCount { expected: usize, actual: usize },

    #[error("Candlestick channel '{channel}' has {actual} samples, expected {expected}")]
    CandleLengthMismatch {
        channel: String,
        expected: usize,
        actual: usize,
    },

    #[error("{variant} is not supported with the {marker} marker")]
    UnsupportedMarker { variant: String, marker: String },

    #[error("Invalid horizontal scale: {scale}. Must be at least 1")]
    InvalidScale { scale: u16 },
}

/// Result type alias for plot operations
pub type Result<T> = std::result::Result<T, PlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = PlotError::CandleChannelCount {
            expected: 4,
            actual: 3,
        };
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("CandleChannelCount"));
        assert!(json.contains("\"actual\":3"));
    }

    #[test]
    fn test_error_display() {
        let error = PlotError::UnsupportedMarker {
            variant: "Candlestick".to_string(),
            marker: "braille".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Candlestick is not supported with the braille marker"
        );
        assert_eq!(
            PlotError::InvalidScale { scale: 0 }.to_string(),
            "Invalid horizontal scale: 0. Must be at least 1"
        );
    }
}
