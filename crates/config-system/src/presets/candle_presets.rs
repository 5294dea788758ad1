//! Candlestick preset configurations

use crate::{PlotConfig, PlotPreset};
use term_charts_shared::{ChartVariant, Marker};

/// Create the candlestick presets
pub fn create_candle_presets() -> Vec<PlotPreset> {
    vec![candlestick_preset()]
}

/// OHLC candles; expects open, high, low and close as four series
fn candlestick_preset() -> PlotPreset {
    PlotPreset {
        name: "Candlestick".to_string(),
        description: "OHLC candles at quarter-cell resolution".to_string(),
        config: PlotConfig {
            marker: Marker::Dot,
            variant: ChartVariant::Candlestick,
            data_labels: vec![
                "open".to_string(),
                "high".to_string(),
                "low".to_string(),
                "close".to_string(),
            ],
            ..Default::default()
        },
    }
}
