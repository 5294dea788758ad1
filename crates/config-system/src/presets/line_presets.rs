//! Line and scatter preset configurations

use crate::{PlotConfig, PlotPreset};
use term_charts_shared::{ChartVariant, LineSeeding, Marker};

/// Create the line and scatter presets
pub fn create_line_presets() -> Vec<PlotPreset> {
    vec![line_preset(), scatter_preset(), braille_line_preset()]
}

fn line_preset() -> PlotPreset {
    PlotPreset {
        name: "Line".to_string(),
        description: "One dot per sample, scaled against the data range".to_string(),
        config: PlotConfig {
            marker: Marker::Dot,
            variant: ChartVariant::LineScaled,
            ..Default::default()
        },
    }
}

fn scatter_preset() -> PlotPreset {
    PlotPreset {
        name: "Scatter".to_string(),
        description: "Braille points without connecting segments".to_string(),
        config: PlotConfig {
            marker: Marker::Braille,
            variant: ChartVariant::ScatterScaled,
            ..Default::default()
        },
    }
}

fn braille_line_preset() -> PlotPreset {
    PlotPreset {
        name: "Braille Line".to_string(),
        description: "Connected braille segments starting from the first sample".to_string(),
        config: PlotConfig {
            marker: Marker::Braille,
            variant: ChartVariant::LineScaled,
            line_seeding: LineSeeding::FirstSample,
            ..Default::default()
        },
    }
}
