//! Configuration system for terminal charts
//! Loads plot descriptions from YAML, JSON or TOML, validates them and
//! turns them into renderer widgets.

use ratatui::{style::Color, widgets::Block};
use serde::{Deserialize, Serialize};
use term_charts_renderer::Plot;
use term_charts_shared::{
    ChartVariant, DrawDirection, LineSeeding, Marker, PlotError, PlotTheme, DOT,
};
use thiserror::Error;

pub mod parser;
pub mod presets;
pub mod validation;

pub use parser::{ConfigFormat, ConfigParser, ConfigSerializer};
pub use presets::{PlotPreset, PresetManager};
pub use validation::ConfigValidator;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Plot(#[from] PlotError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Serializable description of one plot.
///
/// Every field is optional in the source document. `min_val`/`max_val` of
/// `0.0` behave like absent bounds and are derived from the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub data: Vec<Vec<f64>>,
    pub data_labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_val: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_val: Option<f64>,
    /// Series palette; the theme's line colors when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_colors: Option<Vec<Color>>,
    pub show_axes: bool,
    pub marker: Marker,
    pub dot_marker: char,
    pub variant: ChartVariant,
    pub horizontal_scale: u16,
    pub draw_direction: DrawDirection,
    pub line_seeding: LineSeeding,
    pub theme: PlotTheme,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: None,
            data: Vec::new(),
            data_labels: Vec::new(),
            min_val: None,
            max_val: None,
            line_colors: None,
            show_axes: true,
            marker: Marker::Braille,
            dot_marker: DOT,
            variant: ChartVariant::Line,
            horizontal_scale: 1,
            draw_direction: DrawDirection::Right,
            line_seeding: LineSeeding::SecondSample,
            theme: PlotTheme::default(),
        }
    }
}

impl PlotConfig {
    /// Palette actually used for the series
    pub fn effective_line_colors(&self) -> &[Color] {
        self.line_colors.as_deref().unwrap_or(&self.theme.lines)
    }

    /// Build the widget without validating.
    pub fn to_plot(&self) -> Plot<'static> {
        let mut plot = Plot::new(self.theme.clone())
            .data(self.data.clone())
            .data_labels(self.data_labels.clone())
            .line_colors(self.effective_line_colors().to_vec())
            .show_axes(self.show_axes)
            .marker(self.marker)
            .dot_marker(self.dot_marker)
            .variant(self.variant)
            .horizontal_scale(self.horizontal_scale)
            .draw_direction(self.draw_direction)
            .line_seeding(self.line_seeding);

        if let Some(min) = self.min_val {
            plot = plot.min_val(min);
        }
        if let Some(max) = self.max_val {
            plot = plot.max_val(max);
        }
        if let Some(title) = &self.title {
            plot = plot.block(Block::bordered().title(title.clone()));
        }
        plot
    }

    /// Validate, then build the widget.
    pub fn build(&self) -> Result<Plot<'static>> {
        ConfigValidator::validate(self)?;
        Ok(self.to_plot())
    }
}
