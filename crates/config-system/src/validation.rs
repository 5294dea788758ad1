//! Configuration validation utilities

use crate::{ConfigError, PlotConfig, Result};
use term_charts_renderer::fold_candles;
use term_charts_shared::{ChartShape, Marker, PlotError};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete plot configuration
    pub fn validate(config: &PlotConfig) -> Result<()> {
        Self::validate_scale(config)?;
        Self::validate_bounds(config)?;
        Self::validate_palette(config)?;
        Self::validate_marker(config)?;
        Self::validate_series(config)?;
        Ok(())
    }

    fn validate_scale(config: &PlotConfig) -> Result<()> {
        if config.horizontal_scale == 0 {
            return Err(PlotError::InvalidScale {
                scale: config.horizontal_scale,
            }
            .into());
        }
        Ok(())
    }

    /// Explicit bounds must be finite and ordered. Zero counts as unset.
    fn validate_bounds(config: &PlotConfig) -> Result<()> {
        for (name, value) in [("min_val", config.min_val), ("max_val", config.max_val)] {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(ConfigError::Validation(format!(
                        "Invalid {name}: {value}. Must be finite"
                    )));
                }
            }
        }

        let min = config.min_val.filter(|v| *v != 0.0);
        let max = config.max_val.filter(|v| *v != 0.0);
        if let (Some(min), Some(max)) = (min, max) {
            if min >= max {
                return Err(ConfigError::Validation(format!(
                    "min_val ({min}) must be less than max_val ({max})"
                )));
            }
        }
        Ok(())
    }

    fn validate_palette(config: &PlotConfig) -> Result<()> {
        if config.effective_line_colors().is_empty() {
            return Err(ConfigError::Validation(
                "Line color palette is empty".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_marker(config: &PlotConfig) -> Result<()> {
        if config.dot_marker.is_control() {
            return Err(ConfigError::Validation(format!(
                "Invalid dot_marker: {:?}. Must be a printable character",
                config.dot_marker
            )));
        }
        Ok(())
    }

    fn validate_series(config: &PlotConfig) -> Result<()> {
        if config.variant.shape() == ChartShape::Candlestick {
            if config.marker != Marker::Dot {
                return Err(ConfigError::Validation(format!(
                    "{} charts require the dot marker",
                    config.variant
                )));
            }
            fold_candles(&config.data)?;
        }

        if config.data_labels.len() > config.data.len() {
            log::warn!(
                "[config] {} labels for {} series, extra labels are ignored",
                config.data_labels.len(),
                config.data.len()
            );
        }
        Ok(())
    }
}
