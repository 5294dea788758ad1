//! Configuration file parser for multiple formats

use crate::{ConfigError, PlotConfig, Result};
use std::fs;
use std::path::Path;

/// Configuration format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

/// Configuration parser
pub struct ConfigParser;

impl ConfigParser {
    /// Parse configuration from a file
    pub fn parse_file(path: impl AsRef<Path>) -> Result<PlotConfig> {
        let path = path.as_ref();
        let format = Self::detect_format(path)?;
        let content = fs::read_to_string(path)?;

        log::debug!("[config] parsing {} as {:?}", path.display(), format);
        Self::parse_string(&content, format)
    }

    /// Parse configuration from a string
    pub fn parse_string(content: &str, format: ConfigFormat) -> Result<PlotConfig> {
        match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| ConfigError::Parse(format!("YAML parse error: {e}"))),
            ConfigFormat::Json => serde_json::from_str(content)
                .map_err(|e| ConfigError::Parse(format!("JSON parse error: {e}"))),
            ConfigFormat::Toml => toml::from_str(content)
                .map_err(|e| ConfigError::Parse(format!("TOML parse error: {e}"))),
        }
    }

    /// Detect configuration format from file extension
    pub fn detect_format(path: &Path) -> Result<ConfigFormat> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            ConfigError::Parse("Cannot determine config format from file extension".to_string())
        })?;

        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            "toml" => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::Parse(format!(
                "Unsupported config format: {ext}"
            ))),
        }
    }
}

/// Configuration serializer
pub struct ConfigSerializer;

impl ConfigSerializer {
    /// Serialize configuration to a file, picking the format from its
    /// extension
    pub fn serialize_file(config: &PlotConfig, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = ConfigParser::detect_format(path)?;
        let content = Self::serialize_string(config, format)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Serialize configuration to a string
    pub fn serialize_string(config: &PlotConfig, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Yaml => serde_yaml::to_string(config)
                .map_err(|e| ConfigError::Parse(format!("YAML serialize error: {e}"))),
            ConfigFormat::Json => serde_json::to_string_pretty(config)
                .map_err(|e| ConfigError::Parse(format!("JSON serialize error: {e}"))),
            ConfigFormat::Toml => toml::to_string_pretty(config)
                .map_err(|e| ConfigError::Parse(format!("TOML serialize error: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use term_charts_shared::{ChartVariant, Marker};

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
data:
  - [1.0, 2.0, 3.0]
  - [3.0, 2.0, 1.0]
data_labels: [up, down]
variant: scatter_scaled
marker: dot
dot_marker: "*"
horizontal_scale: 2
line_colors: [cyan, magenta]
"#;
        let config = ConfigParser::parse_string(yaml, ConfigFormat::Yaml).unwrap();
        assert_eq!(config.data.len(), 2);
        assert_eq!(config.data_labels, vec!["up", "down"]);
        assert_eq!(config.variant, ChartVariant::ScatterScaled);
        assert_eq!(config.marker, Marker::Dot);
        assert_eq!(config.dot_marker, '*');
        assert_eq!(config.horizontal_scale, 2);
        assert_eq!(config.line_colors, Some(vec![Color::Cyan, Color::Magenta]));
        assert!(config.show_axes);
    }

    #[test]
    fn test_json_parsing() {
        let json = r#"{
            "data": [[10.0, 12.5], [13.0, 14.0], [9.5, 11.0], [12.5, 11.5]],
            "variant": "candlestick",
            "marker": "dot",
            "min_val": 9.0,
            "show_axes": false
        }"#;
        let config = ConfigParser::parse_string(json, ConfigFormat::Json).unwrap();
        assert_eq!(config.variant, ChartVariant::Candlestick);
        assert_eq!(config.min_val, Some(9.0));
        assert_eq!(config.max_val, None);
        assert!(!config.show_axes);
    }

    #[test]
    fn test_toml_parsing() {
        let toml = r#"
title = "Load"
data = [[0.5, 0.7, 0.9]]
max_val = 1.0
line_seeding = "first_sample"

[theme]
axes = "gray"
"#;
        let config = ConfigParser::parse_string(toml, ConfigFormat::Toml).unwrap();
        assert_eq!(config.title.as_deref(), Some("Load"));
        assert_eq!(config.max_val, Some(1.0));
        assert_eq!(config.theme.axes, Color::Gray);
        // Unset theme fields keep their defaults.
        assert_eq!(config.theme.bullish, Color::Green);
    }

    #[test]
    fn test_parse_errors() {
        let result = ConfigParser::parse_string("variant: pie", ConfigFormat::Yaml);
        assert!(matches!(result, Err(ConfigError::Parse(msg)) if msg.starts_with("YAML")));
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ConfigParser::detect_format(Path::new("plot.YML")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigParser::detect_format(Path::new("plot.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert!(ConfigParser::detect_format(Path::new("plot.ini")).is_err());
        assert!(ConfigParser::detect_format(Path::new("plot")).is_err());
    }

    #[test]
    fn test_json_serialization() {
        let config = PlotConfig {
            data: vec![vec![1.0, 2.0]],
            variant: ChartVariant::LineScaled,
            ..Default::default()
        };
        let json = ConfigSerializer::serialize_string(&config, ConfigFormat::Json).unwrap();
        assert!(json.contains("\"line_scaled\""));
        assert!(!json.contains("title"));

        let parsed = ConfigParser::parse_string(&json, ConfigFormat::Json).unwrap();
        assert_eq!(parsed, config);
    }
}
