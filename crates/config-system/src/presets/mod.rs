//! Preset plot configurations

pub mod candle_presets;
pub mod line_presets;

pub use candle_presets::*;
pub use line_presets::*;

use crate::{ConfigError, PlotConfig, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named plot configuration template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotPreset {
    pub name: String,
    pub description: String,
    pub config: PlotConfig,
}

/// Get all built-in presets
pub fn get_all_presets() -> Vec<PlotPreset> {
    let mut presets = line_presets::create_line_presets();
    presets.extend(candle_presets::create_candle_presets());
    presets
}

/// Preset manager for plot templates
pub struct PresetManager {
    builtin_presets: BTreeMap<String, PlotPreset>,
    user_presets: BTreeMap<String, PlotPreset>,
}

impl Default for PresetManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PresetManager {
    pub fn new() -> Self {
        let builtin_presets = get_all_presets()
            .into_iter()
            .map(|preset| (preset.name.clone(), preset))
            .collect();

        Self {
            builtin_presets,
            user_presets: BTreeMap::new(),
        }
    }

    /// Find a preset by name. Built-in presets shadow user presets.
    pub fn find_preset(&self, name: &str) -> Option<&PlotPreset> {
        self.builtin_presets
            .get(name)
            .or_else(|| self.user_presets.get(name))
    }

    pub fn get_all_presets(&self) -> Vec<&PlotPreset> {
        self.builtin_presets
            .values()
            .chain(self.user_presets.values())
            .collect()
    }

    pub fn list_presets_by_name(&self) -> Vec<&str> {
        self.get_all_presets()
            .into_iter()
            .map(|preset| preset.name.as_str())
            .collect()
    }

    /// Add a user preset
    pub fn add_user_preset(&mut self, preset: PlotPreset) -> Result<()> {
        if self.builtin_presets.contains_key(&preset.name) {
            return Err(ConfigError::Validation(format!(
                "Cannot override built-in preset: {}",
                preset.name
            )));
        }

        log::debug!("[presets] registered user preset {}", preset.name);
        self.user_presets.insert(preset.name.clone(), preset);
        Ok(())
    }

    /// Remove a user preset
    pub fn remove_user_preset(&mut self, name: &str) -> Result<()> {
        if self.builtin_presets.contains_key(name) {
            return Err(ConfigError::Validation(format!(
                "Cannot remove built-in preset: {name}"
            )));
        }

        self.user_presets.remove(name);
        Ok(())
    }

    /// Copy a preset's configuration with `data` plugged in and `overrides`
    /// merged on top of it.
    pub fn apply_preset(
        &self,
        name: &str,
        data: Vec<Vec<f64>>,
        overrides: Option<serde_json::Value>,
    ) -> Result<PlotConfig> {
        let mut config = self
            .find_preset(name)
            .ok_or_else(|| ConfigError::Validation(format!("Unknown preset: {name}")))?
            .config
            .clone();
        config.data = data;

        let Some(overrides) = overrides else {
            return Ok(config);
        };

        let mut base = serde_json::to_value(&config)
            .map_err(|e| ConfigError::Parse(format!("Serialization error: {e}")))?;
        merge_json(&mut base, overrides);

        serde_json::from_value(base)
            .map_err(|e| ConfigError::Parse(format!("Deserialization error: {e}")))
    }
}

fn merge_json(base: &mut serde_json::Value, overrides: serde_json::Value) {
    match (base, overrides) {
        (serde_json::Value::Object(base), serde_json::Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overrides) => *base = overrides,
    }
}
