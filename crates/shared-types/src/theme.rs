//! Default colors injected into a plot at construction

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Colors used by a plot.
///
/// Series colors are selected by series index, cycling when there are more
/// series than colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotTheme {
    pub lines: Vec<Color>,
    pub axes: Color,
    pub bullish: Color,
    pub bearish: Color,
    pub neutral: Color,
}

impl Default for PlotTheme {
    fn default() -> Self {
        Self {
            lines: vec![
                Color::Red,
                Color::Green,
                Color::Yellow,
                Color::Blue,
                Color::Magenta,
                Color::Cyan,
                Color::White,
            ],
            axes: Color::White,
            bullish: Color::Green,
            bearish: Color::Red,
            neutral: Color::White,
        }
    }
}

/// Pick the color for series `index`, cycling through `colors`.
pub fn select_color(colors: &[Color], index: usize) -> Color {
    if colors.is_empty() {
        return Color::Reset;
    }
    colors[index % colors.len()]
}
