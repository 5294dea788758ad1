//! Configuration system demonstration
//!
//! Renders every built-in preset plus an optional config file passed as the
//! first argument, printing each buffer as plain text.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use term_charts_config::{ConfigParser, PlotConfig, PresetManager};
use term_charts_shared::ChartVariant;

fn print_buffer(buf: &Buffer) {
    for y in buf.area.top()..buf.area.bottom() {
        let line: String = (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect();
        println!("{line}");
    }
}

fn render(config: &PlotConfig) -> Result<(), Box<dyn std::error::Error>> {
    let plot = config.build()?;
    let area = Rect::new(0, 0, 60, 16);
    let mut buf = Buffer::empty(area);
    plot.try_draw(area, &mut buf)?;
    print_buffer(&buf);
    Ok(())
}

fn wave(len: usize, phase: f64) -> Vec<f64> {
    (0..len)
        .map(|i| (i as f64 * 0.35 + phase).sin() * 10.0 + 20.0)
        .collect()
}

fn candles(len: usize) -> Vec<Vec<f64>> {
    let closes = wave(len, 0.0);
    let opens: Vec<f64> = std::iter::once(20.0)
        .chain(closes.iter().copied())
        .take(len)
        .collect();
    let highs = opens.iter().zip(&closes).map(|(o, c)| o.max(*c) + 1.5).collect();
    let lows = opens.iter().zip(&closes).map(|(o, c)| o.min(*c) - 1.5).collect();
    vec![opens, highs, lows, closes]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Terminal Charts Configuration Demo\n");

    let manager = PresetManager::new();
    for preset in manager.get_all_presets() {
        let data = if preset.config.variant == ChartVariant::Candlestick {
            candles(50)
        } else {
            vec![wave(50, 0.0), wave(50, 1.5)]
        };
        let mut config = manager.apply_preset(&preset.name, data, None)?;
        config.title = Some(preset.name.clone());

        println!("{}: {}", preset.name, preset.description);
        render(&config)?;
        println!();
    }

    if let Some(path) = std::env::args().nth(1) {
        println!("Config file: {path}");
        let config = ConfigParser::parse_file(&path)?;
        render(&config)?;
    }

    Ok(())
}
