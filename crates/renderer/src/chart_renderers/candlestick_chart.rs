//! OHLC candlesticks on the whole-cell grid

use ratatui::{buffer::Buffer, style::Style};
use term_charts_shared::{Candle, PlotError, Result};

use crate::drawables::candlestick::{candle_color, select_candle_glyph, ScaledCandle};
use crate::drawables::shared_utils::set_cell;
use crate::RenderContext;

const CHANNELS: [&str; 4] = ["open", "high", "low", "close"];

/// Fold the open, high, low and close channels into candles.
///
/// Requires exactly four channels of equal length.
pub fn fold_candles(data: &[Vec<f64>]) -> Result<Vec<Candle>> {
    if data.len() != CHANNELS.len() {
        return Err(PlotError::CandleChannelCount {
            expected: CHANNELS.len(),
            actual: data.len(),
        });
    }

    let len = data[0].len();
    for (name, channel) in CHANNELS.iter().zip(data) {
        if channel.len() != len {
            return Err(PlotError::CandleLengthMismatch {
                channel: name.to_string(),
                expected: len,
                actual: channel.len(),
            });
        }
    }

    Ok((0..len)
        .map(|j| Candle::new(data[0][j], data[1][j], data[2][j], data[3][j]))
        .collect())
}

/// Render one candle column per sample, one glyph per row.
pub fn render_candles(buf: &mut Buffer, context: &RenderContext) -> Result<()> {
    let candles = fold_candles(context.data)?;
    let area = context.draw_area;
    let top = i32::from(area.top());
    let bottom = i32::from(area.bottom());

    for (j, candle) in candles.iter().enumerate() {
        let scaled = ScaledCandle::from_candle(candle, context.bounds, area.height);
        let x = context.column(j);

        for cy in top - 1..bottom {
            let glyph = select_candle_glyph(&scaled, bottom - 1 - cy);
            let color = candle_color(candle, glyph, context.theme);
            set_cell(buf, area, x, cy, glyph.symbol(), Style::new().fg(color));
        }
    }

    log::debug!("[candlestick_chart] {} candles into {:?}", candles.len(), area);
    Ok(())
}
