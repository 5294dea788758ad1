//! The plot widget: single entry point of a draw pass

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Widget},
};
use term_charts_shared::{
    Bounds, ChartShape, ChartVariant, DrawDirection, LineSeeding, Marker, PlotError, PlotTheme,
    Result, DOT,
};

use crate::calcables::resolve_bounds;
use crate::chart_renderers::{fold_candles, renderer_for};
use crate::drawables::AxisLayout;
use crate::RenderContext;

/// Line, scatter or candlestick plot of one or more series.
///
/// Every draw recomputes bounds, layout and glyphs from the current data;
/// the widget keeps no state between draws.
///
/// ```
/// use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
/// use term_charts_renderer::Plot;
/// use term_charts_shared::Marker;
///
/// let area = Rect::new(0, 0, 30, 10);
/// let mut buf = Buffer::empty(area);
/// Plot::default()
///     .data(vec![vec![1.0, 3.0, 2.0, 5.0]])
///     .marker(Marker::Dot)
///     .render(area, &mut buf);
/// ```
#[derive(Debug, Clone)]
pub struct Plot<'a> {
    block: Option<Block<'a>>,
    data: Vec<Vec<f64>>,
    data_labels: Vec<String>,
    min_val: Option<f64>,
    max_val: Option<f64>,
    line_colors: Vec<Color>,
    theme: PlotTheme,
    show_axes: bool,
    marker: Marker,
    dot_marker: char,
    variant: ChartVariant,
    horizontal_scale: u16,
    draw_direction: DrawDirection,
    line_seeding: LineSeeding,
}

impl Default for Plot<'_> {
    fn default() -> Self {
        Self::new(PlotTheme::default())
    }
}

impl<'a> Plot<'a> {
    /// Create a plot whose default colors come from `theme`.
    pub fn new(theme: PlotTheme) -> Self {
        Self {
            block: None,
            data: Vec::new(),
            data_labels: Vec::new(),
            min_val: None,
            max_val: None,
            line_colors: theme.lines.clone(),
            theme,
            show_axes: true,
            marker: Marker::Braille,
            dot_marker: DOT,
            variant: ChartVariant::Line,
            horizontal_scale: 1,
            draw_direction: DrawDirection::Right,
            line_seeding: LineSeeding::SecondSample,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Series to plot. Candlesticks read exactly four series as open, high,
    /// low and close.
    pub fn data(mut self, data: Vec<Vec<f64>>) -> Self {
        self.data = data;
        self
    }

    pub fn data_labels(mut self, labels: Vec<String>) -> Self {
        self.data_labels = labels;
        self
    }

    /// Explicit lower bound. `0.0` means "derive from the data".
    pub fn min_val(mut self, min: f64) -> Self {
        self.min_val = Some(min);
        self
    }

    /// Explicit upper bound. `0.0` means "derive from the data".
    pub fn max_val(mut self, max: f64) -> Self {
        self.max_val = Some(max);
        self
    }

    pub fn line_colors(mut self, colors: Vec<Color>) -> Self {
        self.line_colors = colors;
        self
    }

    pub fn axes_color(mut self, color: Color) -> Self {
        self.theme.axes = color;
        self
    }

    pub fn show_axes(mut self, show: bool) -> Self {
        self.show_axes = show;
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    /// Glyph used for every sample in dot mode.
    pub fn dot_marker(mut self, symbol: char) -> Self {
        self.dot_marker = symbol;
        self
    }

    pub fn variant(mut self, variant: ChartVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Columns advanced per sample. Zero is clamped to one.
    pub fn horizontal_scale(mut self, scale: u16) -> Self {
        if scale == 0 {
            log::warn!("[plot] horizontal scale 0 clamped to 1");
        }
        self.horizontal_scale = scale.max(1);
        self
    }

    pub fn draw_direction(mut self, direction: DrawDirection) -> Self {
        self.draw_direction = direction;
        self
    }

    pub fn line_seeding(mut self, seeding: LineSeeding) -> Self {
        self.line_seeding = seeding;
        self
    }

    pub fn resolve_bounds(&self) -> Bounds {
        resolve_bounds(&self.data, self.min_val, self.max_val)
    }

    /// Axis layout for a widget occupying `area`.
    pub fn layout(&self, area: Rect) -> AxisLayout {
        let inner = match &self.block {
            Some(block) => block.inner(area),
            None => area,
        };
        AxisLayout::plan(inner, self.show_axes)
    }

    /// Check that the series and mode can be rasterized.
    pub fn validate(&self) -> Result<()> {
        if self.variant.shape() == ChartShape::Candlestick {
            if self.marker == Marker::Braille {
                return Err(PlotError::UnsupportedMarker {
                    variant: self.variant.to_string(),
                    marker: "braille".to_string(),
                });
            }
            fold_candles(&self.data)?;
        }

        Ok(())
    }

    /// Draw into `buf`, reporting configuration errors.
    ///
    /// The border and axes are drawn even when the series cannot be
    /// rasterized.
    pub fn try_draw(&self, area: Rect, buf: &mut Buffer) -> Result<()> {
        if let Some(block) = &self.block {
            block.clone().render(area, buf);
        }

        let bounds = self.resolve_bounds();
        let layout = self.layout(area);
        layout.render(
            buf,
            bounds,
            self.horizontal_scale,
            Style::new().fg(self.theme.axes),
        );

        if self.draw_direction == DrawDirection::Left {
            log::debug!("[plot] right-to-left drawing is not implemented, drawing left to right");
        }

        self.validate()?;

        let context = RenderContext {
            data: &self.data,
            data_labels: &self.data_labels,
            draw_area: layout.draw_area,
            bounds,
            variant: self.variant,
            horizontal_scale: self.horizontal_scale,
            line_colors: &self.line_colors,
            theme: &self.theme,
            dot_marker: self.dot_marker,
            line_seeding: self.line_seeding,
        };

        log::debug!(
            "[plot] {} {:?} pass, {} series, bounds {:?}, draw area {:?}",
            self.variant,
            self.marker,
            self.data.len(),
            bounds,
            layout.draw_area
        );

        renderer_for(self.marker).render(buf, &context)
    }
}

impl Widget for Plot<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &Plot<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Err(err) = self.try_draw(area, buf) {
            log::warn!("[plot] series not drawn: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Borders;

    #[test]
    fn test_defaults() {
        let plot = Plot::default();
        assert_eq!(plot.marker, Marker::Braille);
        assert_eq!(plot.variant, ChartVariant::Line);
        assert_eq!(plot.dot_marker, DOT);
        assert_eq!(plot.horizontal_scale, 1);
        assert_eq!(plot.draw_direction, DrawDirection::Right);
        assert!(plot.show_axes);
        assert_eq!(plot.line_colors, PlotTheme::default().lines);
    }

    #[test]
    fn test_zero_scale_is_clamped() {
        let plot = Plot::default().horizontal_scale(0);
        assert_eq!(plot.horizontal_scale, 1);
        assert!(plot.validate().is_ok());
    }

    #[test]
    fn test_candlestick_validation() {
        let plot = Plot::default()
            .variant(ChartVariant::Candlestick)
            .marker(Marker::Dot)
            .data(vec![vec![1.0], vec![2.0]]);
        assert!(matches!(
            plot.validate(),
            Err(PlotError::CandleChannelCount { actual: 2, .. })
        ));

        let braille = plot.clone().marker(Marker::Braille);
        assert!(matches!(
            braille.validate(),
            Err(PlotError::UnsupportedMarker { .. })
        ));
    }

    #[test]
    fn test_axes_drawn_despite_error() {
        let area = Rect::new(0, 0, 16, 8);
        let mut buf = Buffer::empty(area);
        let plot = Plot::default()
            .variant(ChartVariant::Candlestick)
            .marker(Marker::Dot)
            .data(vec![vec![1.0]]);

        assert!(plot.try_draw(area, &mut buf).is_err());
        assert_eq!(buf[(4, 6)].symbol(), "└");
    }

    #[test]
    fn test_block_shrinks_layout() {
        let plot = Plot::default().block(Block::default().borders(Borders::ALL));
        let layout = plot.layout(Rect::new(0, 0, 20, 10));
        assert_eq!(layout.inner, Rect::new(1, 1, 18, 8));
        assert_eq!(layout.draw_area, Rect::new(6, 1, 13, 6));
    }
}
