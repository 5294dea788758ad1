//! Axis layout: label margins, draw area and axis decoration

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use term_charts_shared::{Bounds, X_AXIS_LABELS_HEIGHT, Y_AXIS_LABELS_WIDTH};

use super::shared_utils::set_cell;
use super::{x_axis, y_axis};

pub const ORIGIN: char = '└';
pub const HORIZONTAL_DASH: char = '┈';
pub const VERTICAL_DASH: char = '┊';

/// Geometry of one draw pass: the widget's inner rectangle and the part of
/// it left for plotting once the label margins are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisLayout {
    pub inner: Rect,
    pub draw_area: Rect,
    pub show_axes: bool,
}

impl AxisLayout {
    pub fn plan(inner: Rect, show_axes: bool) -> Self {
        if !show_axes {
            return Self {
                inner,
                draw_area: inner,
                show_axes,
            };
        }

        // One extra column for the vertical axis line, one extra row for the
        // horizontal one.
        let left_margin = (Y_AXIS_LABELS_WIDTH + 1).min(inner.width);
        let bottom_margin = (X_AXIS_LABELS_HEIGHT + 1).min(inner.height);
        let draw_area = Rect::new(
            inner.x + left_margin,
            inner.y,
            inner.width - left_margin,
            inner.height - bottom_margin,
        );

        Self {
            inner,
            draw_area,
            show_axes,
        }
    }

    /// Draw the origin, both dashed axis lines and all labels.
    ///
    /// Writes nothing when axes are hidden. Every write stays inside the
    /// inner rectangle.
    pub fn render(&self, buf: &mut Buffer, bounds: Bounds, horizontal_scale: u16, style: Style) {
        if !self.show_axes {
            return;
        }

        let inner = self.inner;
        let left = i32::from(inner.x);
        let top = i32::from(inner.y);
        let axis_x = left + i32::from(Y_AXIS_LABELS_WIDTH);
        let axis_y = i32::from(inner.bottom()) - i32::from(X_AXIS_LABELS_HEIGHT) - 1;

        set_cell(buf, inner, axis_x, axis_y, ORIGIN, style);

        for i in i32::from(Y_AXIS_LABELS_WIDTH) + 1..i32::from(inner.width) {
            set_cell(buf, inner, left + i, axis_y, HORIZONTAL_DASH, style);
        }

        for i in 0..axis_y - top {
            set_cell(buf, inner, axis_x, top + i, VERTICAL_DASH, style);
        }

        x_axis::render_labels(buf, inner, horizontal_scale, style);
        y_axis::render_labels(buf, inner, bounds, style);
    }
}
