//! Y-axis labels: interpolated values printed every other row

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use term_charts_shared::{Bounds, X_AXIS_LABELS_HEIGHT, Y_AXIS_LABELS_GAP};

use super::shared_utils::set_string;

pub fn render_labels(buf: &mut Buffer, inner: Rect, bounds: Bounds, style: Style) {
    let draw_rows = i32::from(inner.height) - i32::from(X_AXIS_LABELS_HEIGHT) - 1;
    if draw_rows <= 0 {
        return;
    }

    let step = i32::from(Y_AXIS_LABELS_GAP) + 1;
    let vertical_unit = bounds.range() / f64::from(draw_rows);
    let bottom = i32::from(inner.bottom());

    let mut i = 0;
    while i * step < i32::from(inner.height) - 1 {
        let value = bounds.min + f64::from(i) * vertical_unit * f64::from(step);
        let label = format!("{value:.2}");
        set_string(buf, inner, i32::from(inner.x), bottom - i * step - 2, &label, style);
        i += 1;
    }
}
