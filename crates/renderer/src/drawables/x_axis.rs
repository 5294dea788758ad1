//! X-axis labels: 1-based sample indices spaced by the horizontal scale

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use term_charts_shared::{X_AXIS_LABELS_GAP, Y_AXIS_LABELS_WIDTH};

use super::shared_utils::set_string;

/// Write the `0` origin label followed by sample-index labels along the
/// bottom row of `inner`.
pub fn render_labels(buf: &mut Buffer, inner: Rect, horizontal_scale: u16, style: Style) {
    if inner.height == 0 {
        return;
    }

    let scale = i32::from(horizontal_scale.max(1));
    let gap = i32::from(X_AXIS_LABELS_GAP);
    let axis_x = i32::from(inner.x) + i32::from(Y_AXIS_LABELS_WIDTH);
    let label_y = i32::from(inner.bottom()) - 1;

    set_string(buf, inner, axis_x, label_y, "0", style);

    let mut x = axis_x + gap * scale + 1;
    while x < i32::from(inner.right()) - 1 {
        let label = ((x - axis_x - 1) / scale + 1).to_string();
        set_string(buf, inner, x, label_y, &label, style);
        x += (label.len() as i32 + gap) * scale;
    }
}
