//! Shared utilities for drawable components

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

/// Buffer position of cell `(x, y)` when it lies inside `area`.
pub fn cell_in(area: Rect, x: i32, y: i32) -> Option<(u16, u16)> {
    let inside = x >= i32::from(area.left())
        && x < i32::from(area.right())
        && y >= i32::from(area.top())
        && y < i32::from(area.bottom());
    inside.then_some((x as u16, y as u16))
}

/// Write a styled glyph, but only inside `area`.
///
/// Returns whether the cell was written.
pub fn set_cell(buf: &mut Buffer, area: Rect, x: i32, y: i32, symbol: char, style: Style) -> bool {
    let Some(position) = cell_in(area, x, y) else {
        return false;
    };
    match buf.cell_mut(position) {
        Some(cell) => {
            cell.set_char(symbol).set_style(style);
            true
        }
        None => false,
    }
}

/// Write `text` starting at `(x, y)`, clipped to the right edge of `clip`.
pub fn set_string(buf: &mut Buffer, clip: Rect, x: i32, y: i32, text: &str, style: Style) {
    if cell_in(clip, x, y).is_none() {
        return;
    }
    let max_width = (i32::from(clip.right()) - x) as usize;
    buf.set_stringn(x as u16, y as u16, text, max_width, style);
}
