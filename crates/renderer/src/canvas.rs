//! Braille sub-pixel canvas
//!
//! Each terminal cell holds a 2x4 grid of sub-pixels. Sub-pixel coordinates
//! are absolute: sub-pixel `(x, y)` belongs to cell `(x / 2, y / 4)`. Points
//! are accumulated per cell and folded into U+2800 braille glyphs by
//! [`BrailleCanvas::draw`].

use std::collections::BTreeMap;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};

use crate::drawables::shared_utils::set_cell;

pub const BRAILLE_BASE: u32 = 0x2800;

/// Dot bit for sub-pixel `[row][column]` inside one cell.
const BRAILLE_DOTS: [[u8; 2]; 4] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

/// A sub-pixel position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubPixel {
    pub x: i32,
    pub y: i32,
}

impl SubPixel {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy)]
struct BrailleCell {
    dots: u8,
    color: Color,
}

#[derive(Debug, Clone)]
pub struct BrailleCanvas {
    area: Rect,
    // Keyed (row, column) so cells fold in reading order.
    cells: BTreeMap<(u16, u16), BrailleCell>,
}

impl BrailleCanvas {
    /// Canvas covering the cells of `area`; sub-pixels outside it are dropped
    /// when the canvas is folded onto a buffer.
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            cells: BTreeMap::new(),
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Light one sub-pixel. The last color set in a cell wins.
    pub fn set_point(&mut self, point: SubPixel, color: Color) {
        if point.x < 0 || point.y < 0 {
            return;
        }
        let column = point.x / 2;
        let row = point.y / 4;
        if column > i32::from(u16::MAX) || row > i32::from(u16::MAX) {
            return;
        }

        let dot = BRAILLE_DOTS[(point.y % 4) as usize][(point.x % 2) as usize];
        let cell = self
            .cells
            .entry((row as u16, column as u16))
            .or_insert(BrailleCell { dots: 0, color });
        cell.dots |= dot;
        cell.color = color;
    }

    /// Light every sub-pixel on the Bresenham line from `from` to `to`,
    /// both ends included. The segment is clipped to the canvas area first,
    /// so the work is bounded by the area whatever the endpoints.
    pub fn set_line(&mut self, from: SubPixel, to: SubPixel, color: Color) {
        let Some((from, to)) = self.clip_segment(from, to) else {
            return;
        };
        for point in line_points(from, to) {
            self.set_point(point, color);
        }
    }

    /// Liang-Barsky clip against the inclusive sub-pixel rectangle of the
    /// area. `None` when no part of the segment is inside.
    fn clip_segment(&self, from: SubPixel, to: SubPixel) -> Option<(SubPixel, SubPixel)> {
        if self.area.is_empty() {
            return None;
        }
        let min_x = f64::from(self.area.left()) * 2.0;
        let max_x = f64::from(self.area.right()) * 2.0 - 1.0;
        let min_y = f64::from(self.area.top()) * 4.0;
        let max_y = f64::from(self.area.bottom()) * 4.0 - 1.0;

        let (x0, y0) = (f64::from(from.x), f64::from(from.y));
        let dx = f64::from(to.x) - x0;
        let dy = f64::from(to.y) - y0;

        let mut t0 = 0.0_f64;
        let mut t1 = 1.0_f64;
        for (p, q) in [
            (-dx, x0 - min_x),
            (dx, max_x - x0),
            (-dy, y0 - min_y),
            (dy, max_y - y0),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }

        let at = |t: f64| SubPixel::new((x0 + t * dx).round() as i32, (y0 + t * dy).round() as i32);
        let start = if t0 > 0.0 { at(t0) } else { from };
        let end = if t1 < 1.0 { at(t1) } else { to };
        Some((start, end))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Braille glyph for cell `(x, y)`, if any sub-pixel in it is lit.
    #[cfg(test)]
    pub(crate) fn glyph_at(&self, x: u16, y: u16) -> Option<char> {
        self.cells
            .get(&(y, x))
            .and_then(|cell| char::from_u32(BRAILLE_BASE + u32::from(cell.dots)))
    }

    /// Fold the lit sub-pixels into braille glyphs inside the canvas area.
    pub fn draw(&self, buf: &mut Buffer) {
        for (&(row, column), cell) in &self.cells {
            let Some(symbol) = char::from_u32(BRAILLE_BASE + u32::from(cell.dots)) else {
                continue;
            };
            set_cell(
                buf,
                self.area,
                i32::from(column),
                i32::from(row),
                symbol,
                Style::new().fg(cell.color),
            );
        }
    }
}

/// Integer points on the line between two sub-pixels.
pub fn line_points(from: SubPixel, to: SubPixel) -> LinePoints {
    let dx = (i64::from(to.x) - i64::from(from.x)).abs();
    let dy = (i64::from(to.y) - i64::from(from.y)).abs();
    LinePoints {
        x: from.x,
        y: from.y,
        to,
        dx,
        dy,
        sx: if from.x < to.x { 1 } else { -1 },
        sy: if from.y < to.y { 1 } else { -1 },
        err: dx - dy,
        done: false,
    }
}

/// Bresenham walk from one sub-pixel to another, both ends included
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i32,
    y: i32,
    to: SubPixel,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl Iterator for LinePoints {
    type Item = SubPixel;

    fn next(&mut self) -> Option<SubPixel> {
        if self.done {
            return None;
        }

        let point = SubPixel::new(self.x, self.y);
        if self.x == self.to.x && self.y == self.to.y {
            self.done = true;
            return Some(point);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(point)
    }
}
