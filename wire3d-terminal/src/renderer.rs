/// ASCII line rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Point2;
use std::io::Write;
use wire3d_core::{LineCommand, LineSink, Viewport};

/// Lines spanning more cells than this are dropped rather than walked
const MAX_LINE_SPAN: i64 = 100_000;

/// ASCII renderer that rasterizes screen-space lines into terminal cells
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    viewport: Viewport,
    char_buffer: Vec<char>,
    color_buffer: Vec<Option<Color>>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize, viewport: Viewport) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            viewport,
            char_buffer: vec![' '; size],
            color_buffer: vec![None; size],
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height, self.viewport);
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(' ');
        self.color_buffer.fill(None);
    }

    pub fn cell(&self, x: usize, y: usize) -> char {
        self.char_buffer[y * self.width + x]
    }

    /// Map a viewport point to fractional cell coordinates
    pub fn to_cell(&self, point: &Point2<f64>) -> (f64, f64) {
        (
            point.x * self.width as f64 / self.viewport.width as f64,
            point.y * self.height as f64 / self.viewport.height as f64,
        )
    }

    /// Map a cell back to the viewport point at its center
    pub fn to_viewport(&self, column: u16, row: u16) -> (f64, f64) {
        (
            (column as f64 + 0.5) * self.viewport.width as f64 / self.width.max(1) as f64,
            (row as f64 + 0.5) * self.viewport.height as f64 / self.height.max(1) as f64,
        )
    }

    fn plot(&mut self, x: i64, y: i64, character: char, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.char_buffer[idx] = character;
        self.color_buffer[idx] = Some(color);
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current = None;
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                let color = self.color_buffer[idx].unwrap_or(Color::DarkGrey);
                if current != Some(color) {
                    writer.queue(SetForegroundColor(color))?;
                    current = Some(color);
                }
                writer.queue(Print(self.char_buffer[idx]))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl LineSink for AsciiRenderer {
    fn draw_line(&mut self, line: &LineCommand) {
        let (x0, y0) = self.to_cell(&line.start);
        let (x1, y1) = self.to_cell(&line.end);
        if ![x0, y0, x1, y1].iter().all(|v| v.is_finite()) {
            return;
        }
        // Checked in floating point: the i64 casts below saturate
        let span = MAX_LINE_SPAN as f64;
        if (x1 - x0).abs() > span || (y1 - y0).abs() > span {
            return;
        }

        let (x0, y0) = (x0.floor() as i64, y0.floor() as i64);
        let (x1, y1) = (x1.floor() as i64, y1.floor() as i64);
        let dx = x1.saturating_sub(x0).saturating_abs();
        let dy = -y1.saturating_sub(y0).saturating_abs();

        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let character = slope_char(x1 - x0, y1 - y0);
        let (r, g, b) = line.color.to_rgb8();
        let color = Color::Rgb { r, g, b };

        // Bresenham
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.plot(x, y, character, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

/// Pick a glyph matching the line direction; rows grow downward
fn slope_char(dx: i64, dy: i64) -> char {
    if dx == 0 && dy == 0 {
        return '+';
    }
    let (adx, ady) = (dx.abs(), dy.abs());
    if ady * 2 <= adx {
        '-'
    } else if adx * 2 <= ady {
        '|'
    } else if (dx > 0) == (dy > 0) {
        '\\'
    } else {
        '/'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire3d_core::Color as LineColor;

    fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> LineCommand {
        LineCommand {
            start: Point2::new(x0, y0),
            end: Point2::new(x1, y1),
            color: LineColor::WHITE,
        }
    }

    #[test]
    fn test_horizontal_line() {
        let mut renderer = AsciiRenderer::new(8, 6, Viewport::new(80, 60));
        renderer.draw_line(&line(5.0, 25.0, 75.0, 25.0));
        for x in 0..8 {
            assert_eq!(renderer.cell(x, 2), '-');
        }
        assert_eq!(renderer.cell(0, 0), ' ');
    }

    #[test]
    fn test_diagonal_glyphs() {
        let mut renderer = AsciiRenderer::new(10, 10, Viewport::new(10, 10));
        renderer.draw_line(&line(0.0, 0.0, 9.0, 9.0));
        assert_eq!(renderer.cell(4, 4), '\\');
        renderer.clear();
        renderer.draw_line(&line(0.0, 9.0, 9.0, 0.0));
        assert_eq!(renderer.cell(4, 5), '/');
    }

    #[test]
    fn test_clips_and_skips_non_finite() {
        let mut renderer = AsciiRenderer::new(4, 4, Viewport::new(4, 4));
        renderer.draw_line(&line(-50.0, 1.0, 50.0, 1.0));
        assert!((0..4).all(|x| renderer.cell(x, 1) == '-'));
        renderer.clear();
        renderer.draw_line(&line(f64::INFINITY, 0.0, 1.0, 1.0));
        assert!(renderer.char_buffer.iter().all(|&c| c == ' '));
    }

    #[test]
    fn test_skips_lines_beyond_i64_range() {
        let mut renderer = AsciiRenderer::new(4, 4, Viewport::new(4, 4));
        renderer.draw_line(&line(-1e300, 1.0, 1e300, 1.0));
        renderer.draw_line(&line(1.0, -1e300, 1.0, 1e300));
        renderer.draw_line(&line(-1e19, 2.0, 1e19, 2.0));
        assert!(renderer.char_buffer.iter().all(|&c| c == ' '));
    }

    #[test]
    fn test_cell_viewport_mapping() {
        let renderer = AsciiRenderer::new(80, 24, Viewport::new(800, 600));
        assert_eq!(renderer.to_viewport(0, 0), (5.0, 12.5));
        assert_eq!(renderer.to_cell(&Point2::new(400.0, 300.0)), (40.0, 12.0));
    }
}
