//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn plain(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    pub const fn cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::plain(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        CellStyle::default().cell(' ')
    }
}

/// 2D framebuffer of styled character cells, stored row-major.
///
/// All drawing clips silently at the edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, reusing the allocation when it is large enough.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells, or an empty slice past the bottom.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    #[inline]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, style.cell(ch));
    }

    /// Write `s` starting at `(x, y)`. Returns the column after the last char.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
        cx
    }

    /// Write `s` centered within `[x, x + w)`.
    pub fn put_str_centered(&mut self, x: u16, w: u16, y: u16, s: &str, style: CellStyle) {
        let len = s.chars().count() as u16;
        let cx = x.saturating_add(w.saturating_sub(len) / 2);
        self.put_str(cx, y, s, style);
    }

    /// Write a number without allocating.
    pub fn put_u32(&mut self, x: u16, y: u16, n: u32, style: CellStyle) -> u16 {
        let mut digits = [b'0'; 10];
        let len = write_digits(n, &mut digits, None);
        self.put_ascii(x, y, &digits[digits.len() - len..], style)
    }

    /// Write a number with `,` between groups of three digits.
    pub fn put_u32_grouped(&mut self, x: u16, y: u16, n: u32, style: CellStyle) -> u16 {
        let mut digits = [b'0'; 13];
        let len = write_digits(n, &mut digits, Some(b','));
        self.put_ascii(x, y, &digits[digits.len() - len..], style)
    }

    /// Write a grouped number right-aligned within `[x, x + w)`.
    ///
    /// A number wider than `w` keeps its leading characters. Returns the
    /// column of the first character written.
    pub fn put_u32_grouped_right(
        &mut self,
        x: u16,
        w: u16,
        y: u16,
        n: u32,
        style: CellStyle,
    ) -> u16 {
        let mut digits = [b'0'; 13];
        let len = write_digits(n, &mut digits, Some(b','));
        let text = &digits[digits.len() - len..];
        let shown = &text[..text.len().min(w as usize)];
        let start = x.saturating_add(w - shown.len() as u16);
        self.put_ascii(start, y, shown, style);
        start
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Single-line box outline.
    pub fn draw_box(&mut self, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x + w - 1;
        let bottom = y + h - 1;

        self.put_char(x, y, '┌', style);
        self.put_char(right, y, '┐', style);
        self.put_char(x, bottom, '└', style);
        self.put_char(right, bottom, '┘', style);
        for cx in x + 1..right {
            self.put_char(cx, y, '─', style);
            self.put_char(cx, bottom, '─', style);
        }
        for cy in y + 1..bottom {
            self.put_char(x, cy, '│', style);
            self.put_char(right, cy, '│', style);
        }
    }

    fn put_ascii(&mut self, x: u16, y: u16, bytes: &[u8], style: CellStyle) -> u16 {
        let mut cx = x;
        for &b in bytes {
            self.put_char(cx, y, b as char, style);
            cx = cx.saturating_add(1);
        }
        cx
    }
}

/// Fill `out` from the right with the decimal digits of `n`. Returns the
/// number of bytes written.
fn write_digits(mut n: u32, out: &mut [u8], separator: Option<u8>) -> usize {
    let mut i = out.len();
    let mut count = 0;
    loop {
        if count == 3 {
            if let Some(sep) = separator {
                i -= 1;
                out[i] = sep;
            }
            count = 0;
        }
        i -= 1;
        out[i] = b'0' + (n % 10) as u8;
        n /= 10;
        count += 1;
        if n == 0 {
            break;
        }
    }
    out.len() - i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(fb: &FrameBuffer, y: u16) -> String {
        fb.row(y).iter().map(|c| c.ch).collect()
    }

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        let end = fb.put_str(2, 0, "abc", CellStyle::default());
        assert_eq!(end, 4);
        assert_eq!(text(&fb, 0), "  ab");
    }

    #[test]
    fn put_u32_writes_plain_digits() {
        let mut fb = FrameBuffer::new(12, 2);
        fb.put_u32(0, 0, 0, CellStyle::default());
        fb.put_u32(0, 1, 4_294_967_295, CellStyle::default());
        assert_eq!(text(&fb, 0).trim_end(), "0");
        assert_eq!(text(&fb, 1).trim_end(), "4294967295");
    }

    #[test]
    fn put_u32_grouped_inserts_separators() {
        let cases = [
            (0, "0"),
            (999, "999"),
            (1_000, "1,000"),
            (123_456, "123,456"),
            (1_234_567, "1,234,567"),
            (u32::MAX, "4,294,967,295"),
        ];
        for (n, want) in cases {
            let mut fb = FrameBuffer::new(16, 1);
            fb.put_u32_grouped(0, 0, n, CellStyle::default());
            assert_eq!(text(&fb, 0).trim_end(), want, "{n}");
        }
    }

    #[test]
    fn put_u32_grouped_right_stays_in_range() {
        let mut fb = FrameBuffer::new(10, 3);
        let start = fb.put_u32_grouped_right(1, 8, 0, 12_345, CellStyle::default());
        assert_eq!(start, 3);
        assert_eq!(text(&fb, 0), "   12,345 ");

        let start = fb.put_u32_grouped_right(1, 8, 1, 0, CellStyle::default());
        assert_eq!(start, 8);
        assert_eq!(text(&fb, 1), "        0 ");

        let start = fb.put_u32_grouped_right(1, 8, 2, u32::MAX, CellStyle::default());
        assert_eq!(start, 1);
        assert_eq!(text(&fb, 2), " 4,294,96 ");
    }

    #[test]
    fn resize_keeps_dimensions_consistent() {
        let mut fb = FrameBuffer::new(3, 3);
        fb.resize(5, 2);
        assert_eq!(fb.cells().len(), 10);
        assert_eq!(fb.row(1).len(), 5);
        assert!(fb.row(2).is_empty());
        assert!(fb.get(4, 1).is_some());
        assert!(fb.get(5, 1).is_none());
    }

    #[test]
    fn draw_box_corners() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.draw_box(0, 0, 4, 3, CellStyle::default());
        assert_eq!(text(&fb, 0), "┌──┐");
        assert_eq!(text(&fb, 1), "│  │");
        assert_eq!(text(&fb, 2), "└──┘");
    }
}
