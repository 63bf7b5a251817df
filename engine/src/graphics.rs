use crate::{surface::SurfaceSize, ui::Rect};

pub type Color = [u8; 4];

// A tiny block font, so text needs no font assets.
pub const DEFAULT_TEXT_SCALE: u32 = 2;
pub const GLYPH_W: u32 = 3;
pub const GLYPH_H: u32 = 5;

pub fn glyph_advance_x(scale: u32) -> u32 {
    (GLYPH_W + 1) * scale.max(1)
}

pub fn line_advance_y(scale: u32) -> u32 {
    (GLYPH_H + 1) * scale.max(1)
}

/// Pixel width of `text` on a single line at `scale`.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let n = text.chars().count() as u32;
    if n == 0 {
        return 0;
    }
    n * glyph_advance_x(scale) - scale.max(1)
}

/// 2D drawing interface. Game code draws through this and never touches raw bytes.
pub trait Renderer2d {
    fn size(&self) -> SurfaceSize;

    /// Opaque fill, clipped to the surface.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// 1px border along the inside edge of `rect`.
    fn rect_outline(&mut self, rect: Rect, color: Color);

    /// `(x, y)` is the top-left corner of the first glyph.
    fn draw_text_scaled(&mut self, x: u32, y: u32, text: &str, color: Color, scale: u32);

    fn draw_text(&mut self, x: u32, y: u32, text: &str, color: Color) {
        self.draw_text_scaled(x, y, text, color, DEFAULT_TEXT_SCALE);
    }

    fn clear(&mut self, color: Color) {
        let s = self.size();
        self.fill_rect(Rect::from_size(s.width, s.height), color);
    }
}

/// CPU renderer that draws into a borrowed RGBA frame buffer.
pub struct CpuRenderer<'a> {
    frame: &'a mut [u8],
    size: SurfaceSize,
}

impl<'a> CpuRenderer<'a> {
    pub fn new(frame: &'a mut [u8], size: SurfaceSize) -> Self {
        Self { frame, size }
    }

    fn bounds(&self) -> Rect {
        Rect::from_size(self.size.width, self.size.height)
    }

    fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.size.width || y >= self.size.height {
            return;
        }
        let idx = (y as usize * self.size.width as usize + x as usize) * 4;
        if let Some(px) = self.frame.get_mut(idx..idx + 4) {
            px.copy_from_slice(&color);
        }
    }

    fn draw_glyph(&mut self, x: u32, y: u32, ch: char, color: Color, scale: u32) {
        for (row, bits) in glyph_rows(ch).into_iter().enumerate() {
            let py = y.saturating_add(row as u32 * scale);
            for col in 0..GLYPH_W {
                if bits & (1u8 << (GLYPH_W - 1 - col)) == 0 {
                    continue;
                }
                let px = x.saturating_add(col * scale);
                self.fill_rect(Rect::new(px, py, scale, scale), color);
            }
        }
    }
}

impl Renderer2d for CpuRenderer<'_> {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if self.frame.len() < self.size.rgba_len() {
            return;
        }
        let clipped = rect.clip_to(self.bounds());
        if clipped.is_empty() {
            return;
        }

        let stride = self.size.width as usize * 4;
        let x0 = clipped.x as usize * 4;
        let x1 = clipped.right() as usize * 4;
        for y in clipped.y..clipped.bottom() {
            let row_start = y as usize * stride;
            let row = &mut self.frame[row_start + x0..row_start + x1];
            for px in row.chunks_exact_mut(4) {
                px.copy_from_slice(&color);
            }
        }
    }

    fn rect_outline(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let Rect { x, y, w, h } = rect;

        self.fill_rect(Rect::new(x, y, w, 1), color);
        self.fill_rect(Rect::new(x, y + h - 1, w, 1), color);
        self.fill_rect(Rect::new(x, y, 1, h), color);
        self.fill_rect(Rect::new(x + w - 1, y, 1, h), color);
    }

    fn draw_text_scaled(&mut self, x: u32, y: u32, text: &str, color: Color, scale: u32) {
        let scale = scale.max(1);
        let adv_x = glyph_advance_x(scale);
        let adv_y = line_advance_y(scale);

        let mut cursor_x = x;
        let mut cursor_y = y;
        for ch in text.chars() {
            if cursor_y >= self.size.height {
                break;
            }
            match ch {
                '\n' => {
                    cursor_x = x;
                    cursor_y = cursor_y.saturating_add(adv_y);
                }
                ' ' => cursor_x = cursor_x.saturating_add(adv_x),
                _ => {
                    if cursor_x < self.size.width {
                        self.draw_glyph(cursor_x, cursor_y, ch, color, scale);
                    }
                    cursor_x = cursor_x.saturating_add(adv_x);
                }
            }
        }
    }
}

/// Fallback glyph for characters outside the font.
const GLYPH_UNKNOWN: [u8; GLYPH_H as usize] = [0b111, 0b001, 0b010, 0b000, 0b010];

pub fn glyph_rows(ch: char) -> [u8; GLYPH_H as usize] {
    match ch.to_ascii_uppercase() {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],

        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b111, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b110, 0b100, 0b110, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b101, 0b111, 0b111, 0b111, 0b101],
        'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'R' => [0b111, 0b101, 0b111, 0b110, 0b101],
        'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],

        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],

        _ => GLYPH_UNKNOWN,
    }
}
