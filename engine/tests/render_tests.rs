use engine::frame_hash::rgba_sha256_hex;
use engine::graphics::{CpuRenderer, GLYPH_H, Renderer2d, glyph_advance_x};
use engine::surface::{RgbaBufferSurface, Surface, SurfaceSize};
use engine::ui::Rect;

const WHITE: [u8; 4] = [255, 255, 255, 255];

fn count_color(surface: &RgbaBufferSurface, color: [u8; 4]) -> usize {
    surface
        .frame()
        .chunks_exact(4)
        .filter(|px| *px == color)
        .count()
}

#[test]
fn clear_then_fill_paints_exact_area() {
    let mut surface = RgbaBufferSurface::new(SurfaceSize::new(20, 10));
    {
        let mut gfx = surface.renderer();
        gfx.clear([0, 0, 0, 255]);
        gfx.fill_rect(Rect::new(2, 3, 4, 5), WHITE);
    }
    assert_eq!(count_color(&surface, WHITE), 20);
    assert_eq!(surface.pixel(2, 3), Some(WHITE));
    assert_eq!(surface.pixel(5, 7), Some(WHITE));
    assert_eq!(surface.pixel(6, 7), Some([0, 0, 0, 255]));
}

#[test]
fn text_is_drawn_from_its_top_left_corner() {
    let mut surface = RgbaBufferSurface::new(SurfaceSize::new(64, 32));
    surface.renderer().draw_text_scaled(4, 6, "1", WHITE, 2);

    // '1' has its middle column lit on every row.
    assert_eq!(surface.pixel(4 + 2, 6), Some(WHITE));
    assert_eq!(surface.pixel(4 + 2, 6 + GLYPH_H * 2 - 1), Some(WHITE));
    assert_eq!(surface.pixel(4 + 2, 6 + GLYPH_H * 2), Some([0, 0, 0, 0]));
    assert_eq!(surface.pixel(4 + 2, 5), Some([0, 0, 0, 0]));
}

#[test]
fn spaces_advance_without_drawing() {
    let mut with_space = RgbaBufferSurface::new(SurfaceSize::new(64, 16));
    with_space.renderer().draw_text(0, 0, " 8", WHITE);

    let mut shifted = RgbaBufferSurface::new(SurfaceSize::new(64, 16));
    shifted
        .renderer()
        .draw_text(glyph_advance_x(2), 0, "8", WHITE);

    assert_eq!(with_space, shifted);
}

#[test]
fn text_running_off_the_edge_is_clipped() {
    let mut surface = RgbaBufferSurface::new(SurfaceSize::new(10, 10));
    surface
        .renderer()
        .draw_text(0, 0, "SCORE: 123456789", WHITE);
    assert_eq!(surface.frame().len(), SurfaceSize::new(10, 10).rgba_len());
    assert!(count_color(&surface, WHITE) > 0);
}

#[test]
fn renderer_on_short_buffer_draws_nothing() {
    let mut frame = vec![0u8; 8];
    let mut gfx = CpuRenderer::new(&mut frame, SurfaceSize::new(4, 4));
    gfx.fill_rect(Rect::from_size(4, 4), WHITE);
    assert_eq!(frame, vec![0u8; 8]);
}

#[test]
fn identical_drawing_hashes_identically() {
    let draw = || {
        let mut surface = RgbaBufferSurface::new(SurfaceSize::new(32, 32));
        let mut gfx = surface.renderer();
        gfx.clear([10, 10, 14, 255]);
        gfx.rect_outline(Rect::new(1, 1, 30, 30), [28, 28, 38, 255]);
        gfx.draw_text(4, 4, "GO", WHITE);
        rgba_sha256_hex(surface.frame())
    };
    assert_eq!(draw(), draw());
}
