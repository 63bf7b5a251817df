use engine::surface::{RgbaBufferSurface, SurfaceSize};
use game::glitch::{GlitchSettings, add_noise, apply_glitch, swap_red_blue};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn frame_of(color: [u8; 4], pixels: u32) -> Vec<u8> {
    RgbaBufferSurface::filled(SurfaceSize::new(pixels, 1), color).into_vec()
}

#[test]
fn disabled_filter_leaves_frame_untouched() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut frame = frame_of([10, 20, 30, 255], 64);
    let before = frame.clone();

    let swapped = apply_glitch(&mut frame, &GlitchSettings::disabled(), &mut rng);
    assert!(!swapped);
    assert_eq!(frame, before);
}

#[test]
fn noise_is_bounded_and_wraps() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut frame = frame_of([250, 100, 0, 255], 1_000);

    add_noise(&mut frame, 25, &mut rng);

    let mut wrapped = 0;
    for px in frame.chunks_exact(4) {
        assert!(px[0].wrapping_sub(250) < 25);
        assert!(px[1].wrapping_sub(100) < 25);
        assert!(px[2] < 25);
        assert_eq!(px[3], 255);
        if px[0] < 250 {
            wrapped += 1;
        }
    }
    // Wrapping (not clamping) sends many bright reds back to near zero.
    assert!(wrapped > 0);
}

#[test]
fn zero_noise_max_adds_nothing() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut frame = frame_of([1, 2, 3, 4], 16);
    let before = frame.clone();
    add_noise(&mut frame, 0, &mut rng);
    assert_eq!(frame, before);
}

#[test]
fn swap_exchanges_red_and_blue_only() {
    let mut frame = vec![1, 2, 3, 4, 5, 6, 7, 8];
    swap_red_blue(&mut frame);
    assert_eq!(frame, vec![3, 2, 1, 4, 7, 6, 5, 8]);
}

#[test]
fn swap_chance_extremes_are_respected() {
    let mut rng = StdRng::seed_from_u64(3);
    let always = GlitchSettings {
        enabled: true,
        noise_max: 0,
        swap_chance: 1.0,
    };
    let never = GlitchSettings {
        swap_chance: 0.0,
        ..always
    };

    let mut frame = frame_of([200, 50, 10, 255], 4);
    assert!(apply_glitch(&mut frame, &always, &mut rng));
    assert_eq!(&frame[..4], &[10, 50, 200, 255]);

    for _ in 0..100 {
        assert!(!apply_glitch(&mut frame, &never, &mut rng));
    }
    assert_eq!(&frame[..4], &[10, 50, 200, 255]);
}

#[test]
fn default_swap_rate_is_about_one_in_twenty() {
    let mut rng = StdRng::seed_from_u64(4);
    let settings = GlitchSettings::default();
    let mut frame = frame_of([0, 0, 0, 255], 1);

    let swaps = (0..4_000)
        .filter(|_| apply_glitch(&mut frame, &settings, &mut rng))
        .count();
    assert!((100..=320).contains(&swaps), "swaps = {swaps}");
}
