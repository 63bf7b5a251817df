//! Cosmetic post-process: per-channel noise plus an occasional red/blue swap.

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_NOISE_MAX: u8 = 25;
pub const DEFAULT_SWAP_CHANCE: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlitchSettings {
    pub enabled: bool,
    /// Noise is drawn from `0..noise_max`.
    pub noise_max: u8,
    /// Per-frame probability of swapping the red and blue channels.
    pub swap_chance: f64,
}

impl Default for GlitchSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            noise_max: DEFAULT_NOISE_MAX,
            swap_chance: DEFAULT_SWAP_CHANCE,
        }
    }
}

impl GlitchSettings {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Applies the filter to an RGBA frame in place. Returns true if the channels were swapped.
pub fn apply_glitch<R: Rng + ?Sized>(
    frame: &mut [u8],
    settings: &GlitchSettings,
    rng: &mut R,
) -> bool {
    if !settings.enabled {
        return false;
    }
    add_noise(frame, settings.noise_max, rng);

    let swap = rng.gen_bool(settings.swap_chance.clamp(0.0, 1.0));
    if swap {
        swap_red_blue(frame);
    }
    swap
}

/// Adds independent noise to R, G and B of every pixel. The addition wraps, so bright
/// pixels can flip dark. Alpha is untouched.
pub fn add_noise<R: Rng + ?Sized>(frame: &mut [u8], noise_max: u8, rng: &mut R) {
    if noise_max == 0 {
        return;
    }
    for px in frame.chunks_exact_mut(4) {
        for channel in &mut px[..3] {
            *channel = channel.wrapping_add(rng.gen_range(0..noise_max));
        }
    }
}

pub fn swap_red_blue(frame: &mut [u8]) {
    for px in frame.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
}
