use serde::{Deserialize, Serialize};

use crate::glitch::GlitchSettings;

pub const WINDOW_TITLE: &str = "Glitch Fall";
pub const DEFAULT_WINDOW_SCALE: u32 = 1;
pub const HEADLESS_FPS: u32 = 60;

/// Runtime knobs. The defaults reproduce the stock game; gameplay constants
/// (board size, speeds, scoring) are fixed and live next to the code that uses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// RNG seed. `None` picks a fresh one per run.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub glitch: GlitchSettings,
    #[serde(default = "default_window_scale")]
    pub window_scale: u32,
    #[serde(default)]
    pub vsync: Option<bool>,
    /// Stop after this many presented frames (headless runs).
    #[serde(default)]
    pub max_frames: Option<u64>,
}

fn default_window_scale() -> u32 {
    DEFAULT_WINDOW_SCALE
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            glitch: GlitchSettings::default(),
            window_scale: DEFAULT_WINDOW_SCALE,
            vsync: None,
            max_frames: None,
        }
    }
}

impl GameConfig {
    /// Defaults, then `GLITCH_FALL_*` environment overrides.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides from `lookup` (an environment-like getter).
    ///
    /// - `GLITCH_FALL_SEED=<u64>`
    /// - `GLITCH_FALL_GLITCH=0` disables the glitch filter
    /// - `GLITCH_FALL_SCALE=<n>` integer window upscale
    /// - `GLITCH_FALL_VSYNC=0|1`
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("GLITCH_FALL_SEED") {
            match raw.trim().parse() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => log::warn!("ignoring GLITCH_FALL_SEED={raw:?}: not a u64"),
            }
        }
        if let Some(enabled) = lookup("GLITCH_FALL_GLITCH").as_deref().and_then(parse_bool) {
            self.glitch.enabled = enabled;
        }
        if let Some(scale) = lookup("GLITCH_FALL_SCALE").and_then(|v| v.trim().parse::<u32>().ok())
        {
            self.window_scale = scale.max(1);
        }
        if let Some(vsync) = lookup("GLITCH_FALL_VSYNC").as_deref().and_then(parse_bool) {
            self.vsync = Some(vsync);
        }
        self
    }
}

/// Accepts `1/true/yes/on` and `0/false/no/off` (case-insensitive).
pub fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
