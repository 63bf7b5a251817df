use anyhow::anyhow;
use clap::Parser;
use engine::clock::{FixedStepClock, MonotonicClock};
use engine::display::{HeadlessDisplay, ScopedDisplay};
use engine::frame_hash::rgba_sha256_hex;
use engine::window::{WindowConfig, WindowDisplay};
use rand::SeedableRng;
use rand::rngs::StdRng;

use game::config::{GameConfig, HEADLESS_FPS, WINDOW_TITLE};
use game::game_loop::{RunSummary, run};
use game::render::CANVAS_SIZE;

const GLITCH_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Parser)]
#[command(
    name = "glitch-fall",
    about = "Falling blocks under a glitch filter. a/d move, w rotates, Esc quits."
)]
struct Cli {
    /// Seed for piece selection and glitch noise (overrides GLITCH_FALL_SEED).
    #[arg(long)]
    seed: Option<u64>,

    /// Turn the glitch post-process off.
    #[arg(long)]
    no_glitch: bool,

    /// Integer window upscale.
    #[arg(long)]
    scale: Option<u32>,

    /// Run without a window for at most this many frames, then print a JSON summary.
    #[arg(long, value_name = "FRAMES")]
    headless_frames: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = GameConfig::from_env();
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if cli.no_glitch {
        config.glitch.enabled = false;
    }
    if let Some(scale) = cli.scale {
        config.window_scale = scale.max(1);
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed}");
    let mut rngs = GameRngs::from_seed(seed);

    if let Some(frames) = cli.headless_frames {
        config.max_frames = Some(frames);
        return run_headless(&config, &mut rngs);
    }

    let window = WindowDisplay::open(WindowConfig {
        title: WINDOW_TITLE.to_string(),
        buffer_size: CANVAS_SIZE,
        scale: config.window_scale,
        vsync: config.vsync,
    })
    .map_err(|err| anyhow!("failed to open window: {err}"))?;
    let mut display = ScopedDisplay::new(window);
    let clock = MonotonicClock::new();

    let summary = run(&mut *display, &clock, &mut rngs.pieces, &mut rngs.glitch, &config)
        .map_err(|err| anyhow!("presenting frame failed: {err}"))?;
    print_result(&summary);
    Ok(())
}

fn run_headless(config: &GameConfig, rngs: &mut GameRngs) -> anyhow::Result<()> {
    let mut display = ScopedDisplay::new(HeadlessDisplay::new(CANVAS_SIZE));
    let clock = FixedStepClock::per_second(HEADLESS_FPS);

    let summary = match run(&mut *display, &clock, &mut rngs.pieces, &mut rngs.glitch, config) {
        Ok(summary) => summary,
        Err(never) => match never {},
    };

    let report = serde_json::json!({
        "summary": summary,
        "last_frame_sha256": rgba_sha256_hex(display.last_frame()),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

struct GameRngs {
    pieces: StdRng,
    glitch: StdRng,
}

impl GameRngs {
    fn from_seed(seed: u64) -> Self {
        Self {
            pieces: StdRng::seed_from_u64(seed),
            glitch: StdRng::seed_from_u64(seed.rotate_left(32) ^ GLITCH_SEED_SALT),
        }
    }
}

fn print_result(summary: &RunSummary) {
    println!(
        "{:?} after {} frames: score {} level {} lines {}",
        summary.exit, summary.frames, summary.score, summary.level, summary.lines_cleared
    );
}
