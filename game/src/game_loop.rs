//! The frame driver: gravity, render, glitch, present, input. One iteration per frame.

use engine::clock::Clock;
use engine::display::Display;
use engine::surface::{RgbaBufferSurface, Surface};
use log::{debug, info};
use rand::Rng;
use serde::Serialize;

use crate::config::GameConfig;
use crate::glitch::{GlitchSettings, apply_glitch};
use crate::input::{Action, action_for_key};
use crate::render::{CANVAS_SIZE, render_game};
use crate::state::{GameState, TickOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitReason {
    Quit,
    GameOver,
    FrameLimit,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub exit: ExitReason,
    pub frames: u64,
    pub score: u32,
    pub level: u32,
    pub lines_cleared: u32,
    pub pieces_locked: u32,
    pub state: GameState,
}

/// Draws `state` into a fresh canvas and runs the glitch filter over it.
pub fn render_frame<R: Rng + ?Sized>(
    state: &GameState,
    glitch: &GlitchSettings,
    rng: &mut R,
) -> RgbaBufferSurface {
    let mut canvas = RgbaBufferSurface::new(CANVAS_SIZE);
    render_game(&mut canvas.renderer(), state);
    apply_glitch(canvas.frame_mut(), glitch, rng);
    canvas
}

/// Applies one player action. Returns false for `Quit`.
pub fn apply_action(state: &mut GameState, action: Action) -> bool {
    match action {
        Action::Quit => return false,
        Action::MoveLeft => {
            state.move_left();
        }
        Action::MoveRight => {
            state.move_right();
        }
        Action::Rotate => {
            state.rotate();
        }
    }
    true
}

/// Plays one game to completion on `display`.
///
/// Ends on the quit key, on game over, or after `config.max_frames` frames. Pieces and
/// glitch noise draw from separate generators, so the filter never changes which pieces
/// a seed produces.
pub fn run<D, C, P, G>(
    display: &mut D,
    clock: &C,
    piece_rng: &mut P,
    glitch_rng: &mut G,
    config: &GameConfig,
) -> Result<RunSummary, D::Error>
where
    D: Display + ?Sized,
    C: Clock + ?Sized,
    P: Rng + ?Sized,
    G: Rng + ?Sized,
{
    let mut state = GameState::new(piece_rng, clock.now());
    info!(
        "game started (glitch {})",
        if config.glitch.enabled { "on" } else { "off" }
    );

    let mut frames = 0u64;
    let exit = loop {
        if config.max_frames.is_some_and(|max| frames >= max) {
            break ExitReason::FrameLimit;
        }

        match state.tick(clock.now(), piece_rng) {
            TickOutcome::Locked { cleared } if cleared > 0 => {
                debug!(
                    "cleared {cleared} row(s): score {} level {}",
                    state.score(),
                    state.level()
                );
            }
            TickOutcome::ToppedOut { cleared } => {
                debug!("no room to spawn after clearing {cleared} row(s)");
            }
            _ => {}
        }
        if state.is_game_over() {
            info!("game over: score {} level {}", state.score(), state.level());
            break ExitReason::GameOver;
        }

        let canvas = render_frame(&state, &config.glitch, glitch_rng);
        display.present(canvas.frame())?;
        frames += 1;

        if let Some(action) = display.poll_input().and_then(action_for_key) {
            if !apply_action(&mut state, action) {
                info!("quit requested: score {} level {}", state.score(), state.level());
                break ExitReason::Quit;
            }
        }
    };

    Ok(RunSummary {
        exit,
        frames,
        score: state.score(),
        level: state.level(),
        lines_cleared: state.lines_cleared(),
        pieces_locked: state.pieces_locked(),
        state,
    })
}
