pub mod config;
pub mod game_loop;
pub mod glitch;
pub mod grid;
pub mod input;
pub mod piece;
pub mod render;
pub mod serde_duration;
pub mod state;
