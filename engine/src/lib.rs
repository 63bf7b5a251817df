pub mod clock;
pub mod display;
pub mod frame_hash;
pub mod graphics;
pub mod surface;
pub mod ui;
pub mod window;
