//! Windowed [`Display`] backed by `winit` (window + keyboard) and `pixels` (presentation).

use std::collections::VecDeque;
use std::error::Error;

use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::{Window, WindowBuilder};

use crate::display::{Display, Key};
use crate::surface::SurfaceSize;

pub struct WindowConfig {
    pub title: String,
    /// Size of the frames the game renders.
    pub buffer_size: SurfaceSize,
    /// Integer upscale applied to the window; the buffer is stretched to fit.
    pub scale: u32,
    pub vsync: Option<bool>,
}

pub struct WindowDisplay {
    event_loop: EventLoop<()>,
    window: Window,
    pixels: Pixels,
    size: SurfaceSize,
    pending: VecDeque<Key>,
    closed: bool,
}

impl WindowDisplay {
    pub fn open(config: WindowConfig) -> Result<Self, Box<dyn Error>> {
        let event_loop = EventLoop::new();
        let scale = config.scale.max(1);
        let size = config.buffer_size;
        let window = WindowBuilder::new()
            .with_title(config.title)
            .with_inner_size(PhysicalSize::new(size.width * scale, size.height * scale))
            .with_resizable(false)
            .build(&event_loop)?;

        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        let mut builder = PixelsBuilder::new(size.width, size.height, surface_texture);
        if let Some(vsync) = config.vsync {
            builder = builder.enable_vsync(vsync);
        }
        let pixels = builder.build()?;

        log::debug!(
            "window opened: buffer {}x{}, window {}x{}",
            size.width,
            size.height,
            window_size.width,
            window_size.height
        );

        Ok(Self {
            event_loop,
            window,
            pixels,
            size,
            pending: VecDeque::new(),
            closed: false,
        })
    }

    /// Drains everything winit has queued, then returns control to the caller.
    fn pump_events(&mut self) {
        let window_id = self.window.id();
        let pending = &mut self.pending;
        let pixels = &mut self.pixels;

        self.event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Poll;
            match event {
                Event::WindowEvent { window_id: id, event } if id == window_id => match event {
                    WindowEvent::CloseRequested => pending.push_back(Key::Escape),
                    WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                state: ElementState::Pressed,
                                virtual_keycode: Some(code),
                                ..
                            },
                        ..
                    } => {
                        if let Some(key) = key_from_virtual(code) {
                            pending.push_back(key);
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(err) = pixels.resize_surface(size.width, size.height) {
                            log::warn!("resize failed: {err}");
                        }
                    }
                    _ => {}
                },
                Event::MainEventsCleared => *control_flow = ControlFlow::Exit,
                _ => {}
            }
        });
    }
}

pub fn key_from_virtual(code: VirtualKeyCode) -> Option<Key> {
    let ch = match code {
        VirtualKeyCode::Escape => return Some(Key::Escape),
        VirtualKeyCode::A => 'a',
        VirtualKeyCode::D => 'd',
        VirtualKeyCode::S => 's',
        VirtualKeyCode::W => 'w',
        VirtualKeyCode::Space => ' ',
        _ => return None,
    };
    Some(Key::Char(ch))
}

impl Display for WindowDisplay {
    type Error = pixels::Error;

    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn present(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        let target = self.pixels.frame_mut();
        if target.len() == frame.len() {
            target.copy_from_slice(frame);
        } else {
            log::warn!(
                "dropping frame of {} bytes, expected {}",
                frame.len(),
                target.len()
            );
        }
        self.pixels.render()
    }

    fn poll_input(&mut self) -> Option<Key> {
        if self.closed {
            return None;
        }
        if self.pending.is_empty() {
            self.pump_events();
        }
        self.pending.pop_front()
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.pending.clear();
        self.window.set_visible(false);
        log::debug!("window closed");
    }
}
