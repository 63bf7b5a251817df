//! Presentation + input boundary.
//!
//! The game loop talks to a [`Display`]: it pushes finished frames and pulls key presses.
//! `WindowDisplay` (see [`crate::window`]) is the real backend; [`HeadlessDisplay`] runs
//! without a window for tests and offline runs.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::ops::{Deref, DerefMut};

use crate::surface::SurfaceSize;

/// A key press as seen by the game. Closing the window is reported as `Escape`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Char(char),
}

pub trait Display {
    type Error;

    fn size(&self) -> SurfaceSize;

    /// Shows one RGBA frame of `size()` pixels.
    fn present(&mut self, frame: &[u8]) -> Result<(), Self::Error>;

    /// Returns the next pending key press, if any. Never blocks for longer than one
    /// round of event processing.
    fn poll_input(&mut self) -> Option<Key>;

    /// Releases backend resources. Must be safe to call more than once.
    fn close(&mut self);
}

/// Owns a display and closes it when dropped, whichever way the owner's scope ends.
pub struct ScopedDisplay<D: Display> {
    inner: D,
}

impl<D: Display> ScopedDisplay<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: Display> Deref for ScopedDisplay<D> {
    type Target = D;

    fn deref(&self) -> &D {
        &self.inner
    }
}

impl<D: Display> DerefMut for ScopedDisplay<D> {
    fn deref_mut(&mut self) -> &mut D {
        &mut self.inner
    }
}

impl<D: Display> Drop for ScopedDisplay<D> {
    fn drop(&mut self) {
        self.inner.close();
    }
}

/// A display with no window: keys come from a script, frames are kept in memory.
#[derive(Debug, Clone)]
pub struct HeadlessDisplay {
    size: SurfaceSize,
    script: VecDeque<Option<Key>>,
    last_frame: Vec<u8>,
    frames_presented: u64,
    closed: bool,
}

impl HeadlessDisplay {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            script: VecDeque::new(),
            last_frame: vec![0u8; size.rgba_len()],
            frames_presented: 0,
            closed: false,
        }
    }

    /// Queues per-frame input: the n-th `poll_input` returns the n-th entry.
    /// Once the script is exhausted every poll returns `None`.
    pub fn with_script<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = Option<Key>>,
    {
        self.script.extend(keys);
        self
    }

    pub fn push_key(&mut self, key: Key) {
        self.script.push_back(Some(key));
    }

    pub fn last_frame(&self) -> &[u8] {
        &self.last_frame
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Display for HeadlessDisplay {
    type Error = Infallible;

    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn present(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        self.last_frame.clear();
        self.last_frame.extend_from_slice(frame);
        self.frames_presented += 1;
        Ok(())
    }

    fn poll_input(&mut self) -> Option<Key> {
        self.script.pop_front().flatten()
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
