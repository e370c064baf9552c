//! The IO backends. Each real one is enabled by a `sys_` feature and implements [`IoSystem`] with a paired
//! [`IoRunner`]; [`scripted`] is always available for headless runs.

#[cfg(feature = "__sys")]
use std::collections::HashMap;

use crate::{
    error::Result,
    io::{Action, Screen, XY},
};

#[cfg(feature = "sys_cli")]
pub mod ansi_cli;
pub mod scripted;

/// An input/output system.
///
/// This object is meant to be associated with a [`IoRunner`], which runs on the main thread while this is called
/// from wherever the game loop ends up.
///
/// The "display" is whatever this actually renders to (a terminal, a test log); the [`Screen`] is the framebuffer
/// in memory.
pub trait IoSystem: Send {
    /// Render a [`Screen`] to the display. Screens of the wrong size must not crash.
    fn draw(&mut self, screen: &Screen) -> Result<()>;
    /// Get the size of the display, in characters.
    fn size(&self) -> XY;

    /// Wait for the next user input, blocking the thread.
    fn input(&mut self) -> Result<Action>;
    /// If the next user input is available, return it. Otherwise, return `None`.
    fn poll_input(&mut self) -> Result<Option<Action>>;

    /// Tell the associated [`IoRunner`] to stop and give back the main thread, and dispose of any resources.
    ///
    /// This **must not** wait for the runner to finish tearing down, or the singlethreaded runner deadlocks. It's
    /// always the last method called on the system.
    fn stop(&mut self);
}

impl<T: IoSystem + ?Sized> IoSystem for Box<T> {
    fn draw(&mut self, screen: &Screen) -> Result<()> {
        (**self).draw(screen)
    }
    fn size(&self) -> XY {
        (**self).size()
    }
    fn input(&mut self) -> Result<Action> {
        (**self).input()
    }
    fn poll_input(&mut self) -> Result<Option<Action>> {
        (**self).poll_input()
    }
    fn stop(&mut self) {
        (**self).stop()
    }
}

/// The other half of an [`IoSystem`], for whatever has to happen on the main thread.
pub trait IoRunner {
    /// Execute one quick, non-blocking step. Returns whether [`IoSystem::stop`] has been called since.
    ///
    /// Always called on the main thread.
    #[must_use]
    fn step(&mut self) -> bool;

    /// Run until the paired [`IoSystem`] says to stop. Always called on the main thread.
    fn run(&mut self) {
        while !self.step() {}
    }
}

impl<T: IoRunner + ?Sized> IoRunner for Box<T> {
    fn step(&mut self) -> bool {
        (**self).step()
    }
    fn run(&mut self) {
        (**self).run()
    }
}

/// Try each enabled backend in turn and return the first one that loads.
///
/// On failure, returns the error from every backend that was tried, keyed by feature name.
#[cfg(feature = "__sys")]
pub fn load() -> core::result::Result<
    (Box<dyn IoSystem>, Box<dyn IoRunner>),
    HashMap<&'static str, crate::Error>,
> {
    #[allow(unused_mut)]
    let mut errors = HashMap::new();
    macro_rules! try_init {
        ( $name:literal => $init:expr ) => {
            match $init {
                Ok((iosys, run)) => {
                    tracing::info!(backend = $name, "io system loaded");
                    return Ok((Box::new(iosys), Box::new(run)));
                }
                Err(e) => {
                    tracing::warn!(backend = $name, error = %e, "io system failed to load");
                    errors.insert($name, e);
                }
            }
        };
    }
    #[cfg(feature = "sys_cli")]
    try_init!("sys_cli" => self::ansi_cli::CtSystem::new());
    Err(errors)
}
