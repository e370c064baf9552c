//! The engine the game runs on: a shared message bus with background [`Agent`]s, a [`Game`] that handles input and
//! rendering, and a [`Runner`] tying them to an [`IoSystem`](crate::io::IoSystem).
//!
//! Messages are loosely organized into rounds. Replies to one round are only applied after every agent has seen all
//! of it, so queued messages and spawned agents show up "soon", never immediately.

mod agent;
mod game;
mod macros;
mod message;
mod runner;
mod timing;

pub use self::{
    agent::{Agent, ControlFlow, WaitHandle},
    game::{Game, Response},
    message::{Message, Replies},
    runner::Runner,
    timing::Timer,
};
