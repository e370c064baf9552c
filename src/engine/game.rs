//! The `Game` and the `Response` it can give the engine.

use crate::io::{Action, Screen};

use super::{Message, Replies};

/// How a `Game` can respond to inputs or messages, affecting the whole game.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Response {
    /// Nothing in particular needs to be done.
    Nothing,
    /// The visual state has changed and the screen needs redrawing.
    Redraw,
    /// The game should exit.
    Quit,
}

impl Response {
    /// Redraw if the flag is set, otherwise do nothing.
    pub fn redraw_if(flag: bool) -> Self {
        if flag {
            Self::Redraw
        } else {
            Self::Nothing
        }
    }
}

/// The part of the game the player sees: it takes input and renders, and hears every message.
///
/// Heavy or periodic work belongs in an [`Agent`](super::Agent). The game can queue messages and spawn agents in
/// response to input, but not in response to messages, so the render loop can't stall itself.
pub trait Game: Send {
    /// The message that this `Game` will be passing around between `Agent`s and itself.
    type Message: Message;

    /// The player has done something; update state and inform agents accordingly.
    fn input(&mut self, input: Action, replies: &mut Replies<Self::Message>) -> Response;

    /// A message has gone by; update state accordingly.
    fn message(&mut self, msg: &Self::Message) -> Response;

    /// Render the game onto the provided `Screen`.
    fn render(&self, onto: &mut Screen);
}
