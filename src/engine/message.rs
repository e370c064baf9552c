//! Messages are how agents and the game talk. Replies are how they're queued.

use std::fmt;

use super::Agent;

/// A message passed around between [`Agent`]s and the [`Game`](super::Game).
///
/// Usually an enum. Anything `Clone + Send + Sync + Default` is a message automatically, with the default value as
/// its [`tick`](Message::tick).
pub trait Message: Clone + Send + Sync {
    /// Sent when nothing else is queued, so every awake agent and the game see at least one message per round.
    fn tick() -> Self;
}

impl<T: Clone + Send + Sync + Default> Message for T {
    fn tick() -> Self {
        Self::default()
    }
}

/// Lets the [`Game`](super::Game) or an [`Agent`] make things happen in the engine.
///
/// Nothing here is acted on immediately, only once the round ends.
pub struct Replies<M: Message> {
    pub(crate) agents: Vec<Box<dyn Agent<M>>>,
    pub(crate) messages: Vec<M>,
}

impl<M: Message> Default for Replies<M> {
    fn default() -> Self {
        Self {
            agents: Default::default(),
            messages: Default::default(),
        }
    }
}

impl<M: Message> fmt::Debug for Replies<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Replies")
            .field("agents", &self.agents.len())
            .field("messages", &self.messages.len())
            .finish()
    }
}

impl<M: Message> Replies<M> {
    /// Have an agent spawned in, within a round or so.
    pub fn spawn(&mut self, agent: impl Agent<M> + 'static) -> &mut Self {
        self.agents.push(Box::new(agent));
        self
    }

    /// Queue up a message to be sent out in the next round.
    pub fn queue(&mut self, msg: M) -> &mut Self {
        self.messages.push(msg);
        self
    }

    /// The messages queued so far.
    pub fn messages(&self) -> &[M] {
        &self.messages
    }
}
