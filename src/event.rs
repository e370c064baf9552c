//! The messages passed around the engine.

/// Everything that can happen in the background of the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Event {
    /// Nothing else happened this round. Animations step on these.
    #[default]
    Tick,
    /// A wall-clock second passed. Countdowns step on these.
    Second,
}
