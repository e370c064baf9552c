//! The `Agent` trait and its `ControlFlow`.

use core::fmt;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

#[cfg(test)]
use mock_instant::Instant;
#[cfg(not(test))]
use std::time::Instant;

use super::{Message, Replies};

/// See [`ControlFlow::Handle`].
#[derive(Clone)]
pub struct WaitHandle(Arc<AtomicBool>);

impl WaitHandle {
    fn new() -> Self {
        WaitHandle(Arc::new(AtomicBool::new(false)))
    }

    /// Notify the waiting agent that it can wake up.
    pub fn wake(&self) {
        self.0.store(true, Ordering::Release);
    }

    fn is_woken(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// How many handles exist right now. If it's just one, nobody else can ever wake the agent.
    pub fn references(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl PartialEq for WaitHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
impl Eq for WaitHandle {}
impl fmt::Debug for WaitHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WaitHandle(...)")
    }
}

/// What should happen to an [`Agent`] after it finishes reacting to a message.
///
/// This only says when the agent *should* next be called. It'll never miss a round it asked for, but it might see
/// rounds it didn't, so treat it as an optimization.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum ControlFlow {
    /// Continue as normal and update next time.
    Continue,
    /// Stop updating this agent and (eventually) destroy it.
    Kill,
    /// Wait until notified by someone who has the handle
    Handle(WaitHandle),
    /// Sleep, waking up at the given time
    Time(Instant),
}

impl ControlFlow {
    /// Create a new [`ControlFlow::Handle`], with its handle so something else can wake it.
    pub fn wait() -> (Self, WaitHandle) {
        let wh = WaitHandle::new();
        (Self::Handle(wh.clone()), wh)
    }

    /// Create a new [`ControlFlow::Time`], waiting for a given duration.
    pub fn sleep_for(amt: Duration) -> Self {
        Self::Time(Instant::now() + amt)
    }

    /// Whether an agent which returned this is ready to react again.
    pub fn is_ready(&self) -> bool {
        match self {
            ControlFlow::Continue => true,
            ControlFlow::Kill => false,
            ControlFlow::Handle(wh) => wh.is_woken(),
            ControlFlow::Time(when) => &Instant::now() >= when,
        }
    }
}

/// Something in the background which reacts to messages, e.g. the [`Metronome`](crate::metronome::Metronome).
///
/// Messages are processed in rounds: every awake agent sees every message of the current round, and whatever they
/// queue becomes the next round.
pub trait Agent<M: Message>: Send + Sync {
    /// Called once when the agent joins, always before `react`.
    fn start(&mut self, _replies: &mut Replies<M>) -> ControlFlow {
        ControlFlow::Continue
    }

    /// React to one message of the round.
    ///
    /// By default this kills the agent, on the assumption that you'd have implemented `react` if you wanted it to
    /// stay alive.
    fn react(&mut self, _msg: &M, _replies: &mut Replies<M>) -> ControlFlow {
        ControlFlow::Kill
    }
}
