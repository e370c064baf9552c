use std::time::Duration;

use crate::{
    engine::{Agent, ControlFlow, Replies},
    Event,
};

/// Queues an [`Event::Second`] once a second, forever.
#[derive(Default)]
pub struct Metronome {
    beats: u64,
}

impl Metronome {
    const PERIOD: Duration = Duration::from_secs(1);

    pub fn new() -> Self {
        Self::default()
    }

    fn beat(&mut self, replies: &mut Replies<Event>) -> ControlFlow {
        self.beats += 1;
        replies.queue(Event::Second);
        ControlFlow::sleep_for(Self::PERIOD)
    }
}

impl Agent<Event> for Metronome {
    fn start(&mut self, _replies: &mut Replies<Event>) -> ControlFlow {
        ControlFlow::sleep_for(Self::PERIOD)
    }

    fn react(&mut self, _msg: &Event, replies: &mut Replies<Event>) -> ControlFlow {
        self.beat(replies)
    }
}
