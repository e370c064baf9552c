//! A headless IO system which replays a fixed script of input and keeps every frame it's asked to draw.
//!
//! Once the script runs out it reports [`Action::Closed`], so a game run against it always terminates.

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use crate::{
    error::Result,
    io::{Action, IoRunner, IoSystem, Screen, XY},
};

/// One entry in a script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Deliver this action.
    Act(Action),
    /// Report no input for this many polls, letting the game loop run in the meantime.
    Idle(usize),
}

impl From<Action> for Step {
    fn from(a: Action) -> Self {
        Step::Act(a)
    }
}

/// Every frame drawn so far, each as its rows of plain text.
#[derive(Clone, Default)]
pub struct Frames(Arc<Mutex<Vec<Vec<String>>>>);

impl Frames {
    fn push(&self, frame: Vec<String>) {
        self.0.lock().unwrap().push(frame);
    }

    /// How many frames have been drawn.
    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The most recent frame, if any.
    pub fn last(&self) -> Option<Vec<String>> {
        self.0.lock().unwrap().last().cloned()
    }

    /// Whether any drawn frame had a row containing `needle`.
    pub fn any_contains(&self, needle: &str) -> bool {
        self.0
            .lock()
            .unwrap()
            .iter()
            .any(|f| f.iter().any(|row| row.contains(needle)))
    }
}

pub struct ScriptedSystem {
    script: VecDeque<Step>,
    size: XY,
    frames: Frames,
    stop: Arc<AtomicBool>,
}

impl ScriptedSystem {
    pub fn new(
        size: XY,
        script: impl IntoIterator<Item = Step>,
    ) -> Result<(Self, ScriptedRunner, Frames)> {
        let stop = Arc::new(AtomicBool::new(false));
        let frames = Frames::default();
        let sys = Self {
            script: script.into_iter().collect(),
            size,
            frames: frames.clone(),
            stop: stop.clone(),
        };
        Ok((sys, ScriptedRunner(stop), frames))
    }
}

impl IoSystem for ScriptedSystem {
    fn draw(&mut self, screen: &Screen) -> Result<()> {
        let rows = (0..screen.size().y()).map(|r| screen.row_text(r)).collect();
        self.frames.push(rows);
        Ok(())
    }

    fn size(&self) -> XY {
        self.size
    }

    fn input(&mut self) -> Result<Action> {
        loop {
            if let Some(action) = self.poll_input()? {
                return Ok(action);
            }
        }
    }

    fn poll_input(&mut self) -> Result<Option<Action>> {
        match self.script.pop_front() {
            None => Ok(Some(Action::Closed)),
            Some(Step::Act(action)) => Ok(Some(action)),
            Some(Step::Idle(0)) => self.poll_input(),
            Some(Step::Idle(1)) => Ok(None),
            Some(Step::Idle(n)) => {
                self.script.push_front(Step::Idle(n - 1));
                Ok(None)
            }
        }
    }

    fn stop(&mut self) {
        self.stop.store(true, Ordering::Release);
    }
}

/// Does nothing on the main thread but wait for [`ScriptedSystem::stop`].
pub struct ScriptedRunner(Arc<AtomicBool>);

impl IoRunner for ScriptedRunner {
    fn step(&mut self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn run(&mut self) {
        while !self.step() {
            std::thread::yield_now();
        }
    }
}

#[cfg(test)]
mod test {
    use crate::io::{press, Key};

    use super::*;

    #[test]
    fn script_replays_then_closes() {
        let (mut sys, _run, _frames) = ScriptedSystem::new(
            XY(10, 2),
            [press(Key::Enter).into(), Step::Idle(2), press(Key::Up).into()],
        )
        .unwrap();
        assert_eq!(sys.poll_input().unwrap(), Some(press(Key::Enter)));
        assert_eq!(sys.poll_input().unwrap(), None);
        assert_eq!(sys.poll_input().unwrap(), None);
        assert_eq!(sys.poll_input().unwrap(), Some(press(Key::Up)));
        assert_eq!(sys.poll_input().unwrap(), Some(Action::Closed));
        assert_eq!(sys.input().unwrap(), Action::Closed);
    }

    #[test]
    fn frames_are_recorded() {
        let (mut sys, mut run, frames) = ScriptedSystem::new(XY(4, 1), []).unwrap();
        let mut screen = Screen::new(XY(4, 1));
        screen.write(XY(1, 0), crate::text!["hi"]);
        sys.draw(&screen).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames.last().unwrap(), vec![" hi ".to_string()]);
        assert!(frames.any_contains("hi"));
        assert!(!run.step());
        sys.stop();
        assert!(run.step());
    }
}
