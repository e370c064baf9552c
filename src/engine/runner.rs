//! The "main loop" of the engine, in whichever flavor the `run_` features select.

#![cfg_attr(not(feature = "__run"), allow(unused))]

use std::{mem, thread, time::Duration};

use crate::io::{Action, IoRunner, IoSystem, Screen};

use super::{
    agent::{Agent, ControlFlow},
    game::{Game, Response},
    timing::Timer,
    Message, Replies,
};

struct AgentRunner<M: Message> {
    agents: Vec<(ControlFlow, Box<dyn Agent<M>>)>,
    replies: Replies<M>,
}

impl<M: Message> AgentRunner<M> {
    fn new() -> Self {
        Self {
            agents: Default::default(),
            replies: Default::default(),
        }
    }

    fn prune(&mut self) {
        self.agents.retain(|(cf, _ag)| match cf {
            ControlFlow::Kill => false,
            // if there's only one reference, it's the one in this handle, and nobody can wake it
            ControlFlow::Handle(h) => h.references() > 1,
            _ => true,
        });
    }

    /// Perform one round of message processing.
    ///
    /// `agents` and `msgs` go in as this round's new agents and messages, and come out as the next round's. The old
    /// contents are gone afterwards.
    #[cfg_attr(feature = "run_rayon", allow(unused))]
    fn step(&mut self, msgs: &mut Vec<M>, agents: &mut Vec<Box<dyn Agent<M>>>) {
        self.agents.extend(
            agents
                .drain(..)
                .map(|mut a| (a.start(&mut self.replies), a)),
        );

        if msgs.is_empty() {
            msgs.push(M::tick());
        }

        for (cf, agent) in self.agents.iter_mut() {
            if !cf.is_ready() {
                continue;
            }
            for msg in msgs.iter() {
                *cf = agent.react(msg, &mut self.replies);
                if !cf.is_ready() {
                    break;
                }
            }
        }

        self.prune();

        msgs.clear();
        // swapping rather than moving reuses both allocations
        mem::swap(&mut self.replies.messages, msgs);
        mem::swap(&mut self.replies.agents, agents);
    }

    /// [`Self::step`], with the agents spread across threads by `rayon`.
    #[cfg(feature = "run_rayon")]
    fn step_rayon(&mut self, msgs: &mut Vec<M>, agents: &mut Vec<Box<dyn Agent<M>>>) {
        use rayon::prelude::{IntoParallelRefMutIterator, ParallelIterator};

        let mut replies = Replies::default();
        self.agents
            .extend(agents.drain(..).map(|mut a| (a.start(&mut replies), a)));

        if msgs.is_empty() {
            msgs.push(M::tick());
        }

        let agent_replies = self
            .agents
            .par_iter_mut()
            .map(|(cf, agent)| {
                let mut replies = Replies::default();
                if !cf.is_ready() {
                    return replies;
                }
                for msg in msgs.iter() {
                    *cf = agent.react(msg, &mut replies);
                    if !cf.is_ready() {
                        break;
                    }
                }
                replies
            })
            .reduce(Replies::default, |mut old, new| {
                old.agents.extend(new.agents);
                old.messages.extend(new.messages);
                old
            });
        replies.agents.extend(agent_replies.agents);
        replies.messages.extend(agent_replies.messages);

        self.prune();

        *msgs = replies.messages;
        *agents = replies.agents;
    }
}

struct GameRunner<G: Game, IO: IoSystem> {
    game: G,
    iosys: IO,
    screen: Screen,
    tainted: bool,
    render_timer: Timer,
}

impl<G: Game, IO: IoSystem> GameRunner<G, IO> {
    fn new(game: G, iosys: IO, fps: u32) -> Self {
        let screen = Screen::new(iosys.size());
        Self {
            game,
            iosys,
            screen,
            tainted: true,
            render_timer: Timer::new(1.0 / fps.max(1) as f32),
        }
    }

    /// Feed a round of messages to the game. Returns whether it asked to quit.
    fn feed(&mut self, msgs: &[G::Message]) -> bool {
        if msgs.is_empty() {
            return self.feed(&[G::Message::tick()]);
        }

        for msg in msgs {
            match self.game.message(msg) {
                Response::Nothing => (),
                Response::Redraw => self.tainted = true,
                Response::Quit => return true,
            }
        }
        false
    }

    /// Pass along all pending input. Returns whether a stop was requested.
    fn io(&mut self, msgs: &mut Vec<G::Message>, agents: &mut Vec<Box<dyn Agent<G::Message>>>) -> bool {
        let mut replies = Replies {
            agents: mem::take(agents),
            messages: mem::take(msgs),
        };
        let mut quit = false;
        loop {
            let action = match self.iosys.poll_input() {
                Ok(Some(action)) => action,
                Ok(None) => break,
                Err(e) => {
                    tracing::error!(error = %e, "input failed");
                    quit = true;
                    break;
                }
            };
            match action {
                Action::Closed => {
                    quit = true;
                    break;
                }
                Action::Redraw => self.tainted = true,
                Action::Error(e) => tracing::warn!(error = %e, "input error"),
                other => match self.game.input(other, &mut replies) {
                    Response::Nothing => (),
                    Response::Redraw => self.tainted = true,
                    Response::Quit => {
                        quit = true;
                        break;
                    }
                },
            }
        }
        *agents = replies.agents;
        *msgs = replies.messages;
        quit
    }

    /// Render, but only if something changed and it's been long enough since the last frame.
    fn render(&mut self) {
        let new_size = self.iosys.size();
        if !self.tainted && new_size == self.screen.size() {
            return;
        }
        if !self.render_timer.tick_ready() {
            return;
        }
        self.screen.resize(new_size);
        self.game.render(&mut self.screen);
        if let Err(e) = self.iosys.draw(&self.screen) {
            tracing::warn!(error = %e, "failed to draw frame");
        }
        self.tainted = false;
    }
}

/// Handles starting up and running a `Game`.
#[must_use]
pub struct Runner<G: Game + 'static> {
    msgs: Vec<G::Message>,
    agents: Vec<Box<dyn Agent<G::Message>>>,
    game: G,
    input_tick: f32,
    fps: u32,
}

impl<G: Game + 'static> Runner<G> {
    /// Prepare a game to be run.
    pub fn new(game: G) -> Self {
        Self {
            game,
            msgs: vec![],
            agents: vec![],
            input_tick: 1.0 / 60.0,
            fps: 60,
        }
    }

    /// Have an agent running from the first round.
    pub fn spawn(mut self, agent: impl Agent<G::Message> + 'static) -> Self {
        self.agents.push(Box::new(agent));
        self
    }

    /// Add a message to the first round.
    pub fn queue(mut self, msg: G::Message) -> Self {
        self.msgs.push(msg);
        self
    }

    /// Set the desired time between rounds of messages, in seconds.
    ///
    /// Between rounds the runner just handles input. If a round takes longer than this, the next one starts
    /// immediately.
    pub fn input_tick(mut self, tick: f32) -> Self {
        self.input_tick = tick;
        self
    }

    /// Cap how often the screen is redrawn.
    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    #[cfg(feature = "run_single")]
    fn run_single(self, iosys: impl IoSystem + 'static, mut iorun: impl IoRunner) -> G {
        let Self {
            game,
            mut msgs,
            mut agents,
            input_tick,
            fps,
        } = self;

        let mut ar = AgentRunner::new();
        let mut gr = GameRunner::new(game, iosys, fps);
        let mut input_timer = Timer::new(input_tick);

        'mainloop: loop {
            loop {
                gr.render();
                if iorun.step() {
                    break 'mainloop;
                }
                if gr.io(&mut msgs, &mut agents) {
                    break 'mainloop;
                }
                if input_timer.tick_ready() {
                    break;
                }
                thread::sleep(input_timer.remaining().min(Duration::from_millis(2)));
            }
            if gr.feed(&msgs) {
                break 'mainloop;
            }
            gr.render();
            ar.step(&mut msgs, &mut agents);
        }
        gr.iosys.stop();
        iorun.run();
        gr.game
    }

    #[cfg(feature = "run_rayon")]
    fn run_rayon(self, iosys: impl IoSystem + 'static, mut iorun: impl IoRunner) -> G {
        let (send, recv) = crossbeam::channel::bounded(1);
        rayon::spawn(move || {
            let Self {
                game,
                mut msgs,
                mut agents,
                input_tick,
                fps,
            } = self;

            let mut ar = AgentRunner::new();
            let mut gr = GameRunner::new(game, iosys, fps);
            let mut input_timer = Timer::new(input_tick);

            'mainloop: loop {
                loop {
                    gr.render();
                    if gr.io(&mut msgs, &mut agents) {
                        break 'mainloop;
                    }
                    if input_timer.tick_ready() {
                        break;
                    }
                    thread::sleep(input_timer.remaining().min(Duration::from_millis(2)));
                }
                if gr.feed(&msgs) {
                    break 'mainloop;
                }
                gr.render();
                ar.step_rayon(&mut msgs, &mut agents);
            }
            gr.iosys.stop();
            // the receiving end only disappears if the main thread already panicked
            let _ = send.send(gr.game);
        });
        iorun.run();
        recv.recv().expect("game thread died before finishing")
    }

    /// Run the game until it quits or the IO system closes, then return it.
    ///
    /// Which loop runs depends on the `run_` feature selected.
    #[allow(unreachable_code)]
    pub fn run(self, iosys: impl IoSystem + 'static, iorun: impl IoRunner) -> G {
        use super::macros::feature_switch;

        feature_switch!(
            "run_single" => self.run_single(iosys, iorun),
            "run_rayon" => self.run_rayon(iosys, iorun),
        )
    }

    /// Pick an IO system with [`crate::io::sys::load`], then [`Self::run`].
    ///
    /// This **must** be run on the main thread.
    #[cfg(feature = "__sys")]
    pub fn load_run(self) -> crate::Result<G> {
        match crate::io::sys::load() {
            Ok((iosys, iorun)) => Ok(self.run(iosys, iorun)),
            Err(errs) => {
                let summary = errs
                    .iter()
                    .map(|(name, e)| format!("{}: {}", name, e))
                    .collect::<Vec<_>>()
                    .join("; ");
                Err(crate::Error::Backend(
                    format!("no io system could be loaded ({})", summary).into(),
                ))
            }
        }
    }
}
