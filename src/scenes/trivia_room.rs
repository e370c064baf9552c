//! A room full of questions. Answer enough of them right to get out.

use std::time::Duration;

use rand::Rng;

use crate::{
    constants::gameplay::{GOLD_PER_ANSWER, QUESTIONS_PER_ROOM, QUESTION_TIME, SCORE_PER_ANSWER},
    io::{Action, Key, Screen, XY},
    player::ItemKind,
    text,
    trivia::{Category, Deck, Question},
    GameState,
};

use super::{wrap, Ctx, Outcome, Scene, View};

const HEADER_ROW: usize = 2;
const PROMPT_ROW: usize = 4;
const CHOICE_ROW: usize = 9;
const TIMER_ROW: usize = 18;
const NOTICE_ROW: usize = 19;
const MARGIN: usize = 6;

/// Where the room is in asking the current question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for an answer.
    Asking,
    /// The answer has been shown. `chosen` is `None` if time ran out.
    Revealed { chosen: Option<usize>, correct: bool },
}

#[derive(Clone, Debug)]
pub struct TriviaRoom {
    category: Category,
    deck: Deck,
    question: Question,
    cursor: usize,
    time_left: Duration,
    progress: u32,
    phase: Phase,
    notice: Option<String>,
}

impl TriviaRoom {
    pub fn new(category: &Category, rng: &mut impl Rng) -> Self {
        let mut room = Self {
            category: category.clone(),
            deck: Deck::default(),
            question: category.questions[0].clone(),
            cursor: 0,
            time_left: QUESTION_TIME,
            progress: 0,
            phase: Phase::Asking,
            notice: None,
        };
        room.load_new_question(rng);
        tracing::info!(category = %category.name, "entered trivia room");
        room
    }

    /// Reuse this room for a new category, starting over on progress.
    pub fn enter(&mut self, category: &Category, rng: &mut impl Rng) {
        if self.category.name != category.name {
            self.category = category.clone();
            self.deck.reset();
        }
        self.progress = 0;
        self.load_new_question(rng);
        tracing::info!(category = %category.name, "entered trivia room");
    }

    /// Draw the next question from the deck and restart the clock.
    pub fn load_new_question(&mut self, rng: &mut impl Rng) {
        let index = self.deck.draw(self.category.questions.len(), rng);
        self.question = self.category.questions[index].clone();
        self.cursor = 0;
        self.time_left = QUESTION_TIME;
        self.phase = Phase::Asking;
        self.notice = None;
    }

    pub fn category(&self) -> &str {
        &self.category.name
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn time_left(&self) -> Duration {
        self.time_left
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn answer(&mut self, choice: usize, ctx: &mut Ctx) -> Outcome {
        if self.question.is_correct(choice) {
            let score = SCORE_PER_ANSWER * ctx.level;
            let gold = GOLD_PER_ANSWER * ctx.level;
            ctx.player.reward(score, gold);
            self.progress += 1;
            self.phase = Phase::Revealed {
                chosen: Some(choice),
                correct: true,
            };
            self.notice = Some(format!("Correct! +{} score, +{} gold.", score, gold));
            tracing::debug!(progress = self.progress, "correct answer");
        } else {
            self.miss(Some(choice), ctx);
        }
        Outcome::Redraw
    }

    /// A wrong answer, or `None` for running out of time.
    fn miss(&mut self, chosen: Option<usize>, ctx: &mut Ctx) {
        if ctx.player.inventory.take(ItemKind::RedoCharm).is_ok() {
            self.time_left = QUESTION_TIME;
            self.notice = Some("Your Redo Charm crumbles. Try again!".into());
            tracing::debug!("redo charm used");
            return;
        }
        ctx.player.lose_life();
        self.phase = Phase::Revealed {
            chosen,
            correct: false,
        };
        let why = if chosen.is_some() { "Wrong!" } else { "Out of time!" };
        self.notice = Some(format!("{} The answer was {}.", why, self.question.answer_text()));
        tracing::debug!(lives = ctx.player.lives, "wrong answer");
    }

    fn skip(&mut self, ctx: &mut Ctx) -> Outcome {
        if ctx.player.inventory.take(ItemKind::SkipScroll).is_err() {
            self.notice = Some("You don't have a Skip Scroll.".into());
            return Outcome::Redraw;
        }
        self.load_new_question(ctx.rng);
        self.notice = Some("The Skip Scroll whisks the question away.".into());
        Outcome::Redraw
    }

    fn carry_on(&mut self, ctx: &mut Ctx) -> Outcome {
        if ctx.player.is_dead() {
            Outcome::Goto(GameState::Lose)
        } else if self.progress >= QUESTIONS_PER_ROOM {
            Outcome::RoomCleared
        } else {
            self.load_new_question(ctx.rng);
            Outcome::Redraw
        }
    }

    fn choice_row(index: usize) -> usize {
        CHOICE_ROW + index * 2
    }

    fn choice_at(&self, pos: XY) -> Option<usize> {
        (0..self.question.choices.len()).find(|&i| Self::choice_row(i) == pos.y())
    }
}

impl Scene for TriviaRoom {
    fn input(&mut self, action: &Action, ctx: &mut Ctx) -> Outcome {
        if let Phase::Revealed { .. } = self.phase {
            if action.is_press(Key::Enter) || action.pressed_char() == Some(' ') || action.left_click().is_some() {
                return self.carry_on(ctx);
            }
            return Outcome::Nothing;
        }

        let count = self.question.choices.len();
        match action {
            Action::KeyPress { key: Key::Up } => {
                self.cursor = (self.cursor + count - 1) % count;
                Outcome::Redraw
            }
            Action::KeyPress { key: Key::Down } => {
                self.cursor = (self.cursor + 1) % count;
                Outcome::Redraw
            }
            Action::KeyPress { key: Key::Enter } => self.answer(self.cursor, ctx),
            Action::KeyPress { key: Key::Char('x') } => self.skip(ctx),
            Action::KeyPress { key: Key::Char(ch @ '1'..='9') } => {
                let choice = *ch as usize - '1' as usize;
                if choice < count {
                    self.answer(choice, ctx)
                } else {
                    Outcome::Nothing
                }
            }
            Action::MouseMove { pos } => match self.choice_at(*pos) {
                Some(i) if i != self.cursor => {
                    self.cursor = i;
                    Outcome::Redraw
                }
                _ => Outcome::Nothing,
            },
            other => match other.left_click().and_then(|pos| self.choice_at(pos)) {
                Some(i) => self.answer(i, ctx),
                None => Outcome::Nothing,
            },
        }
    }

    fn second(&mut self, ctx: &mut Ctx) -> Outcome {
        if self.phase != Phase::Asking {
            return Outcome::Nothing;
        }
        self.time_left = self.time_left.saturating_sub(Duration::from_secs(1));
        if self.time_left.is_zero() {
            self.miss(None, ctx);
        }
        Outcome::Redraw
    }

    fn render(&self, _view: &View, screen: &mut Screen) {
        screen.write_centered(
            HEADER_ROW,
            text![
                bright_cyan bold "{}"(self.category.name),
                white ": question {} of {}"((self.progress + 1).min(QUESTIONS_PER_ROOM), QUESTIONS_PER_ROOM),
            ],
        );

        let width = screen.size().x().saturating_sub(MARGIN * 2);
        for (i, line) in wrap(&self.question.prompt, width).into_iter().take(CHOICE_ROW - PROMPT_ROW - 1).enumerate() {
            screen.write(XY(MARGIN, PROMPT_ROW + i), text![bright_white "{}"(line)]);
        }

        for (i, choice) in self.question.choices.iter().enumerate() {
            let line = match self.phase {
                Phase::Revealed { .. } if i == self.question.answer => {
                    text![bright_green bold "  {}) {}"(i + 1, choice)]
                }
                Phase::Revealed { chosen: Some(c), .. } if c == i => text![bright_red "  {}) {}"(i + 1, choice)],
                Phase::Asking if i == self.cursor => text![bright_yellow bold "> {}) {}"(i + 1, choice)],
                _ => text![white "  {}) {}"(i + 1, choice)],
            };
            screen.write(XY(MARGIN, Self::choice_row(i)), line);
        }

        if self.phase == Phase::Asking {
            let secs = self.time_left.as_secs();
            let timer = if secs <= 5 {
                text![bright_red bold "Time: {}s"(secs)]
            } else {
                text![white "Time: {}s"(secs)]
            };
            screen.write(XY(MARGIN, TIMER_ROW), timer);
        }
        if let Some(notice) = &self.notice {
            screen.write(XY(MARGIN, NOTICE_ROW), text![yellow "{}"(notice)]);
        }

        let hint = match self.phase {
            Phase::Asking => text![bright_black "1-4 or Up/Down+Enter to answer, x to use a Skip Scroll"],
            Phase::Revealed { .. } => text![bright_black "Enter to continue"],
        };
        screen.write_centered(screen.size().y().saturating_sub(2), hint);
    }
}

#[cfg(test)]
mod test {
    use crate::{
        io::{press, press_char},
        scenes::testing::Harness,
    };

    use super::*;

    fn room(h: &mut Harness) -> TriviaRoom {
        let cat = h.bank.categories()[0].clone();
        TriviaRoom::new(&cat, &mut h.rng)
    }

    fn wrong_choice(room: &TriviaRoom) -> char {
        let wrong = (room.question().answer + 1) % room.question().choices.len();
        char::from(b'1' + wrong as u8)
    }

    fn right_choice(room: &TriviaRoom) -> char {
        char::from(b'1' + room.question().answer as u8)
    }

    #[test]
    fn correct_answer_rewards_by_level() {
        let mut h = Harness::new();
        h.level = 2;
        let mut r = room(&mut h);
        let key = right_choice(&r);
        assert_eq!(r.input(&press_char(key), &mut h.ctx()), Outcome::Redraw);
        assert_eq!(h.player.score, 20);
        assert_eq!(h.player.gold, 110);
        assert_eq!(r.progress(), 1);
        assert!(matches!(r.phase(), Phase::Revealed { correct: true, .. }));
    }

    #[test]
    fn wrong_answer_costs_a_life() {
        let mut h = Harness::new();
        let mut r = room(&mut h);
        let key = wrong_choice(&r);
        r.input(&press_char(key), &mut h.ctx());
        assert_eq!(h.player.lives, 4);
        assert_eq!(r.progress(), 0);
        assert!(matches!(r.phase(), Phase::Revealed { correct: false, chosen: Some(_) }));
        assert!(r.notice().unwrap().starts_with("Wrong!"));
        // input other than continuing is ignored once revealed
        assert_eq!(r.input(&press_char('1'), &mut h.ctx()), Outcome::Nothing);
        assert_eq!(r.input(&press(Key::Enter), &mut h.ctx()), Outcome::Redraw);
        assert_eq!(r.phase(), Phase::Asking);
    }

    #[test]
    fn redo_charm_absorbs_a_miss() {
        let mut h = Harness::new();
        h.player.inventory.add(ItemKind::RedoCharm, 1);
        let mut r = room(&mut h);
        let asked = r.question().clone();
        let key = wrong_choice(&r);
        r.input(&press_char(key), &mut h.ctx());
        assert_eq!(h.player.lives, 5);
        assert!(!h.player.inventory.has(ItemKind::RedoCharm));
        assert_eq!(r.phase(), Phase::Asking);
        assert_eq!(r.question(), &asked);
        r.input(&press_char(key), &mut h.ctx());
        assert_eq!(h.player.lives, 4);
    }

    #[test]
    fn redo_charm_absorbs_a_timeout() {
        let mut h = Harness::new();
        h.player.inventory.add(ItemKind::RedoCharm, 1);
        let mut r = room(&mut h);
        let asked = r.question().clone();
        for _ in 0..QUESTION_TIME.as_secs() {
            r.second(&mut h.ctx());
        }
        assert_eq!(r.phase(), Phase::Asking);
        assert_eq!(r.time_left(), QUESTION_TIME);
        assert_eq!(r.question(), &asked);
        assert_eq!(h.player.lives, 5);
        assert!(!h.player.inventory.has(ItemKind::RedoCharm));
    }

    #[test]
    fn timer_runs_out() {
        let mut h = Harness::new();
        let mut r = room(&mut h);
        for _ in 0..QUESTION_TIME.as_secs() - 1 {
            assert_eq!(r.second(&mut h.ctx()), Outcome::Redraw);
        }
        assert_eq!(r.phase(), Phase::Asking);
        assert_eq!(r.time_left(), Duration::from_secs(1));
        r.second(&mut h.ctx());
        assert_eq!(r.phase(), Phase::Revealed { chosen: None, correct: false });
        assert_eq!(h.player.lives, 4);
        assert!(r.notice().unwrap().starts_with("Out of time!"));
        assert_eq!(r.second(&mut h.ctx()), Outcome::Nothing);
    }

    #[test]
    fn skip_scroll_swaps_question() {
        let mut h = Harness::new();
        let mut r = room(&mut h);
        r.input(&press_char('x'), &mut h.ctx());
        assert_eq!(r.notice(), Some("You don't have a Skip Scroll."));
        h.player.inventory.add(ItemKind::SkipScroll, 1);
        r.second(&mut h.ctx());
        r.input(&press_char('x'), &mut h.ctx());
        assert!(!h.player.inventory.has(ItemKind::SkipScroll));
        assert_eq!(r.time_left(), QUESTION_TIME);
        assert_eq!(h.player.lives, 5);
        assert_eq!(r.phase(), Phase::Asking);
    }

    #[test]
    fn clearing_and_dying() {
        let mut h = Harness::new();
        let mut r = room(&mut h);
        for answered in 1..=QUESTIONS_PER_ROOM {
            let key = right_choice(&r);
            r.input(&press_char(key), &mut h.ctx());
            let next = r.input(&press(Key::Enter), &mut h.ctx());
            if answered == QUESTIONS_PER_ROOM {
                assert_eq!(next, Outcome::RoomCleared);
            } else {
                assert_eq!(next, Outcome::Redraw);
            }
        }

        let mut h = Harness::new();
        h.player.lives = 1;
        let mut r = room(&mut h);
        let key = wrong_choice(&r);
        r.input(&press_char(key), &mut h.ctx());
        assert_eq!(r.input(&press(Key::Enter), &mut h.ctx()), Outcome::Goto(GameState::Lose));
    }

    #[test]
    fn cursor_answers_with_enter() {
        let mut h = Harness::new();
        let mut r = room(&mut h);
        let answer = r.question().answer;
        for _ in 0..answer {
            r.input(&press(Key::Down), &mut h.ctx());
        }
        r.input(&press(Key::Enter), &mut h.ctx());
        assert!(matches!(r.phase(), Phase::Revealed { correct: true, .. }));
    }

    #[test]
    fn entering_resets_progress() {
        let mut h = Harness::new();
        let mut r = room(&mut h);
        let key = right_choice(&r);
        r.input(&press_char(key), &mut h.ctx());
        assert_eq!(r.progress(), 1);
        let other = h.bank.categories()[1].clone();
        r.enter(&other, &mut h.rng);
        assert_eq!(r.progress(), 0);
        assert_eq!(r.category(), other.name);
        assert_eq!(r.phase(), Phase::Asking);
    }

    #[test]
    fn renders_question_and_timer() {
        let mut h = Harness::new();
        let r = room(&mut h);
        let screen = h.draw(&r);
        assert!(screen.contains(r.category()));
        assert!(screen.contains("Time: 20s"));
        assert!(screen.contains(&format!("1) {}", r.question().choices[0])));
    }
}
