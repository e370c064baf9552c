//! The corridor between trivia rooms: a row of doors, one of them the shop.

use rand::Rng;

use crate::{
    constants::{
        gameplay::{DOORS_PER_ROOM, ROOMS_PER_LEVEL},
        graphics::TARGET_SIZE,
    },
    io::{Action, Key, Screen, XY},
    text,
    trivia::QuestionBank,
    GameState,
};

use super::{Ctx, Outcome, Scene, View};

const HEADER_ROW: usize = 2;
const DOOR_ROW: usize = 4;
const LABEL_ROW: usize = 12;
const AVATAR_ROW: usize = 14;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Door {
    /// Leads to a trivia room on this category.
    Category(String),
    Shop,
}

impl Door {
    pub fn label(&self) -> &str {
        match self {
            Door::Category(name) => name,
            Door::Shop => "Shop",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MidLevel {
    doors: Vec<Door>,
    selected: usize,
    /// The column the avatar's center is in.
    avatar_x: usize,
}

impl MidLevel {
    pub fn new(bank: &QuestionBank, rng: &mut impl Rng) -> Self {
        let mut level = Self {
            doors: vec![],
            selected: 0,
            avatar_x: TARGET_SIZE.x() / 2,
        };
        level.reroll(bank, rng);
        level
    }

    /// Put up a fresh set of doors for a new room.
    pub fn reroll(&mut self, bank: &QuestionBank, rng: &mut impl Rng) {
        self.doors = bank
            .sample_categories(rng, DOORS_PER_ROOM)
            .into_iter()
            .map(Door::Category)
            .collect();
        self.doors.push(Door::Shop);
        self.selected = 0;
        tracing::debug!(doors = ?self.doors, "new corridor");
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn avatar_x(&self) -> usize {
        self.avatar_x
    }

    fn slot_width(&self) -> usize {
        TARGET_SIZE.x() / self.doors.len().max(1)
    }

    /// The center column of a door.
    fn door_center(&self, index: usize) -> usize {
        let slot = self.slot_width();
        slot * index + slot / 2
    }

    fn door_at(&self, pos: XY) -> Option<usize> {
        if !(DOOR_ROW..=LABEL_ROW).contains(&pos.y()) {
            return None;
        }
        Some(pos.x() / self.slot_width()).filter(|&i| i < self.doors.len())
    }

    fn open(&self, index: usize) -> Outcome {
        match self.doors.get(index) {
            Some(Door::Category(name)) => Outcome::EnterTrivia(name.clone()),
            Some(Door::Shop) => Outcome::Goto(GameState::Shopkeeper),
            None => Outcome::Nothing,
        }
    }
}

impl Scene for MidLevel {
    fn input(&mut self, action: &Action, _ctx: &mut Ctx) -> Outcome {
        let last = self.doors.len().saturating_sub(1);
        match action {
            Action::KeyPress { key: Key::Left } => {
                let moved = self.selected > 0;
                self.selected = self.selected.saturating_sub(1);
                Outcome::redraw_if(moved)
            }
            Action::KeyPress { key: Key::Right } => {
                let moved = self.selected < last;
                self.selected = (self.selected + 1).min(last);
                Outcome::redraw_if(moved)
            }
            Action::KeyPress { key: Key::Enter } => self.open(self.selected),
            other => match other.left_click().and_then(|pos| self.door_at(pos)) {
                Some(i) => {
                    self.selected = i;
                    self.open(i)
                }
                None => Outcome::Nothing,
            },
        }
    }

    fn tick(&mut self, _ctx: &mut Ctx) -> bool {
        let target = self.door_center(self.selected);
        if self.avatar_x < target {
            self.avatar_x += 1;
        } else if self.avatar_x > target {
            self.avatar_x -= 1;
        } else {
            return false;
        }
        true
    }

    fn render(&self, view: &View, screen: &mut Screen) {
        screen.write_centered(
            HEADER_ROW,
            text![
                bright_white "Level {}"(view.level),
                white ", room {} of {}. "(view.rooms_cleared + 1, ROOMS_PER_LEVEL),
                white "Pick a door.",
            ],
        );

        let slot = self.slot_width();
        for (i, door) in self.doors.iter().enumerate() {
            let sprite = match door {
                Door::Category(_) => &view.assets.door,
                Door::Shop => &view.assets.shop_door,
            };
            let center = self.door_center(i) as isize;
            screen.blit(sprite, center - sprite.size().x() as isize / 2, DOOR_ROW as isize);

            let label: String = door.label().chars().take(slot.saturating_sub(2)).collect();
            let left = self.door_center(i).saturating_sub(label.chars().count() / 2);
            let text = if i == self.selected {
                text![bright_yellow bold "{}"(label)]
            } else {
                text![white "{}"(label)]
            };
            screen.write(XY(left, LABEL_ROW), text);
        }

        let avatar = &view.assets.avatar;
        screen.blit(
            avatar,
            self.avatar_x as isize - avatar.size().x() as isize / 2,
            AVATAR_ROW as isize,
        );

        screen.write_centered(
            screen.size().y().saturating_sub(2),
            text![bright_black "Left/Right to choose, Enter to go in, i for inventory"],
        );
    }
}

#[cfg(test)]
mod test {
    use crate::{
        io::{press, MouseButton},
        scenes::testing::Harness,
    };

    use super::*;

    fn level(h: &mut Harness) -> MidLevel {
        MidLevel::new(&h.bank, &mut h.rng)
    }

    #[test]
    fn shop_door_is_always_last() {
        let mut h = Harness::new();
        let ml = level(&mut h);
        assert!(ml.doors().len() >= 2);
        assert!(ml.doors().len() <= DOORS_PER_ROOM + 1);
        assert_eq!(ml.doors().last(), Some(&Door::Shop));
        assert!(ml.doors()[..ml.doors().len() - 1]
            .iter()
            .all(|d| matches!(d, Door::Category(_))));
    }

    #[test]
    fn doors_lead_places() {
        let mut h = Harness::new();
        let mut ml = level(&mut h);
        let first = ml.doors()[0].label().to_string();
        assert_eq!(ml.input(&press(Key::Enter), &mut h.ctx()), Outcome::EnterTrivia(first));
        assert_eq!(ml.input(&press(Key::Left), &mut h.ctx()), Outcome::Nothing);
        for _ in 0..ml.doors().len() {
            ml.input(&press(Key::Right), &mut h.ctx());
        }
        assert_eq!(ml.selected(), ml.doors().len() - 1);
        assert_eq!(ml.input(&press(Key::Enter), &mut h.ctx()), Outcome::Goto(GameState::Shopkeeper));
    }

    #[test]
    fn clicking_a_door_opens_it() {
        let mut h = Harness::new();
        let mut ml = level(&mut h);
        let last = ml.doors().len() - 1;
        let click = Action::MousePress {
            pos: XY(ml.door_center(last), DOOR_ROW + 2),
            button: MouseButton::Left,
        };
        assert_eq!(ml.input(&click, &mut h.ctx()), Outcome::Goto(GameState::Shopkeeper));
        assert_eq!(ml.selected(), last);
    }

    #[test]
    fn avatar_walks_to_selection() {
        let mut h = Harness::new();
        let mut ml = level(&mut h);
        let target = ml.door_center(0);
        let steps = ml.avatar_x().abs_diff(target);
        for _ in 0..steps {
            assert!(ml.tick(&mut h.ctx()));
        }
        assert_eq!(ml.avatar_x(), target);
        assert!(!ml.tick(&mut h.ctx()));
    }

    #[test]
    fn renders_labels_and_hint() {
        let mut h = Harness::new();
        let ml = level(&mut h);
        let screen = h.draw(&ml);
        assert!(screen.row_text(LABEL_ROW).contains("Shop"));
        assert!(screen.row_text(LABEL_ROW).contains(ml.doors()[0].label()));
        assert!(screen.contains("Level 1, room 1 of 2."));
    }

    #[test]
    fn reroll_resets_selection() {
        let mut h = Harness::new();
        let mut ml = level(&mut h);
        ml.input(&press(Key::Right), &mut h.ctx());
        ml.reroll(&h.bank, &mut h.rng);
        assert_eq!(ml.selected(), 0);
    }
}
