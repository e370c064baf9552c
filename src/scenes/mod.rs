//! The screens of the game. Each one only handles its own input and drawing; moving between them is up to
//! [`TriviaRoguelite`](crate::TriviaRoguelite), which acts on the [`Outcome`]s they return.

use rand::rngs::SmallRng;

use crate::{
    assets::Assets,
    io::{Action, Key, Screen, XY},
    player::Player,
    text,
    trivia::QuestionBank,
    GameState,
};

pub mod hud;
mod inventory;
mod lose;
mod menu;
mod mid_level;
mod shop;
mod shopkeeper;
mod trivia_room;
mod victory;

pub use self::{
    inventory::InventoryScreen,
    lose::LoseScreen,
    menu::Menu,
    mid_level::{Door, MidLevel},
    shop::Shop,
    shopkeeper::Shopkeeper,
    trivia_room::{Phase, TriviaRoom},
    victory::{Sock, SockRain, VictoryScreen},
};

/// What a screen wants to happen after handling something.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Nothing,
    Redraw,
    /// Switch to another screen.
    Goto(GameState),
    /// Walk through a category door.
    EnterTrivia(String),
    /// Enough questions were answered to finish the room.
    RoomCleared,
    /// Throw away the current run and start over, then go to the given screen.
    NewRun(GameState),
    /// Open or close the inventory.
    ToggleInventory,
    Quit,
}

impl Outcome {
    pub fn redraw_if(flag: bool) -> Self {
        if flag {
            Self::Redraw
        } else {
            Self::Nothing
        }
    }
}

/// The parts of the game a screen is allowed to change.
pub struct Ctx<'a> {
    pub player: &'a mut Player,
    pub rng: &'a mut SmallRng,
    pub bank: &'a QuestionBank,
    pub level: u32,
}

/// The parts of the game a screen can see while drawing.
pub struct View<'a> {
    pub player: &'a Player,
    pub assets: &'a Assets,
    pub level: u32,
    pub rooms_cleared: u32,
}

pub trait Scene {
    /// Handle one input. Only called while this screen is showing.
    fn input(&mut self, action: &Action, ctx: &mut Ctx) -> Outcome;

    /// Step animations, once per round. Returns whether anything moved.
    fn tick(&mut self, _ctx: &mut Ctx) -> bool {
        false
    }

    /// A wall-clock second passed.
    fn second(&mut self, _ctx: &mut Ctx) -> Outcome {
        Outcome::Nothing
    }

    fn render(&self, view: &View, screen: &mut Screen);
}

/// What happened to a [`Picker`] after an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pick {
    /// Not for us.
    Ignored,
    /// The highlight moved.
    Moved,
    /// The option at this index was chosen.
    Chosen(usize),
}

/// A vertical list of options, one every `gap` rows starting at `top`, picked with the arrows and Enter or the mouse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Picker {
    selected: usize,
    top: usize,
    gap: usize,
}

impl Picker {
    pub fn new(top: usize, gap: usize) -> Self {
        Self {
            selected: 0,
            top,
            gap: gap.max(1),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }

    /// Keep the selection in range after the list shrinks.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn row_of(&self, index: usize) -> usize {
        self.top + index * self.gap
    }

    /// The option drawn on the row under `pos`, if any.
    pub fn index_at(&self, pos: XY, len: usize) -> Option<usize> {
        let offset = pos.y().checked_sub(self.top)?;
        if offset % self.gap != 0 {
            return None;
        }
        Some(offset / self.gap).filter(|&i| i < len)
    }

    pub fn input(&mut self, action: &Action, len: usize) -> Pick {
        if len == 0 {
            return Pick::Ignored;
        }
        match action {
            Action::KeyPress { key: Key::Up } => {
                self.selected = (self.selected + len - 1) % len;
                Pick::Moved
            }
            Action::KeyPress { key: Key::Down } | Action::KeyPress { key: Key::Tab } => {
                self.selected = (self.selected + 1) % len;
                Pick::Moved
            }
            Action::KeyPress { key: Key::Enter } => Pick::Chosen(self.selected.min(len - 1)),
            Action::MouseMove { pos } => match self.index_at(*pos, len) {
                Some(i) if i != self.selected => {
                    self.selected = i;
                    Pick::Moved
                }
                _ => Pick::Ignored,
            },
            other => match other.left_click().and_then(|pos| self.index_at(pos, len)) {
                Some(i) => {
                    self.selected = i;
                    Pick::Chosen(i)
                }
                None => Pick::Ignored,
            },
        }
    }

    /// Draw each label centered on its row, with the selected one highlighted.
    pub fn render<S: AsRef<str>>(&self, labels: &[S], screen: &mut Screen) {
        for (i, label) in labels.iter().enumerate() {
            let label = label.as_ref();
            let line = if i == self.selected {
                text![bright_yellow bold "> {} <"(label)]
            } else {
                text![white "  {}  "(label)]
            };
            screen.write_centered(self.row_of(i), line);
        }
    }
}

/// Greedily wrap words into lines at most `width` characters long. Overlong words get a line to themselves.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = vec![];
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Where a sprite `size` wide should start to be centered on the screen.
fn centered(screen: &Screen, size: XY) -> isize {
    screen.size().center_x(size.x()) as isize
}
