//! The title screen.

use crate::{
    io::{Action, Key, Screen},
    text, GameState,
};

use super::{centered, Ctx, Outcome, Pick, Picker, Scene, View};

const OPTIONS: [&str; 2] = ["Play", "Quit"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Menu {
    picker: Picker,
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            picker: Picker::new(15, 2),
        }
    }
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    fn choose(&self, index: usize) -> Outcome {
        match OPTIONS[index] {
            "Play" => Outcome::NewRun(GameState::MidLevel),
            _ => Outcome::Quit,
        }
    }
}

impl Scene for Menu {
    fn input(&mut self, action: &Action, _ctx: &mut Ctx) -> Outcome {
        if action.is_press(Key::Escape) || action.pressed_char() == Some('q') {
            return Outcome::Quit;
        }
        match self.picker.input(action, OPTIONS.len()) {
            Pick::Ignored => Outcome::Nothing,
            Pick::Moved => Outcome::Redraw,
            Pick::Chosen(i) => self.choose(i),
        }
    }

    fn render(&self, view: &View, screen: &mut Screen) {
        let title = &view.assets.title;
        screen.blit(title, centered(screen, title.size()), 2);
        screen.write_centered(2 + title.size().y() + 1, text![bright_black "answer your way out"]);
        self.picker.render(&OPTIONS[..], screen);
        screen.write_centered(
            screen.size().y().saturating_sub(2),
            text![bright_black "Up/Down to choose, Enter to pick, q to quit"],
        );
    }
}
