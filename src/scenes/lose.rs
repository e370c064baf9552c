use crate::{
    io::{Action, Screen},
    text, GameState,
};

use super::{centered, Ctx, Outcome, Pick, Picker, Scene, View};

const OPTIONS: [&str; 2] = ["Try again", "Quit"];

/// Out of lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoseScreen {
    picker: Picker,
}

impl Default for LoseScreen {
    fn default() -> Self {
        Self {
            picker: Picker::new(17, 2),
        }
    }
}

impl LoseScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scene for LoseScreen {
    fn input(&mut self, action: &Action, _ctx: &mut Ctx) -> Outcome {
        match self.picker.input(action, OPTIONS.len()) {
            Pick::Ignored => Outcome::Nothing,
            Pick::Moved => Outcome::Redraw,
            Pick::Chosen(0) => {
                self.picker.reset();
                Outcome::NewRun(GameState::Menu)
            }
            Pick::Chosen(_) => Outcome::Quit,
        }
    }

    fn render(&self, view: &View, screen: &mut Screen) {
        screen.write_centered(1, text![bright_red bold "You lose"]);
        let skull = &view.assets.skull;
        screen.blit(skull, centered(screen, skull.size()), 3);
        screen.write_centered(
            4 + skull.size().y(),
            text![white "Final score: {}"(view.player.score), white "   Level reached: {}"(view.level)],
        );
        self.picker.render(&OPTIONS[..], screen);
    }
}
