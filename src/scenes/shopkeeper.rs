use crate::{
    io::{Action, Key, Screen},
    text, GameState,
};

use super::{centered, wrap, Ctx, Outcome, Scene, View};

const GREETING: &str = "Welcome, traveller! Potions, charms, scrolls... everything a quizzer could want. Care to browse?";

/// The shopkeeper's greeting, before the actual shop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Shopkeeper;

impl Scene for Shopkeeper {
    fn input(&mut self, action: &Action, _ctx: &mut Ctx) -> Outcome {
        match action {
            Action::KeyPress { key: Key::Enter } => Outcome::Goto(GameState::Shop),
            Action::KeyPress { key: Key::Escape } => Outcome::Goto(GameState::MidLevel),
            other if other.left_click().is_some() => Outcome::Goto(GameState::Shop),
            _ => Outcome::Nothing,
        }
    }

    fn render(&self, view: &View, screen: &mut Screen) {
        let keeper = &view.assets.shopkeeper;
        screen.blit(keeper, centered(screen, keeper.size()), 2);
        let mut row = 2 + keeper.size().y() + 1;
        for line in wrap(GREETING, 60) {
            screen.write_centered(row, text![bright_magenta "{}"(line)]);
            row += 1;
        }
        screen.write_centered(row + 1, text![yellow "You have {} gold."(view.player.gold)]);
        screen.write_centered(
            screen.size().y().saturating_sub(2),
            text![bright_black "Enter to browse, Esc to leave"],
        );
    }
}

#[cfg(test)]
mod test {
    use crate::{io::press, scenes::testing::Harness};

    use super::*;

    #[test]
    fn browse_or_leave() {
        let mut h = Harness::new();
        let mut sk = Shopkeeper;
        assert_eq!(sk.input(&press(Key::Enter), &mut h.ctx()), Outcome::Goto(GameState::Shop));
        assert_eq!(sk.input(&press(Key::Escape), &mut h.ctx()), Outcome::Goto(GameState::MidLevel));
        assert_eq!(sk.input(&press(Key::Up), &mut h.ctx()), Outcome::Nothing);
        assert!(h.draw(&sk).contains("You have 100 gold."));
    }
}
