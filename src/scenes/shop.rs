//! Where gold turns into items.

use crate::{
    io::{Action, Key, Screen, XY},
    player::ItemKind,
    text, GameState,
};

use super::{Ctx, Outcome, Pick, Picker, Scene, View};

const LIST_ROW: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shop {
    picker: Picker,
    notice: Option<String>,
}

impl Default for Shop {
    fn default() -> Self {
        Self {
            picker: Picker::new(LIST_ROW, 2),
            notice: None,
        }
    }
}

impl Shop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn buy(&mut self, item: ItemKind, ctx: &mut Ctx) -> Outcome {
        self.notice = Some(match ctx.player.buy(item) {
            Ok(()) => format!("Bought a {}. Pleasure doing business!", item),
            Err(e) => {
                tracing::debug!(error = %e, "purchase refused");
                format!("{}.", e)
            }
        });
        Outcome::Redraw
    }
}

impl Scene for Shop {
    fn input(&mut self, action: &Action, ctx: &mut Ctx) -> Outcome {
        if action.is_press(Key::Escape) {
            self.notice = None;
            return Outcome::Goto(GameState::MidLevel);
        }
        match self.picker.input(action, ItemKind::ALL.len()) {
            Pick::Ignored => Outcome::Nothing,
            Pick::Moved => Outcome::Redraw,
            Pick::Chosen(i) => self.buy(ItemKind::ALL[i], ctx),
        }
    }

    fn render(&self, view: &View, screen: &mut Screen) {
        screen.write_centered(1, text![bright_green bold "~ The Shop ~"]);
        screen.write_centered(3, text![yellow "Gold: {}"(view.player.gold)]);

        let labels: Vec<String> = ItemKind::ALL
            .iter()
            .map(|item| {
                format!(
                    "{:<12} {:>3}g  (own {})",
                    item.name(),
                    item.price(),
                    view.player.inventory.count(*item)
                )
            })
            .collect();
        self.picker.render(&labels, screen);

        let selected = ItemKind::ALL[self.picker.selected()];
        let below = self.picker.row_of(ItemKind::ALL.len()) + 1;
        screen.write_centered(below, text![white "{}"(selected.description())]);
        if let Some(notice) = &self.notice {
            screen.write_centered(below + 2, text![bright_yellow "{}"(notice)]);
        }
        screen.write(
            XY(0, screen.size().y().saturating_sub(2)),
            text![bright_black " Up/Down to choose, Enter to buy, Esc to leave"],
        );
    }
}

#[cfg(test)]
mod test {
    use crate::{io::press, scenes::testing::Harness};

    use super::*;

    #[test]
    fn buys_selected_item() {
        let mut h = Harness::new();
        let mut shop = Shop::new();
        shop.input(&press(Key::Down), &mut h.ctx());
        assert_eq!(shop.input(&press(Key::Enter), &mut h.ctx()), Outcome::Redraw);
        assert_eq!(h.player.inventory.count(ItemKind::RedoCharm), 1);
        assert_eq!(h.player.gold, 60);
        assert_eq!(shop.notice(), Some("Bought a Redo Charm. Pleasure doing business!"));
    }

    #[test]
    fn too_poor_is_a_notice() {
        let mut h = Harness::new();
        h.player.gold = 10;
        let mut shop = Shop::new();
        shop.input(&press(Key::Enter), &mut h.ctx());
        assert_eq!(h.player.gold, 10);
        assert_eq!(shop.notice(), Some("a Red Potion costs 25 gold, you only have 10."));
        let screen = h.draw(&shop);
        assert!(screen.contains("you only have 10"));
        assert!(screen.contains("Gold: 10"));
    }

    #[test]
    fn escape_leaves() {
        let mut h = Harness::new();
        let mut shop = Shop::new();
        assert_eq!(shop.input(&press(Key::Escape), &mut h.ctx()), Outcome::Goto(GameState::MidLevel));
    }
}
