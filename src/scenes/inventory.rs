//! The player's bag, opened over whatever screen they were on.

use crate::{
    io::{Action, Key, Screen},
    text,
};

use super::{Ctx, Outcome, Pick, Picker, Scene, View};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryScreen {
    picker: Picker,
    notice: Option<String>,
}

impl Default for InventoryScreen {
    fn default() -> Self {
        Self {
            picker: Picker::new(5, 2),
            notice: None,
        }
    }
}

impl InventoryScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the last visit.
    pub fn open(&mut self) {
        self.picker.reset();
        self.notice = None;
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

impl Scene for InventoryScreen {
    fn input(&mut self, action: &Action, ctx: &mut Ctx) -> Outcome {
        if action.is_press(Key::Escape) {
            return Outcome::ToggleInventory;
        }
        let owned: Vec<_> = ctx.player.inventory.iter().collect();
        match self.picker.input(action, owned.len()) {
            Pick::Ignored => Outcome::Nothing,
            Pick::Moved => Outcome::Redraw,
            Pick::Chosen(i) => {
                let item = owned[i].0;
                self.notice = Some(match ctx.player.use_item(item) {
                    Ok(()) => format!("You use the {}. Lives: {}.", item, ctx.player.lives),
                    Err(e) => format!("{}.", capitalize(&e.to_string())),
                });
                self.picker.clamp(ctx.player.inventory.len());
                Outcome::Redraw
            }
        }
    }

    fn render(&self, view: &View, screen: &mut Screen) {
        screen.write_centered(1, text![bright_white bold "Inventory"]);
        screen.write_centered(
            3,
            text![red "Lives: {}/{}"(view.player.lives, view.player.max_lives), yellow "   Gold: {}"(view.player.gold)],
        );

        let owned: Vec<_> = view.player.inventory.iter().collect();
        if owned.is_empty() {
            screen.write_centered(5, text![bright_black "Your bag is empty."]);
        } else {
            let labels: Vec<String> = owned
                .iter()
                .map(|(item, count)| format!("{:<12} x{}", item.name(), count))
                .collect();
            self.picker.render(&labels, screen);
            let below = self.picker.row_of(owned.len()) + 1;
            if let Some((item, _)) = owned.get(self.picker.selected()) {
                screen.write_centered(below, text![white "{}"(item.description())]);
            }
        }

        if let Some(notice) = &self.notice {
            screen.write_centered(screen.size().y().saturating_sub(4), text![bright_yellow "{}"(notice)]);
        }
        screen.write_centered(
            screen.size().y().saturating_sub(2),
            text![bright_black "Up/Down to choose, Enter to use, Esc or i to close"],
        );
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
