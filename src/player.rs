//! The player: lives, gold, score, and a bag of items.

use std::{collections::BTreeMap, fmt};

use crate::constants::gameplay::{MAX_LIVES, START_GOLD, START_LIVES};

/// Something the player can buy and carry around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemKind {
    RedPotion,
    RedoCharm,
    SkipScroll,
}

impl ItemKind {
    /// Everything, in shop order.
    pub const ALL: [ItemKind; 3] = [ItemKind::RedPotion, ItemKind::RedoCharm, ItemKind::SkipScroll];

    pub fn name(self) -> &'static str {
        match self {
            ItemKind::RedPotion => "Red Potion",
            ItemKind::RedoCharm => "Redo Charm",
            ItemKind::SkipScroll => "Skip Scroll",
        }
    }

    pub fn price(self) -> u32 {
        match self {
            ItemKind::RedPotion => 25,
            ItemKind::RedoCharm => 40,
            ItemKind::SkipScroll => 30,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ItemKind::RedPotion => "Restores one life.",
            ItemKind::RedoCharm => "Shrugs off one wrong answer and lets you try again.",
            ItemKind::SkipScroll => "Swaps the current question for another. Press x in a trivia room.",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why an item couldn't be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    #[error("you don't have a {0}")]
    NotOwned(ItemKind),
    #[error("you're already at full health")]
    FullHealth,
    #[error("the {0} only works in a trivia room")]
    WrongPlace(ItemKind),
}

/// Why something couldn't be bought.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PurchaseError {
    #[error("a {item} costs {price} gold, you only have {gold}")]
    TooPoor { item: ItemKind, price: u32, gold: u32 },
}

/// Item counts. Never holds an entry for zero of something.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    items: BTreeMap<ItemKind, u32>,
}

impl Inventory {
    pub fn add(&mut self, item: ItemKind, count: u32) {
        if count > 0 {
            *self.items.entry(item).or_insert(0) += count;
        }
    }

    pub fn count(&self, item: ItemKind) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    pub fn has(&self, item: ItemKind) -> bool {
        self.count(item) > 0
    }

    /// Remove one of `item`, if there is one.
    pub fn take(&mut self, item: ItemKind) -> Result<(), ItemError> {
        match self.items.get_mut(&item) {
            Some(n) if *n > 1 => *n -= 1,
            Some(_) => {
                self.items.remove(&item);
            }
            None => return Err(ItemError::NotOwned(item)),
        }
        Ok(())
    }

    /// What's owned, in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemKind, u32)> + '_ {
        self.items.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub lives: u32,
    pub max_lives: u32,
    pub gold: u32,
    pub score: u32,
    pub inventory: Inventory,
}

impl Player {
    pub fn new(lives: u32, gold: u32) -> Self {
        Self {
            lives,
            max_lives: MAX_LIVES.max(lives),
            gold,
            score: 0,
            inventory: Inventory::default(),
        }
    }

    /// How every run starts: full lives, some gold, and a potion for emergencies.
    pub fn fresh() -> Self {
        let mut player = Self::new(START_LIVES, START_GOLD);
        player.inventory.add(ItemKind::RedPotion, 1);
        player
    }

    pub fn is_dead(&self) -> bool {
        self.lives == 0
    }

    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    pub fn reward(&mut self, score: u32, gold: u32) {
        self.score += score;
        self.gold += gold;
    }

    /// Use an item outside a trivia room. Only potions work out here.
    pub fn use_item(&mut self, item: ItemKind) -> Result<(), ItemError> {
        if !self.inventory.has(item) {
            return Err(ItemError::NotOwned(item));
        }
        match item {
            ItemKind::RedPotion if self.lives >= self.max_lives => Err(ItemError::FullHealth),
            ItemKind::RedPotion => {
                self.inventory.take(item)?;
                self.lives += 1;
                tracing::debug!(lives = self.lives, "drank a potion");
                Ok(())
            }
            ItemKind::RedoCharm | ItemKind::SkipScroll => Err(ItemError::WrongPlace(item)),
        }
    }

    /// Spend gold on an item.
    pub fn buy(&mut self, item: ItemKind) -> Result<(), PurchaseError> {
        let price = item.price();
        if self.gold < price {
            return Err(PurchaseError::TooPoor {
                item,
                price,
                gold: self.gold,
            });
        }
        self.gold -= price;
        self.inventory.add(item, 1);
        tracing::debug!(%item, price, gold = self.gold, "bought");
        Ok(())
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::fresh()
    }
}
