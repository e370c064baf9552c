use std::fmt;

use crate::audio::Track;

/// Which screen the game is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    Menu,
    MidLevel,
    TriviaRoom,
    Lose,
    Victory,
    Shopkeeper,
    Shop,
    Inventory,
}

impl GameState {
    /// The music for this screen. The shop is quiet, and the inventory never changes the music since it's an overlay
    /// rather than a real transition.
    pub fn track(self) -> Option<Track> {
        match self {
            GameState::Menu => Some(Track::MainMenu),
            GameState::MidLevel => Some(Track::MidLevel),
            GameState::TriviaRoom => Some(Track::TriviaRoom),
            GameState::Lose => Some(Track::LoseScreen),
            GameState::Victory => Some(Track::VictoryScreen),
            GameState::Shopkeeper => Some(Track::ShopMenu),
            GameState::Shop | GameState::Inventory => None,
        }
    }

    /// Whether the HUD is drawn over this screen.
    pub fn shows_hud(self) -> bool {
        matches!(self, GameState::MidLevel | GameState::TriviaRoom)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn music_table() {
        assert_eq!(GameState::Menu.track(), Some(Track::MainMenu));
        assert_eq!(GameState::Shopkeeper.track(), Some(Track::ShopMenu));
        assert_eq!(GameState::Shop.track(), None);
        assert_eq!(GameState::Victory.track(), Some(Track::VictoryScreen));
    }

    #[test]
    fn hud_only_while_exploring() {
        assert!(GameState::MidLevel.shows_hud());
        assert!(GameState::TriviaRoom.shows_hud());
        assert!(!GameState::Shop.shows_hud());
        assert!(!GameState::Menu.shows_hud());
    }
}
