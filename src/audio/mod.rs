//! Background music. Every screen has (at most) one looping track, picked by the [`GameState`](crate::GameState).

use std::{fmt, path::Path, path::PathBuf};

mod silent;
#[cfg(feature = "audio_rodio")]
mod speaker;

pub use silent::{Playlist, SilentJukebox};
#[cfg(feature = "audio_rodio")]
pub use speaker::RodioJukebox;

/// A piece of background music.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Track {
    MainMenu,
    MidLevel,
    TriviaRoom,
    LoseScreen,
    VictoryScreen,
    ShopMenu,
}

impl Track {
    pub const ALL: [Track; 6] = [
        Track::MainMenu,
        Track::MidLevel,
        Track::TriviaRoom,
        Track::LoseScreen,
        Track::VictoryScreen,
        Track::ShopMenu,
    ];

    /// The file name, relative to the music directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Track::MainMenu => "main_menu.mp3",
            Track::MidLevel => "mid_level.mp3",
            Track::TriviaRoom => "trivia_room.mp3",
            Track::LoseScreen => "lose_screen.mp3",
            Track::VictoryScreen => "victory_screen.mp3",
            Track::ShopMenu => "shop_menu.mp3",
        }
    }

    /// Where this track lives under an assets directory.
    pub fn path_in(self, assets: &Path) -> PathBuf {
        assets.join("music").join(self.file_name())
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Plays background music.
///
/// Music is best effort: implementations log failures instead of returning them, so a missing speaker never stops
/// the game.
pub trait Jukebox: Send {
    /// Stop whatever's playing and loop `track` until told otherwise.
    fn play_looped(&mut self, track: Track);
    /// Stop whatever's playing.
    fn stop(&mut self);
}

impl<T: Jukebox + ?Sized> Jukebox for Box<T> {
    fn play_looped(&mut self, track: Track) {
        (**self).play_looped(track)
    }
    fn stop(&mut self) {
        (**self).stop()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tracks_live_in_music_dir() {
        assert_eq!(
            Track::TriviaRoom.path_in(Path::new("assets")),
            Path::new("assets").join("music").join("trivia_room.mp3")
        );
    }

    #[test]
    fn track_files_are_distinct() {
        let mut names: Vec<_> = Track::ALL.iter().map(|t| t.file_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Track::ALL.len());
    }
}
