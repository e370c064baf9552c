use std::sync::{Arc, Mutex};

use super::{Jukebox, Track};

/// What a [`SilentJukebox`] has been asked to do, in order. `None` is a stop.
#[derive(Clone, Default)]
pub struct Playlist(Arc<Mutex<Vec<Option<Track>>>>);

impl Playlist {
    fn push(&self, entry: Option<Track>) {
        self.0.lock().unwrap().push(entry);
    }

    /// Every request so far.
    pub fn history(&self) -> Vec<Option<Track>> {
        self.0.lock().unwrap().clone()
    }

    /// What would be playing right now.
    pub fn now_playing(&self) -> Option<Track> {
        self.0.lock().unwrap().last().copied().flatten()
    }
}

/// A jukebox with no speakers. Used when muted, when no audio backend is compiled in, and in tests.
#[derive(Default)]
pub struct SilentJukebox {
    playlist: Playlist,
}

impl SilentJukebox {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle on everything this jukebox gets asked to play, which stays valid after it's moved into the game.
    pub fn playlist(&self) -> Playlist {
        self.playlist.clone()
    }
}

impl Jukebox for SilentJukebox {
    fn play_looped(&mut self, track: Track) {
        tracing::debug!(%track, "would play");
        self.playlist.push(Some(track));
    }

    fn stop(&mut self) {
        self.playlist.push(None);
    }
}
