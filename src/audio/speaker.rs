use std::{
    fs::File,
    io::BufReader,
    path::PathBuf,
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use rodio::{Decoder, OutputStream, Sink, Source};

use super::{Jukebox, Track};
use crate::{Error, Result};

enum Command {
    Play(Track),
    Stop,
}

/// Plays music through the default output device with `rodio`.
///
/// The output stream can't leave the thread that opened it, so it lives on a dedicated thread and this just sends it
/// commands. The thread exits when the jukebox is dropped.
pub struct RodioJukebox {
    commands: Sender<Command>,
}

impl RodioJukebox {
    /// Open the default output device. `assets` is the directory holding `music/`.
    pub fn new(assets: PathBuf) -> Result<Self> {
        let (commands, queue) = mpsc::channel();
        let (ready_send, ready) = mpsc::sync_channel(1);
        thread::Builder::new()
            .name("jukebox".into())
            .spawn(move || {
                let (_stream, handle) = match OutputStream::try_default() {
                    Ok(pair) => {
                        let _ = ready_send.send(Ok(()));
                        pair
                    }
                    Err(e) => {
                        let _ = ready_send.send(Err(e.to_string()));
                        return;
                    }
                };
                play_commands(&assets, &handle, queue);
            })?;
        match ready.recv() {
            Ok(Ok(())) => Ok(Self { commands }),
            Ok(Err(e)) => Err(Error::Backend(format!("no audio output: {}", e).into())),
            Err(_) => Err(Error::Backend("audio thread died while starting".into())),
        }
    }
}

fn play_commands(assets: &std::path::Path, handle: &rodio::OutputStreamHandle, queue: Receiver<Command>) {
    let mut current: Option<Sink> = None;
    for cmd in queue {
        // dropping a sink silences it
        current = None;
        let track = match cmd {
            Command::Play(track) => track,
            Command::Stop => continue,
        };
        let path = track.path_in(assets);
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "music file missing, skipping");
                continue;
            }
        };
        let source = match Decoder::new(BufReader::new(file)) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "couldn't decode music, skipping");
                continue;
            }
        };
        match Sink::try_new(handle) {
            Ok(sink) => {
                sink.append(source.repeat_infinite());
                current = Some(sink);
            }
            Err(e) => tracing::warn!(error = %e, "couldn't open audio sink"),
        }
    }
    drop(current);
    tracing::debug!("jukebox thread exiting");
}

impl Jukebox for RodioJukebox {
    fn play_looped(&mut self, track: Track) {
        tracing::debug!(%track, "playing");
        if self.commands.send(Command::Play(track)).is_err() {
            tracing::warn!(%track, "jukebox thread is gone");
        }
    }

    fn stop(&mut self) {
        let _ = self.commands.send(Command::Stop);
    }
}
