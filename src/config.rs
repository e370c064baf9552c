//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

/// Run the trivia roguelite in your terminal.
#[derive(Clone, Debug, Parser)]
#[clap(name = "trivia-roguelite", version)]
pub struct Args {
    /// Directory holding `img/`, `music/` and the default question bank.
    #[clap(long, env = "TRIVIA_ASSETS", default_value = "assets")]
    pub assets: PathBuf,

    /// Question bank to use instead of `<assets>/questions.json`.
    #[clap(long, env = "TRIVIA_QUESTIONS")]
    pub questions: Option<PathBuf>,

    /// Where to write logs. The terminal belongs to the game, so they can't go there.
    #[clap(long, env = "TRIVIA_LOG", default_value = "trivia-roguelite.log")]
    pub log_file: PathBuf,

    /// Don't play any music.
    #[clap(long, env = "TRIVIA_MUTE")]
    pub mute: bool,

    /// Maximum frames drawn per second.
    #[clap(long, default_value_t = 60)]
    pub fps: u32,

    /// Seed for door, question and sock randomness. Random if unset.
    #[clap(long)]
    pub seed: Option<u64>,
}

/// [`Args`] with every default filled in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub assets: PathBuf,
    pub questions: PathBuf,
    pub log_file: PathBuf,
    pub mute: bool,
    pub fps: u32,
    pub seed: u64,
}

impl Args {
    pub fn resolve(self) -> Config {
        let questions = self
            .questions
            .unwrap_or_else(|| self.assets.join("questions.json"));
        Config {
            questions,
            assets: self.assets,
            log_file: self.log_file,
            mute: self.mute,
            fps: self.fps.max(1),
            seed: self.seed.unwrap_or_else(rand::random),
        }
    }
}

impl Config {
    /// Seconds between rounds of messages. Rounds run as often as frames are drawn.
    pub fn input_tick(&self) -> f32 {
        1.0 / self.fps as f32
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_resolve_relative_to_assets() {
        let cfg = Args::parse_from(["trivia-roguelite", "--assets", "data", "--seed", "7"]).resolve();
        assert_eq!(cfg.assets, PathBuf::from("data"));
        assert_eq!(cfg.questions, PathBuf::from("data").join("questions.json"));
        assert_eq!(cfg.log_file, PathBuf::from("trivia-roguelite.log"));
        assert_eq!(cfg.fps, 60);
        assert_eq!(cfg.seed, 7);
        assert!(!cfg.mute);
    }

    #[test]
    fn explicit_questions_win() {
        let cfg = Args::parse_from([
            "trivia-roguelite",
            "--questions",
            "/tmp/q.json",
            "--mute",
            "--fps",
            "0",
        ])
        .resolve();
        assert_eq!(cfg.questions, PathBuf::from("/tmp/q.json"));
        assert!(cfg.mute);
        assert_eq!(cfg.fps, 1);
        assert_eq!(cfg.input_tick(), 1.0);
    }
}
