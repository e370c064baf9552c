use std::{borrow::Cow, path::PathBuf};

/// Everything that can go fatally wrong. Recoverable, player-facing failures (like being too poor to buy something)
/// have their own types next to the code that produces them.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An `io::Error` occurred somewhere without a more specific home.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// An asset file couldn't be read.
    #[error("failed to load {}: {source}", path.display())]
    Asset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// An asset file was read, but isn't a usable sprite.
    #[error("failed to load sprite {}: {reason}", path.display())]
    Sprite { path: PathBuf, reason: &'static str },
    /// The question bank is malformed.
    #[error("failed to load questions from {}: {reason}", path.display())]
    Questions { path: PathBuf, reason: String },
    /// The log file couldn't be opened, or a global subscriber was already set.
    #[error("failed to set up logging: {0}")]
    Logging(String),
    /// An IO backend failed in a way with no better description.
    #[error("{0}")]
    Backend(Cow<'static, str>),
}

impl From<&'static str> for Error {
    fn from(value: &'static str) -> Self {
        Self::Backend(Cow::Borrowed(value))
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Backend(Cow::Owned(value))
    }
}

pub type Result<T> = core::result::Result<T, Error>;
