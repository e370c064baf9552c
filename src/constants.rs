//! Tuning knobs. Kept in one place so balancing doesn't mean hunting through the screens.

/// Numbers which affect how the game plays.
pub mod gameplay {
    use std::time::Duration;

    /// Lives at the start of a run.
    pub const START_LIVES: u32 = 5;
    /// Lives can't be healed past this.
    pub const MAX_LIVES: u32 = 5;
    /// Gold at the start of a run.
    pub const START_GOLD: u32 = 100;

    /// Correct answers needed to clear a trivia room.
    pub const QUESTIONS_PER_ROOM: u32 = 3;
    /// Rooms cleared before moving on to the next level.
    pub const ROOMS_PER_LEVEL: u32 = 2;
    /// Clearing this level wins the run.
    pub const FINAL_LEVEL: u32 = 3;
    /// Category doors shown in the corridor, at most.
    pub const DOORS_PER_ROOM: usize = 3;

    /// How long the player gets per question.
    pub const QUESTION_TIME: Duration = Duration::from_secs(20);
    /// Score for a correct answer, multiplied by the level.
    pub const SCORE_PER_ANSWER: u32 = 10;
    /// Gold for a correct answer, multiplied by the level.
    pub const GOLD_PER_ANSWER: u32 = 5;
}

/// Numbers which only affect what things look like.
pub mod graphics {
    use crate::io::XY;

    /// The screen size everything is laid out for.
    pub const TARGET_SIZE: XY = XY(80, 24);

    /// Socks falling on the victory screen.
    pub const SOCK_COUNT: usize = 30;
    /// The sock rain is simulated in a space this big, then scaled down to the grid.
    pub const RAIN_WIDTH: i32 = 800;
    pub const RAIN_HEIGHT: i32 = 600;
    /// Range of sock fall speeds, in logical units per tick.
    pub const SOCK_SPEED: std::ops::RangeInclusive<i32> = 2..=6;
    /// How far above the top a recycled sock can restart.
    pub const SOCK_RESPAWN_HEIGHT: i32 = 100;
}
