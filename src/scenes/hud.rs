//! The status line along the top of the screen while exploring.

use crate::{
    constants::gameplay::{FINAL_LEVEL, ROOMS_PER_LEVEL},
    io::{fmt::Text, Screen, XY},
    text, text1,
};

use super::View;

pub const HUD_ROW: usize = 0;

/// Draw lives, gold, score and progress onto the top row.
pub fn render(view: &View, screen: &mut Screen) {
    let player = view.player;
    let mut line: Vec<Text> = vec![text1![white " Lives "]];
    for i in 0..player.max_lives {
        line.push(if i < player.lives {
            text1![bright_red "♥"]
        } else {
            text1![bright_black "·"]
        });
    }
    line.extend(text![
        yellow "  Gold {}"(player.gold),
        bright_white "  Score {}"(player.score),
        cyan "  Level {}/{}"(view.level, FINAL_LEVEL),
        cyan "  Room {}/{}"(view.rooms_cleared + 1, ROOMS_PER_LEVEL),
    ]);
    screen.write(XY(0, HUD_ROW), line);
}
