//! ASCII-art sprites.

use super::{
    fmt::{Cell, Color, FormattedExt},
    xy::XY,
};

/// A small grid of characters which can be [blitted](super::Screen::blit) onto a screen.
///
/// Spaces are transparent. Lines don't all need to be the same length; the sprite's width is the longest one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    lines: Vec<Vec<Cell>>,
    width: usize,
}

impl Sprite {
    /// Parse a sprite out of some text, one row per line. A single trailing newline is ignored.
    pub fn parse(src: &str) -> Result<Self, &'static str> {
        let src = src.strip_suffix('\n').unwrap_or(src);
        let src = src.strip_suffix('\r').unwrap_or(src);
        if src.trim().is_empty() {
            return Err("sprite is empty");
        }
        let lines: Vec<Vec<Cell>> = src
            .lines()
            .map(|l| l.trim_end_matches('\r').chars().map(Cell::of).collect())
            .collect();
        let width = lines.iter().map(Vec::len).max().unwrap_or(0);
        Ok(Self { lines, width })
    }

    /// Recolor every cell of the sprite.
    pub fn colored(mut self, color: Color) -> Self {
        for line in &mut self.lines {
            for cell in line.iter_mut() {
                *cell = cell.clone().fg(color);
            }
        }
        self
    }

    pub fn lines(&self) -> &[Vec<Cell>] {
        &self.lines
    }

    pub fn size(&self) -> XY {
        XY(self.width, self.lines.len())
    }
}

#[cfg(test)]
mod test {
    use crate::io::fmt::Formatted;

    use super::*;

    #[test]
    fn size_uses_longest_line() {
        let s = Sprite::parse(" /\\\n/__\\\n||\n").unwrap();
        assert_eq!(s.size(), XY(4, 3));
    }

    #[test]
    fn empty_sprites_rejected() {
        assert!(Sprite::parse("").is_err());
        assert!(Sprite::parse("   \n  \n").is_err());
    }

    #[test]
    fn crlf_is_tolerated() {
        let s = Sprite::parse("ab\r\ncd\r\n").unwrap();
        assert_eq!(s.size(), XY(2, 2));
        assert_eq!(s.lines()[0][1].ch, 'b');
    }

    #[test]
    fn colored_recolors_everything() {
        let s = Sprite::parse("ab\nc").unwrap().colored(Color::BrightYellow);
        assert!(s
            .lines()
            .iter()
            .flatten()
            .all(|c| c.get_fmt().fg == Color::BrightYellow));
    }
}
