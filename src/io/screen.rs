//! The framebuffer everything renders onto.

use std::ops;

use super::{
    fmt::{Cell, FormattedExt, Text},
    sprite::Sprite,
    xy::XY,
};

/// A text framebuffer.
///
/// Scenes render onto it, then the whole thing is handed to the [`IoSystem`](super::IoSystem) at once, which avoids
/// flickering and partial renders. Every write is clipped to the screen's bounds, so scenes can be sloppy about
/// positioning near the edges.
pub struct Screen {
    cells: Vec<Cell>,
    size: XY,
}

impl Screen {
    pub fn new(size: XY) -> Self {
        let mut res = Self {
            cells: vec![],
            size: XY(0, 0),
        };
        res.resize(size);
        res
    }

    /// How big this Screen is, in characters.
    pub fn size(&self) -> XY {
        self.size
    }

    /// All of the cells of this screen, row after row.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over the rows of cells.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Cell]> + ExactSizeIterator {
        self.cells.chunks(self.size.x().max(1))
    }

    /// Reset every cell to [`Cell::BLANK`].
    pub fn clear(&mut self) {
        self.resize(self.size())
    }

    /// Resize the screen, clearing its contents at the same time. Only reallocates when growing.
    pub fn resize(&mut self, size: XY) {
        self.cells.truncate(0);
        self.cells.resize(size.x() * size.y(), Cell::BLANK);
        self.size = size;
    }

    /// Get a single cell, if it's on screen.
    pub fn get(&self, pos: XY) -> Option<&Cell> {
        if pos.x() < self.size.x() && pos.y() < self.size.y() {
            self.cells.get(pos.y() * self.size.x() + pos.x())
        } else {
            None
        }
    }

    fn get_mut(&mut self, pos: XY) -> Option<&mut Cell> {
        if pos.x() < self.size.x() && pos.y() < self.size.y() {
            self.cells.get_mut(pos.y() * self.size.x() + pos.x())
        } else {
            None
        }
    }

    /// Write some formatted text starting at a position. Does not wrap; anything past the right edge is dropped.
    pub fn write(&mut self, pos: XY, text: Vec<Text>) {
        let XY(mut x, y) = pos;
        for chunk in text {
            for ch in chunk.text.chars() {
                match self.get_mut(XY(x, y)) {
                    Some(cell) => *cell = Cell::of(ch).fmt_of(&chunk),
                    None => return,
                }
                x += 1;
            }
        }
    }

    /// Write some formatted text horizontally centered on a row.
    pub fn write_centered(&mut self, row: usize, text: Vec<Text>) {
        let width = text.iter().map(Text::width).sum();
        let col = self.size.center_x(width);
        self.write(XY(col, row), text)
    }

    /// Copy a sprite's visible cells onto the screen with its top-left corner at `(x, y)`.
    ///
    /// Coordinates are signed so sprites can hang off the top or left edge; the offscreen part is clipped.
    pub fn blit(&mut self, sprite: &Sprite, x: isize, y: isize) {
        for (dy, line) in sprite.lines().iter().enumerate() {
            let row = y + dy as isize;
            if row < 0 {
                continue;
            }
            for (dx, cell) in line.iter().enumerate() {
                let col = x + dx as isize;
                if col < 0 || cell.ch == ' ' {
                    continue;
                }
                if let Some(target) = self.get_mut(XY(col as usize, row as usize)) {
                    *target = cell.clone();
                }
            }
        }
    }

    /// The characters in one row, as a plain string. Mostly for tests and logs.
    pub fn row_text(&self, row: usize) -> String {
        self[row].iter().map(|c| c.ch).collect()
    }

    /// Whether some row contains the given text.
    pub fn contains(&self, needle: &str) -> bool {
        (0..self.size.y()).any(|row| self.row_text(row).contains(needle))
    }
}

impl ops::Index<usize> for Screen {
    type Output = [Cell];
    fn index(&self, row: usize) -> &Self::Output {
        let start = row * self.size.x();
        let end = start + self.size.x();
        &self.cells[start..end]
    }
}

#[cfg(test)]
mod test {
    use crate::io::fmt::{Color, Formatted};

    use super::*;

    #[test]
    fn write_clips_at_right_edge() {
        let mut s = Screen::new(XY(5, 2));
        s.write(XY(3, 1), crate::text!["abcdef"]);
        assert_eq!(s.row_text(1), "   ab");
        assert_eq!(s.row_text(0), "     ");
    }

    #[test]
    fn write_offscreen_row_is_ignored() {
        let mut s = Screen::new(XY(5, 2));
        s.write(XY(0, 7), crate::text!["abc"]);
        assert!(s.cells().iter().all(|c| c == &Cell::BLANK));
    }

    #[test]
    fn write_keeps_formatting() {
        let mut s = Screen::new(XY(4, 1));
        s.write(XY(0, 0), crate::text!["a", red "b"]);
        assert_eq!(s[0][0].get_fmt().fg, Color::White);
        assert_eq!(s[0][1].get_fmt().fg, Color::Red);
    }

    #[test]
    fn centered_text_is_centered() {
        let mut s = Screen::new(XY(10, 1));
        s.write_centered(0, crate::text!["abcd"]);
        assert_eq!(s.row_text(0), "   abcd   ");
    }

    #[test]
    fn blit_clips_negative_and_skips_spaces() {
        let sprite = Sprite::parse("ab\n c\nde").unwrap();
        let mut s = Screen::new(XY(3, 3));
        s.write(XY(0, 0), crate::text!["xxx"]);
        s.blit(&sprite, -1, -1);
        // row -1 ("ab") is offscreen; " c" at x=-1 puts 'c' at column 0
        assert_eq!(s.row_text(0), "cxx");
        assert_eq!(s.row_text(1), "e  ");
    }

    #[test]
    fn resize_clears() {
        let mut s = Screen::new(XY(2, 2));
        s.write(XY(0, 0), crate::text!["hi"]);
        s.resize(XY(3, 1));
        assert_eq!(s.size(), XY(3, 1));
        assert_eq!(s.row_text(0), "   ");
    }
}
