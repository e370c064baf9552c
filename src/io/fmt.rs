//! Formatted text for the character grid.
//!
//! Everything here is the lowest common subset a terminal can show: 16 colors, bold, and underline. Build text with
//! [`text!`](crate::text) / [`text1!`](crate::text1) and the chained setters on [`FormattedExt`], e.g.
//! `text1![bright_yellow bold "Score: {}"(score)]`.

/// A color, numbered like the ANSI color codes it's named after.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 60,
    BrightRed = 61,
    BrightGreen = 62,
    BrightYellow = 63,
    BrightBlue = 64,
    BrightMagenta = 65,
    BrightCyan = 66,
    BrightWhite = 67,
}

/// The format of a single formatted item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Format {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub underline: bool,
}

impl Format {
    /// White on black, no decoration.
    pub const NONE: Self = Format {
        fg: Color::White,
        bg: Color::Black,
        bold: false,
        underline: false,
    };
}

impl Default for Format {
    fn default() -> Self {
        Self::NONE
    }
}

/// Anything carrying a [`Format`]: [`Text`] and [`Cell`].
pub trait Formatted {
    fn get_fmt(&self) -> &Format;
    fn get_fmt_mut(&mut self) -> &mut Format;
}

macro_rules! fmt_fn {
    ( $( $name:ident $( ( $arg:ident: $type:ty ) )? => $field:ident = $val:expr ),* $(,)? ) => { $(
        #[must_use]
        fn $name(mut self $(, $arg: $type)?) -> Self {
            self.get_fmt_mut().$field = $val;
            self
        }
    )* };
}

/// Chainable formatting setters for anything [`Formatted`].
pub trait FormattedExt: Formatted + Sized {
    /// Replace the whole format.
    #[must_use]
    fn fmt(mut self, fmt: Format) -> Self {
        *self.get_fmt_mut() = fmt;
        self
    }

    /// Copy another item's format, e.g. a [`Text`]'s onto each [`Cell`] it's written into.
    #[must_use]
    fn fmt_of(mut self, rhs: &dyn Formatted) -> Self {
        *self.get_fmt_mut() = rhs.get_fmt().clone();
        self
    }

    fmt_fn! {
        fg(c: Color) => fg = c,                     bg(c: Color) => bg = c,
        black => fg = Color::Black,                 on_black => bg = Color::Black,
        red => fg = Color::Red,                     bright_red => fg = Color::BrightRed,
        green => fg = Color::Green,                 bright_green => fg = Color::BrightGreen,
        yellow => fg = Color::Yellow,               bright_yellow => fg = Color::BrightYellow,
        blue => fg = Color::Blue,                   bright_blue => fg = Color::BrightBlue,
        magenta => fg = Color::Magenta,             bright_magenta => fg = Color::BrightMagenta,
        cyan => fg = Color::Cyan,                   bright_cyan => fg = Color::BrightCyan,
        white => fg = Color::White,                 bright_white => fg = Color::BrightWhite,
        bright_black => fg = Color::BrightBlack,    on_white => bg = Color::White,
        on_blue => bg = Color::Blue,                on_red => bg = Color::Red,
        underline => underline = true,
        bold => bold = true,
    }
}

impl<F: Formatted> FormattedExt for F {}

macro_rules! fmt_type {
    (
        $( #[$attr:meta] )*
        $svis:vis struct $name:ident { $fvis:vis $field:ident: $type:ty }
    ) => {
        $( #[$attr] )*
        $svis struct $name {
            $fvis $field: $type,
            _fmt: Format,
        }
        impl Formatted for $name {
            fn get_fmt(&self) -> &Format {
                &self._fmt
            }
            fn get_fmt_mut(&mut self) -> &mut Format {
                &mut self._fmt
            }
        }
        impl $name {
            pub const fn of($field: $type) -> Self {
                Self { $field, _fmt: Format::NONE }
            }
        }
    };
}

fmt_type! {
    /// A run of text sharing one format. Mostly used as a `Vec<Text>` built with [`text!`](crate::text).
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Text { pub text: String }
}

impl Text {
    pub fn plain(s: &str) -> Text {
        Text::of(s.into())
    }

    /// How many cells this text takes up when written.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

fmt_type! {
    /// A single formatted character on a [`Screen`](super::Screen).
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct Cell { pub ch: char }
}

impl Cell {
    pub const BLANK: Cell = Cell::of(' ');
}

/// Create a single [`Text`].
#[macro_export]
macro_rules! text1 {
    [ $( $name:ident )* $text:literal $( ( $( $arg:expr ),* $(,)? ) )? ] => {
        {
            #[allow(unused_imports)]
            use $crate::io::fmt::FormattedExt as _;
            $crate::io::fmt::Text::of(format!( $text $(, $( $arg ),* )? )) $( . $name () )*
        }
    };
}

/// Create a `Vec` of formatted [`Text`]s.
#[macro_export]
macro_rules! text {
    [ $( $( $name:ident )* $text:literal $( ( $( $arg:expr ),* $(,)? ) )? ),* $(,)? ] => {
        {
            #[allow(unused_imports)]
            use $crate::io::fmt::FormattedExt as _;
            vec![ $(
                $crate::io::fmt::Text::of(format!( $text $(, $( $arg ),* )? )) $( . $name () )*
            ),* ]
        }
    };
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn setters_chain() {
        let t = crate::text1![bright_yellow bold "Score: {}"(12)];
        assert_eq!(t.text, "Score: 12");
        assert_eq!(t.get_fmt().fg, Color::BrightYellow);
        assert!(t.get_fmt().bold);
        assert!(!t.get_fmt().underline);
    }

    #[test]
    fn text_builds_each_chunk() {
        let v = crate::text!["a", red "b{}"(1), underline "c"];
        assert_eq!(v.len(), 3);
        assert_eq!(v[1].text, "b1");
        assert_eq!(v[1].get_fmt().fg, Color::Red);
        assert!(v[2].get_fmt().underline);
        assert_eq!(v[0].get_fmt(), &Format::NONE);
    }

    #[test]
    fn cells_copy_text_format() {
        let t = Text::plain("x").green().on_blue();
        let c = Cell::of('x').fmt_of(&t);
        assert_eq!(c.get_fmt().fg, Color::Green);
        assert_eq!(c.get_fmt().bg, Color::Blue);
    }
}
