//! Just the `XY` type.

use std::{
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign},
};

/// A position or size on the character grid, with an X (column) and a Y (row) component.
///
/// Arithmetic works elementwise with other `XY`s (`XY(2, 3) + XY(1, 1) == XY(3, 4)`) and with scalars
/// (`XY(2, 3) * 2 == XY(4, 6)`). `XY(0, 0)` is the top left of the screen.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct XY(pub usize, pub usize);

impl XY {
    /// The X component
    pub const fn x(&self) -> usize {
        self.0
    }

    /// The Y component
    pub const fn y(&self) -> usize {
        self.1
    }

    /// Whether this position falls inside a rectangle starting at `top_left` with the given `size`.
    pub fn within(self, top_left: XY, size: XY) -> bool {
        self.0 >= top_left.0
            && self.1 >= top_left.1
            && self.0 < top_left.0 + size.0
            && self.1 < top_left.1 + size.1
    }

    /// The column at which something `width` wide should start to be centered in this width.
    pub fn center_x(self, width: usize) -> usize {
        self.0.saturating_sub(width) / 2
    }
}

macro_rules! xy_op {
    ( $( $trait:ident($fn:ident) => $op:tt $assn_op:tt ),* $(,)? ) => { $(
        impl $trait for XY {
            type Output = XY;
            fn $fn(self, rhs: XY) -> XY {
                XY(self.0 $op rhs.0, self.1 $op rhs.1)
            }
        }

        impl $trait<usize> for XY {
            type Output = XY;
            fn $fn(self, rhs: usize) -> XY {
                XY(self.0 $op rhs, self.1 $op rhs)
            }
        }

        paste::paste! {
            impl [< $trait Assign >] for XY {
                fn [< $fn _assign >] (&mut self, rhs: XY) {
                    self.0 $assn_op rhs.0;
                    self.1 $assn_op rhs.1;
                }
            }
        }
    )* };
}

xy_op! {
    Add(add) => + +=,
    Sub(sub) => - -=,
    Mul(mul) => * *=,
    Div(div) => / /=,
}

impl fmt::Display for XY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl fmt::Debug for XY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XY({}, {})", self.0, self.1)
    }
}

impl From<(usize, usize)> for XY {
    fn from(f: (usize, usize)) -> XY {
        XY(f.0, f.1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ops_are_elementwise() {
        assert_eq!(XY(2, 3) + XY(4, 5), XY(6, 8));
        assert_eq!(XY(8, 6) / 2, XY(4, 3));
        let mut xy = XY(1, 1);
        xy += XY(2, 0);
        assert_eq!(xy, XY(3, 1));
    }

    #[test]
    fn within_is_half_open() {
        let tl = XY(2, 2);
        let size = XY(3, 2);
        assert!(XY(2, 2).within(tl, size));
        assert!(XY(4, 3).within(tl, size));
        assert!(!XY(5, 3).within(tl, size));
        assert!(!XY(4, 4).within(tl, size));
        assert!(!XY(1, 2).within(tl, size));
    }

    #[test]
    fn centering_never_underflows() {
        assert_eq!(XY(80, 24).center_x(16), 32);
        assert_eq!(XY(10, 24).center_x(16), 0);
    }
}
