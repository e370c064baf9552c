//! Input and output: the character-grid [`Screen`], player [`Action`]s, and the [`IoSystem`]s connecting them to a
//! real display.

mod action;
pub mod fmt;
mod screen;
mod sprite;
pub mod sys;
mod xy;

pub use self::{
    action::{press, press_char, Action, Key, MouseButton},
    screen::Screen,
    sprite::Sprite,
    sys::{IoRunner, IoSystem},
    xy::XY,
};
