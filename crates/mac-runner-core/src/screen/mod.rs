mod display;
mod geometry;

pub use {
    display::{DOCK_HEIGHT, MENU_BAR_HEIGHT, screen_size, usable_area},
    geometry::{Rect, ScreenSize},
};
