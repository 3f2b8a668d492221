/// A screen-space rectangle in points, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Distance from the left edge of the screen.
    pub x: i32,
    /// Distance from the top edge of the screen.
    pub y: i32,
    /// Width of the rectangle.
    pub width: u32,
    /// Height of the rectangle.
    pub height: u32,
}

impl Rect {
    /// Create a rectangle from its origin and size.
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Absolute `[left, top, right, bottom]` coordinates.
    pub fn bounds(&self) -> [i64; 4] {
        let left = i64::from(self.x);
        let top = i64::from(self.y);
        [
            left,
            top,
            left + i64::from(self.width),
            top + i64::from(self.height),
        ]
    }
}

/// Size of the main display in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    /// Display width.
    pub width: u32,
    /// Display height.
    pub height: u32,
}
