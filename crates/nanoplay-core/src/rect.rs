/// A rectangle describing where a window goes and how big it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle of the given size anchored at the screen origin.
    ///
    /// Every resize lands here; the previous position is never kept.
    pub fn at_origin(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }
}
