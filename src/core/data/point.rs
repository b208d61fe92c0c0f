/// A position in pixel space, measured from the grid's top-left corner.
///
/// Fractional so that pointer positions reported by the host can be used
/// without rounding.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
