use std::str::FromStr;

use thiserror::Error;

use crate::core::data::grid::Grid;
use crate::core::data::point::Point;
use crate::core::data::scroll_direction::ScrollDirection;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScrollGestureError {
    #[error("expected PX,PY,in|out but got {0:?}")]
    Malformed(String),
    #[error("invalid pixel coordinate {0:?}")]
    InvalidCoordinate(String),
    #[error("scroll direction must be \"in\" or \"out\", got {0:?}")]
    InvalidDirection(String),
    #[error("scroll at ({x}, {y}) is outside the {width}x{height} grid")]
    OffGrid { x: f64, y: f64, width: u32, height: u32 },
}

/// A scripted wheel notch for the headless binary, written `PX,PY,in|out`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScrollGesture {
    pub cursor: Point,
    pub direction: ScrollDirection,
}

impl ScrollGesture {
    /// Cursors must lie on a pixel of `grid`, as they do when they come from
    /// a window.
    pub fn check_on_grid(&self, grid: Grid) -> Result<(), ScrollGestureError> {
        let Point { x, y } = self.cursor;

        if x < f64::from(grid.width()) && y < f64::from(grid.height()) {
            return Ok(());
        }

        Err(ScrollGestureError::OffGrid {
            x,
            y,
            width: grid.width(),
            height: grid.height(),
        })
    }
}

impl FromStr for ScrollGesture {
    type Err = ScrollGestureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [x, y, direction] = parts.as_slice() else {
            return Err(ScrollGestureError::Malformed(s.to_string()));
        };

        let parse_coordinate = |value: &str| {
            value
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .ok_or_else(|| ScrollGestureError::InvalidCoordinate(value.to_string()))
        };

        let direction = match direction.to_ascii_lowercase().as_str() {
            "in" => ScrollDirection::Forward,
            "out" => ScrollDirection::Backward,
            _ => return Err(ScrollGestureError::InvalidDirection(direction.to_string())),
        };

        Ok(Self {
            cursor: Point::new(parse_coordinate(*x)?, parse_coordinate(*y)?),
            direction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_zoom_in_and_out() {
        assert_eq!(
            "400,240,in".parse::<ScrollGesture>(),
            Ok(ScrollGesture {
                cursor: Point::new(400.0, 240.0),
                direction: ScrollDirection::Forward
            })
        );
        assert_eq!(
            " 12.5, 3 , OUT".parse::<ScrollGesture>(),
            Ok(ScrollGesture {
                cursor: Point::new(12.5, 3.0),
                direction: ScrollDirection::Backward
            })
        );
    }

    #[test]
    fn on_grid_check_uses_half_open_bounds() {
        let grid = Grid::new(800, 480).unwrap();
        let gesture = |x, y| ScrollGesture {
            cursor: Point::new(x, y),
            direction: ScrollDirection::Forward,
        };

        assert_eq!(gesture(0.0, 0.0).check_on_grid(grid), Ok(()));
        assert_eq!(gesture(799.5, 479.0).check_on_grid(grid), Ok(()));
        assert_eq!(
            gesture(800.0, 10.0).check_on_grid(grid),
            Err(ScrollGestureError::OffGrid {
                x: 800.0,
                y: 10.0,
                width: 800,
                height: 480
            })
        );
        assert!(gesture(5000.0, 5000.0).check_on_grid(grid).is_err());
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(
            "1,2".parse::<ScrollGesture>(),
            Err(ScrollGestureError::Malformed("1,2".to_string()))
        );
        assert_eq!(
            "a,2,in".parse::<ScrollGesture>(),
            Err(ScrollGestureError::InvalidCoordinate("a".to_string()))
        );
        assert_eq!(
            "-1,2,in".parse::<ScrollGesture>(),
            Err(ScrollGestureError::InvalidCoordinate("-1".to_string()))
        );
        assert_eq!(
            "1,2,sideways".parse::<ScrollGesture>(),
            Err(ScrollGestureError::InvalidDirection("sideways".to_string()))
        );
    }
}
