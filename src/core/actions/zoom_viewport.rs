use crate::core::data::grid::Grid;
use crate::core::data::point::Point;
use crate::core::data::scroll_direction::ScrollDirection;
use crate::core::data::viewport::Viewport;

/// Produces the viewport that results from one wheel notch over `cursor`.
#[must_use]
pub fn zoom_at(
    viewport: Viewport,
    cursor: Point,
    grid: Grid,
    direction: ScrollDirection,
) -> Viewport {
    viewport.zoom_at(cursor, grid, direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_in_then_out_at_same_cursor_restores_viewport() {
        let grid = Grid::new(1000, 600).unwrap();
        let cursor = Point::new(250.0, 450.0);

        let zoomed = zoom_at(Viewport::default(), cursor, grid, ScrollDirection::Forward);
        let restored = zoom_at(zoomed, cursor, grid, ScrollDirection::Backward);

        // 0.9 * 1.1 = 0.99, so spans shrink by 1% and stay anchored
        assert!((restored.span_x() - 3.5 * 0.99).abs() < 1e-12);
        assert!((restored.span_y() - 2.0 * 0.99).abs() < 1e-12);
        assert_ne!(zoomed, Viewport::default());
    }
}
