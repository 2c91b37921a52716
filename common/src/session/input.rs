use crate::connect_four::{Board, Coordinate};
use crate::session::geometry::{cell_rect, Point, Rect};

// `display` is the on-screen bounding rect, which can differ from the
// surface's intrinsic size. The board's outer border belongs to no cell; an
// inner shared edge goes to the first cell in row-major order.
pub fn map_point_to_cell(display: Rect, board: &Board, pointer: Point) -> Option<Coordinate> {
    if !display.contains_strictly(pointer) {
        return None;
    }
    let local = Point::new(pointer.x - display.x, pointer.y - display.y);
    board.coordinates().find(|&coord| {
        cell_rect(board, display.w, display.h, coord).map_or(false, |rect| rect.contains(local))
    })
}
