use crate::connect_four::{Board, Coordinate};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect { x, y, w, h }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    // Closed on every side
    pub fn contains(&self, p: Point) -> bool {
        self.x <= p.x && p.x <= self.x + self.w && self.y <= p.y && p.y <= self.y + self.h
    }

    // Open on every side, so points on the border are outside
    pub fn contains_strictly(&self, p: Point) -> bool {
        self.x < p.x && p.x < self.x + self.w && self.y < p.y && p.y < self.y + self.h
    }
}

// Row height is shared by every row; cell width follows the row's own column
// count, so each row of a jagged board gets its own cell width.
pub fn cell_rect(board: &Board, width: f64, height: f64, coord: Coordinate) -> Option<Rect> {
    if !board.contains(coord) {
        return None;
    }
    let h = height / board.row_count() as f64;
    let w = width / board.col_count(coord.row) as f64;
    Some(Rect::new(coord.col as f64 * w, coord.row as f64 * h, w, h))
}
