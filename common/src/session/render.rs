use crate::connect_four::{Board, Coordinate, GameState, Owner};
use crate::session::geometry::{cell_rect, Rect};
use crate::session::status::StatusLine;
use serde::{Deserialize, Serialize};
use std::fmt;

// CSS color string
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Color(pub String);

impl Color {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color(s.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Palette {
    pub human: Color,
    pub automated: Color,
    pub legal: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            human: Color::from("#ffe0c1"),
            automated: Color::from("#c1e0ff"),
            legal: Color::from("#efefef"),
        }
    }
}

impl Palette {
    pub fn owner(&self, owner: Owner) -> &Color {
        match owner {
            Owner::First => &self.human,
            Owner::Second => &self.automated,
        }
    }

    // Color of the player on move; none once the game is over
    pub fn marker(&self, status: StatusLine) -> Option<&Color> {
        match status {
            StatusLine::Turn(owner) => Some(self.owner(owner)),
            _ => None,
        }
    }
}

pub trait Surface {
    // Intrinsic pixel size, not the on-screen size
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear_rect(&mut self, rect: Rect);
    // Ellipse inscribed in `rect`
    fn fill_ellipse(&mut self, rect: Rect, color: &Color);
}

pub fn render_board(surface: &mut impl Surface, board: &Board, palette: &Palette) {
    let (width, height) = (surface.width(), surface.height());
    for coord in board.coordinates() {
        let rect = match cell_rect(board, width, height, coord) {
            Some(rect) => rect,
            None => continue,
        };
        surface.clear_rect(rect);
        if let Some(Some(owner)) = board.get(coord) {
            surface.fill_ellipse(rect, palette.owner(owner));
        }
    }
}

// Draws over whatever is already on the surface
pub fn render_legal_overlay(
    surface: &mut impl Surface,
    board: &Board,
    legal_actions: &[Coordinate],
    palette: &Palette,
) {
    let (width, height) = (surface.width(), surface.height());
    for &coord in legal_actions {
        if let Some(rect) = cell_rect(board, width, height, coord) {
            surface.fill_ellipse(rect, &palette.legal);
        }
    }
}

pub fn render_frame(
    surface: &mut impl Surface,
    state: &GameState,
    legal_actions: &[Coordinate],
    palette: &Palette,
) {
    render_board(surface, state.board(), palette);
    if state.is_ongoing() {
        render_legal_overlay(surface, state.board(), legal_actions, palette);
    }
}
