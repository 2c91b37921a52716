use crate::connect_four::board::{Board, Owner};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Ongoing,
    // The player who made the latest move won
    LastPlayerWin,
    Draw,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: usize,
    status: Status,
    dimensions: Dimensions,
}

impl GameState {
    pub fn new(board: Board, turn: usize, status: Status) -> Self {
        let cols = board.rows().iter().map(Vec::len).max().unwrap_or(0);
        let dimensions = Dimensions {
            rows: board.row_count(),
            cols,
        };
        GameState {
            board,
            turn,
            status,
            dimensions,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn is_ongoing(&self) -> bool {
        matches!(self.status, Status::Ongoing)
    }

    pub fn active_player(&self) -> Owner {
        Owner::for_turn(self.turn)
    }

    pub fn is_human_turn(&self) -> bool {
        self.turn % 2 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_use_widest_row() {
        let state = GameState::new(
            Board::new(vec![vec![None; 4], vec![None; 5]]),
            0,
            Status::Ongoing,
        );
        assert_eq!(state.dimensions(), Dimensions { rows: 2, cols: 5 });
    }

    #[test]
    fn test_turn_parity() {
        let state = GameState::new(Board::empty(6, 7), 3, Status::Ongoing);
        assert!(!state.is_human_turn());
        assert_eq!(state.active_player(), Owner::Second);
        let state = GameState::new(Board::empty(6, 7), 4, Status::Draw);
        assert!(state.is_human_turn());
        assert!(!state.is_ongoing());
    }
}
