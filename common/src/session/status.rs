use crate::connect_four::{GameState, Owner, Status};
use std::fmt;

// Framed from the human's side
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StatusLine {
    Turn(Owner),
    Win,
    Lose,
    Draw,
}

impl StatusLine {
    pub fn new(turn: usize, status: Status) -> Self {
        let human_to_move = turn % 2 == 0;
        match status {
            Status::Ongoing => StatusLine::Turn(Owner::for_turn(turn)),
            // Whoever moved last won, which is the player not on move now
            Status::LastPlayerWin if human_to_move => StatusLine::Lose,
            Status::LastPlayerWin => StatusLine::Win,
            Status::Draw => StatusLine::Draw,
        }
    }

    pub fn is_final(&self) -> bool {
        !matches!(self, StatusLine::Turn(_))
    }
}

impl From<&GameState> for StatusLine {
    fn from(state: &GameState) -> Self {
        StatusLine::new(state.turn(), state.status())
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLine::Turn(Owner::First) => write!(f, "turn: You"),
            StatusLine::Turn(Owner::Second) => write!(f, "turn: CPU"),
            StatusLine::Win => write!(f, "You Win!!"),
            StatusLine::Lose => write!(f, "You Lose..."),
            StatusLine::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ongoing_shows_active_player() {
        assert_eq!(StatusLine::new(0, Status::Ongoing).to_string(), "turn: You");
        assert_eq!(StatusLine::new(3, Status::Ongoing).to_string(), "turn: CPU");
    }

    #[test]
    fn test_win_is_framed_for_the_last_mover() {
        // Human moved on turn 4, leaving turn 5
        assert_eq!(StatusLine::new(5, Status::LastPlayerWin), StatusLine::Win);
        assert_eq!(StatusLine::new(6, Status::LastPlayerWin), StatusLine::Lose);
        assert_eq!(StatusLine::Lose.to_string(), "You Lose...");
        assert!(StatusLine::Win.is_final());
    }

    #[test]
    fn test_draw() {
        assert_eq!(StatusLine::new(42, Status::Draw).to_string(), "Draw");
        assert!(!StatusLine::new(42, Status::Ongoing).is_final());
    }
}
