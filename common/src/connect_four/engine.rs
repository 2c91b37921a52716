use crate::connect_four::board::Coordinate;
use crate::connect_four::game_state::GameState;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Board of {rows}x{cols} is outside the supported range 1..={max}")]
    InvalidDimensions { rows: usize, cols: usize, max: usize },
    #[error("Engine is unavailable: {0}")]
    Unavailable(String),
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", content = "action")]
pub enum Move {
    Human(Coordinate),
    // The engine picks the cell itself
    Automated,
}

// `legal_actions` must be empty once a game is over, and an automated move
// must be one of `legal_actions(state)`.
pub trait GameEngine {
    fn initial_state(&mut self) -> Result<GameState, EngineError>;

    fn legal_actions(&self, state: &GameState) -> Vec<Coordinate>;

    fn apply(&mut self, state: &GameState, hand: Move) -> GameState;
}
