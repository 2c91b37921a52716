mod board;
mod engine;
mod game_state;
mod rules;

pub use board::{Board, Cell, Coordinate, Owner};
pub use engine::{EngineError, GameEngine, Move};
pub use game_state::{Dimensions, GameState, Status};
pub use rules::{ConnectFourEngine, DrawRng, EngineRng, DEFAULT_COLS, DEFAULT_ROWS, MAX_BOARD_SIDE};
