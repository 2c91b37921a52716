use crate::connect_four::board::{Board, Coordinate, Owner};
use crate::connect_four::engine::{EngineError, GameEngine, Move};
use crate::connect_four::game_state::{GameState, Status};
use rand::prelude::IteratorRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt::Debug;
use tracing::{debug, warn};

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;
pub const MAX_BOARD_SIDE: usize = 16;
pub const CONNECT: usize = 4;

pub trait DrawRng {
    fn draw<T, I: Iterator<Item = T> + Sized>(&mut self, iter: I) -> Option<T>;
}

#[derive(Debug)]
pub struct EngineRng {
    rng: StdRng,
}

impl Default for EngineRng {
    fn default() -> Self {
        EngineRng {
            rng: StdRng::from_entropy(),
        }
    }
}

impl EngineRng {
    pub fn seeded(seed: u64) -> Self {
        EngineRng {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DrawRng for EngineRng {
    fn draw<T, I: Iterator<Item = T> + Sized>(&mut self, iter: I) -> Option<T> {
        iter.choose(&mut self.rng)
    }
}

// Automated moves: win if possible, else block, else a random legal cell
#[derive(Debug)]
pub struct ConnectFourEngine<R: DrawRng + Debug> {
    rows: usize,
    cols: usize,
    rng: R,
}

impl Default for ConnectFourEngine<EngineRng> {
    fn default() -> Self {
        ConnectFourEngine::new(DEFAULT_ROWS, DEFAULT_COLS, EngineRng::default())
    }
}

impl<R: DrawRng + Debug> ConnectFourEngine<R> {
    pub fn new(rows: usize, cols: usize, rng: R) -> Self {
        ConnectFourEngine { rows, cols, rng }
    }

    fn choose_automated(&mut self, state: &GameState) -> Option<Coordinate> {
        let actions = self.legal_actions(state);
        let me = state.active_player();
        let winning = |owner: Owner| {
            actions
                .iter()
                .copied()
                .find(|&c| completes_line(&state.board().with_piece(c, owner), c, owner))
        };
        if let Some(c) = winning(me) {
            debug!("automated player takes winning cell {}", c);
            return Some(c);
        }
        if let Some(c) = winning(me.other()) {
            debug!("automated player blocks cell {}", c);
            return Some(c);
        }
        self.rng.draw(actions.into_iter())
    }
}

impl<R: DrawRng + Debug> GameEngine for ConnectFourEngine<R> {
    fn initial_state(&mut self) -> Result<GameState, EngineError> {
        let valid = 1..=MAX_BOARD_SIDE;
        if !valid.contains(&self.rows) || !valid.contains(&self.cols) {
            return Err(EngineError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
                max: MAX_BOARD_SIDE,
            });
        }
        Ok(GameState::new(
            Board::empty(self.rows, self.cols),
            0,
            Status::Ongoing,
        ))
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Coordinate> {
        if !state.is_ongoing() {
            return Vec::new();
        }
        let board = state.board();
        let cols = state.dimensions().cols;
        (0..cols)
            .filter_map(|col| {
                (0..board.row_count())
                    .rev()
                    .map(|row| Coordinate::new(row, col))
                    .find(|&c| board.get(c) == Some(None))
            })
            .collect()
    }

    fn apply(&mut self, state: &GameState, hand: Move) -> GameState {
        let coord = match hand {
            Move::Human(coord) => Some(coord),
            Move::Automated => self.choose_automated(state),
        };
        let coord = match coord {
            Some(c) if state.board().get(c) == Some(None) => c,
            // Nothing to play; hand the state back unchanged
            _ => {
                warn!(turn = state.turn(), "unplayable move {:?} left the state unchanged", hand);
                return state.clone();
            }
        };
        let player = state.active_player();
        let board = state.board().with_piece(coord, player);
        let turn = state.turn() + 1;
        let status = if completes_line(&board, coord, player) {
            Status::LastPlayerWin
        } else {
            let probe = GameState::new(board.clone(), turn, Status::Ongoing);
            if self.legal_actions(&probe).is_empty() {
                Status::Draw
            } else {
                Status::Ongoing
            }
        };
        GameState::new(board, turn, status)
    }
}

// Whether the piece at `coord` is part of CONNECT or more in a line
fn completes_line(board: &Board, coord: Coordinate, owner: Owner) -> bool {
    const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let count = 1 + run_length(board, coord, owner, dr, dc)
            + run_length(board, coord, owner, -dr, -dc);
        count >= CONNECT
    })
}

fn run_length(board: &Board, start: Coordinate, owner: Owner, dr: isize, dc: isize) -> usize {
    let mut count = 0;
    let mut row = start.row as isize + dr;
    let mut col = start.col as isize + dc;
    while row >= 0 && col >= 0 {
        let coord = Coordinate::new(row as usize, col as usize);
        if board.get(coord) != Some(Some(owner)) {
            break;
        }
        count += 1;
        row += dr;
        col += dc;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct MockRng;

    impl DrawRng for MockRng {
        fn draw<T, I: Iterator<Item = T> + Sized>(&mut self, mut iter: I) -> Option<T> {
            iter.next()
        }
    }

    fn engine() -> ConnectFourEngine<MockRng> {
        ConnectFourEngine::new(DEFAULT_ROWS, DEFAULT_COLS, MockRng)
    }

    fn play(engine: &mut ConnectFourEngine<MockRng>, state: &GameState, row: usize, col: usize) -> GameState {
        let coord = Coordinate::new(row, col);
        assert!(engine.legal_actions(state).contains(&coord));
        engine.apply(state, Move::Human(coord))
    }

    #[test]
    fn test_initial_state() {
        let state = engine().initial_state().unwrap();
        assert_eq!(state.turn(), 0);
        assert_eq!(state.status(), Status::Ongoing);
        assert_eq!(state.dimensions().rows, 6);
        assert_eq!(state.dimensions().cols, 7);
    }

    #[test]
    fn test_initial_state_rejects_bad_dimensions() {
        let mut engine = ConnectFourEngine::new(0, 7, MockRng);
        assert!(matches!(
            engine.initial_state(),
            Err(EngineError::InvalidDimensions { rows: 0, cols: 7, .. })
        ));
        let mut engine = ConnectFourEngine::new(6, MAX_BOARD_SIDE + 1, MockRng);
        assert!(engine.initial_state().is_err());
    }

    #[test]
    fn test_legal_actions_follow_gravity() {
        let mut engine = engine();
        let state = engine.initial_state().unwrap();
        let actions = engine.legal_actions(&state);
        assert_eq!(actions.len(), 7);
        assert!(actions.iter().all(|c| c.row == 5));
        let state = play(&mut engine, &state, 5, 3);
        let actions = engine.legal_actions(&state);
        assert_eq!(actions[3], Coordinate::new(4, 3));
        assert_eq!(actions[2], Coordinate::new(5, 2));
    }

    #[test]
    fn test_full_column_is_not_legal() {
        let mut engine = ConnectFourEngine::new(2, 2, MockRng);
        let mut state = engine.initial_state().unwrap();
        state = play(&mut engine, &state, 1, 0);
        state = play(&mut engine, &state, 0, 0);
        assert_eq!(engine.legal_actions(&state), vec![Coordinate::new(1, 1)]);
    }

    #[test]
    fn test_unplayable_human_move_leaves_state_unchanged() {
        let mut engine = engine();
        let state = engine.initial_state().unwrap();
        let state = play(&mut engine, &state, 5, 0);
        let occupied = engine.apply(&state, Move::Human(Coordinate::new(5, 0)));
        assert_eq!(occupied, state);
        let off_board = engine.apply(&state, Move::Human(Coordinate::new(6, 0)));
        assert_eq!(off_board, state);
        assert_eq!(off_board.turn(), 1);
    }

    #[test]
    fn test_vertical_win() {
        let mut engine = engine();
        let mut state = engine.initial_state().unwrap();
        for row in [5, 4, 3] {
            state = play(&mut engine, &state, row, 0);
            state = play(&mut engine, &state, row, 1);
        }
        state = play(&mut engine, &state, 2, 0);
        assert_eq!(state.status(), Status::LastPlayerWin);
        assert_eq!(state.turn(), 7);
        assert!(engine.legal_actions(&state).is_empty());
    }

    #[test]
    fn test_diagonal_win() {
        let board = Board::new(vec![
            vec![None, None, None, None],
            vec![None, None, Some(Owner::First), Some(Owner::Second)],
            vec![None, Some(Owner::First), Some(Owner::Second), Some(Owner::Second)],
            vec![Some(Owner::First), Some(Owner::Second), Some(Owner::Second), Some(Owner::First)],
        ]);
        let mut engine = ConnectFourEngine::new(4, 4, MockRng);
        let state = GameState::new(board, 10, Status::Ongoing);
        let next = play(&mut engine, &state, 0, 3);
        assert_eq!(next.status(), Status::LastPlayerWin);
    }

    #[test]
    fn test_draw_when_board_fills() {
        let board = Board::new(vec![
            vec![None, Some(Owner::Second)],
            vec![Some(Owner::Second), Some(Owner::First)],
        ]);
        let mut engine = ConnectFourEngine::new(2, 2, MockRng);
        let state = GameState::new(board, 3, Status::Ongoing);
        let next = engine.apply(&state, Move::Automated);
        assert_eq!(next.status(), Status::Draw);
        assert_eq!(next.turn(), 4);
    }

    #[test]
    fn test_automated_takes_win() {
        let mut engine = engine();
        let mut state = engine.initial_state().unwrap();
        // Second player owns three in column 6
        for _ in 0..3 {
            let human = engine.legal_actions(&state)[0];
            state = engine.apply(&state, Move::Human(human));
            let cpu = engine.legal_actions(&state)[6];
            state = engine.apply(&state, Move::Human(cpu));
        }
        let human = engine.legal_actions(&state)[2];
        state = engine.apply(&state, Move::Human(human));
        let next = engine.apply(&state, Move::Automated);
        assert_eq!(next.board().get(Coordinate::new(2, 6)), Some(Some(Owner::Second)));
        assert_eq!(next.status(), Status::LastPlayerWin);
    }

    #[test]
    fn test_automated_blocks_opponent() {
        let mut engine = engine();
        let mut state = engine.initial_state().unwrap();
        state = play(&mut engine, &state, 5, 2);
        state = play(&mut engine, &state, 5, 6);
        state = play(&mut engine, &state, 5, 3);
        state = play(&mut engine, &state, 4, 6);
        state = play(&mut engine, &state, 5, 4);
        let next = engine.apply(&state, Move::Automated);
        // A random pick would have gone to column 0
        assert_eq!(next.board().get(Coordinate::new(5, 1)), Some(Some(Owner::Second)));
        assert_eq!(next.board().get(Coordinate::new(5, 0)), Some(None));
        assert_eq!(next.status(), Status::Ongoing);
    }

    #[test]
    fn test_automated_move_is_always_legal() {
        let mut engine = ConnectFourEngine::new(DEFAULT_ROWS, DEFAULT_COLS, EngineRng::seeded(7));
        let mut state = engine.initial_state().unwrap();
        let mut moves = 0;
        while state.is_ongoing() {
            let legal = engine.legal_actions(&state);
            let next = engine.apply(&state, Move::Automated);
            let placed = legal
                .iter()
                .filter(|&&c| next.board().get(c) != state.board().get(c))
                .count();
            assert_eq!(placed, 1);
            state = next;
            moves += 1;
            assert_eq!(state.turn(), moves);
        }
        assert!(moves <= DEFAULT_ROWS * DEFAULT_COLS);
    }
}
