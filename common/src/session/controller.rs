use crate::connect_four::{Coordinate, GameEngine, GameState, Move};
use crate::session::geometry::{Point, Rect};
use crate::session::input::map_point_to_cell;
use crate::session::pacing::{PacingConfig, PacingRng, RevealRng};
use crate::session::status::StatusLine;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        SessionId(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        SessionId::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_simple())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RevealTicket {
    pub session: SessionId,
    pub seq: u64,
}

// After `delay` the host hands `ticket` to `commit_reveal`. Dropping the task
// must cancel it.
pub trait Scheduler {
    type Task;

    fn schedule(&mut self, delay: Duration, ticket: RevealTicket) -> Self::Task;
}

pub struct Frame<'a> {
    pub state: &'a GameState,
    // Empty once the game is over
    pub legal_actions: &'a [Coordinate],
}

pub trait Presenter {
    fn present(&mut self, frame: Frame<'_>);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ignored {
    Uninitialized,
    Closed,
    GameOver,
    OpponentTurn,
    OutsideBoard,
    IllegalMove,
}

impl fmt::Display for Ignored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ignored::Uninitialized => write!(f, "session not started"),
            Ignored::Closed => write!(f, "session closed"),
            Ignored::GameOver => write!(f, "game is over"),
            Ignored::OpponentTurn => write!(f, "not the human's turn"),
            Ignored::OutsideBoard => write!(f, "pointer outside every cell"),
            Ignored::IllegalMove => write!(f, "cell is not a legal move"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    Applied(Coordinate),
    Ignored(Ignored),
}

struct PendingReveal<T> {
    ticket: RevealTicket,
    state: GameState,
    // Held only so that dropping the reveal cancels the timer
    _task: T,
}

// The automated reply is computed with the human move but only becomes current
// when its reveal fires. Until then the turn parity keeps input out.
pub struct SessionController<E, S, P, R = RevealRng>
where
    E: GameEngine,
    S: Scheduler,
    P: Presenter,
    R: PacingRng,
{
    id: SessionId,
    engine: E,
    scheduler: S,
    presenter: P,
    pacing: PacingConfig,
    rng: R,
    current: Option<GameState>,
    pending: Option<PendingReveal<S::Task>>,
    next_seq: u64,
    live: bool,
}

impl<E, S, P> SessionController<E, S, P, RevealRng>
where
    E: GameEngine,
    S: Scheduler,
    P: Presenter,
{
    pub fn new(engine: E, scheduler: S, presenter: P, pacing: PacingConfig) -> Self {
        SessionController::with_rng(engine, scheduler, presenter, pacing, RevealRng::default())
    }
}

impl<E, S, P, R> SessionController<E, S, P, R>
where
    E: GameEngine,
    S: Scheduler,
    P: Presenter,
    R: PacingRng,
{
    pub fn with_rng(engine: E, scheduler: S, presenter: P, pacing: PacingConfig, rng: R) -> Self {
        SessionController {
            id: SessionId::new(),
            engine,
            scheduler,
            presenter,
            pacing,
            rng,
            current: None,
            pending: None,
            next_seq: 0,
            live: true,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> Option<&GameState> {
        self.current.as_ref()
    }

    pub fn status_line(&self) -> Option<StatusLine> {
        self.current.as_ref().map(StatusLine::from)
    }

    pub fn is_reveal_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    // No retry if the engine fails
    pub fn initialize(&mut self) {
        if !self.live || self.current.is_some() {
            return;
        }
        match self.engine.initial_state() {
            Ok(state) => {
                info!(session = %self.id, "session started");
                self.current = Some(state);
                self.present();
            }
            Err(err) => {
                error!(session = %self.id, "failed to start session: {}", err);
            }
        }
    }

    pub fn handle_pointer_input(&mut self, display: Rect, pointer: Point) -> InputOutcome {
        match self.try_human_move(display, pointer) {
            Ok(coord) => InputOutcome::Applied(coord),
            Err(reason) => {
                debug!(session = %self.id, "input ignored: {}", reason);
                InputOutcome::Ignored(reason)
            }
        }
    }

    fn try_human_move(&mut self, display: Rect, pointer: Point) -> Result<Coordinate, Ignored> {
        if !self.live {
            return Err(Ignored::Closed);
        }
        let state = self.current.as_ref().ok_or(Ignored::Uninitialized)?;
        if !state.is_ongoing() {
            return Err(Ignored::GameOver);
        }
        if !state.is_human_turn() {
            return Err(Ignored::OpponentTurn);
        }
        let coord = map_point_to_cell(display, state.board(), pointer).ok_or(Ignored::OutsideBoard)?;
        if !self.engine.legal_actions(state).contains(&coord) {
            return Err(Ignored::IllegalMove);
        }
        let next = self.engine.apply(state, Move::Human(coord));
        info!(session = %self.id, turn = next.turn(), "human played {}", coord);
        self.current = Some(next.clone());
        self.present();
        if next.is_ongoing() {
            self.schedule_automated_turn(&next);
        }
        Ok(coord)
    }

    fn schedule_automated_turn(&mut self, state: &GameState) {
        debug_assert!(self.pending.is_none());
        let result = self.engine.apply(state, Move::Automated);
        let delay = self.pacing.reveal_delay(&mut self.rng);
        self.next_seq += 1;
        let ticket = RevealTicket {
            session: self.id,
            seq: self.next_seq,
        };
        debug!(session = %self.id, seq = ticket.seq, "reveal scheduled in {:?}", delay);
        let task = self.scheduler.schedule(delay, ticket);
        self.pending = Some(PendingReveal {
            ticket,
            state: result,
            _task: task,
        });
    }

    pub fn commit_reveal(&mut self, ticket: RevealTicket) -> bool {
        if !self.live {
            warn!(session = %self.id, seq = ticket.seq, "reveal after teardown discarded");
            return false;
        }
        match self.pending.take() {
            Some(pending) if pending.ticket == ticket => {
                info!(
                    session = %self.id,
                    turn = pending.state.turn(),
                    "automated move revealed"
                );
                self.current = Some(pending.state);
                self.present();
                true
            }
            other => {
                warn!(session = %self.id, seq = ticket.seq, "stale reveal discarded");
                self.pending = other;
                false
            }
        }
    }

    pub fn redraw(&mut self) {
        if self.live {
            self.present();
        }
    }

    pub fn teardown(&mut self) {
        if !self.live {
            return;
        }
        self.live = false;
        // Dropping the pending reveal cancels its task
        self.pending = None;
        info!(session = %self.id, "session closed");
    }

    fn present(&mut self) {
        let state = match &self.current {
            Some(state) => state,
            None => return,
        };
        let legal_actions = if state.is_ongoing() {
            self.engine.legal_actions(state)
        } else {
            Vec::new()
        };
        self.presenter.present(Frame {
            state,
            legal_actions: &legal_actions,
        });
    }
}

impl<E, S, P, R> Drop for SessionController<E, S, P, R>
where
    E: GameEngine,
    S: Scheduler,
    P: Presenter,
    R: PacingRng,
{
    fn drop(&mut self) {
        self.teardown();
    }
}
