mod controller;
mod geometry;
mod input;
mod pacing;
mod render;
mod status;

pub use controller::{
    Frame, Ignored, InputOutcome, Presenter, RevealTicket, Scheduler, SessionController,
    SessionId,
};
pub use geometry::{cell_rect, Point, Rect};
pub use input::map_point_to_cell;
pub use pacing::{PacingConfig, PacingRng, RevealRng};
pub use render::{render_board, render_frame, render_legal_overlay, Color, Palette, Surface};
pub use status::StatusLine;
