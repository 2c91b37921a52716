pub mod config;
pub mod connect_four;
pub mod session;

pub use config::{ConfigError, SessionConfig, MAX_CELL_PX};
pub use connect_four::*;
pub use session::*;
