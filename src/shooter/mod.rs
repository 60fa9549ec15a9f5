//! Real-time top-down shooter.
//!
//! [`compute::tick`] advances one fixed step; [`session::Session`] wraps it
//! with high-score persistence for the front-end.

pub mod compute;
pub mod entities;
pub mod high_score;
pub mod session;
pub mod spawner;

pub use entities::{Command, Controls, GameStatus, ShooterState};
pub use high_score::{FileScoreStore, MemoryScoreStore, ScoreStore};
pub use session::{RoundOutcome, Session};
