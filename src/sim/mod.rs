//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (10 Hz, one tick per collision scan)
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod avoider;
pub mod countdown;
pub mod field;
pub mod state;
pub mod tapper;
pub mod tick;

pub use avoider::{AvoiderGame, Obstacle, obstacle_x};
pub use countdown::{CountdownStep, RoundCountdown};
pub use field::{Entity, EntityField};
pub use state::{AnswerOutcome, GameEvent, GameState, MiniGame, Points, Session, SessionPhase};
pub use tapper::{TapperGame, Target};
pub use tick::{TickInput, tick};
