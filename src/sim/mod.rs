//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only, velocities in units per tick
//! - Seeded RNG only
//! - Mode changes go through the session's transition table
//! - No rendering or platform dependencies

pub mod collision;
pub mod session;
pub mod state;
pub mod tick;

pub use collision::{Aabb, hits_wall, scoring_side};
pub use session::{EventOutcome, Session, SessionEvent, Transition, transition};
pub use state::{Ball, GameMode, GameState, Paddle, Score, Side};
pub use tick::{GameEvent, TickInput, TickOutcome, step};
