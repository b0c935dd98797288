//! Fixed timestep physics and scoring step
//!
//! Advances paddles, ball, collisions and scoring by exactly one tick.
//! Velocities are in units per tick, so no delta time is involved.

use rand::Rng;

use super::collision::{hits_wall, scoring_side};
use super::state::{GameState, Side};
use crate::audio::{CueSink, SoundEffect};
use crate::consts::*;

/// Held controls for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

impl TickInput {
    /// Net vertical direction for a paddle: -1 up, +1 down, 0 for none or both
    pub fn direction(&self, side: Side) -> f32 {
        let (up, down) = match side {
            Side::Left => (self.left_up, self.left_down),
            Side::Right => (self.right_up, self.right_down),
        };
        down as i8 as f32 - up as i8 as f32
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball reached the top or bottom wall
    WallBounce,
    /// Ball was deflected by a paddle
    PaddleHit(Side),
    /// A side scored, with its new total
    Scored { side: Side, total: u32 },
}

/// Result of one physics step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Events in the order they happened
    pub events: Vec<GameEvent>,
    /// Set when a score reached the winning threshold this tick
    pub match_winner: Option<Side>,
}

impl TickOutcome {
    /// Side that scored this tick, if any
    pub fn scorer(&self) -> Option<Side> {
        self.events.iter().find_map(|e| match e {
            GameEvent::Scored { side, .. } => Some(*side),
            _ => None,
        })
    }

    pub fn paddle_hit(&self) -> Option<Side> {
        self.events.iter().find_map(|e| match e {
            GameEvent::PaddleHit(side) => Some(*side),
            _ => None,
        })
    }

    pub fn wall_bounce(&self) -> bool {
        self.events.contains(&GameEvent::WallBounce)
    }
}

/// Advance the game state by one fixed tick
///
/// Only meaningful while playing; the session decides whether to call it.
/// On a match-winning point the winner is recorded and the ball is left
/// where it is. Any other point re-serves the ball without touching scores
/// or paddles.
pub fn step<R: Rng + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut R,
    cues: &mut dyn CueSink,
) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    state.time_ticks += 1;

    // Paddles
    for side in Side::BOTH {
        let dy = input.direction(side) * PADDLE_SPEED;
        state.paddle_mut(side).move_by(dy);
    }

    // Ball
    state.ball.pos += state.ball.vel;

    // Top/bottom walls. The ball is not pushed back inside, so it can sit
    // past the wall for a tick before the flipped velocity carries it out.
    if hits_wall(&state.ball.rect()) {
        state.ball.vel.y = -state.ball.vel.y;
        cues.play(SoundEffect::WallHit);
        outcome.events.push(GameEvent::WallBounce);
    }

    // Paddles
    if let Some(side) = deflect_off_paddles(state) {
        cues.play(SoundEffect::PaddleHit);
        outcome.events.push(GameEvent::PaddleHit(side));
    }

    // Goals
    if let Some(side) = scoring_side(&state.ball.rect()) {
        let total = state.score.award(side);
        cues.play(SoundEffect::Score);
        outcome.events.push(GameEvent::Scored { side, total });

        if total >= WINNING_SCORE {
            state.winner = Some(side);
            outcome.match_winner = Some(side);
        } else {
            log::debug!(
                "{} scored ({} - {})",
                side.label(),
                state.score.left,
                state.score.right
            );
            state.ball.serve(rng);
        }
    }

    outcome
}

/// Bounce the ball off whichever paddle it overlaps
///
/// Reverses horizontal travel, speeds the ball up and places it flush
/// against the paddle face. The left paddle wins if both overlap.
fn deflect_off_paddles(state: &mut GameState) -> Option<Side> {
    let ball = state.ball.rect();
    let left = state.paddle(Side::Left).rect();
    let right = state.paddle(Side::Right).rect();

    let side = if ball.overlaps(&left) {
        Side::Left
    } else if ball.overlaps(&right) {
        Side::Right
    } else {
        return None;
    };

    state.ball.vel.x = -state.ball.vel.x;
    state.ball.vel *= PADDLE_BOOST;
    state.ball.pos.x = match side {
        Side::Left => left.max.x,
        Side::Right => right.min.x - state.ball.size,
    };

    Some(side)
}
