//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives in [`GameState`].

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// Which half of the arena a paddle (and its player) defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Slot in per-side arrays
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Player name shown on the game over screen
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Player 1",
            Side::Right => "Player 2",
        }
    }
}

/// Current mode of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Title screen, waiting for the players to start
    Start,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Asking whether to throw away the current match and restart
    ConfirmRestartFromPause,
    /// Asking whether to abandon the current match for the title screen
    ConfirmMainMenuFromPause,
    /// Match ended
    GameOver,
}

impl GameMode {
    pub const ALL: [GameMode; 6] = [
        GameMode::Start,
        GameMode::Playing,
        GameMode::Paused,
        GameMode::ConfirmRestartFromPause,
        GameMode::ConfirmMainMenuFromPause,
        GameMode::GameOver,
    ];

    /// Whether the physics step runs in this mode
    pub fn is_simulating(self) -> bool {
        self == GameMode::Playing
    }

    /// Whether the field (paddles, ball, scores) is drawn in this mode
    pub fn shows_field(self) -> bool {
        matches!(self, GameMode::Playing | GameMode::Paused)
    }
}

/// A player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    /// Paddle at its home position: inset from its goal line, vertically centred
    pub fn new(side: Side) -> Self {
        let mut paddle = Self {
            side,
            pos: Vec2::ZERO,
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        };
        paddle.reset();
        paddle
    }

    /// Fixed horizontal position for a side
    pub fn home_x(side: Side) -> f32 {
        match side {
            Side::Left => PADDLE_INSET,
            Side::Right => ARENA_WIDTH - PADDLE_INSET - PADDLE_WIDTH,
        }
    }

    /// Move back to the home position
    pub fn reset(&mut self) {
        self.pos = Vec2::new(
            Self::home_x(self.side),
            (ARENA_HEIGHT - self.size.y) / 2.0,
        );
    }

    /// Largest y the paddle may occupy
    pub fn max_y(&self) -> f32 {
        ARENA_HEIGHT - self.size.y
    }

    /// Shift vertically, staying inside the arena
    pub fn move_by(&mut self, dy: f32) {
        self.pos.y = (self.pos.y + dy).clamp(0.0, self.max_y());
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Units per tick
    pub vel: Vec2,
    pub size: f32,
}

impl Default for Ball {
    fn default() -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: BALL_SIZE,
        };
        ball.center_in_arena();
        ball
    }
}

impl Ball {
    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(self.size))
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    fn center_in_arena(&mut self) {
        self.pos = Vec2::new(ARENA_WIDTH, ARENA_HEIGHT) / 2.0 - Vec2::splat(self.size / 2.0);
    }

    /// Put the ball back at the center heading into a random quadrant
    /// at the initial speed
    pub fn serve<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.center_in_arena();
        let dir_x = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let dir_y = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(BALL_SPEED_X_INITIAL * dir_x, BALL_SPEED_Y_INITIAL * dir_y);
    }
}

/// Match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Add a point and return the new total for that side
    pub fn award(&mut self, side: Side) -> u32 {
        let total = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *total += 1;
        *total
    }

    pub fn as_tuple(&self) -> (u32, u32) {
        (self.left, self.right)
    }
}

/// Complete game state for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Current mode
    pub mode: GameMode,
    /// Left and right paddles, indexed by [`Side::index`]
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    pub score: Score,
    /// Set when a match is won, cleared by the next match reset
    pub winner: Option<Side>,
    /// Physics ticks simulated since the session began
    pub time_ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh state on the title screen with a stationary centred ball
    pub fn new() -> Self {
        Self {
            mode: GameMode::Start,
            paddles: [Paddle::new(Side::Left), Paddle::new(Side::Right)],
            ball: Ball::default(),
            score: Score::default(),
            winner: None,
            time_ticks: 0,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    /// Name of the match winner, if any
    pub fn winner_label(&self) -> Option<&'static str> {
        self.winner.map(Side::label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_paddles_start_centred_and_inset() {
        let state = GameState::new();
        let left = state.paddle(Side::Left);
        let right = state.paddle(Side::Right);

        assert_eq!(left.pos, Vec2::new(50.0, 250.0));
        assert_eq!(right.pos, Vec2::new(735.0, 250.0));
        assert_eq!(right.rect().max.x, ARENA_WIDTH - PADDLE_INSET);
    }

    #[test]
    fn test_paddle_move_clamps() {
        let mut paddle = Paddle::new(Side::Left);
        paddle.move_by(-10_000.0);
        assert_eq!(paddle.pos.y, 0.0);
        paddle.move_by(10_000.0);
        assert_eq!(paddle.pos.y, ARENA_HEIGHT - PADDLE_HEIGHT);
        assert_eq!(paddle.pos.x, PADDLE_INSET, "x never changes");
    }

    #[test]
    fn test_serve_centres_ball_with_initial_speed() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut ball = Ball::default();
        ball.pos = Vec2::new(3.0, 4.0);

        for _ in 0..32 {
            ball.serve(&mut rng);
            assert_eq!(ball.center(), Vec2::new(400.0, 300.0));
            assert_eq!(ball.vel.x.abs(), BALL_SPEED_X_INITIAL);
            assert_eq!(ball.vel.y.abs(), BALL_SPEED_Y_INITIAL);
        }
    }

    #[test]
    fn test_serve_reaches_every_quadrant() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut ball = Ball::default();
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            ball.serve(&mut rng);
            seen.insert((ball.vel.x > 0.0, ball.vel.y > 0.0));
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_score_award_returns_total() {
        let mut score = Score::default();
        assert_eq!(score.award(Side::Right), 1);
        assert_eq!(score.award(Side::Right), 2);
        assert_eq!(score.award(Side::Left), 1);
        assert_eq!(score.as_tuple(), (1, 2));
        assert_eq!(score.get(Side::Right), 2);
    }

    #[test]
    fn test_side_labels() {
        assert_eq!(Side::Left.label(), "Player 1");
        assert_eq!(Side::Right.label(), "Player 2");
        assert_eq!(Side::Left.opponent(), Side::Right);
    }

    #[test]
    fn test_state_serializes() {
        let state = GameState::new();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
