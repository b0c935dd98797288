//! Purrfect Pong - a two-player paddle-and-ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (session state machine, physics, scoring)
//! - `input`: Keyboard mapping into held controls and session events
//! - `audio`: Cue sink and procedural square-wave sound effects
//! - `ui`: Per-mode overlay text and field layout for renderers
//! - `platform`: Collaborator traits and the fixed-rate game loop
//! - `settings`: Player preferences loaded from JSON

pub mod audio;
pub mod input;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod ui;

pub use audio::{AudioManager, CueSink, Silent, SoundEffect};
pub use settings::{Settings, SettingsError};
pub use sim::{GameMode, GameState, Session, SessionEvent, Side};

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate driven by the platform clock
    pub const TICK_RATE: u32 = 60;
    /// Fixed tick duration in seconds (velocities are per tick, not per second)
    pub const TICK_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between each paddle and its goal line
    pub const PADDLE_INSET: f32 = 50.0;
    /// Paddle travel per tick while a direction key is held
    pub const PADDLE_SPEED: f32 = 7.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_SPEED_X_INITIAL: f32 = 5.0;
    pub const BALL_SPEED_Y_INITIAL: f32 = 5.0;
    /// Speed boost when ball hits a paddle (multiplicative, uncapped)
    pub const PADDLE_BOOST: f32 = 1.05;

    /// First side to reach this score wins the match
    pub const WINNING_SCORE: u32 = 5;
}
