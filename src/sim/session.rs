//! Session state machine
//!
//! Owns the game state and the serve RNG. Discrete events move the session
//! between modes through a single transition table; the physics step only
//! runs while playing.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::{GameMode, GameState, Side};
use super::tick::{self, TickInput, TickOutcome};
use crate::audio::CueSink;

/// Discrete inputs that drive mode changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionEvent {
    /// Start or resume
    Confirm,
    /// Pause, or quit from the title screen
    Cancel,
    /// Ask to restart from the pause menu
    Restart,
    /// Ask to go to the title screen
    Menu,
    /// Quit from the pause menu
    Quit,
    /// Accept a prompt
    Yes,
    /// Decline a prompt
    No,
    /// Window close request
    Close,
}

impl SessionEvent {
    pub const ALL: [SessionEvent; 8] = [
        SessionEvent::Confirm,
        SessionEvent::Cancel,
        SessionEvent::Restart,
        SessionEvent::Menu,
        SessionEvent::Quit,
        SessionEvent::Yes,
        SessionEvent::No,
        SessionEvent::Close,
    ];
}

/// Where an accepted event leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Switch mode, optionally resetting the whole match first
    Enter { mode: GameMode, reset_match: bool },
    /// End the program
    Terminate,
}

impl Transition {
    fn to(mode: GameMode) -> Option<Self> {
        Some(Transition::Enter {
            mode,
            reset_match: false,
        })
    }

    fn reset_into(mode: GameMode) -> Option<Self> {
        Some(Transition::Enter {
            mode,
            reset_match: true,
        })
    }
}

/// The transition table. Pairs not listed are ignored.
pub fn transition(mode: GameMode, event: SessionEvent) -> Option<Transition> {
    match (mode, event) {
        (_, SessionEvent::Close) => Some(Transition::Terminate),

        // From Start
        (GameMode::Start, SessionEvent::Confirm) => Transition::reset_into(GameMode::Playing),
        (GameMode::Start, SessionEvent::Cancel) => Some(Transition::Terminate),

        // From Playing
        (GameMode::Playing, SessionEvent::Cancel) => Transition::to(GameMode::Paused),

        // From Paused
        (GameMode::Paused, SessionEvent::Confirm) => Transition::to(GameMode::Playing),
        (GameMode::Paused, SessionEvent::Restart) => {
            Transition::to(GameMode::ConfirmRestartFromPause)
        }
        (GameMode::Paused, SessionEvent::Menu) => {
            Transition::to(GameMode::ConfirmMainMenuFromPause)
        }
        (GameMode::Paused, SessionEvent::Quit) => Some(Transition::Terminate),

        // From ConfirmRestartFromPause
        (GameMode::ConfirmRestartFromPause, SessionEvent::Yes) => {
            Transition::reset_into(GameMode::Playing)
        }
        (GameMode::ConfirmRestartFromPause, SessionEvent::No) => Transition::to(GameMode::Paused),

        // From ConfirmMainMenuFromPause
        (GameMode::ConfirmMainMenuFromPause, SessionEvent::Yes) => {
            Transition::reset_into(GameMode::Start)
        }
        (GameMode::ConfirmMainMenuFromPause, SessionEvent::No) => Transition::to(GameMode::Paused),

        // From GameOver
        (GameMode::GameOver, SessionEvent::Yes) => Transition::reset_into(GameMode::Playing),
        (GameMode::GameOver, SessionEvent::Menu) => Transition::reset_into(GameMode::Start),
        (GameMode::GameOver, SessionEvent::No) => Some(Transition::Terminate),

        _ => None,
    }
}

/// Result of feeding an event to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// No row for this (mode, event) pair; nothing changed
    Ignored,
    /// Mode changed
    Changed {
        from: GameMode,
        to: GameMode,
        reset_match: bool,
    },
    /// The session asked to end the program
    Terminated,
}

/// A single game session: state, serve RNG and lifecycle
pub struct Session {
    state: GameState,
    rng: Pcg32,
    seed: u64,
    terminated: bool,
}

impl Session {
    /// Create a session on the title screen
    pub fn new(seed: u64) -> Self {
        let mut session = Self {
            state: GameState::new(),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            terminated: false,
        };
        session.reset_match();
        log::info!("Session created with seed: {}", seed);
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access to the state, for test setups and tooling
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether a terminate transition has been taken
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Apply a discrete event through the transition table
    pub fn handle_event(&mut self, event: SessionEvent) -> EventOutcome {
        if self.terminated {
            return EventOutcome::Ignored;
        }

        let from = self.state.mode;
        match transition(from, event) {
            None => EventOutcome::Ignored,
            Some(Transition::Terminate) => {
                log::info!("{:?} in {:?}: terminating", event, from);
                self.terminated = true;
                EventOutcome::Terminated
            }
            Some(Transition::Enter { mode, reset_match }) => {
                if reset_match {
                    self.reset_match();
                }
                self.state.mode = mode;
                log::info!("{:?} -> {:?} on {:?}", from, mode, event);
                EventOutcome::Changed {
                    from,
                    to: mode,
                    reset_match,
                }
            }
        }
    }

    /// Run one fixed tick
    ///
    /// Returns `None` when the session is not playing and nothing moved.
    /// A match-winning point moves the session to game over in the same tick.
    pub fn tick(&mut self, input: &TickInput, cues: &mut dyn CueSink) -> Option<TickOutcome> {
        if self.terminated || !self.state.mode.is_simulating() {
            return None;
        }

        let outcome = tick::step(&mut self.state, input, &mut self.rng, cues);
        if let Some(winner) = outcome.match_winner {
            self.finish_match(winner);
        }
        Some(outcome)
    }

    fn finish_match(&mut self, winner: Side) {
        self.state.mode = GameMode::GameOver;
        log::info!(
            "{} wins {} - {}",
            winner.label(),
            self.state.score.left,
            self.state.score.right
        );
    }

    /// Zero scores, re-serve the ball, re-home both paddles, clear the winner.
    /// The only place scores go back to zero.
    fn reset_match(&mut self) {
        self.state.score = Default::default();
        self.state.winner = None;
        for paddle in &mut self.state.paddles {
            paddle.reset();
        }
        self.state.ball.serve(&mut self.rng);
    }
}
