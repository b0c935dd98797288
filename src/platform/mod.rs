//! Platform abstraction layer
//!
//! The game core never talks to a window, keyboard or sound device directly.
//! A platform supplies:
//! - an [`InputSource`] polled once per tick
//! - a [`Renderer`] handed the state and overlay after each tick
//! - a [`CueSink`] for sound effects
//!
//! [`GameLoop`] wires them to a [`Session`] and runs it at the fixed tick
//! rate from wall-clock frame deltas.

use std::collections::VecDeque;

use crate::audio::CueSink;
use crate::consts::*;
use crate::input::InputState;
use crate::sim::{EventOutcome, GameMode, GameState, Session, SessionEvent, TickInput};
use crate::ui::{self, Overlay};

/// Longest frame delta fed to the accumulator, in seconds
pub const MAX_FRAME_DT: f32 = 0.1;

/// Input gathered for one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Discrete presses, in order
    pub events: Vec<SessionEvent>,
    /// Held paddle controls
    pub held: TickInput,
}

/// Source of player input
pub trait InputSource {
    /// Take the input for the next tick. Presses are returned once.
    fn poll(&mut self) -> FrameInput;
}

impl InputSource for InputState {
    fn poll(&mut self) -> FrameInput {
        FrameInput {
            events: self.drain_events(),
            held: self.tick_input(),
        }
    }
}

/// Draws a frame
pub trait Renderer {
    fn render(&mut self, state: &GameState, overlay: &Overlay);
}

/// Pre-recorded input, one entry per tick; idle once the script runs out
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<FrameInput>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// One tick with a single press and nothing held
    pub fn press(mut self, event: SessionEvent) -> Self {
        self.frames.push_back(FrameInput {
            events: vec![event],
            held: TickInput::default(),
        });
        self
    }

    /// `ticks` ticks with the given controls held
    pub fn hold(mut self, held: TickInput, ticks: usize) -> Self {
        self.frames.extend(std::iter::repeat_n(
            FrameInput {
                events: Vec::new(),
                held,
            },
            ticks,
        ));
        self
    }

    /// `ticks` ticks with no input
    pub fn idle(self, ticks: usize) -> Self {
        self.hold(TickInput::default(), ticks)
    }

    /// Ticks left in the script
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> FrameInput {
        self.frames.pop_front().unwrap_or_default()
    }
}

/// Renderer that only logs: mode changes at info, score changes at debug
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
    last_mode: Option<GameMode>,
    last_score: (u32, u32),
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, state: &GameState, overlay: &Overlay) {
        self.frames += 1;

        if self.last_mode != Some(state.mode) {
            let headline = overlay.lines.first().map(|l| l.text.as_str()).unwrap_or("");
            log::info!(
                "[frame {}] {:?}: {}",
                self.frames,
                state.mode,
                headline
            );
            self.last_mode = Some(state.mode);
        }

        let score = state.score.as_tuple();
        if score != self.last_score {
            log::debug!("[frame {}] score {} - {}", self.frames, score.0, score.1);
            self.last_score = score;
        }
    }
}

/// Fixed-timestep accumulator
///
/// Converts variable frame deltas into whole ticks of [`TICK_DT`]. Long
/// frames are clamped and at most [`MAX_SUBSTEPS`] ticks run per frame.
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame delta and return how many ticks are due
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= TICK_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= TICK_DT;
            substeps += 1;
        }
        substeps
    }

    /// Drop any partial tick, e.g. after resuming from a stall
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

/// Whether the loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Drives a session from platform input, clock and output
pub struct GameLoop<I, R, C> {
    session: Session,
    input: I,
    renderer: R,
    cues: C,
    clock: FixedStep,
}

impl<I: InputSource, R: Renderer, C: CueSink> GameLoop<I, R, C> {
    pub fn new(session: Session, input: I, renderer: R, cues: C) -> Self {
        Self {
            session,
            input,
            renderer,
            cues,
            clock: FixedStep::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn cues_mut(&mut self) -> &mut C {
        &mut self.cues
    }

    /// Run one tick: apply presses, step the simulation, render
    pub fn tick(&mut self) -> LoopControl {
        let FrameInput { events, held } = self.input.poll();

        for event in events {
            if self.session.handle_event(event) == EventOutcome::Terminated {
                return LoopControl::Exit;
            }
        }

        self.session.tick(&held, &mut self.cues);

        let state = self.session.state();
        self.renderer.render(state, &ui::overlay(state));
        LoopControl::Continue
    }

    /// Advance by a wall-clock frame delta, running every tick that is due
    pub fn frame(&mut self, dt: f32) -> LoopControl {
        for _ in 0..self.clock.advance(dt) {
            if self.tick() == LoopControl::Exit {
                return LoopControl::Exit;
            }
        }
        LoopControl::Continue
    }

    /// Hand back the collaborators
    pub fn into_parts(self) -> (Session, I, R, C) {
        (self.session, self.input, self.renderer, self.cues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundEffect;
    use crate::input::Key;

    #[derive(Default)]
    struct Recorder {
        modes: Vec<GameMode>,
        dimmed: Vec<bool>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, state: &GameState, overlay: &Overlay) {
            self.modes.push(state.mode);
            self.dimmed.push(overlay.dim_alpha.is_some());
        }
    }

    fn game(input: ScriptedInput) -> GameLoop<ScriptedInput, Recorder, Vec<SoundEffect>> {
        GameLoop::new(Session::new(7), input, Recorder::default(), Vec::new())
    }

    #[test]
    fn test_fixed_step_counts_whole_ticks() {
        let mut clock = FixedStep::new();
        assert_eq!(clock.advance(TICK_DT * 0.5), 0);
        assert_eq!(clock.advance(TICK_DT * 0.6), 1);
        assert_eq!(clock.advance(TICK_DT * 3.0), 3);
    }

    #[test]
    fn test_fixed_step_clamps_long_frames() {
        let mut long = FixedStep::new();
        let mut capped = FixedStep::new();
        let ticks = long.advance(5.0);
        assert!(ticks <= MAX_SUBSTEPS);
        assert_eq!(ticks, capped.advance(MAX_FRAME_DT));
        assert_eq!(FixedStep::new().advance(-1.0), 0);
    }

    #[test]
    fn test_fixed_step_reset_drops_partial_tick() {
        let mut clock = FixedStep::new();
        clock.advance(TICK_DT * 0.9);
        clock.reset();
        assert_eq!(clock.advance(TICK_DT * 0.5), 0);
    }

    #[test]
    fn test_tick_applies_press_then_simulates() {
        let mut game = game(ScriptedInput::new().press(SessionEvent::Confirm));
        assert_eq!(game.tick(), LoopControl::Continue);

        assert_eq!(game.session().mode(), GameMode::Playing);
        // The ball moved in the same tick the match started
        assert_eq!(game.session().state().time_ticks, 1);
        assert_eq!(game.renderer().modes, vec![GameMode::Playing]);
    }

    #[test]
    fn test_idle_title_screen_does_not_simulate() {
        let mut game = game(ScriptedInput::new().idle(10));
        for _ in 0..10 {
            game.tick();
        }
        assert_eq!(game.session().state().time_ticks, 0);
        assert_eq!(game.renderer().modes.len(), 10);
    }

    #[test]
    fn test_pause_dims_and_freezes() {
        let mut game = game(
            ScriptedInput::new()
                .press(SessionEvent::Confirm)
                .idle(3)
                .press(SessionEvent::Cancel)
                .idle(3),
        );
        for _ in 0..8 {
            game.tick();
        }
        assert_eq!(game.session().mode(), GameMode::Paused);
        assert_eq!(game.session().state().time_ticks, 4);
        assert_eq!(game.renderer().dimmed.last(), Some(&true));
    }

    #[test]
    fn test_terminate_exits_without_rendering() {
        let mut game = game(ScriptedInput::new().press(SessionEvent::Cancel));
        assert_eq!(game.tick(), LoopControl::Exit);
        assert!(game.session().is_terminated());
        assert!(game.renderer().modes.is_empty());
    }

    #[test]
    fn test_frame_runs_due_ticks() {
        let mut game = game(ScriptedInput::new().press(SessionEvent::Confirm).idle(10));
        assert_eq!(game.frame(TICK_DT * 3.5), LoopControl::Continue);
        assert_eq!(game.session().state().time_ticks, 3);
        assert_eq!(game.renderer().modes.len(), 3);
    }

    #[test]
    fn test_keyboard_state_as_input_source() {
        let mut keys = InputState::new();
        keys.key_down(Key::Space);
        keys.key_down(Key::Up);

        let polled = keys.poll();
        assert_eq!(polled.events, vec![SessionEvent::Confirm]);
        assert!(polled.held.right_up);

        // Presses are consumed, held keys persist
        let polled = keys.poll();
        assert!(polled.events.is_empty());
        assert!(polled.held.right_up);
    }

    #[test]
    fn test_scripted_input_runs_dry() {
        let mut script = ScriptedInput::new().press(SessionEvent::Yes).idle(1);
        assert_eq!(script.remaining(), 2);
        script.poll();
        script.poll();
        assert_eq!(script.poll(), FrameInput::default());
    }

    #[test]
    fn test_log_renderer_counts_frames() {
        let mut game = GameLoop::new(
            Session::new(1),
            ScriptedInput::new().idle(2),
            LogRenderer::new(),
            crate::audio::Silent,
        );
        game.tick();
        game.tick();
        assert_eq!(game.renderer().frames(), 2);
    }
}
