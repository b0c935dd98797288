//! Purrfect Pong entry point
//!
//! Without a windowing backend the native binary plays a scripted headless
//! match: it starts a game, lets the ball run, then quits through the menus.
//! Usage: `purrfect-pong [settings.json]`

use purrfect_pong::consts::*;
use purrfect_pong::platform::{GameLoop, LogRenderer, LoopControl, ScriptedInput};
use purrfect_pong::sim::TickInput;
use purrfect_pong::{AudioManager, Session, SessionEvent, Settings};

const DEFAULT_SETTINGS_PATH: &str = "purrfect-pong.json";

/// Ticks the ball is left to run before quitting (one minute of play)
const DEMO_TICKS: usize = 60 * TICK_RATE as usize;

fn demo_script() -> ScriptedInput {
    let left_up = TickInput {
        left_up: true,
        ..Default::default()
    };
    let right_down = TickInput {
        right_down: true,
        ..Default::default()
    };

    ScriptedInput::new()
        .press(SessionEvent::Confirm)
        .hold(left_up, 20)
        .hold(right_down, 20)
        .idle(DEMO_TICKS)
        // Quit from the pause menu, or from game over if the match already ended
        .press(SessionEvent::Cancel)
        .press(SessionEvent::Quit)
        .press(SessionEvent::No)
        .press(SessionEvent::Close)
}

fn main() {
    env_logger::init();
    log::info!("Purrfect Pong (native, headless) starting...");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());
    let settings = Settings::load_or_default(&path);
    let seed = settings.seed.unwrap_or_else(rand::random);

    let mut game = GameLoop::new(
        Session::new(seed),
        demo_script(),
        LogRenderer::new(),
        AudioManager::from_settings(&settings),
    );

    let sample_rate = game.cues_mut().bank().sample_rate();
    let mut cue_buffers = 0usize;
    let mut cue_samples = 0usize;
    loop {
        let control = game.frame(TICK_DT);

        for buffer in game.cues_mut().drain() {
            cue_buffers += 1;
            cue_samples += buffer.len();
        }

        if control == LoopControl::Exit || game.input_mut().remaining() == 0 {
            break;
        }
    }

    let (session, _, renderer, _) = game.into_parts();
    let state = session.state();
    log::info!(
        "Finished after {} frames ({} ticks simulated) in {:?}",
        renderer.frames(),
        state.time_ticks,
        state.mode
    );
    log::info!(
        "Score {} - {}, winner: {}",
        state.score.left,
        state.score.right,
        state.winner_label().unwrap_or("none")
    );
    log::info!(
        "Played {} sound cues ({:.2}s at {} Hz)",
        cue_buffers,
        cue_samples as f32 / sample_rate as f32,
        sample_rate
    );
}
