//! Screen layout for renderers
//!
//! Describes what each mode shows (text, field, net, dimming) in arena
//! coordinates. Renderers draw this as-is; nothing here touches a window.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{Aabb, GameMode, GameState, Side};

/// RGB color
pub type Color = [u8; 3];

pub const BACKGROUND: Color = [0, 0, 0];
pub const TEXT: Color = [255, 255, 255];
pub const NET: Color = [255, 255, 255];
pub const BALL: Color = [255, 255, 255];

/// Alpha of the black veil drawn over the field while paused
pub const PAUSE_DIM_ALPHA: u8 = 180;

/// Window title
pub const TITLE: &str = "Purrfect Pong!";

pub fn paddle_color(side: Side) -> Color {
    match side {
        Side::Left => [0, 0, 255],
        Side::Right => [255, 0, 0],
    }
}

/// Text sizes used on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Large,
    Medium,
    Small,
    Smaller,
    Tiny,
}

impl FontSize {
    /// Nominal pixel height
    pub fn px(self) -> u32 {
        match self {
            FontSize::Large => 74,
            FontSize::Medium => 48,
            FontSize::Small => 36,
            FontSize::Smaller => 28,
            FontSize::Tiny => 24,
        }
    }
}

/// A line of text centred on a point
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub size: FontSize,
    pub center: Vec2,
}

impl TextLine {
    fn new(text: impl Into<String>, size: FontSize, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            size,
            center: Vec2::new(x, y),
        }
    }
}

/// Everything a renderer needs beyond the raw game state
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    /// Draw net, paddles, ball and scores
    pub show_field: bool,
    /// Veil over the field before drawing text
    pub dim_alpha: Option<u8>,
    pub lines: Vec<TextLine>,
}

/// Build the overlay for the current mode
pub fn overlay(state: &GameState) -> Overlay {
    let cx = ARENA_WIDTH / 2.0;
    let h = ARENA_HEIGHT;

    let lines = match state.mode {
        GameMode::Start => vec![
            TextLine::new(TITLE, FontSize::Large, cx, h / 4.0),
            TextLine::new("Press SPACE to Start", FontSize::Small, cx, h / 2.0),
            TextLine::new("P1: W/S, P2: Up/Down", FontSize::Smaller, cx, h * 2.0 / 3.0),
            TextLine::new(
                format!("First to {} points wins!", WINNING_SCORE),
                FontSize::Smaller,
                cx,
                h * 3.0 / 4.0 - 10.0,
            ),
            TextLine::new("ESC to Pause during game", FontSize::Tiny, cx, h * 5.0 / 6.0 - 20.0),
            TextLine::new("ESC here to Quit", FontSize::Tiny, cx, h * 5.0 / 6.0 + 10.0),
        ],
        GameMode::Playing => score_lines(state),
        GameMode::Paused => {
            let spacing = 50.0;
            let top = h / 2.0 - spacing * 1.5;
            let mut lines = score_lines(state);
            lines.extend([
                TextLine::new("Game Paused", FontSize::Medium, cx, top),
                TextLine::new("SPACE to Resume", FontSize::Small, cx, top + spacing),
                TextLine::new("R for Restart Options", FontSize::Small, cx, top + spacing * 2.0),
                TextLine::new("M for Main Menu Options", FontSize::Small, cx, top + spacing * 3.0),
                TextLine::new("Q to Quit Game", FontSize::Small, cx, top + spacing * 4.0),
            ]);
            lines
        }
        GameMode::ConfirmRestartFromPause => vec![
            TextLine::new("Restart Current Match?", FontSize::Medium, cx, h / 2.0 - 30.0),
            TextLine::new("(Y) Yes / (N) No", FontSize::Small, cx, h / 2.0 + 30.0),
        ],
        GameMode::ConfirmMainMenuFromPause => vec![
            TextLine::new("Return to Main Menu?", FontSize::Medium, cx, h / 2.0 - 50.0),
            TextLine::new("(Current game will be lost)", FontSize::Smaller, cx, h / 2.0 - 10.0),
            TextLine::new("(Y) Yes / (N) No", FontSize::Small, cx, h / 2.0 + 40.0),
        ],
        GameMode::GameOver => {
            let spacing = 60.0;
            let top = h / 3.0 - 40.0;
            let winner = state.winner_label().unwrap_or("Nobody");
            vec![
                TextLine::new(format!("{} Wins!", winner), FontSize::Large, cx, top),
                TextLine::new(
                    format!("{} - {}", state.score.left, state.score.right),
                    FontSize::Medium,
                    cx,
                    top + spacing,
                ),
                TextLine::new("Play Again? (Y)", FontSize::Small, cx, top + spacing * 2.5),
                TextLine::new("Main Menu (M)", FontSize::Small, cx, top + spacing * 3.5),
                TextLine::new("Quit (N)", FontSize::Small, cx, top + spacing * 4.5),
            ]
        }
    };

    Overlay {
        show_field: state.mode.shows_field(),
        dim_alpha: (state.mode == GameMode::Paused).then_some(PAUSE_DIM_ALPHA),
        lines,
    }
}

/// Score readouts above each half of the field
pub fn score_lines(state: &GameState) -> Vec<TextLine> {
    vec![
        TextLine::new(
            state.score.left.to_string(),
            FontSize::Large,
            ARENA_WIDTH / 4.0,
            50.0,
        ),
        TextLine::new(
            state.score.right.to_string(),
            FontSize::Large,
            ARENA_WIDTH * 3.0 / 4.0,
            50.0,
        ),
    ]
}

/// Dashes of the center net, top to bottom
pub fn net_segments() -> Vec<Aabb> {
    (0..ARENA_HEIGHT as u32)
        .step_by(15)
        .map(|y| {
            Aabb::from_pos_size(
                Vec2::new(ARENA_WIDTH / 2.0 - 1.0, y as f32),
                Vec2::new(2.0, 10.0),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(overlay: &Overlay) -> Vec<&str> {
        overlay.lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_start_screen() {
        let state = GameState::new();
        let overlay = overlay(&state);
        assert!(!overlay.show_field);
        assert_eq!(overlay.lines[0].text, TITLE);
        assert_eq!(overlay.lines[0].center, Vec2::new(400.0, 150.0));
        assert!(texts(&overlay).contains(&"First to 5 points wins!"));
    }

    #[test]
    fn test_playing_shows_scores_only() {
        let mut state = GameState::new();
        state.mode = GameMode::Playing;
        state.score.left = 2;
        state.score.right = 4;
        let overlay = overlay(&state);
        assert!(overlay.show_field);
        assert_eq!(overlay.dim_alpha, None);
        assert_eq!(texts(&overlay), vec!["2", "4"]);
        assert_eq!(overlay.lines[0].center, Vec2::new(200.0, 50.0));
        assert_eq!(overlay.lines[1].center, Vec2::new(600.0, 50.0));
    }

    #[test]
    fn test_paused_dims_field_and_lists_options() {
        let mut state = GameState::new();
        state.mode = GameMode::Paused;
        let overlay = overlay(&state);
        assert!(overlay.show_field);
        assert_eq!(overlay.dim_alpha, Some(PAUSE_DIM_ALPHA));
        let lines = texts(&overlay);
        assert!(lines.contains(&"Game Paused"));
        assert!(lines.contains(&"Q to Quit Game"));
    }

    #[test]
    fn test_game_over_names_winner() {
        let mut state = GameState::new();
        state.mode = GameMode::GameOver;
        state.winner = Some(Side::Right);
        state.score.left = 1;
        state.score.right = 5;
        let overlay = overlay(&state);
        assert_eq!(texts(&overlay)[..2], ["Player 2 Wins!", "1 - 5"]);
        assert_eq!(overlay.lines[0].center.y, 160.0);
    }

    #[test]
    fn test_confirm_prompts() {
        let mut state = GameState::new();
        state.mode = GameMode::ConfirmMainMenuFromPause;
        assert!(texts(&overlay(&state)).contains(&"(Current game will be lost)"));
        state.mode = GameMode::ConfirmRestartFromPause;
        assert_eq!(texts(&overlay(&state))[0], "Restart Current Match?");
    }

    #[test]
    fn test_net_segments() {
        let net = net_segments();
        assert_eq!(net.len(), 40);
        assert_eq!(net[0].min, Vec2::new(399.0, 0.0));
        assert_eq!(net[1].min.y, 15.0);
        assert_eq!(net[0].size(), Vec2::new(2.0, 10.0));
    }
}
