//! Audio cues
//!
//! Procedurally generated square-wave sound effects - no external files needed!
//! The simulation only ever talks to a [`CueSink`]; getting samples to a
//! speaker is the platform layer's job.

use crate::settings::Settings;

/// Default output rate for synthesized cues
pub const DEFAULT_SAMPLE_RATE: u32 = 22_050;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits top or bottom wall
    WallHit,
    /// Ball left the arena and a point was scored
    Score,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 3] = [
        SoundEffect::PaddleHit,
        SoundEffect::WallHit,
        SoundEffect::Score,
    ];

    /// Tone parameters: (frequency Hz, duration ms, volume 0-1)
    pub fn tone(self) -> (f32, u32, f32) {
        match self {
            SoundEffect::PaddleHit => (880.0, 40, 0.07),
            SoundEffect::WallHit => (659.0, 40, 0.07),
            SoundEffect::Score => (1047.0, 120, 0.09),
        }
    }
}

/// Fire-and-forget receiver of sound cues
///
/// Implementations must not block and must not fail; a sink with audio
/// disabled simply ignores the cue.
pub trait CueSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Sink that drops every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl CueSink for Silent {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Records cues in order, handy for asserting what a tick produced
impl CueSink for Vec<SoundEffect> {
    fn play(&mut self, effect: SoundEffect) {
        self.push(effect);
    }
}

/// Generate a mono 16-bit square wave
///
/// Returns an empty buffer for a zero-length tone and silence for a
/// non-positive frequency.
pub fn square_wave(freq_hz: f32, duration_ms: u32, volume: f32, sample_rate: u32) -> Vec<i16> {
    let num_samples = (sample_rate as u64 * duration_ms as u64 / 1000) as usize;
    if num_samples == 0 {
        return Vec::new();
    }
    if freq_hz <= 0.0 {
        return vec![0; num_samples];
    }

    let amplitude = (i16::MAX as f32 * volume.clamp(0.0, 1.0)) as i16;
    let samples_per_cycle = sample_rate as f32 / freq_hz;
    let half_cycle = samples_per_cycle / 2.0;

    (0..num_samples)
        .map(|i| {
            if (i as f32) % samples_per_cycle < half_cycle {
                amplitude
            } else {
                -amplitude
            }
        })
        .collect()
}

/// Pre-rendered sample buffers for every cue
#[derive(Debug, Clone)]
pub struct SoundBank {
    sample_rate: u32,
    paddle_hit: Vec<i16>,
    wall_hit: Vec<i16>,
    score: Vec<i16>,
}

impl SoundBank {
    pub fn new(sample_rate: u32) -> Self {
        let render = |effect: SoundEffect| {
            let (freq, ms, vol) = effect.tone();
            square_wave(freq, ms, vol, sample_rate)
        };
        Self {
            sample_rate,
            paddle_hit: render(SoundEffect::PaddleHit),
            wall_hit: render(SoundEffect::WallHit),
            score: render(SoundEffect::Score),
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn samples(&self, effect: SoundEffect) -> &[i16] {
        match effect {
            SoundEffect::PaddleHit => &self.paddle_hit,
            SoundEffect::WallHit => &self.wall_hit,
            SoundEffect::Score => &self.score,
        }
    }
}

/// Audio manager for the game
///
/// Queues volume-scaled buffers as cues arrive; the platform drains them
/// once per frame and hands them to its output device.
pub struct AudioManager {
    bank: SoundBank,
    pending: Vec<SoundEffect>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE)
    }
}

impl AudioManager {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            bank: SoundBank::new(sample_rate),
            pending: Vec::new(),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Build from player settings
    pub fn from_settings(settings: &Settings) -> Self {
        let mut audio = Self::new(settings.sample_rate);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if muted {
            self.pending.clear();
        }
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn bank(&self) -> &SoundBank {
        &self.bank
    }

    /// Number of cues waiting to be drained
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Take every queued cue as a scaled sample buffer, oldest first
    pub fn drain(&mut self) -> Vec<Vec<i16>> {
        let vol = self.effective_volume();
        self.pending
            .drain(..)
            .map(|effect| {
                self.bank
                    .samples(effect)
                    .iter()
                    .map(|&s| (s as f32 * vol) as i16)
                    .collect()
            })
            .collect()
    }
}

impl CueSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        if self.effective_volume() <= 0.0 {
            return;
        }
        log::debug!("Cue: {:?}", effect);
        self.pending.push(effect);
    }
}
