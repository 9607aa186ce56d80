//! Game tunables.
//!
//! Every knob is a compile-time constant; [`GameConfig::default`] gathers them.
//! With the `serde` feature the struct can also be deserialized, which lets the
//! host page personalise the greeting without rebuilding.

use crate::error::{PageError, Result};

/// Hearts needed to unlock the question.
pub const TARGET_SCORE: u32 = 5;
/// Length of the mini-game in seconds.
pub const GAME_DURATION_SECS: u32 = 30;
pub const SPAWN_INTERVAL_MS: i32 = 800;
pub const COUNTDOWN_INTERVAL_MS: i32 = 1000;
/// Cap on simultaneously falling hearts.
pub const MAX_LIVE_HEARTS: usize = 8;
pub const CELEBRATION_BATCH: usize = 20;
/// Delay between consecutive celebration glyphs.
pub const CELEBRATION_STAGGER_SECS: f64 = 0.1;
/// How long the pleading overlay stays up.
pub const PLEADING_MS: i32 = 1500;
/// Pixels kept free around the refusal button so it never leaves the screen.
pub const REFUSAL_MARGIN_PX: f64 = 200.0;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GameConfig {
    pub target_score: u32,
    pub duration_secs: u32,
    pub spawn_interval_ms: i32,
    pub countdown_interval_ms: i32,
    pub max_live_hearts: usize,
    pub celebration_batch: usize,
    pub celebration_stagger_secs: f64,
    pub pleading_ms: i32,
    pub refusal_margin_px: f64,
    /// Shown between hearts on the question and celebration screens.
    pub recipient: Option<String>,
    /// Used in the closing "Thank you" line.
    pub pet_name: String,
    pub pleading_text: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: TARGET_SCORE,
            duration_secs: GAME_DURATION_SECS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            countdown_interval_ms: COUNTDOWN_INTERVAL_MS,
            max_live_hearts: MAX_LIVE_HEARTS,
            celebration_batch: CELEBRATION_BATCH,
            celebration_stagger_secs: CELEBRATION_STAGGER_SECS,
            pleading_ms: PLEADING_MS,
            refusal_margin_px: REFUSAL_MARGIN_PX,
            recipient: None,
            pet_name: "my Valentine".to_string(),
            pleading_text: "Pretty please? 🥺".to_string(),
        }
    }
}

impl GameConfig {
    /// Reject settings that would make the game unwinnable or stall a timer.
    pub fn validate(&self) -> Result<()> {
        let problem = if self.target_score == 0 {
            Some("target_score must be at least 1")
        } else if self.duration_secs == 0 {
            Some("duration_secs must be at least 1")
        } else if self.max_live_hearts == 0 {
            Some("max_live_hearts must be at least 1")
        } else if self.spawn_interval_ms <= 0 || self.countdown_interval_ms <= 0 {
            Some("timer intervals must be positive")
        } else if self.pleading_ms < 0 {
            Some("pleading_ms must not be negative")
        } else if self.celebration_stagger_secs.is_nan() || self.celebration_stagger_secs < 0.0 {
            Some("celebration_stagger_secs must not be negative")
        } else if self.refusal_margin_px.is_nan() || self.refusal_margin_px < 0.0 {
            Some("refusal_margin_px must not be negative")
        } else {
            None
        };
        match problem {
            Some(msg) => Err(PageError::Config(msg.to_string())),
            None => Ok(()),
        }
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| PageError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
