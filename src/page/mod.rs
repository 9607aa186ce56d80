//! The valentine page controller.
//!
//! [`ValentinePage`] owns every piece of mutable state the page has and moves
//! through four screens:
//!
//! ```text
//! Intro --start--> Playing --(score reached | time up)--> Question --yes--> Yes
//! ```
//!
//! It knows nothing about the browser. The shell in `crate::app` calls the
//! tick and input methods from timers and DOM listeners, then re-renders from
//! the read accessors. Calls that do not apply to the current screen are
//! silently ignored.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::GameConfig;

mod celebration;
mod game;
mod refusal;

pub use celebration::CelebrationHeart;
pub use game::{FallingHeart, GameSession, OFF_SCREEN_Y, SPAWN_Y};
pub use refusal::{Dodge, RefusalButton, Viewport, phrase_for};

/// Which screen is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewState {
    Intro,
    Playing,
    Question,
    Yes,
}

/// Why the mini-game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinishReason {
    TargetReached,
    TimeUp,
}

pub struct ValentinePage {
    config: GameConfig,
    view: ViewState,
    session: Option<GameSession>,
    /// Final score of the last finished session.
    caught: u32,
    generation: u32,
    next_heart_id: u64,
    refusal: RefusalButton,
    pleading: bool,
    celebration: Vec<CelebrationHeart>,
    rng: SmallRng,
}

impl ValentinePage {
    /// A page seeded from the platform entropy source.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// A page with a fixed RNG seed, for reproducible runs.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: SmallRng) -> Self {
        Self {
            config,
            view: ViewState::Intro,
            session: None,
            caught: 0,
            generation: 0,
            next_heart_id: 0,
            refusal: RefusalButton::default(),
            pleading: false,
            celebration: Vec::new(),
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Bumped by every accepted `start_game`.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Live score while playing, otherwise the score the last game ended with.
    pub fn score(&self) -> u32 {
        self.session.as_ref().map_or(self.caught, GameSession::score)
    }

    pub fn target_score(&self) -> u32 {
        self.config.target_score
    }

    pub fn time_left(&self) -> u32 {
        self.session.as_ref().map_or(0, GameSession::time_left)
    }

    pub fn hearts(&self) -> &[FallingHeart] {
        match &self.session {
            Some(session) => session.hearts(),
            None => &[],
        }
    }

    pub fn refusal(&self) -> &RefusalButton {
        &self.refusal
    }

    pub fn pleading_visible(&self) -> bool {
        self.pleading
    }

    pub fn celebration(&self) -> &[CelebrationHeart] {
        &self.celebration
    }

    /// Begin (or restart) the mini-game with a fresh session.
    pub fn start_game(&mut self) -> bool {
        if !matches!(self.view, ViewState::Intro | ViewState::Playing) {
            return false;
        }
        let restart = self.view == ViewState::Playing;
        self.session = Some(GameSession::new(&self.config));
        self.caught = 0;
        self.generation += 1;
        self.view = ViewState::Playing;
        info!(
            "{} game {}: catch {} hearts in {}s",
            if restart { "restarted" } else { "started" },
            self.generation,
            self.config.target_score,
            self.config.duration_secs
        );
        true
    }

    /// Spawner step. Returns the id of the heart added, if any.
    pub fn spawn_tick(&mut self) -> Option<u64> {
        let session = self.session.as_mut()?;
        let heart = FallingHeart::spawn(self.next_heart_id, &mut self.rng);
        let id = heart.id;
        if !session.spawn(heart) {
            return None;
        }
        self.next_heart_id += 1;
        Some(id)
    }

    /// Animation-frame step. Returns how many hearts fell off screen.
    pub fn frame_tick(&mut self) -> usize {
        self.session.as_mut().map_or(0, GameSession::advance)
    }

    /// One-second countdown step. Returns true when it ended the game.
    pub fn countdown_tick(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.tick_second() {
            self.finish(FinishReason::TimeUp);
            return true;
        }
        false
    }

    /// Catch the live heart `id`. Stale or unknown ids do nothing.
    pub fn catch_heart(&mut self, id: u64) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !session.catch(id) {
            return false;
        }
        if session.is_won() {
            self.finish(FinishReason::TargetReached);
        }
        true
    }

    fn finish(&mut self, reason: FinishReason) {
        if let Some(session) = self.session.take() {
            self.caught = session.score();
        }
        self.view = ViewState::Question;
        info!("game {} finished ({reason:?}) with {} hearts", self.generation, self.caught);
    }

    /// Hover or click on the "No" button.
    pub fn refuse(&mut self, viewport: Viewport) -> Option<Dodge> {
        if self.view != ViewState::Question {
            return None;
        }
        let dodge = self
            .refusal
            .dodge(viewport, self.config.refusal_margin_px, &mut self.rng);
        if dodge.plead {
            self.pleading = true;
        }
        debug!("refusal attempt {} (plead: {})", dodge.attempts, dodge.plead);
        Some(dodge)
    }

    pub fn dismiss_pleading(&mut self) {
        self.pleading = false;
    }

    /// The "Yes" button. Moves to the celebration screen.
    pub fn accept(&mut self) -> bool {
        if self.view != ViewState::Question {
            return false;
        }
        self.view = ViewState::Yes;
        self.pleading = false;
        self.celebration = celebration::batch(
            self.config.celebration_batch,
            self.config.celebration_stagger_secs,
            &mut self.rng,
        );
        info!("accepted after {} refusal attempts", self.refusal.attempts());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Viewport = Viewport {
        width: 1024.0,
        height: 768.0,
    };

    fn page() -> ValentinePage {
        ValentinePage::with_seed(GameConfig::default(), 11)
    }

    fn catch_one(page: &mut ValentinePage) {
        let id = page.spawn_tick().expect("room for a heart");
        assert!(page.catch_heart(id));
    }

    #[test]
    fn starts_on_intro_with_nothing_live() {
        let p = page();
        assert_eq!(p.view(), ViewState::Intro);
        assert_eq!(p.score(), 0);
        assert!(p.hearts().is_empty());
    }

    #[test]
    fn ticks_do_nothing_outside_playing() {
        let mut p = page();
        assert_eq!(p.spawn_tick(), None);
        assert_eq!(p.frame_tick(), 0);
        assert!(!p.countdown_tick());
        assert!(!p.catch_heart(0));
        assert!(p.refuse(SCREEN).is_none());
        assert!(!p.accept());
        assert_eq!(p.view(), ViewState::Intro);
    }

    #[test]
    fn target_score_opens_the_question() {
        let mut p = page();
        assert!(p.start_game());
        for _ in 0..4 {
            catch_one(&mut p);
            assert_eq!(p.view(), ViewState::Playing);
        }
        catch_one(&mut p);
        assert_eq!(p.view(), ViewState::Question);
        assert_eq!(p.score(), 5);
        assert!(p.hearts().is_empty());
        // Timers that fire late after the transition are harmless.
        assert!(!p.countdown_tick());
        assert_eq!(p.spawn_tick(), None);
    }

    #[test]
    fn running_out_of_time_opens_the_question() {
        let mut p = page();
        p.start_game();
        for _ in 0..29 {
            assert!(!p.countdown_tick());
        }
        assert_eq!(p.time_left(), 1);
        assert!(p.countdown_tick());
        assert_eq!(p.view(), ViewState::Question);
        assert_eq!(p.score(), 0);
    }

    #[test]
    fn ids_stay_unique_across_restarts() {
        let mut p = page();
        p.start_game();
        let first = p.spawn_tick().unwrap();
        p.start_game();
        let second = p.spawn_tick().unwrap();
        assert_ne!(first, second);
        assert!(!p.catch_heart(first));
        assert_eq!(p.generation(), 2);
    }

    #[test]
    fn start_is_refused_after_the_game() {
        let mut p = page();
        p.start_game();
        for _ in 0..5 {
            catch_one(&mut p);
        }
        assert!(!p.start_game());
        assert_eq!(p.view(), ViewState::Question);
    }

    #[test]
    fn pleading_only_after_the_second_attempt() {
        let mut p = page();
        p.start_game();
        for _ in 0..30 {
            p.countdown_tick();
        }
        assert!(!p.refuse(SCREEN).unwrap().plead);
        assert!(!p.refuse(SCREEN).unwrap().plead);
        assert!(!p.pleading_visible());
        while !p.pleading_visible() {
            p.refuse(SCREEN);
        }
        assert!(p.refusal().attempts() > 2);
        p.dismiss_pleading();
        assert!(!p.pleading_visible());
        assert_eq!(p.view(), ViewState::Question);
    }

    #[test]
    fn accept_builds_the_celebration_and_hides_pleading() {
        let mut p = page();
        p.start_game();
        for _ in 0..30 {
            p.countdown_tick();
        }
        while !p.pleading_visible() {
            p.refuse(SCREEN);
        }
        assert!(p.accept());
        assert_eq!(p.view(), ViewState::Yes);
        assert!(!p.pleading_visible());
        assert_eq!(p.celebration().len(), 20);
        assert!(!p.accept());
        assert!(p.refuse(SCREEN).is_none());
    }
}
