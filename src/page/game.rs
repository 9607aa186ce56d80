// Heart-catching mini-game state: falling hearts, score and countdown.

use rand::Rng;

use crate::HEART_GLYPHS;
use crate::config::GameConfig;

/// Vertical position (percent of the play area) where new hearts appear.
pub const SPAWN_Y: f64 = -10.0;
/// Hearts at or below this vertical position have left the screen.
pub const OFF_SCREEN_Y: f64 = 110.0;

/// A heart falling through the play area. Positions are percentages of the
/// viewport; speed is percent per animation frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FallingHeart {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    pub glyph: &'static str,
}

impl FallingHeart {
    pub fn spawn(id: u64, rng: &mut impl Rng) -> Self {
        Self {
            id,
            x: rng.gen_range(5.0..95.0),
            y: SPAWN_Y,
            speed: rng.gen_range(0.4..1.2),
            glyph: HEART_GLYPHS[rng.gen_range(0..HEART_GLYPHS.len())],
        }
    }

    fn fall(&mut self) {
        self.y += self.speed;
    }

    pub fn is_off_screen(&self) -> bool {
        self.y >= OFF_SCREEN_Y
    }
}

/// One run of the mini-game. Only exists while the page is in `Playing`.
#[derive(Clone, Debug)]
pub struct GameSession {
    score: u32,
    time_left: u32,
    target_score: u32,
    max_live: usize,
    hearts: Vec<FallingHeart>,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            time_left: config.duration_secs,
            target_score: config.target_score,
            max_live: config.max_live_hearts,
            hearts: Vec::with_capacity(config.max_live_hearts),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn hearts(&self) -> &[FallingHeart] {
        &self.hearts
    }

    pub fn is_won(&self) -> bool {
        self.score >= self.target_score
    }

    /// Add `heart` unless the live cap is reached. Returns whether it was added.
    pub fn spawn(&mut self, heart: FallingHeart) -> bool {
        if self.hearts.len() >= self.max_live {
            return false;
        }
        self.hearts.push(heart);
        true
    }

    /// Move every heart down one frame and drop the ones that left the screen.
    /// Returns how many were dropped.
    pub fn advance(&mut self) -> usize {
        let before = self.hearts.len();
        for heart in &mut self.hearts {
            heart.fall();
        }
        self.hearts.retain(|h| !h.is_off_screen());
        before - self.hearts.len()
    }

    /// Remove the live heart `id` and count it. Unknown ids are ignored.
    pub fn catch(&mut self, id: u64) -> bool {
        let Some(idx) = self.hearts.iter().position(|h| h.id == id) else {
            return false;
        };
        self.hearts.remove(idx);
        self.score += 1;
        true
    }

    /// One countdown step. Returns true on the tick that reaches zero; once at
    /// zero further ticks change nothing.
    pub fn tick_second(&mut self) -> bool {
        if self.time_left == 0 {
            return false;
        }
        self.time_left -= 1;
        self.time_left == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn heart(id: u64, y: f64, speed: f64) -> FallingHeart {
        FallingHeart {
            id,
            x: 50.0,
            y,
            speed,
            glyph: HEART_GLYPHS[0],
        }
    }

    #[test]
    fn spawned_hearts_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        for id in 0..500 {
            let h = FallingHeart::spawn(id, &mut rng);
            assert!((5.0..95.0).contains(&h.x), "x out of range: {}", h.x);
            assert!((0.4..1.2).contains(&h.speed), "speed out of range: {}", h.speed);
            assert_eq!(h.y, SPAWN_Y);
            assert!(HEART_GLYPHS.contains(&h.glyph));
        }
    }

    #[test]
    fn spawn_respects_cap() {
        let mut session = GameSession::new(&GameConfig::default());
        for id in 0..20 {
            session.spawn(heart(id, SPAWN_Y, 1.0));
        }
        assert_eq!(session.hearts().len(), 8);
    }

    #[test]
    fn advance_drops_hearts_at_the_bottom() {
        let mut session = GameSession::new(&GameConfig::default());
        session.spawn(heart(1, 109.5, 0.5));
        session.spawn(heart(2, 50.0, 0.5));
        assert_eq!(session.advance(), 1);
        assert_eq!(session.hearts().len(), 1);
        assert_eq!(session.hearts()[0].id, 2);
        assert_eq!(session.hearts()[0].y, 50.5);
    }

    #[test]
    fn catching_twice_counts_once() {
        let mut session = GameSession::new(&GameConfig::default());
        session.spawn(heart(3, 10.0, 1.0));
        assert!(session.catch(3));
        assert!(!session.catch(3));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn countdown_stops_at_zero() {
        let mut session = GameSession::new(&GameConfig {
            duration_secs: 2,
            ..GameConfig::default()
        });
        assert!(!session.tick_second());
        assert!(session.tick_second());
        assert!(!session.tick_second());
        assert_eq!(session.time_left(), 0);
    }
}
