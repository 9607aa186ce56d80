// The "No" button that runs away from the pointer.

use rand::Rng;

use crate::REFUSAL_PHRASES;

/// Size of the browser viewport in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// What one dodge did, so the shell can schedule the pleading overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dodge {
    pub attempts: u32,
    pub plead: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RefusalButton {
    attempts: u32,
    offset: (f64, f64),
    rotation: f64,
}

impl RefusalButton {
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Offset from the button's resting place, in pixels.
    pub fn offset(&self) -> (f64, f64) {
        self.offset
    }

    /// Rotation in degrees, `[0, 360)`.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn label(&self) -> &'static str {
        phrase_for(self.attempts)
    }

    /// Count an attempt and jump somewhere else inside `viewport` shrunk by
    /// `margin`. After the second attempt every dodge has a coin-flip chance
    /// to ask for the pleading overlay.
    pub fn dodge(&mut self, viewport: Viewport, margin: f64, rng: &mut impl Rng) -> Dodge {
        self.attempts = self.attempts.saturating_add(1);
        self.offset = (
            centred(viewport.width - margin, rng),
            centred(viewport.height - margin, rng),
        );
        self.rotation = rng.gen_range(0.0..360.0);
        let plead = self.attempts > 2 && rng.gen_bool(0.5);
        Dodge {
            attempts: self.attempts,
            plead,
        }
    }
}

/// The label after `attempts` dodges; holds on the last phrase.
pub fn phrase_for(attempts: u32) -> &'static str {
    let idx = (attempts as usize).min(REFUSAL_PHRASES.len() - 1);
    REFUSAL_PHRASES[idx]
}

// Uniform in [-span/2, span/2); a non-positive span pins the axis to 0.
fn centred(span: f64, rng: &mut impl Rng) -> f64 {
    if span <= 0.0 {
        return 0.0;
    }
    rng.gen_range(0.0..span) - span / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const SCREEN: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };

    #[test]
    fn offsets_stay_inside_the_margin() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut button = RefusalButton::default();
        for _ in 0..300 {
            button.dodge(SCREEN, 200.0, &mut rng);
            let (x, y) = button.offset();
            assert!(x.abs() <= (1280.0 - 200.0) / 2.0);
            assert!(y.abs() <= (720.0 - 200.0) / 2.0);
            assert!((0.0..360.0).contains(&button.rotation()));
        }
        assert_eq!(button.attempts(), 300);
    }

    #[test]
    fn no_pleading_in_the_first_two_attempts() {
        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut button = RefusalButton::default();
            assert!(!button.dodge(SCREEN, 200.0, &mut rng).plead);
            assert!(!button.dodge(SCREEN, 200.0, &mut rng).plead);
        }
    }

    #[test]
    fn pleading_eventually_shows_up() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut button = RefusalButton::default();
        let pleaded = (0..64).any(|_| button.dodge(SCREEN, 200.0, &mut rng).plead);
        assert!(pleaded);
    }

    #[test]
    fn tiny_viewport_pins_the_button() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut button = RefusalButton::default();
        button.dodge(
            Viewport {
                width: 150.0,
                height: 150.0,
            },
            200.0,
            &mut rng,
        );
        assert_eq!(button.offset(), (0.0, 0.0));
    }

    #[test]
    fn phrases_advance_then_hold() {
        assert_eq!(phrase_for(0), "No 🙃");
        assert_eq!(phrase_for(1), "Are you sure? 🥺");
        assert_eq!(phrase_for(9), "Last chance! 🎀");
        assert_eq!(phrase_for(10), "Last chance! 🎀");
        assert_eq!(phrase_for(u32::MAX), "Last chance! 🎀");
    }
}
