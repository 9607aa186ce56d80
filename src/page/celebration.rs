// Decorative hearts floating up on the "yes" screen.

use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct CelebrationHeart {
    pub id: u32,
    /// Animation start delay in seconds.
    pub delay_secs: f64,
    /// Horizontal start, percent of the viewport width.
    pub left_pct: f64,
    /// Sideways drift applied while rising, in pixels.
    pub drift_px: f64,
}

/// Build `count` hearts whose delays step by `stagger_secs` from zero.
pub fn batch(count: usize, stagger_secs: f64, rng: &mut impl Rng) -> Vec<CelebrationHeart> {
    (0..count)
        .map(|i| CelebrationHeart {
            id: i as u32,
            delay_secs: i as f64 * stagger_secs,
            left_pct: rng.gen_range(0.0..100.0),
            drift_px: rng.gen_range(-50.0..50.0),
        })
        .collect()
}
