//! Valentine Cat core crate.
//!
//! A single greeting page: the visitor catches falling hearts against the
//! clock, which unlocks the question "Will you be my Valentine?". The "No"
//! button runs away from the pointer; "Yes" ends in a shower of hearts.
//!
//! Game rules live in [`page`] and run anywhere. The browser shell (DOM
//! rendering, timers, event listeners) is only touched through
//! [`start_page()`].

use wasm_bindgen::prelude::*;

mod app;
pub mod config;
pub mod error;
mod logging;
pub mod page;
mod schedule;
mod view;

pub use config::GameConfig;
pub use error::PageError;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
}

// -----------------------------------------------------------------------------
// Fixed text and glyph sets
// -----------------------------------------------------------------------------

/// Labels for the "No" button, from first refusal to last. The button shows
/// entry `min(attempts, len - 1)`.
pub const REFUSAL_PHRASES: &[&str] = &[
    "No 🙃",
    "Are you sure? 🥺",
    "That would break a kitty's heart 💔🐱",
    "Nice try 😼",
    "Purr-lease say yes! 🐾",
    "Don't be a party pooper 💩",
    "My heart is melting 🫠",
    "Think of the kittens! 🐱",
    "You're making me sad 😿",
    "Last chance! 🎀",
];

/// Glyphs a falling heart can wear.
pub const HEART_GLYPHS: &[&str] = &["💖", "💕", "💗", "💓", "💝"];

/// Decorative row under the question.
pub const QUESTION_RIBBON: &[&str] = &["🎀", "💝", "🌸", "✨", "💕"];

/// Glyph of the hearts floating up on the celebration screen.
pub const CELEBRATION_GLYPH: &str = "💕";

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Mount the page into `document.body` with the default settings.
#[wasm_bindgen]
pub fn start_page() -> Result<(), JsValue> {
    app::mount(GameConfig::default())?;
    Ok(())
}

/// Mount the page with settings read from a JSON object. Missing fields keep
/// their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_page_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json)?;
    app::mount(config)?;
    Ok(())
}
