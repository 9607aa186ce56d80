// Text and inline styles for the page, kept free of DOM calls.

use crate::page::{CelebrationHeart, FallingHeart, RefusalButton};

/// Injected once into the document as `<style id="vp-style">`.
pub const STYLESHEET: &str = r#"
.vp-root { position:fixed; inset:0; overflow:hidden; font-family:'Nunito','Segoe UI',sans-serif;
  background:linear-gradient(135deg,#fce7f3 0%,#f3e8ff 50%,#fbcfe8 100%); color:#db2777; }
.vp-screen { position:absolute; inset:0; }
.vp-center { display:flex; align-items:center; justify-content:center; padding:2rem; }
.vp-card { position:relative; z-index:10; text-align:center; max-width:42rem; }
.vp-hero { font-size:6rem; margin-bottom:1.5rem; }
.vp-title { font-size:3rem; font-weight:800; margin:0 0 1rem; }
.vp-lead { font-size:1.25rem; color:#ec4899; margin:0 0 2rem; }
.vp-btn { border:none; border-radius:9999px; cursor:pointer; font-weight:700; box-shadow:0 10px 20px rgba(236,72,153,0.25); }
.vp-btn-yes { background:linear-gradient(90deg,#f472b6,#ec4899); color:#fff; font-size:1.5rem; padding:1.25rem 3rem; }
.vp-btn-yes:hover { transform:scale(1.1); }
.vp-btn-no { background:linear-gradient(90deg,#d1d5db,#9ca3af); color:#374151; font-size:1.15rem; padding:1rem 2rem;
  transition:transform 0.35s cubic-bezier(.34,1.56,.64,1); }
.vp-choices { display:flex; flex-wrap:wrap; align-items:center; justify-content:center; gap:2rem; }
.vp-hud { position:absolute; top:0; left:0; right:0; z-index:20; padding:1.5rem; display:flex; justify-content:space-between; }
.vp-pill { background:rgba(255,255,255,0.8); border-radius:9999px; padding:0.75rem 1.5rem; font-size:1.5rem; font-weight:800;
  box-shadow:0 10px 20px rgba(0,0,0,0.08); }
.vp-timer { color:#9333ea; }
.vp-hint { position:absolute; top:6rem; left:0; right:0; z-index:10; text-align:center; font-size:1.25rem; }
.vp-hearts { position:absolute; inset:0; }
.vp-heart { position:absolute; z-index:10; font-size:2.25rem; background:none; border:none; padding:0; cursor:pointer;
  animation:vp-appear 0.2s ease-out; }
.vp-heart:hover { transform:scale(1.3); }
.vp-popup { position:absolute; top:50%; left:50%; transform:translateX(-50%); z-index:30; font-size:2.25rem;
  font-weight:800; pointer-events:none; animation:vp-rise 1s ease-out forwards; }
.vp-pleading { position:absolute; top:50%; left:50%; z-index:20; font-size:3.75rem; pointer-events:none;
  animation:vp-appear 0.2s ease-out; }
.vp-hidden { display:none; }
.vp-name { font-size:3.75rem; margin-bottom:1rem; }
.vp-trophy { font-size:4rem; margin-bottom:1rem; }
.vp-sparkles { margin-top:1rem; animation:vp-sway 3s ease-in-out infinite; }
.vp-ribbon { margin-top:3rem; display:flex; justify-content:center; gap:1rem; font-size:2.25rem; }
.vp-ribbon span { display:inline-block; animation:vp-bob 2s ease-in-out infinite; }
.vp-float { position:absolute; bottom:0; font-size:1.5rem; pointer-events:none; opacity:0;
  animation:vp-float-up 3s ease-out forwards; }
.vp-beat { margin-top:2rem; font-size:6rem; animation:vp-beat 1s ease-in-out infinite; }
.vp-bob { animation:vp-bob 2s ease-in-out infinite; }
.vp-bounce { animation:vp-bob 1.5s ease-in-out infinite; }
.vp-wiggle { display:inline-block; animation:vp-wiggle 2s ease-in-out infinite; }
.vp-pop { animation:vp-appear 0.5s cubic-bezier(.34,1.56,.64,1); }
@keyframes vp-appear { from { opacity:0; transform:scale(0); } to { opacity:1; transform:scale(1); } }
@keyframes vp-rise { from { opacity:1; margin-top:0; } to { opacity:0; margin-top:-50px; } }
@keyframes vp-bob { 0%,100% { transform:translateY(0); } 50% { transform:translateY(-10px); } }
@keyframes vp-wiggle { 0%,100% { transform:rotate(-5deg); } 50% { transform:rotate(5deg); } }
@keyframes vp-sway { 0%,100% { transform:translateX(-5px); } 50% { transform:translateX(5px); } }
@keyframes vp-beat { 0%,100% { transform:scale(1); } 50% { transform:scale(1.2); } }
@keyframes vp-float-up { from { opacity:1; transform:translate(0,100px); }
  to { opacity:0; transform:translate(var(--drift,0px),-200px); } }
"#;

pub fn scoreboard(score: u32, target: u32) -> String {
    format!("{score}/{target}")
}

pub fn timer(secs: u32) -> String {
    format!("{secs}s")
}

pub fn intro_blurb(target: u32) -> String {
    format!("Catch {target} falling hearts before time runs out to unlock a special surprise! 💘")
}

pub fn instructions(target: u32) -> String {
    format!("Catch {target} hearts to unlock the question! 💕")
}

pub fn caught_line(score: u32) -> String {
    format!("You caught {score} hearts! 🎉")
}

pub fn thank_you(pet_name: &str) -> String {
    format!("Thank you, {pet_name}!")
}

/// `name` wrapped in a glyph on either side.
pub fn framed(name: &str, glyph: &str) -> String {
    format!("{glyph}{name}{glyph}")
}

pub fn heart_style(heart: &FallingHeart) -> String {
    format!("left:{:.2}%;top:{:.2}%;", heart.x, heart.y)
}

pub fn refusal_style(button: &RefusalButton) -> String {
    let (x, y) = button.offset();
    format!(
        "transform:translate({x:.1}px,{y:.1}px) rotate({:.1}deg);",
        button.rotation()
    )
}

pub fn celebration_style(heart: &CelebrationHeart) -> String {
    format!(
        "left:{:.2}%;--drift:{:.1}px;animation-delay:{:.1}s;",
        heart.left_pct, heart.drift_px, heart.delay_secs
    )
}

/// Staggered bob for the i-th ribbon emoji.
pub fn ribbon_style(index: usize) -> String {
    format!("animation-delay:{:.1}s;", index as f64 * 0.2)
}
