// Browser tests for timer lifetimes: the spawner, countdown and frame loop
// must stop when the mini-game ends and must not pile up on a restart.
// Own test binary so the page is mounted fresh.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, window};

wasm_bindgen_test_configure!(run_in_browser);

fn find(selector: &str) -> Option<HtmlElement> {
    let doc = window()?.document()?;
    doc.query_selector(selector).ok()??.dyn_into().ok()
}

fn hud_text() -> String {
    find(".vp-hud")
        .and_then(|hud| hud.text_content())
        .unwrap_or_default()
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .expect("setTimeout");
    });
    JsFuture::from(promise).await.expect("sleep");
}

/// Click the start action from inside the playing screen, which has no
/// start button of its own.
fn restart() {
    let doc = window().and_then(|w| w.document()).expect("document");
    let root = doc.get_element_by_id("vp-root").expect("root");
    let trigger: HtmlElement = doc
        .create_element("button")
        .expect("button")
        .dyn_into()
        .expect("html element");
    trigger.set_attribute("data-action", "start").expect("attr");
    root.append_child(&trigger).expect("append");
    trigger.click();
}

#[wasm_bindgen_test]
async fn timers_follow_the_playing_screen() {
    valentine_cat::start_page().expect("mount");
    find("[data-action=start]").expect("start button").click();

    sleep(1_300).await;
    assert!(hud_text().contains("29s"), "hud was '{}'", hud_text());

    // A restart replaces the countdown instead of adding a second one.
    restart();
    assert!(hud_text().contains("30s"), "hud was '{}'", hud_text());
    assert!(find(".vp-heart").is_none());
    sleep(1_500).await;
    assert!(hud_text().contains("29s"), "hud was '{}'", hud_text());

    // Catch hearts as they appear until the question shows up.
    for _ in 0..60 {
        if find("[data-action=yes]").is_some() {
            break;
        }
        for _ in 0..8 {
            let Some(heart) = find(".vp-heart") else {
                break;
            };
            heart.click();
        }
        sleep(300).await;
    }
    assert!(find("[data-action=yes]").is_some(), "question never shown");
    assert!(find(".vp-hud").is_none());
    assert!(find(".vp-heart").is_none());

    // Longer than two spawn intervals and a countdown step.
    sleep(2_000).await;
    assert!(find(".vp-heart").is_none(), "spawner still running");
    assert!(find(".vp-hud").is_none());
    assert!(find("[data-action=yes]").is_some());
    let text = find(".vp-root").and_then(|r| r.text_content()).unwrap_or_default();
    assert!(text.contains("You caught 5 hearts!"), "page was '{}'", text);
}
