//! Browser shell: owns the page, wires DOM events and timers into it and
//! keeps the rendered screen and the running timers in step with the state.

use std::cell::RefCell;

use log::{debug, error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, EventTarget, MouseEvent, Node, window};

use crate::config::GameConfig;
use crate::error::{PageError, Result};
use crate::page::{ValentinePage, ViewState, Viewport};
use crate::schedule::{PlayingScope, Timeout};
use crate::view::PageView;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// What a click or hover on the page asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Start,
    Accept,
    Refuse,
    Catch(u64),
}

/// View state and game generation the DOM and timers currently reflect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Rendered(ViewState, u32);

impl Rendered {
    fn of(page: &ValentinePage) -> Self {
        Rendered(page.view(), page.generation())
    }

    /// Run `switch` when `target` differs from what is on screen. The new
    /// screen is only recorded once `switch` succeeds, so a failed switch is
    /// retried on the next call.
    fn advance(&mut self, target: Rendered, switch: impl FnOnce() -> Result<()>) -> Result<bool> {
        if *self == target {
            return Ok(false);
        }
        switch()?;
        *self = target;
        Ok(true)
    }
}

struct App {
    page: ValentinePage,
    view: PageView,
    rendered: Rendered,
    /// `Some` exactly while the page is in `Playing`.
    playing: Option<PlayingScope>,
    pleading_timer: Option<Timeout>,
}

/// Build the page into `document.body` and start listening for input.
pub fn mount(config: GameConfig) -> Result<()> {
    config.validate()?;
    if APP.with(|cell| cell.borrow().is_some()) {
        warn!("valentine page already mounted");
        return Ok(());
    }
    let win = window().ok_or(PageError::NoWindow)?;
    let doc = win.document().ok_or(PageError::NoDocument)?;
    let mut view = PageView::mount(&doc)?;
    install_listeners(view.root())?;

    let page = ValentinePage::new(config);
    view.render(&page)?;
    let rendered = Rendered::of(&page);
    APP.with(|cell| {
        cell.replace(Some(App {
            page,
            view,
            rendered,
            playing: None,
            pleading_timer: None,
        }))
    });
    info!("valentine page mounted");
    Ok(())
}

/// Run `f` against the mounted app. Errors can't reach JS from a callback, so
/// they are logged here.
fn with_app(f: impl FnOnce(&mut App) -> Result<()>) {
    APP.with(|cell| {
        let Ok(mut slot) = cell.try_borrow_mut() else {
            debug!("app busy, skipping re-entrant callback");
            return;
        };
        if let Some(app) = slot.as_mut() {
            if let Err(err) = f(app) {
                error!("{err}");
            }
        }
    });
}

impl App {
    fn handle(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Start => {
                self.page.start_game();
            }
            Action::Accept => {
                self.page.accept();
            }
            Action::Refuse => return self.refuse(),
            Action::Catch(id) => {
                if self.page.catch_heart(id) {
                    self.view.pop_score()?;
                    self.view.update_hud(&self.page);
                    self.view.sync_hearts(&self.page)?;
                }
            }
        }
        self.sync()
    }

    /// Re-render and swap timers when the view state or game generation moved.
    fn sync(&mut self) -> Result<()> {
        let target = Rendered::of(&self.page);
        let App {
            page,
            view,
            rendered,
            playing,
            pleading_timer,
        } = self;
        rendered.advance(target, || {
            // Dropping the scope cancels the spawner, countdown and frame loop.
            *playing = None;
            if target.0 != ViewState::Question {
                *pleading_timer = None;
            }
            view.render(page)?;
            if target.0 == ViewState::Playing {
                *playing = Some(start_playing_scope(page.config())?);
            }
            Ok(())
        })?;
        Ok(())
    }

    fn refuse(&mut self) -> Result<()> {
        let viewport = current_viewport()?;
        let Some(dodge) = self.page.refuse(viewport) else {
            return Ok(());
        };
        if dodge.plead {
            // Replacing the handle cancels a pending dismissal.
            self.pleading_timer = Some(Timeout::new(self.page.config().pleading_ms, || {
                with_app(App::on_pleading_done)
            })?);
        }
        self.view.update_refusal(&self.page)
    }

    fn on_spawn(&mut self) -> Result<()> {
        if self.page.spawn_tick().is_some() {
            self.view.sync_hearts(&self.page)?;
        }
        Ok(())
    }

    fn on_second(&mut self) -> Result<()> {
        self.page.countdown_tick();
        self.view.update_hud(&self.page);
        self.sync()
    }

    fn on_frame(&mut self) -> Result<()> {
        self.page.frame_tick();
        self.view.sync_hearts(&self.page)
    }

    fn on_pleading_done(&mut self) -> Result<()> {
        self.page.dismiss_pleading();
        self.pleading_timer = None;
        self.view.update_refusal(&self.page)
    }
}

fn start_playing_scope(config: &GameConfig) -> Result<PlayingScope> {
    PlayingScope::start(
        config.spawn_interval_ms,
        config.countdown_interval_ms,
        || with_app(App::on_spawn),
        || with_app(App::on_second),
        |_ts| with_app(App::on_frame),
    )
}

fn current_viewport() -> Result<Viewport> {
    let win = window().ok_or(PageError::NoWindow)?;
    Ok(Viewport {
        width: win.inner_width()?.as_f64().unwrap_or(0.0),
        height: win.inner_height()?.as_f64().unwrap_or(0.0),
    })
}

/// Find the actionable element an event started in, if any.
fn action_target(target: Option<EventTarget>) -> Option<(Action, Element)> {
    let el: Element = target?.dyn_into().ok()?;
    let hit = el.closest("[data-heart-id],[data-action]").ok()??;
    if let Some(id) = hit.get_attribute("data-heart-id") {
        let id = id.parse().ok()?;
        return Some((Action::Catch(id), hit));
    }
    let action = match hit.get_attribute("data-action")?.as_str() {
        "start" => Action::Start,
        "yes" => Action::Accept,
        "no" => Action::Refuse,
        _ => return None,
    };
    Some((action, hit))
}

// Listeners live on the root and survive every re-render, so they are
// installed once and leaked.
fn install_listeners(root: &Element) -> Result<()> {
    {
        let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
            if let Some((action, _)) = action_target(evt.target()) {
                with_app(|app| app.handle(action));
            }
        }) as Box<dyn FnMut(_)>);
        root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    // mouseenter does not bubble; emulate it with mouseover and ignore moves
    // that stay inside the button.
    {
        let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
            let Some((Action::Refuse, button)) = action_target(evt.target()) else {
                return;
            };
            let from: Option<Node> = evt.related_target().and_then(|t| t.dyn_into().ok());
            if from.is_some_and(|node| button.contains(Some(&node))) {
                return;
            }
            with_app(|app| app.handle(Action::Refuse));
        }) as Box<dyn FnMut(_)>);
        root.add_event_listener_with_callback("mouseover", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}
