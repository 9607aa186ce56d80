//! Browser timers that cancel themselves when dropped.
//!
//! Each handle owns the `Closure` the browser calls and the id it handed back,
//! so letting the handle go out of scope both stops the timer and frees the
//! callback. [`PlayingScope`] bundles the three mini-game tasks; dropping it
//! tears all of them down at once.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Window, window};

use crate::error::{PageError, Result};

fn browser_window() -> Result<Window> {
    window().ok_or(PageError::NoWindow)
}

/// `setInterval` handle.
pub struct Interval {
    window: Window,
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(period_ms: i32, callback: impl FnMut() + 'static) -> Result<Self> {
        let window = browser_window()?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms,
        )?;
        Ok(Self {
            window,
            id,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.id);
    }
}

/// `setTimeout` handle. Dropping it before it fires cancels it.
pub struct Timeout {
    window: Window,
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(delay_ms: i32, callback: impl FnMut() + 'static) -> Result<Self> {
        let window = browser_window()?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms,
        )?;
        Ok(Self {
            window,
            id,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.window.clear_timeout_with_handle(self.id);
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A `requestAnimationFrame` loop that re-arms itself after every frame until
/// dropped.
pub struct FrameLoop {
    window: Window,
    active: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Result<Self> {
        let window = browser_window()?;
        let active = Rc::new(Cell::new(true));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let loop_window = window.clone();
        let loop_active = active.clone();
        let loop_pending = pending.clone();
        let loop_callback = callback.clone();
        let closure = Closure::wrap(Box::new(move |ts: f64| {
            loop_pending.set(None);
            if !loop_active.get() {
                return;
            }
            on_frame(ts);
            // on_frame may have ended the loop.
            if !loop_active.get() {
                return;
            }
            if let Some(cb) = loop_callback.borrow().as_ref() {
                match loop_window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => loop_pending.set(Some(id)),
                    Err(err) => error!("could not schedule animation frame: {err:?}"),
                }
            }
        }) as Box<dyn FnMut(f64)>);

        let first = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        pending.set(Some(first));
        *callback.borrow_mut() = Some(closure);
        Ok(Self {
            window,
            active,
            pending,
            callback,
        })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.active.set(false);
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Breaks the closure -> cell -> closure cycle.
        if let Ok(mut slot) = self.callback.try_borrow_mut() {
            slot.take();
        }
    }
}

/// Everything that runs while the mini-game is on screen: the heart spawner,
/// the one-second countdown and the per-frame fall animation.
pub struct PlayingScope {
    _spawner: Interval,
    _countdown: Interval,
    _frames: FrameLoop,
}

impl PlayingScope {
    pub fn start(
        spawn_every_ms: i32,
        countdown_every_ms: i32,
        on_spawn: impl FnMut() + 'static,
        on_second: impl FnMut() + 'static,
        on_frame: impl FnMut(f64) + 'static,
    ) -> Result<Self> {
        Ok(Self {
            _spawner: Interval::new(spawn_every_ms, on_spawn)?,
            _countdown: Interval::new(countdown_every_ms, on_second)?,
            _frames: FrameLoop::start(on_frame)?,
        })
    }
}
