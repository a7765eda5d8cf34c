//! Per-frame render driver.
//!
//! Each frame schedules the next one through `requestAnimationFrame`, so the
//! browser paces rendering and input handlers always run between frames,
//! never during one.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::engine::Engine;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Handle to a running frame loop. The loop stops at the next frame after
/// [`FrameLoop::stop`].
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn stop(&self) {
        self.running.set(false);
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

/// Start rendering `engine` once per display frame.
///
/// # Errors
///
/// Returns `Err` if there is no `window` or the first frame can't be scheduled.
pub fn start(engine: Rc<RefCell<Engine>>) -> Result<FrameLoop, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let running = Rc::new(Cell::new(true));

    // The callback owns a handle to itself so it can reschedule; dropping it
    // out of the holder breaks the cycle and ends the loop.
    let holder: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let running_for_cb = Rc::clone(&running);
    let window_for_cb = window.clone();

    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        if !running_for_cb.get() {
            holder_for_cb.borrow_mut().take();
            return;
        }

        // An input handler holding the engine skips this frame; the next one catches up.
        if let Ok(mut engine) = engine.try_borrow_mut() {
            if let Err(err) = engine.render() {
                tracing::warn!(?err, "frame render failed");
            }
        }

        let scheduled = holder_for_cb
            .borrow()
            .as_ref()
            .map(|next| window_for_cb.request_animation_frame(next.as_ref().unchecked_ref()));
        if !matches!(scheduled, Some(Ok(_))) {
            tracing::warn!("could not schedule next frame; render loop stopped");
            running_for_cb.set(false);
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    let first = window.request_animation_frame(cb.as_ref().unchecked_ref());
    *holder.borrow_mut() = Some(cb);
    if let Err(err) = first {
        running.set(false);
        holder.borrow_mut().take();
        return Err(err);
    }
    tracing::debug!("render loop started");
    Ok(FrameLoop { running })
}
