#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod fade;
mod nav;
mod parallax;
mod reveal;
mod ripple;
mod tilt;
mod trail;

/// Everything the effects layer holds onto. Dropping it detaches every
/// listener, disconnects the reveal observer and stops the trail loop.
#[derive(Default)]
struct Effects {
    listeners: Vec<dom::Listener>,
    reveal: Option<reveal::RevealWatcher>,
    trail: Option<trail::TrailAnimator>,
}

thread_local! {
    static EFFECTS: RefCell<Option<Effects>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

/// Detach the effects layer: remove all listeners and trail dots, stop the
/// frame loop. Ripples already in flight still remove themselves.
#[wasm_bindgen]
pub fn teardown() {
    EFFECTS.with(|slot| slot.borrow_mut().take());
    log::info!("fx-web effects detached");
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mut effects = Effects::default();
    effects.reveal = reveal::watch(&document);
    parallax::wire(&window, &document, &mut effects.listeners);
    tilt::wire(&document, &mut effects.listeners);
    ripple::wire(&document, &mut effects.listeners);
    nav::wire_smooth_scroll(&window, &document, &mut effects.listeners);
    nav::wire_active_section(&window, &document, &mut effects.listeners);
    fade::wire(&window, &mut effects.listeners);
    effects.trail = trail::TrailAnimator::spawn(&window, &document);

    log::info!(
        "effects wired: {} listeners, reveal={}, trail={}",
        effects.listeners.len(),
        effects.reveal.is_some(),
        effects.trail.is_some()
    );
    EFFECTS.with(|slot| *slot.borrow_mut() = Some(effects));
    Ok(())
}
