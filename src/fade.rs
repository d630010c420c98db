use crate::constants::{FADE_DELAY_MS, FADE_DURATION_SEC};
use crate::dom::{self, Listener};
use web_sys as web;

/// Fade the page in on the window `load` event: opacity drops to 0, then
/// after a short delay a transition is enabled and opacity returns to 1.
/// Single-shot; the load event does not refire.
pub fn wire(window: &web::Window, listeners: &mut Vec<Listener>) {
    let win = window.clone();
    listeners.push(Listener::new(window, "load", move |_| {
        let body = match win.document().and_then(|d| d.body()) {
            Some(b) => b,
            None => return,
        };
        _ = body.style().set_property("opacity", "0");

        let body_in = body.clone();
        _ = dom::set_timeout(&win, FADE_DELAY_MS, move || {
            let style = body_in.style();
            _ = style.set_property("transition", &format!("opacity {FADE_DURATION_SEC}s ease"));
            _ = style.set_property("opacity", "1");
        });
    }));
}
