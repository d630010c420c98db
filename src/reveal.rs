use crate::constants::REVEAL_THRESHOLD;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// One-shot reveal watcher over `[data-reveal]` elements: the first time an
/// element clears the visibility threshold it gains `is-visible` and is
/// dropped from observation for good. Disconnects the observer on drop.
pub struct RevealWatcher {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

pub fn watch(document: &web::Document) -> Option<RevealWatcher> {
    let targets = dom::query_all(document, "[data-reveal]");
    if targets.is_empty() {
        return None;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    _ = target.class_list().add_1("is-visible");
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(_, _)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .ok()?;
    for el in &targets {
        observer.observe(el);
    }

    Some(RevealWatcher {
        observer,
        _callback: callback,
    })
}

impl Drop for RevealWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
