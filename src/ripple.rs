use crate::constants::RIPPLE_LIFETIME_MS;
use crate::core::geometry;
use crate::dom::{self, Listener};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire click ripples on every `.btn`. Each click spawns an independent
/// `span.ripple` with its own removal timer; concurrent ripples never share
/// state.
pub fn wire(document: &web::Document, listeners: &mut Vec<Listener>) {
    for button in dom::query_all(document, ".btn") {
        let btn = button.clone();
        listeners.push(Listener::new(&button, "click", move |ev| {
            let ev: web::MouseEvent = ev.unchecked_into();
            spawn_ripple(&btn, &ev);
        }));
    }
}

fn spawn_ripple(button: &web::HtmlElement, ev: &web::MouseEvent) {
    let document = match dom::window_document() {
        Some(d) => d,
        None => return,
    };
    let span: web::HtmlElement = match document
        .create_element("span")
        .ok()
        .and_then(|el| el.dyn_into().ok())
    {
        Some(el) => el,
        None => return,
    };
    _ = span.class_list().add_1("ripple");

    let rect = button.get_bounding_client_rect();
    let (size, left, top) = geometry::ripple_rect(
        rect.width(),
        rect.height(),
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    );
    let style = span.style();
    _ = style.set_property("width", &format!("{size}px"));
    _ = style.set_property("height", &format!("{size}px"));
    _ = style.set_property("left", &format!("{left}px"));
    _ = style.set_property("top", &format!("{top}px"));
    _ = button.append_child(&span);

    if let Some(window) = web::window() {
        let doomed = span.clone();
        _ = dom::set_timeout(&window, RIPPLE_LIFETIME_MS, move || doomed.remove());
    }
}
