use crate::constants::PARALLAX_DEFAULT_SPEED;
use crate::core::geometry;
use crate::dom::{self, Listener};
use std::rc::Rc;
use web_sys as web;

/// Wire scroll-proportional translation for `[data-parallax]` elements.
///
/// The node set is captured once; `data-speed` is re-read on every
/// application so attribute edits take effect live. Applied eagerly at wiring
/// time, then on every scroll and resize. No elements, no listeners.
pub fn wire(window: &web::Window, document: &web::Document, listeners: &mut Vec<Listener>) {
    let nodes = Rc::new(dom::query_all(document, "[data-parallax]"));
    if nodes.is_empty() {
        return;
    }
    apply(&nodes, scroll_y(window));

    let win = window.clone();
    let nodes_scroll = nodes.clone();
    listeners.push(Listener::new_passive(window, "scroll", move |_| {
        apply(&nodes_scroll, scroll_y(&win));
    }));

    let win = window.clone();
    let nodes_resize = nodes;
    listeners.push(Listener::new(window, "resize", move |_| {
        apply(&nodes_resize, scroll_y(&win));
    }));
}

#[inline]
fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

fn apply(nodes: &[web::HtmlElement], scroll_y: f64) {
    for node in nodes {
        let speed = geometry::parallax_speed(
            node.get_attribute("data-speed").as_deref(),
            PARALLAX_DEFAULT_SPEED,
        );
        let offset = geometry::parallax_offset(scroll_y, speed);
        _ = node
            .style()
            .set_property("transform", &format!("translate3d(0, {offset}px, 0)"));
    }
}
