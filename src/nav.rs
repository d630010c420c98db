use crate::constants::SECTION_LOOKAHEAD_PX;
use crate::core::sections;
use crate::dom::{self, Listener};
use web_sys as web;

/// Intercept clicks on in-page fragment anchors and animate the scroll so the
/// target's top meets the viewport top. Default navigation is always
/// suppressed; a dangling fragment is a silent no-op.
pub fn wire_smooth_scroll(
    window: &web::Window,
    document: &web::Document,
    listeners: &mut Vec<Listener>,
) {
    for link in dom::query_all(document, "a[href^='#']") {
        let win = window.clone();
        let doc = document.clone();
        let anchor = link.clone();
        listeners.push(Listener::new(&link, "click", move |ev| {
            ev.prevent_default();
            let href = match anchor.get_attribute("href") {
                Some(h) => h,
                None => return,
            };
            let id = href.trim_start_matches('#');
            if id.is_empty() {
                return;
            }
            if let Some(target) = doc.get_element_by_id(id) {
                let top = target.get_bounding_client_rect().top() + win.scroll_y().unwrap_or(0.0);
                let opts = web::ScrollToOptions::new();
                opts.set_top(top);
                opts.set_behavior(web::ScrollBehavior::Smooth);
                win.scroll_to_with_scroll_to_options(&opts);
            }
        }));
    }
}

/// Track which `section[id]` the viewport is in and keep the matching nav
/// link highlighted. The section/link pairing is recomputed from scratch on
/// every scroll event; nothing is cached between events.
pub fn wire_active_section(
    window: &web::Window,
    document: &web::Document,
    listeners: &mut Vec<Listener>,
) {
    let win = window.clone();
    let doc = document.clone();
    listeners.push(Listener::new_passive(window, "scroll", move |_| {
        update_active_link(&doc, win.scroll_y().unwrap_or(0.0));
    }));
}

fn update_active_link(document: &web::Document, scroll_y: f64) {
    let sections = dom::query_all(document, "section[id]");
    let tops: Vec<f64> = sections.iter().map(|s| s.offset_top() as f64).collect();
    let wanted = sections::active_index(&tops, scroll_y, SECTION_LOOKAHEAD_PX)
        .map(|i| format!("#{}", sections[i].id()));

    for link in dom::query_all(document, "nav a[href^='#']") {
        let class_list = link.class_list();
        _ = class_list.remove_1("active");
        if let Some(wanted) = &wanted {
            if link.get_attribute("href").as_deref() == Some(wanted.as_str()) {
                _ = class_list.add_1("active");
            }
        }
    }
}
