use crate::constants::{TILT_ANGLE_DIVISOR, TILT_LIFT_PX, TILT_PERSPECTIVE_PX};
use crate::core::geometry;
use crate::dom::{self, Listener};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire pointer-driven 3D tilt on every `.card`.
///
/// Each move publishes the pointer position as `--pointer-x`/`--pointer-y`
/// percentages and applies a perspective rotation plus a fixed lift; leaving
/// the card clears the transform back to flat.
pub fn wire(document: &web::Document, listeners: &mut Vec<Listener>) {
    for card in dom::query_all(document, ".card") {
        let card_move = card.clone();
        listeners.push(Listener::new(&card, "pointermove", move |ev| {
            let ev: web::MouseEvent = ev.unchecked_into();
            let rect = card_move.get_bounding_client_rect();
            let x_pct = geometry::pointer_percent(ev.client_x() as f64 - rect.left(), rect.width());
            let y_pct = geometry::pointer_percent(ev.client_y() as f64 - rect.top(), rect.height());

            let style = card_move.style();
            _ = style.set_property("--pointer-x", &format!("{x_pct}%"));
            _ = style.set_property("--pointer-y", &format!("{y_pct}%"));

            let (rot_x, rot_y) = geometry::tilt_angles(x_pct, y_pct, TILT_ANGLE_DIVISOR);
            _ = style.set_property(
                "transform",
                &format!(
                    "perspective({TILT_PERSPECTIVE_PX}px) rotateX({rot_x}deg) rotateY({rot_y}deg) translateY(-{TILT_LIFT_PX}px)"
                ),
            );
        }));

        let card_leave = card.clone();
        listeners.push(Listener::new(&card, "pointerleave", move |_| {
            _ = card_leave.style().remove_property("transform");
        }));
    }
}
