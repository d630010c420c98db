use crate::constants::{TRAIL_DOT_COUNT, TRAIL_FOLLOW, TRAIL_MIN_VIEWPORT_PX};
use crate::core::chain::step_chain;
use crate::dom::Listener;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickCell = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct TrailState {
    dots: Vec<web::HtmlElement>,
    chain: Vec<Vec2>,
    render: Vec<Vec2>,
    pointer: Vec2,
    raf_id: Option<i32>,
}

/// Pointer-chasing chain of trail dots.
///
/// Owns the dot elements, the pointer listener and the frame loop; dropping
/// the animator cancels the pending frame and removes the dots from the
/// document.
pub struct TrailAnimator {
    state: Rc<RefCell<TrailState>>,
    tick: TickCell,
    _pointer_listener: Listener,
}

impl TrailAnimator {
    /// Build the dot chain and start the frame loop. Returns `None` on
    /// viewports at or below the breakpoint; the check happens once, here.
    pub fn spawn(window: &web::Window, document: &web::Document) -> Option<Self> {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        if width <= TRAIL_MIN_VIEWPORT_PX {
            log::debug!("viewport {width}px at or below trail breakpoint, skipping trail");
            return None;
        }
        let body = document.body()?;

        let mut dots = Vec::with_capacity(TRAIL_DOT_COUNT);
        for _ in 0..TRAIL_DOT_COUNT {
            let el: web::HtmlElement = document
                .create_element("div")
                .ok()
                .and_then(|el| el.dyn_into().ok())?;
            _ = el.class_list().add_1("trail-dot");
            _ = body.append_child(&el);
            dots.push(el);
        }

        let state = Rc::new(RefCell::new(TrailState {
            dots,
            chain: vec![Vec2::ZERO; TRAIL_DOT_COUNT],
            render: vec![Vec2::ZERO; TRAIL_DOT_COUNT],
            pointer: Vec2::ZERO,
            raf_id: None,
        }));

        let state_move = state.clone();
        let pointer_listener = Listener::new(window, "pointermove", move |ev| {
            let ev: web::MouseEvent = ev.unchecked_into();
            state_move.borrow_mut().pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        });

        let animator = Self {
            state,
            tick: Rc::new(RefCell::new(None)),
            _pointer_listener: pointer_listener,
        };
        animator.start();
        Some(animator)
    }

    fn start(&self) {
        let state = self.state.clone();
        let tick_handle = self.tick.clone();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let mut st = state.borrow_mut();
            let pointer = st.pointer;
            let TrailState {
                dots,
                chain,
                render,
                ..
            } = &mut *st;
            step_chain(chain, render, pointer, TRAIL_FOLLOW);
            for (dot, pos) in dots.iter().zip(render.iter()) {
                let style = dot.style();
                _ = style.set_property("left", &format!("{}px", pos.x));
                _ = style.set_property("top", &format!("{}px", pos.y));
            }
            st.raf_id = request_frame(&tick_handle);
        }) as Box<dyn FnMut()>));
        self.state.borrow_mut().raf_id = request_frame(&self.tick);
    }
}

fn request_frame(tick: &TickCell) -> Option<i32> {
    let window = web::window()?;
    let tick_ref = tick.borrow();
    let closure = tick_ref.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

impl Drop for TrailAnimator {
    fn drop(&mut self) {
        let mut st = self.state.borrow_mut();
        if let (Some(window), Some(id)) = (web::window(), st.raf_id.take()) {
            _ = window.cancel_animation_frame(id);
        }
        for dot in st.dots.drain(..) {
            dot.remove();
        }
        drop(st);
        self.tick.borrow_mut().take();
    }
}
