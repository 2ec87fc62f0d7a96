use crate::{dom, input, tooltip};
use globe_core::pointer::{DragCell, PointerCell};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handles the pointer listeners write into. The frame reads the cells once
/// per tick.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub pointer: PointerCell,
    pub drag: DragCell,
    pub tooltip: Option<web::HtmlElement>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_pointerout(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let cx = ev.client_x() as f32;
        let cy = ev.client_y() as f32;
        w.pointer
            .set(input::pointer_from_client(cx, cy, dom::canvas_rect(&w.canvas)));
        w.drag.push(ev.movement_x() as f32, ev.movement_y() as f32);
        if let Some(el) = &w.tooltip {
            tooltip::place(el, cx, cy);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.drag.begin();
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        log::debug!("[pointer] drag begin id={}", ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    for event in ["pointerup", "pointercancel"] {
        let w = w.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if w.drag.is_active() {
                w.drag.end();
                _ = w.canvas.release_pointer_capture(ev.pointer_id());
                log::debug!("[pointer] drag end");
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

fn wire_pointerout(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // no related target: the pointer left the window entirely
        if ev.related_target().is_none() {
            w.pointer.clear();
            log::debug!("[pointer] left window");
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerout", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
