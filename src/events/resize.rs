use crate::dom;
use globe_core::SceneContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store and the scene viewport in step with the
/// window. Applies once immediately.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, scene: &Rc<RefCell<SceneContext>>) {
    sync(canvas, scene);
    let canvas_resize = canvas.clone();
    let scene_resize = scene.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        sync(&canvas_resize, &scene_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn sync(canvas: &web::HtmlCanvasElement, scene: &Rc<RefCell<SceneContext>>) {
    dom::sync_canvas_backing_size(canvas);
    let (w, h) = (canvas.width(), canvas.height());
    if scene.borrow_mut().resize(w, h) {
        log::debug!("[resize] viewport {}x{}", w, h);
    }
}
