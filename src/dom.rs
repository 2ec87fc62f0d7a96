use crate::constants::MAX_BACKING_DIM;
use crate::input::{self, CanvasRect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) = input::backing_size(rect.width(), rect.height(), dpr, MAX_BACKING_DIM);
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
}

#[inline]
pub fn canvas_rect(canvas: &web::HtmlCanvasElement) -> CanvasRect {
    let rect = canvas.get_bounding_client_rect();
    CanvasRect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

pub fn window_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    (dim(w.inner_width()), dim(w.inner_height()))
}

/// GET `url` and return the body bytes. Non-2xx statuses are errors.
pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let resp: web::Response = resp.dyn_into().map_err(js_error)?;
    if !resp.ok() {
        anyhow::bail!("GET {url}: HTTP {}", resp.status());
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

fn js_error(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}
