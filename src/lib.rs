#![cfg(target_arch = "wasm32")]
use globe_core::pointer::{DragCell, PointerCell};
use globe_core::{InteractionController, SceneContext};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod shaders;
mod tooltip;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    spawn_local(async move {
        if let Err(e) = mount(constants::CANVAS_ID).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Mount another viewer on the canvas with id `canvas_id`. Each viewer has
/// its own scene, controller and render loop.
#[wasm_bindgen]
pub async fn mount_viewer(canvas_id: String) -> Result<(), JsValue> {
    mount(&canvas_id)
        .await
        .map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

async fn mount(canvas_id: &str) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("no element #{canvas_id}"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#{canvas_id} is not a canvas"))?;

    let config = input::read_config(|name| canvas.get_attribute(name));
    log::info!(
        "[init] #{canvas_id} mode={:?} markers={:?} texture={:?}",
        config.mode,
        config.markers,
        config.texture_url
    );

    let mut rng = StdRng::from_entropy();
    let scene = Rc::new(RefCell::new(SceneContext::build(&config, &[], &mut rng)));
    events::resize::wire_canvas_resize(&canvas, &scene);
    let controller = InteractionController::new(config.mode, config.idle_spin, &scene.borrow());

    let pointer = PointerCell::default();
    let drag = DragCell::default();
    let tooltip = tooltip::TooltipOverlay::find(&document);
    if tooltip.is_none() && config.mode.is_orbit() {
        log::warn!("[init] no #{} element; hover details disabled", constants::TOOLTIP_ID);
    }
    events::pointer::wire_input_handlers(events::pointer::InputWiring {
        canvas: canvas.clone(),
        pointer: pointer.clone(),
        drag: drag.clone(),
        tooltip: tooltip.as_ref().map(|t| t.element()),
    });

    let stars = scene.borrow().stars.clone();
    let gpu = frame::init_gpu(&canvas, &stars).await;

    let pending_texture = Rc::new(RefCell::new(None));
    assets::spawn_loads(&config, scene.clone(), pending_texture.clone());

    let frame_ctx = frame::FrameContext {
        scene,
        controller,
        pointer,
        drag,
        clock: Default::default(),
        canvas,
        tooltip,
        gpu,
        pending_texture,
        time: Default::default(),
    };
    frame::start_loop(Rc::new(RefCell::new(frame_ctx)));
    Ok(())
}
