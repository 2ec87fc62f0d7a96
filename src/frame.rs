use crate::dom;
use crate::render;
use crate::tooltip::TooltipOverlay;
use glam::Vec3;
use globe_core::clock::{FrameClock, FrameTime};
use globe_core::pointer::{DragCell, PointerCell};
use globe_core::texture::TextureImage;
use globe_core::{FrameInput, InteractionController, SceneContext};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<SceneContext>>,
    pub controller: InteractionController,
    pub pointer: PointerCell,
    pub drag: DragCell,
    pub clock: FrameClock,

    pub canvas: web::HtmlCanvasElement,
    pub tooltip: Option<TooltipOverlay>,

    pub gpu: Option<render::GpuState<'a>>,
    /// Decoded globe image waiting for upload; filled by the asset loader.
    pub pending_texture: Rc<RefCell<Option<TextureImage>>>,

    pub time: FrameTime,
}

impl<'a> FrameContext<'a> {
    /// Advance the clock and run the interaction step.
    pub fn update(&mut self) {
        self.time = self.clock.tick();
        log::trace!("[frame] elapsed={:.3}s dt={:.4}s", self.time.elapsed, self.time.dt);

        let input = FrameInput {
            pointer: self.pointer.get(),
            drag_px: self.drag.take(),
            viewport_height: dom::canvas_rect(&self.canvas).height,
        };
        let mut scene = self.scene.borrow_mut();
        let tooltip = self
            .controller
            .update(&mut scene, input, self.time.dt, self.time.elapsed);
        if let (Some(t), Some(overlay)) = (tooltip, &mut self.tooltip) {
            overlay.apply(&t);
        }
    }

    pub fn draw(&mut self) {
        let Some(g) = &mut self.gpu else {
            return;
        };
        if let Some(image) = self.pending_texture.borrow_mut().take() {
            g.set_globe_texture(&image);
        }
        if let Err(e) = g.render(&self.scene.borrow(), self.time.elapsed) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    stars: &[Vec3],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, stars).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive the viewer from `requestAnimationFrame`: update, schedule the next
/// tick, then draw. Runs for the page's lifetime.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let mut ctx = frame_ctx_tick.borrow_mut();
        ctx.update();
        request_frame(&tick_clone);
        ctx.draw();
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
