use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom;
use crate::render;
use globe_core::{GlobeConfig, GlobeContext, TreatyRecord};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedContext = Rc<RefCell<GlobeContext<TreatyRecord>>>;

pub struct FrameContext {
    pub context: SharedContext,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub tooltip: web::HtmlElement,
    pub gpu: Option<render::GpuState>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        // Background tabs stall rAF; don't let the globe jump when they resume
        let dt_sec = dt.as_secs_f64().min(MAX_FRAME_DT_SEC);

        // The globe turns under a resting pointer, so hover follows the spin
        let refreshed = {
            let mut ctx = self.context.borrow_mut();
            ctx.advance(dt_sec);
            let previous = ctx.hovered();
            ctx.refresh_hover().map(|tip| (tip, previous != ctx.hovered()))
        };
        if let Some((tooltip, hover_changed)) = refreshed {
            dom::sync_tooltip(&self.document, &self.tooltip, &tooltip, hover_changed);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let ctx = self.context.borrow();
            match g.render(&*ctx) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("surface lost; reconfiguring");
                    g.reconfigure();
                }
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    config: &GlobeConfig,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, config).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
