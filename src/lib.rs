#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, TOOLTIP_ID};
use crate::frame::SharedContext;
use globe_core::{
    CoordinateTable, GlobeConfig, GlobeContext, MarkerSet, NamedCoordinate, TreatyRecord,
};
use instant::Instant;
use serde::Deserialize;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod mesh;
mod render;

thread_local! {
    static CONTEXT: RefCell<Option<SharedContext>> = const { RefCell::new(None) };
}

/// The page-wide globe session, created on first use so data can arrive
/// before the renderer is ready.
fn shared_context() -> globe_core::Result<SharedContext> {
    CONTEXT.with(|slot| {
        let mut slot = slot.borrow_mut();
        if let Some(ctx) = slot.as_ref() {
            return Ok(ctx.clone());
        }
        let ctx = Rc::new(RefCell::new(GlobeContext::new(GlobeConfig::default())?));
        *slot = Some(ctx.clone());
        Ok(ctx)
    })
}

#[derive(Deserialize)]
struct TreatyPayload {
    #[serde(default)]
    treaties: Vec<TreatyRecord>,
    #[serde(default)]
    coordinates: Vec<NamedCoordinate>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("treaty-globe starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Replace the markers on the globe.
///
/// Expects `{ treaties: [...], coordinates: [{ name, latitude, longitude }] }`
/// and returns how many treaties were placed.
#[wasm_bindgen(js_name = loadTreaties)]
pub fn load_treaties(data: JsValue) -> Result<u32, JsValue> {
    let payload: TreatyPayload = serde_wasm_bindgen::from_value(data)
        .map_err(|e| JsValue::from_str(&format!("invalid treaty data: {e}")))?;
    let table: CoordinateTable = payload.coordinates.into_iter().collect();
    let context = shared_context().map_err(|e| JsValue::from_str(&e.to_string()))?;

    let mut ctx = context.borrow_mut();
    let (markers, report) = MarkerSet::build(payload.treaties, &table, ctx.config());
    log::info!(
        "[treaties] placed={} unresolved={} invalid={}",
        report.placed,
        report.unresolved,
        report.invalid
    );
    ctx.replace_markers(markers);
    Ok(report.placed as u32)
}

#[wasm_bindgen(js_name = markerCount)]
pub fn marker_count() -> u32 {
    CONTEXT.with(|slot| {
        slot.borrow()
            .as_ref()
            .map_or(0, |ctx| ctx.borrow().markers().len() as u32)
    })
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let tooltip: web::HtmlElement = document
        .get_element_by_id(TOOLTIP_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", TOOLTIP_ID))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::hide_tooltip(&tooltip);

    let context = shared_context()?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    events::wire_canvas_resize(&canvas, context.clone());

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        document: document.clone(),
        tooltip: tooltip.clone(),
        context: context.clone(),
    });

    // Without WebGPU the globe is not drawn, but hover and tooltips still work
    let config = context.borrow().config().clone();
    let gpu = frame::init_gpu(&canvas, &config).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        context,
        canvas,
        document,
        tooltip,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
