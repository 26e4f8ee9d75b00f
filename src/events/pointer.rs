use crate::dom;
use crate::frame::SharedContext;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub tooltip: web::HtmlElement,
    pub context: SharedContext,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerleave(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.canvas.is_connected() {
            return;
        }
        let sample = input::pointer_sample(&ev, &w.canvas);

        let (previous, tooltip, current) = {
            let mut ctx = w.context.borrow_mut();
            let previous = ctx.hovered();
            let tooltip = ctx.pointer_moved(sample);
            (previous, tooltip, ctx.hovered())
        };

        dom::sync_tooltip(&w.document, &w.tooltip, &tooltip, previous != current);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerleave(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.context.borrow_mut().clear_hover();
        dom::hide_tooltip(&w.tooltip);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
