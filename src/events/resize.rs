use crate::dom;
use crate::frame::SharedContext;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store and the camera aspect in step with the window.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, context: SharedContext) {
    sync(canvas, &context);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        sync(&canvas_resize, &context);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn sync(canvas: &web::HtmlCanvasElement, context: &SharedContext) {
    dom::sync_canvas_backing_size(canvas);
    context
        .borrow_mut()
        .resize(canvas.width() as f64, canvas.height() as f64);
}
