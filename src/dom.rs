use globe_core::{Tooltip, TooltipContent};
use wasm_bindgen::JsValue;
use web_sys as web;

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Replace the tooltip's children with the heading and one line per row.
///
/// Treaty text comes from a spreadsheet, so it is only ever set as text.
pub fn fill_tooltip(
    document: &web::Document,
    tooltip: &web::HtmlElement,
    content: &TooltipContent,
) -> Result<(), JsValue> {
    tooltip.set_text_content(None);
    let heading = document.create_element("b")?;
    heading.set_text_content(Some(&content.heading));
    tooltip.append_child(&heading)?;
    for row in &content.rows {
        let line = document.create_element("div")?;
        line.set_text_content(Some(&format!("{}: {}", row.label, row.value)));
        tooltip.append_child(&line)?;
    }
    Ok(())
}

pub fn place_tooltip(tooltip: &web::HtmlElement, x: f64, y: f64) {
    let style = format!(
        "position:fixed;left:{x}px;top:{y}px;visibility:visible;pointer-events:none"
    );
    _ = tooltip.set_attribute("style", &style);
}

pub fn hide_tooltip(tooltip: &web::HtmlElement) {
    _ = tooltip.set_attribute("style", "visibility:hidden");
}

/// Apply a tooltip state to the element.
///
/// Children are only rebuilt when `hover_changed`; otherwise the box just
/// follows the pointer.
pub fn sync_tooltip(
    document: &web::Document,
    element: &web::HtmlElement,
    tooltip: &Tooltip,
    hover_changed: bool,
) {
    match tooltip {
        Tooltip::Visible { x, y, content } => {
            if hover_changed {
                if let Err(e) = fill_tooltip(document, element, content) {
                    log::warn!("[tooltip] fill failed: {:?}", e);
                }
            }
            place_tooltip(element, *x, *y);
        }
        Tooltip::Hidden => hide_tooltip(element),
    }
}
