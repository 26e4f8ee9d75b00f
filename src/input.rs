use globe_core::PointerSample;
use web_sys as web;

/// Pointer position in canvas backing pixels, plus the client position for
/// the tooltip.
#[inline]
pub fn pointer_sample(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> PointerSample {
    let rect = canvas.get_bounding_client_rect();
    let client_x = ev.client_x() as f64;
    let client_y = ev.client_y() as f64;
    // A collapsed canvas reports an empty viewport, which never picks
    let (width, height) = if rect.width() > 0.0 && rect.height() > 0.0 {
        (canvas.width() as f64, canvas.height() as f64)
    } else {
        (0.0, 0.0)
    };
    let x = (client_x - rect.left()) / rect.width().max(1.0) * width;
    let y = (client_y - rect.top()) / rect.height().max(1.0) * height;
    PointerSample {
        x,
        y,
        width,
        height,
        client_x,
        client_y,
    }
}
