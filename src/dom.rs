use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up a canvas element by id. Logs and returns an error if the element
/// is missing or is not a canvas, so callers can abort init gracefully.
pub fn canvas_by_id(id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{id} is not a canvas: {e:?}"))
}

/// Acquire the 2D drawing context of a canvas.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get_context(2d) failed: {e:?}"))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?;
    ctx.dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("not a 2d context: {e:?}"))
}
