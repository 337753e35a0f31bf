use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

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

/// Current value of an `<input>` or `<select>`; `None` when the element is missing.
pub fn widget_value(document: &web::Document, id: &str) -> Option<String> {
    let el = document.get_element_by_id(id)?;
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<web::HtmlSelectElement>().map(|s| s.value())
}

pub fn set_widget_value(document: &web::Document, id: &str, value: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
            select.set_value(value);
        }
    }
}

pub fn checkbox_checked(document: &web::Document, id: &str) -> Option<bool> {
    document
        .get_element_by_id(id)?
        .dyn_ref::<web::HtmlInputElement>()
        .map(|input| input.checked())
}

pub fn set_checkbox_checked(document: &web::Document, id: &str, checked: bool) {
    if let Some(input) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    {
        input.set_checked(checked);
    }
}

pub fn alert(message: &str) {
    if let Some(w) = web::window() {
        _ = w.alert_with_message(message);
    }
}
