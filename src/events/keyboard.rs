use crate::constants::{
    HEIGHT_SLIDER_ID, PROJECTION_SELECT_ID, ROTATION_SLIDER_ID, WIREFRAME_CHECKBOX_ID,
};
use crate::dom;
use crate::input::{self, KeyAction};
use relief_core::{HEIGHT_RAW_DEFAULT, HEIGHT_RAW_MAX, ROTATION_DEG_LIMIT};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Apply a shortcut by editing the widgets; the frame loop reads them back.
pub fn handle_key_action(document: &web::Document, action: KeyAction) {
    match action {
        KeyAction::ToggleWireframe => {
            let on = dom::checkbox_checked(document, WIREFRAME_CHECKBOX_ID).unwrap_or(false);
            dom::set_checkbox_checked(document, WIREFRAME_CHECKBOX_ID, !on);
        }
        KeyAction::ToggleProjection => {
            let current = dom::widget_value(document, PROJECTION_SELECT_ID);
            let next = input::toggled_projection(current.as_deref());
            dom::set_widget_value(document, PROJECTION_SELECT_ID, next.as_str());
            log::info!("[keys] projection -> {}", next);
        }
        KeyAction::RotateBy(step) => {
            let current = dom::widget_value(document, ROTATION_SLIDER_ID);
            let v = input::stepped_value(current.as_deref(), step, 0.0)
                .clamp(-ROTATION_DEG_LIMIT, ROTATION_DEG_LIMIT);
            dom::set_widget_value(document, ROTATION_SLIDER_ID, &format!("{:.0}", v));
        }
        KeyAction::HeightBy(step) => {
            let current = dom::widget_value(document, HEIGHT_SLIDER_ID);
            let v = input::stepped_value(current.as_deref(), step, HEIGHT_RAW_DEFAULT)
                .clamp(0.0, HEIGHT_RAW_MAX);
            dom::set_widget_value(document, HEIGHT_SLIDER_ID, &format!("{:.0}", v));
        }
    }
}

pub fn wire_global_keydown(document: web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        // Let text/number inputs keep their own arrow-key behaviour
        let in_widget = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
            .is_some();
        if in_widget {
            return;
        }
        if let Some(action) = input::action_for_key(&ev.key()) {
            handle_key_action(&document, action);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
