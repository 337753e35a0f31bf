use crate::constants::{IMAGE_INPUT_ID, LOAD_FAILED_MESSAGE, ZOOM_SLIDER_ID};
use crate::dom;
use crate::loader;
use relief_core::{parse_zoom, CameraEvent, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub fn wire_control_handlers(document: &web::Document, scene: Rc<RefCell<Scene>>) {
    // Start from whatever the page's zoom slider says
    if let Some(zoom) = parse_zoom(dom::widget_value(document, ZOOM_SLIDER_ID).as_deref()) {
        scene.borrow_mut().handle(CameraEvent::SetZoom(zoom));
    }
    wire_zoom_slider(document, scene.clone());
    wire_image_input(document, scene);
}

fn wire_zoom_slider(document: &web::Document, scene: Rc<RefCell<Scene>>) {
    let Some(el) = document.get_element_by_id(ZOOM_SLIDER_ID) else {
        log::info!("[ui] no #{} slider; zoom via wheel only", ZOOM_SLIDER_ID);
        return;
    };
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        if let Some(zoom) = parse_zoom(dom::widget_value(&doc, ZOOM_SLIDER_ID).as_deref()) {
            scene.borrow_mut().handle(CameraEvent::SetZoom(zoom));
        }
    }) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_image_input(document: &web::Document, scene: Rc<RefCell<Scene>>) {
    let Some(input) = document
        .get_element_by_id(IMAGE_INPUT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        log::warn!("[ui] missing #{} file input; no way to load images", IMAGE_INPUT_ID);
        return;
    };
    let input_for_listener = input.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let scene = scene.clone();
        spawn_local(async move {
            match loader::load_file(&file).await {
                Ok(decoded) => {
                    let loaded = scene
                        .borrow_mut()
                        .load_image(&decoded.as_raster())
                        .map(|_| ());
                    if let Err(e) = loaded {
                        log::error!("[loader] {}: {}", file.name(), e);
                        dom::alert(LOAD_FAILED_MESSAGE);
                    }
                }
                Err(e) => {
                    log::error!("[loader] {}: {:?}", file.name(), e);
                    dom::alert(LOAD_FAILED_MESSAGE);
                }
            }
        });
    }) as Box<dyn FnMut(_)>);
    _ = input_for_listener
        .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}
