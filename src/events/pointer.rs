use crate::constants::ZOOM_SLIDER_ID;
use crate::dom;
use crate::input;
use relief_core::{CameraEvent, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub scene: Rc<RefCell<Scene>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_mousedown(&w);
    wire_mousemove(&w);
    wire_mouseup(&w);
    wire_mouseleave(&w);
    wire_contextmenu(&w);
    wire_wheel(&w);
}

fn wire_mousedown(w: &InputWiring) {
    let scene = w.scene.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        scene.borrow_mut().handle(CameraEvent::PointerDown {
            button: input::pointer_button(ev.button()),
            x: ev.client_x() as f32,
            y: ev.client_y() as f32,
        });
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mousemove(w: &InputWiring) {
    let scene = w.scene.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let mut scene = scene.borrow_mut();
        if !scene.camera().dragging {
            return;
        }
        scene.handle(CameraEvent::PointerMove {
            x: ev.client_x() as f32,
            y: ev.client_y() as f32,
            shift: ev.shift_key(),
        });
    }) as Box<dyn FnMut(_)>);
    _ = w
        .document
        .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mouseup(w: &InputWiring) {
    let scene = w.scene.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        scene.borrow_mut().handle(CameraEvent::PointerUp);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .document
        .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mouseleave(w: &InputWiring) {
    let scene = w.scene.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        scene.borrow_mut().handle(CameraEvent::PointerLeave);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .document
        .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Secondary-button drags pan, so the browser menu must stay out of the way.
fn wire_contextmenu(w: &InputWiring) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let scene = w.scene.clone();
    let document = w.document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        let zoom = {
            let mut scene = scene.borrow_mut();
            scene.handle(input::wheel_event(ev.delta_y()));
            scene.camera().zoom()
        };
        dom::set_widget_value(&document, ZOOM_SLIDER_ID, &input::zoom_slider_text(zoom));
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = w
        .canvas
        .add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    closure.forget();
}
