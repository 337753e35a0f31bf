use crate::constants::*;
use crate::dom;
use crate::render;
use relief_core::{Controls, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'static>>,
}

impl FrameContext {
    /// Read the widgets, compose matrices and draw. Runs once per animation frame.
    pub fn frame(&mut self) {
        let controls = read_controls(&self.document);
        let Some(g) = self.gpu.as_mut() else {
            return;
        };
        g.resize_if_needed(self.canvas.width(), self.canvas.height());

        let out = {
            let mut scene = self.scene.borrow_mut();
            g.sync_mesh(scene.mesh(), scene.revision());
            scene.frame(&controls, g.aspect())
        };

        match g.render(&out) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

fn read_controls(document: &web::Document) -> Controls {
    let rotation = dom::widget_value(document, ROTATION_SLIDER_ID);
    let height = dom::widget_value(document, HEIGHT_SLIDER_ID);
    let projection = dom::widget_value(document, PROJECTION_SELECT_ID);
    Controls::from_widgets(
        rotation.as_deref(),
        height.as_deref(),
        projection.as_deref(),
        dom::checkbox_checked(document, WIREFRAME_CHECKBOX_ID),
    )
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
