use anyhow::Context;
use glam::Vec2;
use std::path::Path;
use winit::{
    event::*,
    event_loop::{EventLoop, EventLoopWindowTarget},
    window::WindowBuilder,
};

use relief_core::{CameraEvent, Controls, RasterImage, Scene};

mod gpu;
mod input;

use gpu::GpuState;
use input::Command;

/// Everything the native viewer owns besides the GPU: the scene plus the
/// control values that the web page keeps in its widgets.
struct Viewer {
    scene: Scene,
    controls: Controls,
    cursor: Vec2,
    shift: bool,
}

fn decode_rgba(path: &Path) -> anyhow::Result<image::RgbaImage> {
    let img = image::open(path).with_context(|| format!("could not decode {}", path.display()))?;
    Ok(img.to_rgba8())
}

impl Viewer {
    fn new() -> Self {
        Self {
            scene: Scene::new(),
            controls: Controls::default(),
            cursor: Vec2::ZERO,
            shift: false,
        }
    }

    fn load_path(&mut self, path: &Path) {
        let rgba = match decode_rgba(path) {
            Ok(rgba) => rgba,
            Err(e) => {
                log::error!("{:#}", e);
                return;
            }
        };
        let raster = RasterImage::rgba(rgba.width(), rgba.height(), rgba.as_raw());
        if let Err(e) = self.scene.load_image(&raster) {
            log::error!("{}: {}", path.display(), e);
        }
    }

    fn apply(&mut self, command: Command, elwt: &EventLoopWindowTarget<()>) {
        match command {
            Command::RotateBy(step) => self.controls.rotation_deg += step,
            Command::HeightBy(step) => self.controls.height_raw += step,
            Command::ToggleWireframe => self.controls.wireframe = !self.controls.wireframe,
            Command::ToggleProjection => {
                self.controls.projection = self.controls.projection.toggled();
                log::info!("[keys] projection -> {}", self.controls.projection);
            }
            Command::ZoomIn => self.scene.handle(CameraEvent::Wheel { delta_y: -1.0 }),
            Command::ZoomOut => self.scene.handle(CameraEvent::Wheel { delta_y: 1.0 }),
            Command::Exit => elwt.exit(),
        }
        self.controls.clamp();
    }

    fn window_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        match event {
            WindowEvent::ModifiersChanged(m) => self.shift = m.state().shift_key(),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                self.scene.handle(CameraEvent::PointerMove {
                    x: self.cursor.x,
                    y: self.cursor.y,
                    shift: self.shift,
                });
            }
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => {
                    if let Some(button) = input::pointer_button(button) {
                        self.scene.handle(CameraEvent::PointerDown {
                            button,
                            x: self.cursor.x,
                            y: self.cursor.y,
                        });
                    }
                }
                ElementState::Released => self.scene.handle(CameraEvent::PointerUp),
            },
            WindowEvent::CursorLeft { .. } => self.scene.handle(CameraEvent::PointerLeave),
            WindowEvent::MouseWheel { delta, .. } => self.scene.handle(input::wheel_event(delta)),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                if let Some(command) = input::command_for_key(&event.logical_key) {
                    self.apply(command, elwt);
                }
            }
            WindowEvent::DroppedFile(path) => self.load_path(&path),
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut viewer = Viewer::new();
    match std::env::args_os().nth(1) {
        Some(path) => viewer.load_path(Path::new(&path)),
        None => log::info!("no image given; drop one onto the window"),
    }

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Relief (native)")
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => state.resize(size),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent { event, .. } => viewer.window_event(event, elwt),
        Event::AboutToWait => {
            state.sync_mesh(viewer.scene.mesh(), viewer.scene.revision());
            let out = viewer.scene.frame(&viewer.controls, state.aspect());
            match state.render(&out) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    state.resize(state.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
