//! Translation of winit input into camera events and viewer commands.

use relief_core::{CameraEvent, PointerButton};
use winit::event::{MouseButton, MouseScrollDelta};
use winit::keyboard::{Key, NamedKey};

pub const ROTATION_KEY_STEP_DEG: f32 = 5.0;
pub const HEIGHT_KEY_STEP: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    RotateBy(f32),
    HeightBy(f32),
    ToggleWireframe,
    ToggleProjection,
    ZoomIn,
    ZoomOut,
    Exit,
}

pub fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        MouseButton::Middle => Some(PointerButton::Auxiliary),
        _ => None,
    }
}

/// winit reports scrolling away from the user as positive; the camera expects
/// DOM sign convention where that direction is negative.
pub fn wheel_event(delta: MouseScrollDelta) -> CameraEvent {
    let delta_y = match delta {
        MouseScrollDelta::LineDelta(_, y) => -y,
        MouseScrollDelta::PixelDelta(p) => -(p.y as f32),
    };
    CameraEvent::Wheel { delta_y }
}

pub fn command_for_key(key: &Key) -> Option<Command> {
    match key {
        Key::Named(NamedKey::ArrowLeft) => Some(Command::RotateBy(-ROTATION_KEY_STEP_DEG)),
        Key::Named(NamedKey::ArrowRight) => Some(Command::RotateBy(ROTATION_KEY_STEP_DEG)),
        Key::Named(NamedKey::ArrowUp) => Some(Command::HeightBy(HEIGHT_KEY_STEP)),
        Key::Named(NamedKey::ArrowDown) => Some(Command::HeightBy(-HEIGHT_KEY_STEP)),
        Key::Named(NamedKey::Escape) => Some(Command::Exit),
        Key::Character(s) => match s.as_str() {
            "w" | "W" => Some(Command::ToggleWireframe),
            "p" | "P" => Some(Command::ToggleProjection),
            "+" | "=" => Some(Command::ZoomIn),
            "-" | "_" => Some(Command::ZoomOut),
            _ => None,
        },
        _ => None,
    }
}
