use relief_core::{CameraEvent, PointerButton, ProjectionMode};

/// DOM `MouseEvent.button` code to pointer button.
#[inline]
pub fn pointer_button(button: i16) -> PointerButton {
    match button {
        0 => PointerButton::Primary,
        2 => PointerButton::Secondary,
        _ => PointerButton::Auxiliary,
    }
}

#[inline]
pub fn wheel_event(delta_y: f64) -> CameraEvent {
    CameraEvent::Wheel {
        delta_y: delta_y as f32,
    }
}

/// Text written back into the zoom slider after a wheel step.
#[inline]
pub fn zoom_slider_text(zoom: f32) -> String {
    format!("{:.0}", zoom)
}

// ---------------- Keyboard shortcuts ----------------

pub const ROTATION_KEY_STEP_DEG: f32 = 5.0;
pub const HEIGHT_KEY_STEP: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    ToggleWireframe,
    ToggleProjection,
    RotateBy(f32),
    HeightBy(f32),
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "w" | "W" => Some(KeyAction::ToggleWireframe),
        "p" | "P" => Some(KeyAction::ToggleProjection),
        "ArrowLeft" => Some(KeyAction::RotateBy(-ROTATION_KEY_STEP_DEG)),
        "ArrowRight" => Some(KeyAction::RotateBy(ROTATION_KEY_STEP_DEG)),
        "ArrowUp" => Some(KeyAction::HeightBy(HEIGHT_KEY_STEP)),
        "ArrowDown" => Some(KeyAction::HeightBy(-HEIGHT_KEY_STEP)),
        _ => None,
    }
}

/// Next value for the projection selector; unknown text counts as perspective.
#[inline]
pub fn toggled_projection(current: Option<&str>) -> ProjectionMode {
    current
        .and_then(|s| s.parse::<ProjectionMode>().ok())
        .unwrap_or_default()
        .toggled()
}

/// Step a numeric slider, falling back to `default` when it holds no number.
#[inline]
pub fn stepped_value(current: Option<&str>, step: f32, default: f32) -> f32 {
    current
        .and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
        + step
}
