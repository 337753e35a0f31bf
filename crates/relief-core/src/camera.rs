//! Orbit camera controller driven by pointer and wheel events.
//!
//! Input plumbing stays in the frontends; they translate platform events into
//! [`CameraEvent`] and feed them through [`transition`].

use std::fmt;
use std::str::FromStr;

use glam::{Vec2, Vec3};
use thiserror::Error;

use crate::constants::{
    CAMERA_DIST_FAR, CAMERA_DIST_NEAR, CAMERA_HEIGHT, ORTHO_EYE, ORTHO_ZOOM_OFFSET,
    PAN_SENSITIVITY_PER_UNIT, ROTATE_SENSITIVITY, ZOOM_DEFAULT, ZOOM_MAX, ZOOM_MIN,
    ZOOM_WHEEL_STEP,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectionMode::Perspective => "perspective",
            ProjectionMode::Orthographic => "orthographic",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
        }
    }
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown projection mode '{0}'")]
pub struct UnknownProjection(pub String);

impl FromStr for ProjectionMode {
    type Err = UnknownProjection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "perspective" => Ok(ProjectionMode::Perspective),
            "orthographic" => Ok(ProjectionMode::Orthographic),
            other => Err(UnknownProjection(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraEvent {
    PointerDown { button: PointerButton, x: f32, y: f32 },
    /// `shift` switches secondary-drag panning from the ground plane to the vertical plane.
    PointerMove { x: f32, y: f32, shift: bool },
    PointerUp,
    PointerLeave,
    Wheel { delta_y: f32 },
    SetZoom(f32),
    SetProjection(ProjectionMode),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    pub drag_yaw: f32,
    pub drag_roll: f32,
    pub pan: Vec3,
    zoom: f32,
    pub projection: ProjectionMode,
    pub dragging: bool,
    pub left_button: bool,
    pub last_pointer: Vec2,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            drag_yaw: 0.0,
            drag_roll: 0.0,
            pan: Vec3::ZERO,
            zoom: ZOOM_DEFAULT,
            projection: ProjectionMode::Perspective,
            dragging: false,
            left_button: false,
            last_pointer: Vec2::ZERO,
        }
    }
}

impl CameraState {
    /// Zoom control value, always within `[ZOOM_MIN, ZOOM_MAX]`.
    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Perspective eye distance, lerped from far to near as zoom grows.
    pub fn distance(&self) -> f32 {
        let t = ((self.zoom - ZOOM_MIN) / (ZOOM_MAX - ZOOM_MIN)).clamp(0.0, 1.0);
        CAMERA_DIST_FAR * (1.0 - t) + CAMERA_DIST_NEAR * t
    }

    /// Orthographic magnification. Falls as zoom grows, so the orthographic view
    /// widens while the perspective eye moves closer.
    #[inline]
    pub fn zoom_factor(&self) -> f32 {
        ORTHO_ZOOM_OFFSET + (ZOOM_MAX - self.zoom) / 100.0
    }

    /// Eye position for the active projection. Never equal to the origin.
    pub fn eye(&self) -> Vec3 {
        match self.projection {
            ProjectionMode::Perspective => Vec3::new(0.0, CAMERA_HEIGHT, self.distance()),
            ProjectionMode::Orthographic => Vec3::from(ORTHO_EYE),
        }
    }

    #[inline]
    pub fn apply(&mut self, event: CameraEvent) {
        *self = transition(*self, event);
    }
}

/// Pure state transition for one input event.
pub fn transition(mut state: CameraState, event: CameraEvent) -> CameraState {
    match event {
        CameraEvent::PointerDown { button, x, y } => {
            if !(x.is_finite() && y.is_finite()) {
                return state;
            }
            state.dragging = true;
            state.left_button = button == PointerButton::Primary;
            state.last_pointer = Vec2::new(x, y);
        }
        CameraEvent::PointerMove { x, y, shift } => {
            if !state.dragging || !(x.is_finite() && y.is_finite()) {
                return state;
            }
            let pos = Vec2::new(x, y);
            let delta = pos - state.last_pointer;
            state.last_pointer = pos;

            if state.left_button {
                state.drag_yaw += delta.x * ROTATE_SENSITIVITY;
                state.drag_roll += delta.y * ROTATE_SENSITIVITY;
            } else {
                let k = PAN_SENSITIVITY_PER_UNIT * state.distance();
                state.pan.x += delta.x * k;
                if shift {
                    // screen-down is world-down
                    state.pan.y -= delta.y * k;
                } else {
                    state.pan.z += delta.y * k;
                }
            }
        }
        CameraEvent::PointerUp | CameraEvent::PointerLeave => {
            state.dragging = false;
        }
        CameraEvent::Wheel { delta_y } => {
            if delta_y < 0.0 {
                state.zoom = clamp_zoom(state.zoom + ZOOM_WHEEL_STEP);
            } else if delta_y > 0.0 {
                state.zoom = clamp_zoom(state.zoom - ZOOM_WHEEL_STEP);
            }
        }
        CameraEvent::SetZoom(value) => {
            if value.is_finite() {
                state.zoom = clamp_zoom(value);
            }
        }
        CameraEvent::SetProjection(mode) => {
            if mode != state.projection {
                log::debug!("[camera] projection {} -> {}", state.projection, mode);
            }
            state.projection = mode;
        }
    }
    state
}

#[inline]
fn clamp_zoom(value: f32) -> f32 {
    value.clamp(ZOOM_MIN, ZOOM_MAX)
}
