//! Widget readings (sliders, selector, checkbox) with fallbacks and clamping.

use crate::camera::ProjectionMode;
use crate::constants::{
    HEIGHT_RAW_DEFAULT, HEIGHT_RAW_MAX, HEIGHT_SCALE_DIVISOR, ROTATION_DEG_LIMIT, ZOOM_MAX,
    ZOOM_MIN,
};
use crate::frame::FrameInputs;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawMode {
    Triangles,
    Lines,
}

/// Snapshot of the UI controls for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Controls {
    pub rotation_deg: f32,
    pub height_raw: f32,
    pub projection: ProjectionMode,
    pub wireframe: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            rotation_deg: 0.0,
            height_raw: HEIGHT_RAW_DEFAULT,
            projection: ProjectionMode::Perspective,
            wireframe: false,
        }
    }
}

impl Controls {
    /// Build from raw widget values; `None` means the widget is missing.
    pub fn from_widgets(
        rotation: Option<&str>,
        height: Option<&str>,
        projection: Option<&str>,
        wireframe: Option<bool>,
    ) -> Self {
        let defaults = Self::default();
        let mut controls = Self {
            rotation_deg: parse_number(rotation).unwrap_or(defaults.rotation_deg),
            height_raw: parse_number(height).unwrap_or(defaults.height_raw),
            projection: projection
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.projection),
            wireframe: wireframe.unwrap_or(defaults.wireframe),
        };
        controls.clamp();
        controls
    }

    /// Pull every field back into its documented range; non-finite values reset.
    pub fn clamp(&mut self) {
        let defaults = Self::default();
        self.rotation_deg = if self.rotation_deg.is_finite() {
            self.rotation_deg
                .clamp(-ROTATION_DEG_LIMIT, ROTATION_DEG_LIMIT)
        } else {
            defaults.rotation_deg
        };
        self.height_raw = if self.height_raw.is_finite() {
            self.height_raw.clamp(0.0, HEIGHT_RAW_MAX)
        } else {
            defaults.height_raw
        };
    }

    #[inline]
    pub fn rotation_rad(&self) -> f32 {
        self.rotation_deg.to_radians()
    }

    #[inline]
    pub fn height_scale(&self) -> f32 {
        self.height_raw / HEIGHT_SCALE_DIVISOR
    }

    #[inline]
    pub fn draw_mode(&self) -> DrawMode {
        if self.wireframe {
            DrawMode::Lines
        } else {
            DrawMode::Triangles
        }
    }

    pub fn frame_inputs(&self, aspect: f32) -> FrameInputs {
        FrameInputs {
            rotation_rad: self.rotation_rad(),
            height_scale: self.height_scale(),
            aspect,
        }
    }
}

/// Zoom slider reading, clamped to the zoom range. `None` if missing or unparsable.
pub fn parse_zoom(raw: Option<&str>) -> Option<f32> {
    parse_number(raw).map(|v| v.clamp(ZOOM_MIN, ZOOM_MAX))
}

fn parse_number(raw: Option<&str>) -> Option<f32> {
    raw.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite())
}
