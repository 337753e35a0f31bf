//! Per-frame matrix composition.

use glam::{Mat4, Vec3};

use crate::camera::{CameraState, ProjectionMode};
use crate::constants::{CLIP_FAR, CLIP_NEAR, ORTHO_BASE_SIZE, PERSPECTIVE_FOV_DEG};
use crate::math;

/// Widget-side values sampled once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInputs {
    pub rotation_rad: f32,
    pub height_scale: f32,
    pub aspect: f32,
}

impl Default for FrameInputs {
    fn default() -> Self {
        Self {
            rotation_rad: 0.0,
            height_scale: 1.0,
            aspect: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameMatrices {
    pub modelview: Mat4,
    pub projection: Mat4,
}

impl FrameMatrices {
    pub fn uniforms(&self) -> FrameUniforms {
        FrameUniforms {
            modelview: self.modelview.to_cols_array_2d(),
            projection: self.projection.to_cols_array_2d(),
        }
    }
}

/// Uniform block layout shared with `TERRAIN_WGSL`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub modelview: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

#[inline]
fn sane_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}

pub fn projection_matrix(camera: &CameraState, aspect: f32) -> Mat4 {
    let aspect = sane_aspect(aspect);
    match camera.projection {
        ProjectionMode::Orthographic => {
            let size = ORTHO_BASE_SIZE / camera.zoom_factor();
            math::orthographic(
                -size * aspect,
                size * aspect,
                -size,
                size,
                CLIP_NEAR,
                CLIP_FAR,
            )
        }
        ProjectionMode::Perspective => math::perspective(
            PERSPECTIVE_FOV_DEG.to_radians(),
            aspect,
            CLIP_NEAR,
            CLIP_FAR,
        ),
    }
}

pub fn view_matrix(camera: &CameraState) -> Mat4 {
    math::look_at(camera.eye(), Vec3::ZERO, Vec3::Y)
}

/// translate * rotateY(widget + drag yaw) * rotateZ(drag roll) * scale(1, h, 1)
pub fn model_matrix(camera: &CameraState, inputs: &FrameInputs) -> Mat4 {
    math::multiply_all(&[
        math::translate(camera.pan.x, camera.pan.y, camera.pan.z),
        math::rotate_y(inputs.rotation_rad + camera.drag_yaw),
        math::rotate_z(camera.drag_roll),
        math::scale(1.0, inputs.height_scale, 1.0),
    ])
}

pub fn compose(camera: &CameraState, inputs: &FrameInputs) -> FrameMatrices {
    let view = view_matrix(camera);
    let model = model_matrix(camera, inputs);
    FrameMatrices {
        modelview: math::multiply(view, model),
        projection: projection_matrix(camera, inputs.aspect),
    }
}
