//! Owned viewer context: current mesh, camera state and the per-frame entry point.

use instant::Instant;

use crate::camera::{CameraEvent, CameraState};
use crate::controls::{Controls, DrawMode};
use crate::error::Result;
use crate::frame::{self, FrameMatrices};
use crate::heightmap::{HeightField, RasterImage};
use crate::mesh::MeshBuffers;

/// What the renderer should issue this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawCall {
    pub mode: DrawMode,
    pub vertex_count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub matrices: FrameMatrices,
    /// `None` until a mesh has been loaded.
    pub draw: Option<DrawCall>,
}

#[derive(Debug, Default)]
pub struct Scene {
    camera: CameraState,
    mesh: Option<MeshBuffers>,
    revision: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    #[inline]
    pub fn mesh(&self) -> Option<&MeshBuffers> {
        self.mesh.as_ref()
    }

    /// Bumped once per successful mesh replacement; renderers re-upload when it changes.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn handle(&mut self, event: CameraEvent) {
        self.camera.apply(event);
    }

    /// Replace the mesh from a decoded image. On error the current mesh stays as it was.
    pub fn load_image(&mut self, image: &RasterImage<'_>) -> Result<&MeshBuffers> {
        let field = HeightField::from_image(image).inspect_err(|e| {
            log::warn!("[mesh] rejected image: {}", e);
        })?;
        log::info!("loaded image: {} x {}", field.width(), field.height());
        self.load_height_field(field)
    }

    pub fn load_height_field(&mut self, field: HeightField) -> Result<&MeshBuffers> {
        let started = Instant::now();
        let buffers = MeshBuffers::from_height_field(&field).inspect_err(|e| {
            log::warn!("[mesh] rebuild failed, keeping previous mesh: {}", e);
        })?;
        log::info!(
            "[mesh] {} triangles, {} line vertices in {:.1} ms",
            buffers.triangles.triangle_count(),
            buffers.wire.vertex_count(),
            started.elapsed().as_secs_f64() * 1000.0
        );
        self.revision += 1;
        Ok(self.mesh.insert(buffers))
    }

    /// Compose this frame's matrices and pick the draw call. Calling it twice
    /// with the same inputs yields the same output.
    pub fn frame(&mut self, controls: &Controls, aspect: f32) -> FrameOutput {
        self.camera
            .apply(CameraEvent::SetProjection(controls.projection));
        let matrices = frame::compose(&self.camera, &controls.frame_inputs(aspect));
        let mode = controls.draw_mode();
        let draw = self.mesh.as_ref().map(|m| DrawCall {
            mode,
            vertex_count: match mode {
                DrawMode::Triangles => m.triangles.vertex_count(),
                DrawMode::Lines => m.wire.vertex_count(),
            },
        });
        FrameOutput { matrices, draw }
    }
}
