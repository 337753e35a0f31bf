//! Triangle and line position buffers generated from a height field.

use crate::error::{ReliefError, Result};
use crate::heightmap::HeightField;

const FLOATS_PER_VERTEX: usize = 3;
const FLOATS_PER_TRIANGLE: usize = 9;
const FLOATS_PER_CELL: usize = 18;

/// Flat triangle-list positions, 9 floats per triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleMesh {
    positions: Vec<f32>,
}

impl TriangleMesh {
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        (self.positions.len() / FLOATS_PER_VERTEX) as u32
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / FLOATS_PER_TRIANGLE
    }
}

/// Flat line-list positions, 6 floats per segment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WireMesh {
    positions: Vec<f32>,
}

impl WireMesh {
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        (self.positions.len() / FLOATS_PER_VERTEX) as u32
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.positions.len() / (2 * FLOATS_PER_VERTEX)
    }
}

/// Map grid index `i` of `n` samples onto [-1, 1].
#[inline]
fn to_unit_range(i: u32, n: u32) -> f32 {
    (i as f32 / (n - 1) as f32) * 2.0 - 1.0
}

/// Two triangles per grid cell, always split along the (x1,z0)-(x0,z1) diagonal.
///
/// Heights are emitted unscaled; height scale belongs to the model transform.
pub fn build_triangle_mesh(field: &HeightField) -> Result<TriangleMesh> {
    let (w, h) = (field.width(), field.height());
    if w < 2 || h < 2 {
        return Err(ReliefError::GridTooSmall {
            width: w,
            height: h,
        });
    }

    let cells = (w - 1) as usize * (h - 1) as usize;
    let mut positions = Vec::with_capacity(cells * FLOATS_PER_CELL);
    for y in 0..h - 1 {
        let z0 = to_unit_range(y, h);
        let z1 = to_unit_range(y + 1, h);
        for x in 0..w - 1 {
            let x0 = to_unit_range(x, w);
            let x1 = to_unit_range(x + 1, w);

            let y00 = field.get(x, y);
            let y10 = field.get(x + 1, y);
            let y01 = field.get(x, y + 1);
            let y11 = field.get(x + 1, y + 1);

            positions.extend_from_slice(&[x0, y00, z0, x1, y10, z0, x0, y01, z1]);
            positions.extend_from_slice(&[x1, y10, z0, x1, y11, z1, x0, y01, z1]);
        }
    }
    Ok(TriangleMesh { positions })
}

/// Three segments per triangle: (v0,v1), (v1,v2), (v2,v0). Shared edges are kept twice.
pub fn build_wire_mesh(mesh: &TriangleMesh) -> WireMesh {
    let mut positions = Vec::with_capacity(mesh.triangle_count() * FLOATS_PER_CELL);
    for tri in mesh.positions().chunks_exact(FLOATS_PER_TRIANGLE) {
        let (v0, v1, v2) = (&tri[0..3], &tri[3..6], &tri[6..9]);
        for (a, b) in [(v0, v1), (v1, v2), (v2, v0)] {
            positions.extend_from_slice(a);
            positions.extend_from_slice(b);
        }
    }
    WireMesh { positions }
}

/// Triangle and wireframe buffers for one height field, always built as a pair.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshBuffers {
    pub triangles: TriangleMesh,
    pub wire: WireMesh,
}

impl MeshBuffers {
    pub fn from_height_field(field: &HeightField) -> Result<Self> {
        let triangles = build_triangle_mesh(field)?;
        let wire = build_wire_mesh(&triangles);
        Ok(Self { triangles, wire })
    }
}
