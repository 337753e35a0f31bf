//! Vector and matrix helpers on top of `glam`.
//!
//! Convention: column-major `Mat4`, right-handed view space, clip depth in
//! [0, 1] as wgpu expects. `a * b` applies `b` to a vertex before `a`.

use glam::{Mat4, Vec3, Vec4};

#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    v.normalize()
}

#[inline]
pub fn subtract(a: Vec3, b: Vec3) -> Vec3 {
    a - b
}

#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// View matrix for an eye looking at `target`. `eye` must differ from `target`.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let forward = normalize(subtract(target, eye));
    let right = normalize(cross(forward, up));
    let true_up = cross(right, forward);
    Mat4::from_cols(
        Vec4::new(right.x, true_up.x, -forward.x, 0.0),
        Vec4::new(right.y, true_up.y, -forward.y, 0.0),
        Vec4::new(right.z, true_up.z, -forward.z, 0.0),
        Vec4::new(-right.dot(eye), -true_up.dot(eye), forward.dot(eye), 1.0),
    )
}

#[inline]
pub fn perspective(fov_y_radians: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh(fov_y_radians, aspect, near, far)
}

#[inline]
pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    Mat4::orthographic_rh(left, right, bottom, top, near, far)
}

#[inline]
pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(x, y, z))
}

#[inline]
pub fn rotate_y(radians: f32) -> Mat4 {
    Mat4::from_rotation_y(radians)
}

#[inline]
pub fn rotate_z(radians: f32) -> Mat4 {
    Mat4::from_rotation_z(radians)
}

#[inline]
pub fn scale(sx: f32, sy: f32, sz: f32) -> Mat4 {
    Mat4::from_scale(Vec3::new(sx, sy, sz))
}

#[inline]
pub fn multiply(a: Mat4, b: Mat4) -> Mat4 {
    a * b
}

/// `[m1, m2, .., mn]` -> `m1 * m2 * .. * mn`; `mn` is applied to the vertex first.
pub fn multiply_all(matrices: &[Mat4]) -> Mat4 {
    matrices
        .iter()
        .fold(Mat4::IDENTITY, |acc, m| multiply(acc, *m))
}
