//! Geometry and per-frame math for the triangle.

use std::mem;
use std::time::Duration;

use bytemuck::{Pod, Zeroable};
use trigon_core::dpi::PhysicalSize;

/// One vertex as laid out in the vertex buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

pub const VERTICES: [Vertex; 3] = [
    Vertex { position: [-0.5, -0.5, 0.0], color: [1.0, 1.0, 0.0] },
    Vertex { position: [0.5, -0.5, 0.0], color: [1.0, 0.0, 0.0] },
    Vertex { position: [0.0, 0.5, 0.0], color: [0.0, 1.0, 0.0] },
];

/// Bytes between consecutive vertices.
pub const STRIDE: i32 = mem::size_of::<Vertex>() as i32;

/// Byte offset of the colour inside a vertex.
pub const COLOR_OFFSET: i32 = mem::size_of::<[f32; 3]>() as i32;

/// Alpha of the triangle `elapsed` into the animation.
///
/// Starts opaque, is fully transparent a quarter `period` in and opaque again after half a
/// `period`. A zero `period` keeps the triangle opaque.
pub fn fade(elapsed: Duration, period: Duration) -> f32 {
    if period.is_zero() {
        return 1.0;
    }
    let phase = elapsed.as_secs_f64() / period.as_secs_f64();
    let fade = (phase * 2.0 * std::f64::consts::PI).cos() as f32;
    fade * fade
}

/// Width over height, `1.0` for a degenerate size.
pub fn aspect_ratio(size: PhysicalSize<u32>) -> f32 {
    if size.height == 0 {
        return 1.0;
    }
    size.width as f32 / size.height as f32
}

/// Column-major orthographic projection, as `glOrtho` builds it.
pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> [f32; 16] {
    let mut m = [0.0; 16];
    m[0] = 2.0 / (right - left);
    m[5] = 2.0 / (top - bottom);
    m[10] = -2.0 / (far - near);
    m[12] = -(right + left) / (right - left);
    m[13] = -(top + bottom) / (top - bottom);
    m[14] = -(far + near) / (far - near);
    m[15] = 1.0;
    m
}

/// Projection that keeps the triangle undistorted at the given aspect ratio.
pub fn projection(ratio: f32) -> [f32; 16] {
    ortho(-ratio, ratio, -1.0, 1.0, -1.0, 1.0)
}
