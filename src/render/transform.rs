//! Grid-to-canvas mapping.
//!
//! Cell `(x, y)` covers the pixel square `[x*tile, (x+1)*tile)`; cell-center
//! coordinates (the space of observers and segment endpoints) map to
//! `p * tile + tile / 2`. The map is kept as a homogeneous 3x3 matrix.
use nalgebra::{Matrix3, Vector3};

const EPS: f32 = 1e-9;

pub fn grid_to_canvas(tile_size: u32) -> Matrix3<f32> {
    let s = tile_size as f32;
    let half = s * 0.5;
    Matrix3::new(s, 0.0, half, 0.0, s, half, 0.0, 0.0, 1.0)
}

pub fn apply_transform(m: &Matrix3<f32>, p: [f32; 2]) -> Option<[f32; 2]> {
    let v = m * Vector3::new(p[0], p[1], 1.0);
    let w = v[2];
    if !w.is_finite() || w.abs() <= EPS || !v[0].is_finite() || !v[1].is_finite() {
        return None;
    }
    Some([v[0] / w, v[1] / w])
}
