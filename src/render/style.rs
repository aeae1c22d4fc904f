use serde::{Deserialize, Serialize};

/// Colors and sizes used by the renderers. Sizes are in output pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub tile_size: u32,
    pub edge_width: u32,
    pub vertex_radius: u32,
    pub ray_width: u32,
    pub background: [u8; 3],
    pub wall_color: [u8; 3],
    pub edge_color: [u8; 3],
    pub vertex_color: [u8; 3],
    pub rays_background: [u8; 3],
    pub rays_wall_color: [u8; 3],
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            tile_size: 16,
            edge_width: 2,
            vertex_radius: 2,
            ray_width: 1,
            background: [255, 255, 255],
            wall_color: [0, 0, 0],
            edge_color: [255, 0, 0],
            vertex_color: [0, 0, 255],
            rays_background: [0, 0, 0],
            rays_wall_color: [255, 0, 0],
        }
    }
}

/// Stable, well-separated color for the `index`-th observer.
pub fn observer_color(index: usize) -> [u8; 3] {
    // Golden-ratio hue stepping keeps neighbors apart for any observer count.
    let hue = (index as f32 * 0.618_034).fract() * 6.0;
    let (s, v) = (0.7f32, 0.95f32);
    let c = v * s;
    let x = c * (1.0 - (hue % 2.0 - 1.0).abs());
    let m = v - c;
    let (r, g, b) = match hue as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    [to_u8(r), to_u8(g), to_u8(b)]
}
