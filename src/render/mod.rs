//! Raster output for extracted boundaries and visibility fans.
//!
//! Rendering is a consumer of the core data only: walls are painted as
//! tiles, segments as thick lines with marked end points, and rays as thin
//! lines from the observer's tile center to their clipped end.

mod canvas;
mod style;
pub mod transform;

pub use canvas::Canvas;
pub use style::{observer_color, RenderStyle};

use crate::boundary::Segment;
use crate::occupancy::OccupancyGrid;
use crate::visibility::VisibilityFan;
use image::RgbImage;
use transform::{apply_transform, grid_to_canvas};

fn paint_walls(canvas: &mut Canvas, grid: &OccupancyGrid, tile: u32, color: [u8; 3]) {
    let t = tile as i64;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if grid.is_wall(x, y) {
                let (x0, y0) = (x as i64 * t, y as i64 * t);
                canvas.fill_rect(x0, y0, x0 + t, y0 + t, color);
            }
        }
    }
}

fn canvas_for(grid: &OccupancyGrid, style: &RenderStyle, background: [u8; 3]) -> Canvas {
    Canvas::new(
        grid.width() as u32 * style.tile_size,
        grid.height() as u32 * style.tile_size,
        background,
    )
}

/// Walls plus every boundary segment with its two end points.
pub fn render_boundary(grid: &OccupancyGrid, segments: &[Segment], style: &RenderStyle) -> RgbImage {
    let mut canvas = canvas_for(grid, style, style.background);
    paint_walls(&mut canvas, grid, style.tile_size, style.wall_color);

    let m = grid_to_canvas(style.tile_size);
    for seg in segments {
        let (Some(a), Some(b)) = (apply_transform(&m, seg.p0), apply_transform(&m, seg.p1)) else {
            continue;
        };
        canvas.draw_line(a, b, style.edge_width, style.edge_color);
        canvas.fill_disc(a, style.vertex_radius, style.vertex_color);
        canvas.fill_disc(b, style.vertex_radius, style.vertex_color);
    }
    canvas.into_image()
}

/// Walls plus every observer's tile and rays, one color per observer.
pub fn render_visibility(
    grid: &OccupancyGrid,
    fans: &[VisibilityFan],
    style: &RenderStyle,
) -> RgbImage {
    let mut canvas = canvas_for(grid, style, style.rays_background);
    paint_walls(&mut canvas, grid, style.tile_size, style.rays_wall_color);

    let m = grid_to_canvas(style.tile_size);
    let t = style.tile_size as i64;
    for (index, fan) in fans.iter().enumerate() {
        let color = observer_color(index);
        let (ox, oy) = (fan.observer.x as i64 * t, fan.observer.y as i64 * t);
        canvas.fill_rect(ox, oy, ox + t, oy + t, color);
        for ray in &fan.rays {
            let (Some(a), Some(b)) = (apply_transform(&m, ray.origin), apply_transform(&m, ray.end))
            else {
                continue;
            };
            canvas.draw_line(a, b, style.ray_width, color);
        }
    }
    canvas.into_image()
}
