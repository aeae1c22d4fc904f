//! Geometric primitives shared by the visibility caster and the reports.

use nalgebra::Vector2;

/// Crossing between a ray and a segment.
///
/// `t` is the position along the segment (open interval `(0, 1)`), `u` the
/// position along the ray in units of the ray's defining vector (`u > 0`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossing {
    pub point: [f32; 2],
    pub t: f32,
    pub u: f32,
}

/// Intersect the ray `ray_from -> ray_to` with the segment `seg_start -> seg_end`.
///
/// Uses the two-parameter determinant form. Returns `None` when the lines are
/// parallel or collinear (zero denominator), when the crossing falls on or
/// outside a segment end point (`t` not in `(0, 1)`), or when it lies at or
/// behind the ray origin (`u <= 0`). The ray is unbounded beyond `ray_to`.
/// End points are excluded so that two merged segments meeting at a corner
/// never both report the shared point.
pub fn intersect_ray_segment(
    ray_from: [f32; 2],
    ray_to: [f32; 2],
    seg_start: [f32; 2],
    seg_end: [f32; 2],
) -> Option<Crossing> {
    let p1 = Vector2::from(seg_start);
    let p2 = Vector2::from(seg_end);
    let p3 = Vector2::from(ray_from);
    let p4 = Vector2::from(ray_to);

    let seg = p1 - p2;
    let ray = p3 - p4;
    let denom = seg.perp(&ray);
    if denom == 0.0 {
        return None;
    }

    let to_origin = p1 - p3;
    let t = to_origin.perp(&ray) / denom;
    let u = -seg.perp(&to_origin) / denom;
    if !(t > 0.0 && t < 1.0) || !(u > 0.0) {
        return None;
    }

    let point = p1 + (p2 - p1) * t;
    Some(Crossing {
        point: [point.x, point.y],
        t,
        u,
    })
}

#[inline]
pub fn distance(a: [f32; 2], b: [f32; 2]) -> f32 {
    (Vector2::from(b) - Vector2::from(a)).norm()
}

/// Point at `length` from `origin` along `angle_deg` (y grows downwards, so
/// positive angles turn clockwise on screen).
#[inline]
pub fn polar_point(origin: [f32; 2], angle_deg: f32, length: f32) -> [f32; 2] {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    [origin[0] + length * cos, origin[1] + length * sin]
}

/// Polygon area via the shoelace formula, independent of winding order.
pub fn polygon_area(vertices: &[[f32; 2]]) -> f32 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0f64;
    for i in 0..n {
        let j = (i + 1) % n;
        area += vertices[i][0] as f64 * vertices[j][1] as f64;
        area -= vertices[j][0] as f64 * vertices[i][1] as f64;
    }
    (area.abs() / 2.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn perpendicular_crossing_is_exact() {
        let hit = intersect_ray_segment([0.0, 0.0], [10.0, 0.0], [5.0, -1.0], [5.0, 1.0])
            .expect("ray crosses the segment");
        assert_eq!(hit.point, [5.0, 0.0]);
        assert_eq!(hit.t, 0.5);
        assert!(hit.u > 0.0 && hit.u < 1.0);
        assert_eq!(distance([0.0, 0.0], hit.point), 5.0);
    }

    #[test]
    fn parallel_segment_never_crosses() {
        assert!(intersect_ray_segment([0.0, 0.0], [10.0, 0.0], [0.0, 1.0], [10.0, 1.0]).is_none());
    }

    #[test]
    fn collinear_segment_never_crosses() {
        assert!(intersect_ray_segment([0.0, 0.0], [10.0, 0.0], [2.0, 0.0], [4.0, 0.0]).is_none());
    }

    #[test]
    fn crossing_behind_origin_is_ignored() {
        assert!(
            intersect_ray_segment([0.0, 0.0], [10.0, 0.0], [-5.0, -1.0], [-5.0, 1.0]).is_none()
        );
    }

    #[test]
    fn crossing_at_origin_is_ignored() {
        assert!(intersect_ray_segment([0.0, 0.0], [10.0, 0.0], [0.0, -1.0], [0.0, 1.0]).is_none());
    }

    #[test]
    fn segment_end_points_are_excluded() {
        // The ray passes exactly through the segment's start point (t = 0).
        assert!(intersect_ray_segment([0.0, 0.0], [10.0, 10.0], [1.0, 1.0], [1.0, 3.0]).is_none());
        // ... and through the end point (t = 1).
        assert!(intersect_ray_segment([0.0, 0.0], [10.0, 10.0], [1.0, -1.0], [1.0, 1.0]).is_none());
    }

    #[test]
    fn ray_extends_beyond_its_defining_point() {
        let hit = intersect_ray_segment([0.0, 0.0], [1.0, 0.0], [5.0, -1.0], [5.0, 1.0])
            .expect("ray is unbounded above u = 1");
        assert_eq!(hit.point, [5.0, 0.0]);
        assert_eq!(hit.u, 5.0);
    }

    #[test]
    fn polar_point_follows_screen_axes() {
        let p = polar_point([1.0, 1.0], 0.0, 2.0);
        assert!(approx_eq(p[0], 3.0) && approx_eq(p[1], 1.0));
        let q = polar_point([1.0, 1.0], 90.0, 2.0);
        assert!(approx_eq(q[0], 1.0) && approx_eq(q[1], 3.0));
    }

    #[test]
    fn shoelace_area_of_square() {
        let square = [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]];
        assert!(approx_eq(polygon_area(&square), 4.0));
        let reversed: Vec<[f32; 2]> = square.iter().rev().copied().collect();
        assert!(approx_eq(polygon_area(&reversed), 4.0));
        assert_eq!(polygon_area(&square[..2]), 0.0);
    }
}
