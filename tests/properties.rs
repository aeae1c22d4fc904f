mod common;

use common::synthetic_grid::{bordered_room, scattered_walls};
use grid_sight::geometry::distance;
use grid_sight::{cast_visibility, extract_boundary, CastOptions, OccupancyGrid, Side};

fn exposed_faces(grid: &OccupancyGrid) -> Vec<(usize, usize, Side)> {
    let mut faces = Vec::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if !grid.is_wall(x, y) {
                continue;
            }
            for side in Side::ALL {
                if grid.is_exposed(x, y, side) {
                    faces.push((x, y, side));
                }
            }
        }
    }
    faces
}

#[test]
fn every_exposed_face_lies_on_its_segment() {
    for seed in 0..6 {
        let grid = scattered_walls(23, 17, seed);
        let boundary = extract_boundary(&grid);
        let faces = exposed_faces(&grid);
        assert_eq!(boundary.referenced_face_count(), faces.len());

        for &(x, y, side) in &faces {
            let id = boundary
                .edges_at(x, y)
                .and_then(|edges| edges.get(side))
                .unwrap_or_else(|| panic!("seed {seed}: face {side:?} of ({x}, {y}) unassigned"));
            let seg = boundary.segment(id).unwrap();
            assert_eq!(seg.side, side);
            let (a, b) = side.face(x, y);
            assert!(seg.covers(a, b), "seed {seed}: {seg:?} misses ({x}, {y}) {side:?}");
        }

        // Unit faces tile the segments exactly.
        let total: f32 = boundary.segments().iter().map(|s| s.length()).sum();
        assert_eq!(total, faces.len() as f32);
    }
}

#[test]
fn consecutive_faces_share_one_segment() {
    for seed in 0..6 {
        let grid = scattered_walls(19, 21, seed);
        let boundary = extract_boundary(&grid);
        for (x, y, side) in exposed_faces(&grid) {
            let (nx, ny) = if side.is_vertical() { (x, y + 1) } else { (x + 1, y) };
            if nx >= grid.width() || ny >= grid.height() || !grid.is_exposed(nx, ny, side) {
                continue;
            }
            if !grid.is_wall(nx, ny) {
                continue;
            }
            let here = boundary.edges_at(x, y).and_then(|e| e.get(side));
            let next = boundary.edges_at(nx, ny).and_then(|e| e.get(side));
            assert_eq!(here, next, "seed {seed}: run broken at ({x}, {y}) {side:?}");
        }
    }
}

#[test]
fn coarser_fan_is_a_subsample_of_finer_fan() {
    let grid = scattered_walls(25, 25, 3);
    let boundary = extract_boundary(&grid);
    if grid.observers().is_empty() {
        return;
    }
    let fine = cast_visibility(&grid, boundary.segments(), CastOptions::new(2.0, 100.0));
    let coarse = cast_visibility(&grid, boundary.segments(), CastOptions::new(4.0, 100.0));
    assert_eq!(fine.len(), coarse.len());
    for (f, c) in fine.iter().zip(&coarse) {
        assert_eq!(c.rays.len() * 2, f.rays.len());
        for (k, ray) in c.rays.iter().enumerate() {
            assert_eq!(ray, &f.rays[2 * k]);
        }
    }
}

#[test]
fn ray_length_is_distance_to_its_end() {
    let grid = scattered_walls(30, 20, 1);
    let boundary = extract_boundary(&grid);
    let fans = cast_visibility(&grid, boundary.segments(), CastOptions::new(5.0, 80.0));
    for fan in &fans {
        for ray in &fan.rays {
            let d = distance(ray.origin, ray.end);
            assert!((d - ray.length).abs() <= 1e-3 * ray.length.max(1.0));
            assert!(ray.length <= 80.0);
        }
    }
}

#[test]
fn centered_observer_sees_symmetric_room() {
    let grid = bordered_room(9, 9, &[(4, 4)]);
    let boundary = extract_boundary(&grid);
    // 4 degree steps never sample the room diagonals.
    let fans = cast_visibility(&grid, boundary.segments(), CastOptions::new(4.0, 500.0));
    let rays = &fans[0].rays;
    assert_eq!(rays.len(), 90);
    let half = rays.len() / 2;
    for k in 0..half {
        let (a, b) = (&rays[k], &rays[k + half]);
        assert!(a.is_blocked() && b.is_blocked());
        assert!(
            (a.length - b.length).abs() < 1e-3,
            "{} deg: {} vs {} deg: {}",
            a.angle_deg,
            a.length,
            b.angle_deg,
            b.length
        );
    }
}
