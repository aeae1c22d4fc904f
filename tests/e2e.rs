mod common;

use common::synthetic_grid::{bordered_room, grid_to_rgb, two_rooms};
use grid_sight::classify::{grid_from_image, ColorClassifier};
use grid_sight::config::visibility::load_config;
use grid_sight::diagnostics::Stage;
use grid_sight::render::{observer_color, render_visibility, RenderStyle};
use grid_sight::{extract_boundary, Observer, SceneAnalyzer, SceneParams};
use std::fs;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn two_rooms_are_fully_enclosed() {
    init_logger();
    let grid = two_rooms();
    let analyzer = SceneAnalyzer::new(SceneParams::default());
    let result = analyzer.process(&grid);

    let observers: Vec<Observer> = result.fans.iter().map(|f| f.observer).collect();
    assert_eq!(observers, vec![Observer::new(3, 2), Observer::new(9, 4)]);

    for fan in &result.fans {
        assert_eq!(fan.rays.len(), 180);
        assert_eq!(
            fan.blocked_count(),
            fan.rays.len(),
            "observer {:?} has escaping rays",
            fan.observer
        );
        for ray in &fan.rays {
            let [x, y] = ray.end;
            assert!(
                (0.5 - 1e-3..=11.5 + 1e-3).contains(&x) && (0.5 - 1e-3..=5.5 + 1e-3).contains(&y),
                "ray at {} deg ends outside the floor plan: {:?}",
                ray.angle_deg,
                ray.end
            );
        }
    }

    // The doorway lets the left observer see into the right room.
    let left = &result.fans[0];
    assert!(left.rays.iter().any(|r| r.end[0] > 6.5));
}

#[test]
fn diagnostics_trace_matches_result() {
    init_logger();
    let grid = two_rooms();
    let report = SceneAnalyzer::default().process_with_diagnostics(&grid);
    let trace = &report.trace;

    assert_eq!(trace.input.width, 13);
    assert_eq!(trace.input.height, 7);
    assert_eq!(trace.input.observers, 2);
    assert_eq!(trace.input.wall_cells, grid.wall_count());
    assert_eq!(trace.boundary.segments, report.result.boundary.segments().len());
    assert_eq!(trace.boundary.by_side.total(), trace.boundary.segments);
    assert_eq!(trace.boundary.exposed_faces, grid.exposed_face_count());
    assert!(trace.boundary.merge_ratio > 1.0);

    assert!(trace.timings.stage_ms(Stage::Boundary).is_some());
    assert!(trace.timings.stage_ms(Stage::Visibility).is_some());
    assert_eq!(trace.visibility.rays_per_observer, 180);
    assert_eq!(trace.visibility.total_rays(), 360);
    for (summary, fan) in trace.visibility.observers.iter().zip(&report.result.fans) {
        assert_eq!(summary.observer, fan.observer);
        assert_eq!(summary.open_rays, 0);
        assert!(summary.visible_area > 0.0);
    }
}

#[test]
fn report_serializes_with_camel_case_fields() {
    let grid = bordered_room(6, 5, &[(2, 2)]);
    let report = SceneAnalyzer::default().process_with_diagnostics(&grid);
    let json = serde_json::to_value(&report).unwrap();

    let segments = json["result"]["boundary"]["segments"].as_array().unwrap();
    assert_eq!(segments.len(), report.result.boundary.segments().len());
    assert_eq!(segments[0]["id"], 0);
    assert!(segments[0]["side"].is_string());

    let ray = &json["result"]["fans"][0]["rays"][0];
    assert_eq!(ray["angleDeg"], 0.0);
    assert!(ray["blocker"].is_number());

    let trace = &json["trace"];
    assert_eq!(trace["visibility"]["raysPerObserver"], 180);
    assert!(trace["boundary"]["exposedFaces"].is_number());
    assert!(trace["timings"]["totalMs"].is_number());
}

#[test]
fn image_ingestion_matches_direct_grid() {
    let grid = two_rooms();
    let rgb = grid_to_rgb(&grid);
    let ingested = grid_from_image(&rgb.as_view(), &ColorClassifier::default());

    assert_eq!(ingested.width(), grid.width());
    assert_eq!(ingested.height(), grid.height());
    assert_eq!(ingested.observers(), grid.observers());
    assert_eq!(ingested.wall_count(), grid.wall_count());

    let direct = extract_boundary(&grid);
    let from_image = extract_boundary(&ingested);
    assert_eq!(direct.segments(), from_image.segments());
}

#[test]
fn visibility_rendering_covers_grid() {
    let grid = two_rooms();
    let result = SceneAnalyzer::default().process(&grid);
    let style = RenderStyle {
        tile_size: 8,
        ..RenderStyle::default()
    };
    let img = render_visibility(&grid, &result.fans, &style);

    assert_eq!(img.dimensions(), (13 * 8, 7 * 8));
    assert_eq!(img.get_pixel(1, 1).0, style.rays_wall_color);
    // The last observer's tile is painted after every other fan.
    for (dx, dy) in [(0, 0), (7, 0), (0, 7), (7, 7)] {
        assert_eq!(img.get_pixel(9 * 8 + dx, 4 * 8 + dy).0, observer_color(1));
    }

    // Rays seen through the doorway may cross earlier tiles, so check the
    // first observer on its own.
    let first = render_visibility(&grid, &result.fans[..1], &style);
    assert_eq!(first.get_pixel(3 * 8 + 1, 2 * 8 + 1).0, observer_color(0));
    assert_eq!(first.get_pixel(9 * 8 + 1, 0).0, style.rays_wall_color);
}

#[test]
fn visibility_config_is_loaded_and_validated() {
    let dir = std::env::temp_dir().join(format!("grid_sight_cfg_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let good = dir.join("good.json");
    fs::write(
        &good,
        r#"{
            "input": "maps/floor.png",
            "scene": { "cast": { "ray_spacing_deg": 4.0, "max_length": 250.0 } },
            "output": { "rays_image": "out/rays.png", "report_json": "out/report.json" }
        }"#,
    )
    .unwrap();
    let cfg = load_config(&good).unwrap();
    assert_eq!(cfg.scene.cast.ray_count(), 90);
    assert_eq!(cfg.scene.cast.max_length, 250.0);
    assert_eq!(cfg.classify, ColorClassifier::default());

    let bad = dir.join("bad.json");
    fs::write(
        &bad,
        r#"{
            "input": "maps/floor.png",
            "scene": { "cast": { "ray_spacing_deg": 7.0 } },
            "output": { "rays_image": "r.png", "report_json": "r.json" }
        }"#,
    )
    .unwrap();
    let err = load_config(&bad).unwrap_err();
    assert!(err.contains("Invalid cast options"), "{err}");

    let _ = fs::remove_dir_all(&dir);
}
