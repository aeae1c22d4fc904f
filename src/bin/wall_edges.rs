use grid_sight::boundary::{extract_boundary, Segment};
use grid_sight::classify::grid_from_image;
use grid_sight::config::edges;
use grid_sight::diagnostics::timing::timed;
use grid_sight::diagnostics::BoundaryStage;
use grid_sight::image::io::{load_rgb_image, save_rgb_image, write_json_file};
use grid_sight::render::render_boundary;
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = edges::load_config(Path::new(&config_path))?;

    let rgb = load_rgb_image(&config.input)?;
    let grid = grid_from_image(&rgb.as_view(), &config.classify);

    let (boundary, boundary_ms) = timed(|| extract_boundary(&grid));
    let stage = BoundaryStage::from_boundary(&grid, &boundary, boundary_ms);

    let image = render_boundary(&grid, boundary.segments(), &config.render);
    save_rgb_image(&image, &config.output.edges_image)?;

    let summary = WallEdgesReport {
        width: grid.width(),
        height: grid.height(),
        boundary: stage,
        segments: boundary.into_segments(),
    };
    write_json_file(&config.output.segments_json, &summary)?;

    println!(
        "Classified {}x{} cells: {} walls, {} observers",
        grid.width(),
        grid.height(),
        grid.wall_count(),
        grid.observers().len()
    );
    println!(
        "Saved edge rendering to {}",
        config.output.edges_image.display()
    );
    println!(
        "Saved {} wall segments to {}",
        summary.segments.len(),
        config.output.segments_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: wall_edges <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WallEdgesReport {
    width: usize,
    height: usize,
    boundary: BoundaryStage,
    segments: Vec<Segment>,
}
