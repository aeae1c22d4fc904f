use grid_sight::classify::grid_from_image;
use grid_sight::config::visibility;
use grid_sight::diagnostics::Stage;
use grid_sight::image::io::{load_rgb_image, save_rgb_image, write_json_file};
use grid_sight::render::{render_boundary, render_visibility};
use grid_sight::SceneAnalyzer;
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
    let config = visibility::load_config(Path::new(&config_path))?;

    let rgb = load_rgb_image(&config.input)?;
    let grid = grid_from_image(&rgb.as_view(), &config.classify);
    if grid.observers().is_empty() {
        eprintln!(
            "Warning: no observer cells found in {}",
            config.input.display()
        );
    }
    config.scene.cast.validate_for(&grid)?;

    let analyzer = SceneAnalyzer::new(config.scene.clone());
    let report = analyzer.process_with_diagnostics(&grid);
    let result = &report.result;

    let rays = render_visibility(&grid, &result.fans, &config.render);
    save_rgb_image(&rays, &config.output.rays_image)?;
    if let Some(path) = &config.output.edges_image {
        let edges = render_boundary(&grid, result.boundary.segments(), &config.render);
        save_rgb_image(&edges, path)?;
        println!("Saved edge rendering to {}", path.display());
    }
    write_json_file(&config.output.report_json, &report)?;

    println!(
        "Extracted {} wall segments in {:.3} ms",
        report.trace.boundary.segments,
        report.trace.timings.stage_ms(Stage::Boundary).unwrap_or(0.0)
    );
    for summary in &report.trace.visibility.observers {
        println!(
            "Observer ({}, {}): {} blocked, {} open, visible area {:.2}",
            summary.observer.x,
            summary.observer.y,
            summary.blocked_rays,
            summary.open_rays,
            summary.visible_area
        );
    }
    println!(
        "Saved ray rendering to {}",
        config.output.rays_image.display()
    );
    println!("Saved report to {}", config.output.report_json.display());

    Ok(())
}

fn usage() -> String {
    "Usage: visibility_rays <config.json>".to_string()
}
