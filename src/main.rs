use grid_sight::occupancy::OccupancyGrid;
use grid_sight::SceneAnalyzer;
use std::env;
use std::fs;

const DEMO_MAP: &str = "
################
#......#.......#
#..O...#...@...#
#......#.......#
#...####.......#
#..............#
#.......###....#
#...O...#......#
################
";

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    // Optional ASCII map file; falls back to the built-in floor plan.
    let map = match env::args().nth(1) {
        Some(path) => {
            fs::read_to_string(&path).map_err(|e| format!("Failed to read map {path}: {e}"))?
        }
        None => DEMO_MAP.to_string(),
    };
    let grid = OccupancyGrid::from_ascii(&map)?;

    let analyzer = SceneAnalyzer::default();
    let report = analyzer.process_with_diagnostics(&grid);
    let trace = &report.trace;

    println!(
        "grid={}x{} walls={} exposed_faces={} segments={} total_ms={:.3}",
        trace.input.width,
        trace.input.height,
        trace.input.wall_cells,
        trace.boundary.exposed_faces,
        trace.boundary.segments,
        trace.timings.total_ms
    );
    for obs in &trace.visibility.observers {
        println!(
            "observer=({}, {}) blocked={} open={} area={:.2}",
            obs.observer.x, obs.observer.y, obs.blocked_rays, obs.open_rays, obs.visible_area
        );
    }
    Ok(())
}
