use super::params::SceneParams;
use crate::boundary::{extract_boundary, Boundary};
use crate::diagnostics::timing::{elapsed_ms, timed};
use crate::diagnostics::{
    BoundaryStage, InputDescriptor, SceneReport, SceneTrace, Stage, TimingBreakdown,
    VisibilityStage,
};
use crate::occupancy::OccupancyGrid;
use crate::visibility::{VisibilityCaster, VisibilityFan};
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Wall boundary plus one visibility fan per observer.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneResult {
    pub boundary: Boundary,
    pub fans: Vec<VisibilityFan>,
}

/// Runs extraction and casting over occupancy grids.
pub struct SceneAnalyzer {
    params: SceneParams,
    caster: VisibilityCaster,
}

impl SceneAnalyzer {
    pub fn new(params: SceneParams) -> Self {
        let caster = VisibilityCaster::new(params.cast);
        Self { params, caster }
    }

    pub fn params(&self) -> &SceneParams {
        &self.params
    }

    /// Extract the boundary and cast every observer's fan.
    pub fn process(&self, grid: &OccupancyGrid) -> SceneResult {
        self.process_with_diagnostics(grid).result
    }

    /// Same as [`process`](Self::process), with a per-stage trace.
    pub fn process_with_diagnostics(&self, grid: &OccupancyGrid) -> SceneReport {
        debug!(
            "SceneAnalyzer::process start w={} h={} observers={}",
            grid.width(),
            grid.height(),
            grid.observers().len()
        );
        let total_start = Instant::now();

        let mut timings = TimingBreakdown::default();

        let (boundary, boundary_ms) = timed(|| extract_boundary(grid));
        timings.record(Stage::Boundary, boundary_ms);
        let boundary_stage = BoundaryStage::from_boundary(grid, &boundary, boundary_ms);
        debug!(
            "SceneAnalyzer::process boundary segments={} exposed_faces={} elapsed_ms={:.3}",
            boundary_stage.segments, boundary_stage.exposed_faces, boundary_ms
        );

        let (fans, cast_ms) = timed(|| self.caster.cast_all(grid.observers(), boundary.segments()));
        timings.record(Stage::Visibility, cast_ms);
        let visibility_stage = VisibilityStage::from_fans(self.caster.options(), &fans, cast_ms);

        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "SceneAnalyzer::process done rays={} total_ms={:.3}",
            visibility_stage.total_rays(),
            timings.total_ms
        );

        SceneReport {
            trace: SceneTrace {
                input: InputDescriptor {
                    width: grid.width(),
                    height: grid.height(),
                    wall_cells: boundary_stage.wall_cells,
                    observers: grid.observers().len(),
                },
                timings,
                boundary: boundary_stage,
                visibility: visibility_stage,
            },
            result: SceneResult { boundary, fans },
        }
    }
}

impl Default for SceneAnalyzer {
    fn default() -> Self {
        Self::new(SceneParams::default())
    }
}
