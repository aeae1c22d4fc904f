use super::{BoundaryStage, TimingBreakdown, VisibilityStage};
use crate::scene::SceneResult;
use serde::Serialize;

/// Result produced by [`SceneAnalyzer::process_with_diagnostics`](crate::SceneAnalyzer).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneReport {
    pub result: SceneResult,
    pub trace: SceneTrace,
}

/// Stage-by-stage account of one scene run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub boundary: BoundaryStage,
    pub visibility: VisibilityStage,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub wall_cells: usize,
    pub observers: usize,
}
