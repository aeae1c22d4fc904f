//! Wall-clock timings of the scene stages.
//!
//! A scene run has two stages, boundary extraction and ray casting; each is
//! recorded once under its [`Stage`] tag next to the end-to-end total.

use serde::Serialize;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Boundary,
    Visibility,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub stage: Stage,
    pub elapsed_ms: f64,
}

/// Per-stage timings of one scene run, in execution order.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn record(&mut self, stage: Stage, elapsed_ms: f64) {
        self.stages.push(StageTiming { stage, elapsed_ms });
    }

    pub fn stage_ms(&self, stage: Stage) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| s.elapsed_ms)
    }

    /// Time spent outside the recorded stages (report assembly, logging).
    pub fn overhead_ms(&self) -> f64 {
        let staged: f64 = self.stages.iter().map(|s| s.elapsed_ms).sum();
        (self.total_ms - staged).max(0.0)
    }
}

/// Run `f` and return its output with the elapsed milliseconds.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let out = f();
    (out, elapsed_ms(start))
}

#[inline]
pub fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
