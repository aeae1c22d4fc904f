//! Serializable diagnostics produced by the scene pipeline and the tools.
//!
//! `SceneReport` is the main entry point returned by
//! [`SceneAnalyzer::process_with_diagnostics`](crate::SceneAnalyzer), bundling
//! the computed result with a `SceneTrace` that summarizes each stage.

pub mod boundary;
pub mod scene;
pub mod timing;
pub mod visibility;

pub use boundary::{BoundaryStage, SideCounts};
pub use scene::{InputDescriptor, SceneReport, SceneTrace};
pub use timing::{Stage, StageTiming, TimingBreakdown};
pub use visibility::{ObserverSummary, VisibilityStage};
