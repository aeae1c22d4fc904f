//! End-to-end scene pipeline: boundary extraction followed by ray casting
//! for every observer.
//!
//! Modules
//! - [`params`] – configuration consumed by [`SceneAnalyzer`].
//! - `analyzer` – the pipeline itself and its diagnostics.

mod analyzer;
pub mod params;

pub use analyzer::{SceneAnalyzer, SceneResult};
pub use params::SceneParams;
