use crate::visibility::CastOptions;
use serde::{Deserialize, Serialize};

/// Parameters for a scene run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneParams {
    /// Ray fan used for every observer.
    pub cast: CastOptions,
}
