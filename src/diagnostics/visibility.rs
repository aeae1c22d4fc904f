use crate::occupancy::Observer;
use crate::visibility::{CastOptions, VisibilityFan};
use serde::Serialize;

/// Per-observer outcome of the casting stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObserverSummary {
    pub observer: Observer,
    pub blocked_rays: usize,
    pub open_rays: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_blocked_reach: Option<f32>,
    pub visible_area: f32,
}

impl ObserverSummary {
    pub fn from_fan(fan: &VisibilityFan) -> Self {
        let blocked_rays = fan.blocked_count();
        Self {
            observer: fan.observer,
            blocked_rays,
            open_rays: fan.rays.len() - blocked_rays,
            mean_blocked_reach: fan.mean_blocked_reach(),
            visible_area: fan.area(),
        }
    }
}

/// Summary of the visibility casting stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityStage {
    pub elapsed_ms: f64,
    pub ray_spacing_deg: f32,
    pub max_length: f32,
    pub rays_per_observer: usize,
    pub observers: Vec<ObserverSummary>,
}

impl VisibilityStage {
    pub fn from_fans(options: &CastOptions, fans: &[VisibilityFan], elapsed_ms: f64) -> Self {
        Self {
            elapsed_ms,
            ray_spacing_deg: options.ray_spacing_deg,
            max_length: options.max_length,
            rays_per_observer: options.ray_count(),
            observers: fans.iter().map(ObserverSummary::from_fan).collect(),
        }
    }

    pub fn total_rays(&self) -> usize {
        self.observers
            .iter()
            .map(|o| o.blocked_rays + o.open_rays)
            .sum()
    }
}
