use crate::boundary::SegmentId;
use crate::geometry::polygon_area;
use crate::occupancy::Observer;
use serde::Serialize;

/// One sampled ray after clipping.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ray {
    pub angle_deg: f32,
    pub origin: [f32; 2],
    pub end: [f32; 2],
    pub length: f32,
    /// Segment that clipped the ray; `None` when it reached full length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocker: Option<SegmentId>,
}

impl Ray {
    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.blocker.is_some()
    }
}

/// All rays cast from one observer, ordered by increasing angle.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityFan {
    pub observer: Observer,
    pub rays: Vec<Ray>,
}

impl VisibilityFan {
    /// Visible region outline: the clipped end points in angle order.
    pub fn polygon(&self) -> Vec<[f32; 2]> {
        self.rays.iter().map(|r| r.end).collect()
    }

    pub fn area(&self) -> f32 {
        polygon_area(&self.polygon())
    }

    pub fn blocked_count(&self) -> usize {
        self.rays.iter().filter(|r| r.is_blocked()).count()
    }

    /// Mean distance to the first obstacle over blocked rays.
    pub fn mean_blocked_reach(&self) -> Option<f32> {
        let blocked = self.blocked_count();
        if blocked == 0 {
            return None;
        }
        let sum: f32 = self
            .rays
            .iter()
            .filter(|r| r.is_blocked())
            .map(|r| r.length)
            .sum();
        Some(sum / blocked as f32)
    }
}
