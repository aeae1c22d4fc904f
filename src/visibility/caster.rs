use super::options::CastOptions;
use super::ray::{Ray, VisibilityFan};
use crate::boundary::Segment;
use crate::geometry::{distance, intersect_ray_segment, polar_point};
use crate::occupancy::Observer;
use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::time::Instant;

/// Casts ray fans against a read-only segment list.
#[derive(Clone, Debug, Default)]
pub struct VisibilityCaster {
    options: CastOptions,
}

impl VisibilityCaster {
    pub fn new(options: CastOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CastOptions {
        &self.options
    }

    /// Cast a single ray and clip it to the nearest crossing.
    ///
    /// Segments are tested in slice order and a crossing only wins when it is
    /// strictly nearer than the current end, so among equally near crossings
    /// the first segment in the slice is reported as the blocker.
    pub fn cast_ray(&self, origin: [f32; 2], angle_deg: f32, segments: &[Segment]) -> Ray {
        let far = polar_point(origin, angle_deg, self.options.max_length);
        let mut ray = Ray {
            angle_deg,
            origin,
            end: far,
            length: self.options.max_length,
            blocker: None,
        };
        for seg in segments {
            let Some(hit) = intersect_ray_segment(origin, far, seg.p0, seg.p1) else {
                continue;
            };
            let dist = distance(origin, hit.point);
            if dist < ray.length {
                ray.end = hit.point;
                ray.length = dist;
                ray.blocker = Some(seg.id);
            }
        }
        ray
    }

    /// Cast the full fan for one observer; rays are ordered by angle.
    pub fn cast_observer(&self, observer: Observer, segments: &[Segment]) -> VisibilityFan {
        let origin = observer.position();
        let angles: Vec<f32> = self.options.angles().collect();
        #[cfg(feature = "parallel")]
        let rays: Vec<Ray> = angles
            .par_iter()
            .map(|&angle| self.cast_ray(origin, angle, segments))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let rays: Vec<Ray> = angles
            .iter()
            .map(|&angle| self.cast_ray(origin, angle, segments))
            .collect();
        VisibilityFan { observer, rays }
    }

    /// Cast fans for every observer, preserving observer order.
    pub fn cast_all(&self, observers: &[Observer], segments: &[Segment]) -> Vec<VisibilityFan> {
        let start = Instant::now();
        #[cfg(feature = "parallel")]
        let fans: Vec<VisibilityFan> = observers
            .par_iter()
            .map(|&obs| self.cast_observer(obs, segments))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let fans: Vec<VisibilityFan> = observers
            .iter()
            .map(|&obs| self.cast_observer(obs, segments))
            .collect();
        debug!(
            "VisibilityCaster::cast_all observers={} rays/observer={} segments={} elapsed_ms={:.3}",
            observers.len(),
            self.options.ray_count(),
            segments.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        fans
    }
}
