//! Spatial boundary enforcement.
//!
//! The policy is a closed interval applied independently to every axis: a
//! coordinate below `min` becomes `min`, one above `max` becomes `max`.  No
//! wrapping, no bouncing.  The same interval is used for x, y and z.

use crate::{BoundaryConfig, CoreError, CoreResult, Vec3};

/// Per-axis clamp applied to every agent once per step, after its behavior
/// modules have run.
///
/// Built once before the run and never mutated afterwards; the simulation
/// holds it by value and only hands out `&BoundaryPolicy`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum BoundaryPolicy {
    /// Space is unbounded; `clamp` is the identity.
    #[default]
    Unbounded,
    /// The cube `[min, max]³`.
    Closed { min: f64, max: f64 },
}

impl BoundaryPolicy {
    /// A closed cube `[min, max]³`.
    ///
    /// Rejects `min >= max` and non-finite bounds.
    pub fn closed(min: f64, max: f64) -> CoreResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(CoreError::Config(format!(
                "boundary bounds must be finite, got [{min}, {max}]"
            )));
        }
        if min >= max {
            return Err(CoreError::Config(format!(
                "min_bound ({min}) must be less than max_bound ({max})"
            )));
        }
        Ok(BoundaryPolicy::Closed { min, max })
    }

    /// Resolve the policy described by a run configuration.
    pub fn from_config(cfg: &BoundaryConfig) -> CoreResult<Self> {
        if cfg.bound_space {
            Self::closed(cfg.min_bound, cfg.max_bound)
        } else {
            Ok(BoundaryPolicy::Unbounded)
        }
    }

    /// Project `pos` into the region.
    #[inline]
    pub fn clamp(&self, pos: Vec3) -> Vec3 {
        match *self {
            BoundaryPolicy::Unbounded => pos,
            BoundaryPolicy::Closed { min, max } => pos.map(|c| c.clamp(min, max)),
        }
    }

    /// `true` if `pos` already lies inside the region.
    #[inline]
    pub fn contains(&self, pos: Vec3) -> bool {
        match *self {
            BoundaryPolicy::Unbounded => true,
            BoundaryPolicy::Closed { min, max } => pos.all_within(min, max),
        }
    }

    #[inline]
    pub fn is_bounded(&self) -> bool {
        matches!(self, BoundaryPolicy::Closed { .. })
    }
}
