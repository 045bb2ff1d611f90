//! Fluent builder for an initial population.
//!
//! # Usage
//!
//! ```rust
//! use cs_agent::{PopulationBuilder, PopulationConfig};
//!
//! #[derive(Debug)]
//! struct Wander;
//!
//! let population = PopulationBuilder::new(PopulationConfig::default(), /*seed=*/ 42)
//!     .build_with(|_| vec![Wander])
//!     .unwrap();
//!
//! assert_eq!(population.len(), 200);
//! assert_eq!(population.get(0).unwrap().behaviors().len(), 1);
//! ```

use cs_core::{AgentId, AgentKind, CoreError, CoreResult, RandomSource, SimRng, Vec3};

use crate::{Agent, AgentContainer, AgentState};

/// Offset of the placement stream derived from the run seed.
const PLACEMENT_STREAM: u64 = 1;

/// Closed interval used to draw one initial coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementRange {
    pub min: f64,
    pub max: f64,
}

impl PlacementRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(&self, axis: &str) -> CoreResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(CoreError::Config(format!(
                "invalid {axis} placement range [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Shape of the initial population.
///
/// The defaults describe the reference scenario: 200 cells with x and y drawn
/// from `[700, 800]`, z fixed at 0, diameter 7.5.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PopulationConfig {
    pub count:    usize,
    pub kind:     AgentKind,
    pub x:        PlacementRange,
    pub y:        PlacementRange,
    pub z:        f64,
    pub diameter: f64,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            count:    200,
            kind:     AgentKind::Cell,
            x:        PlacementRange::new(700.0, 800.0),
            y:        PlacementRange::new(700.0, 800.0),
            z:        0.0,
            diameter: 7.5,
        }
    }
}

impl PopulationConfig {
    /// Reject empty or non-finite placement ranges and non-positive diameters.
    pub fn validate(&self) -> CoreResult<()> {
        self.x.validate("x")?;
        self.y.validate("y")?;
        if !self.z.is_finite() {
            return Err(CoreError::Config(format!("z must be finite, got {}", self.z)));
        }
        if !(self.diameter.is_finite() && self.diameter > 0.0) {
            return Err(CoreError::Config(format!(
                "diameter must be positive, got {}",
                self.diameter
            )));
        }
        if u32::try_from(self.count).is_err() {
            return Err(CoreError::Config(format!("too many agents: {}", self.count)));
        }
        Ok(())
    }
}

/// Builds an [`AgentContainer`] from a [`PopulationConfig`].
///
/// Agents get ids `0..count` in creation order.  Per agent, x is drawn before
/// y from a placement stream derived from `seed`, so the layout is a pure
/// function of `(config, seed)`.
pub struct PopulationBuilder {
    config: PopulationConfig,
    seed:   u64,
}

impl PopulationBuilder {
    pub fn new(config: PopulationConfig, seed: u64) -> Self {
        Self { config, seed }
    }

    /// Validate the config, place every agent, and attach the behaviors
    /// returned by `behaviors` for that agent's id.
    pub fn build_with<B>(
        self,
        mut behaviors: impl FnMut(AgentId) -> Vec<B>,
    ) -> CoreResult<AgentContainer<B>> {
        let cfg = &self.config;
        cfg.validate()?;

        let mut placement = SimRng::new(self.seed).child(PLACEMENT_STREAM);
        let mut container = AgentContainer::with_capacity(self.seed, cfg.count);

        for i in 0..cfg.count as u32 {
            let id = AgentId(i);
            let x = placement.uniform(cfg.x.min, cfg.x.max)?;
            let y = placement.uniform(cfg.y.min, cfg.y.max)?;
            let mut agent = Agent::new(AgentState::new(
                id,
                cfg.kind,
                Vec3::new(x, y, cfg.z),
                cfg.diameter,
            ));
            for behavior in behaviors(id) {
                agent.attach_behavior(behavior);
            }
            container.append(agent)?;
        }

        log::debug!("placed {} {} agents", container.len(), cfg.kind);
        Ok(container)
    }
}
