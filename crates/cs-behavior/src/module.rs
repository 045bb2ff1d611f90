//! The `BehaviorModule` trait, the main extension point for user code.

use std::fmt;

use cs_agent::{Agent, AgentContainer, AgentState};
use cs_core::{AgentRng, CapabilitySet};

use crate::{BehaviorResult, EventKind, EventMask, StepContext};

/// An agent as the simulation stores it.
pub type SimAgent = Agent<Box<dyn BehaviorModule>>;

/// The simulation's agent container.
pub type Population = AgentContainer<Box<dyn BehaviorModule>>;

/// Pluggable per-step agent logic.
///
/// Each instance is owned by exactly one agent (modules are moved into the
/// agent as `Box<dyn BehaviorModule>`), so per-agent state can live in the
/// module itself.
///
/// # Required methods
///
/// [`name`][Self::name], [`run`][Self::run] and
/// [`derive_for`][Self::derive_for].  Modules that need nothing from the
/// agent keep the empty default for
/// [`required_capabilities`][Self::required_capabilities].
///
/// # Example
///
/// ```rust
/// use cs_agent::AgentState;
/// use cs_behavior::{BehaviorModule, BehaviorResult, EventKind, StepContext};
/// use cs_core::{AgentRng, Capability, CapabilitySet, Vec3};
///
/// /// Drifts +x by a fixed amount every step.
/// struct Drift(f64);
///
/// impl BehaviorModule for Drift {
///     fn name(&self) -> &'static str { "drift" }
///
///     fn required_capabilities(&self) -> CapabilitySet {
///         CapabilitySet::of(&[Capability::Move])
///     }
///
///     fn run(&mut self, agent: &mut AgentState, _ctx: &StepContext, _rng: &mut AgentRng)
///         -> BehaviorResult<()>
///     {
///         agent.update_position(Vec3::new(self.0, 0.0, 0.0));
///         Ok(())
///     }
///
///     fn derive_for(&self, _event: EventKind) -> Option<Box<dyn BehaviorModule>> {
///         Some(Box::new(Drift(self.0)))
///     }
/// }
/// ```
pub trait BehaviorModule: Send + 'static {
    /// Short identifier used in logs and errors.
    fn name(&self) -> &'static str;

    /// Capabilities the agent's kind must provide for `run` to be invoked.
    ///
    /// Default: none, so the module runs on every agent.
    fn required_capabilities(&self) -> CapabilitySet {
        CapabilitySet::EMPTY
    }

    /// Apply one step of this behavior to `agent`.
    ///
    /// Called once per step, after the capability check passed.  All
    /// randomness must come from `rng` so runs stay reproducible.
    fn run(
        &mut self,
        agent: &mut AgentState,
        ctx:   &StepContext,
        rng:   &mut AgentRng,
    ) -> BehaviorResult<()>;

    /// Events on which this module is carried over to a new agent.
    ///
    /// Default: every event.
    fn event_mask(&self) -> EventMask {
        EventMask::ALL
    }

    /// `true` if the module is carried over when `event` happens.
    fn applies_to(&self, event: EventKind) -> bool {
        self.event_mask().contains(event)
    }

    /// The module the new agent receives when the owner undergoes `event`.
    ///
    /// Stateless modules return a fresh instance; stateful ones may split or
    /// reset their state.  Return `None` to not carry over.
    fn derive_for(&self, event: EventKind) -> Option<Box<dyn BehaviorModule>>;
}

impl fmt::Debug for dyn BehaviorModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BehaviorModule({})", self.name())
    }
}

/// Collect the modules a new agent inherits from `modules` on `event`, in
/// attachment order.
///
/// Modules whose [`applies_to`][BehaviorModule::applies_to] is `false` are
/// skipped without asking them to derive.
pub fn derive_all(
    modules: &[Box<dyn BehaviorModule>],
    event:   EventKind,
) -> Vec<Box<dyn BehaviorModule>> {
    modules
        .iter()
        .filter(|m| m.applies_to(event))
        .filter_map(|m| m.derive_for(event))
        .collect()
}
