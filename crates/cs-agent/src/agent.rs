//! A single agent: mutable physical state plus its attached behaviors.
//!
//! # Why two structs?
//!
//! Behavior modules are stored inside the agent but must be handed
//! `&mut AgentState` while they themselves are borrowed mutably.  Keeping the
//! state in its own struct lets [`Agent::parts_mut`] split the borrow:
//!
//! ```ignore
//! let (state, behaviors) = agent.parts_mut();
//! for module in behaviors {
//!     module.run(state, &ctx, rng)?;
//! }
//! ```

use cs_core::{AgentId, AgentKind, BoundaryPolicy, CapabilitySet, Vec3};

// ── AgentState ────────────────────────────────────────────────────────────────

/// The physical state of one agent.
///
/// Fields are private: behaviors can read everything but only move the agent
/// through [`update_position`](Self::update_position).  The scheduler
/// constrains the result with [`apply_bounds`](Self::apply_bounds).
#[derive(Clone, Debug, PartialEq)]
pub struct AgentState {
    id:       AgentId,
    kind:     AgentKind,
    position: Vec3,
    diameter: f64,
}

impl AgentState {
    pub fn new(id: AgentId, kind: AgentKind, position: Vec3, diameter: f64) -> Self {
        Self { id, kind, position, diameter }
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Capability set of this agent's kind.
    #[inline]
    pub fn capabilities(&self) -> CapabilitySet {
        self.kind.capabilities()
    }

    /// Move the agent by `delta`.  Unclamped; always succeeds.
    #[inline]
    pub fn update_position(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Project the position into `policy`'s region.
    #[inline]
    pub fn apply_bounds(&mut self, policy: &BoundaryPolicy) {
        self.position = policy.clamp(self.position);
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// An agent together with the behavior modules it owns, in attachment order.
#[derive(Debug)]
pub struct Agent<B> {
    state:     AgentState,
    behaviors: Vec<B>,
}

impl<B> Agent<B> {
    /// An agent with no behaviors attached.
    pub fn new(state: AgentState) -> Self {
        Self { state, behaviors: Vec::new() }
    }

    /// Shorthand for a [`AgentKind::Cell`] at `position`.
    pub fn cell(id: AgentId, position: Vec3, diameter: f64) -> Self {
        Self::new(AgentState::new(id, AgentKind::Cell, position, diameter))
    }

    /// Append `behavior`, taking ownership of it.
    pub fn attach_behavior(&mut self, behavior: B) {
        self.behaviors.push(behavior);
    }

    /// Builder-style [`attach_behavior`](Self::attach_behavior).
    pub fn with_behavior(mut self, behavior: B) -> Self {
        self.attach_behavior(behavior);
        self
    }

    #[inline]
    pub fn state(&self) -> &AgentState {
        &self.state
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.state.id
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    pub fn behaviors(&self) -> &[B] {
        &self.behaviors
    }

    /// Disjoint mutable borrows of the state and the behavior list.
    #[inline]
    pub fn parts_mut(&mut self) -> (&mut AgentState, &mut [B]) {
        (&mut self.state, &mut self.behaviors)
    }

    #[inline]
    pub(crate) fn state_mut(&mut self) -> &mut AgentState {
        &mut self.state
    }
}
