//! Ordered, append-only agent storage.
//!
//! Agents and their RNGs live in two parallel `Vec`s indexed by insertion
//! position.  Keeping the RNGs outside [`Agent`] lets the step loop hold
//! `&mut Agent` and `&mut AgentRng` for the same index at once, and keeps
//! an agent's random stream out of reach of its own behaviors except through
//! the explicit parameter they are given.

use cs_core::{AgentId, AgentRng, BoundaryPolicy, CoreError, CoreResult};
use rustc_hash::FxHashSet;

use crate::{Agent, AgentState};

/// Owns every agent in a simulation, in insertion order.
///
/// No removal: the container only grows.  Ids are unique, since each one
/// also keys an agent's random stream.
#[derive(Debug)]
pub struct AgentContainer<B> {
    agents: Vec<Agent<B>>,
    rngs:   Vec<AgentRng>,
    ids:    FxHashSet<AgentId>,
    seed:   u64,
}

impl<B> AgentContainer<B> {
    /// An empty container whose per-agent RNGs derive from `seed`.
    pub fn new(seed: u64) -> Self {
        Self::with_capacity(seed, 0)
    }

    pub fn with_capacity(seed: u64, capacity: usize) -> Self {
        Self {
            agents: Vec::with_capacity(capacity),
            rngs:   Vec::with_capacity(capacity),
            ids:    FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
            seed,
        }
    }

    /// Append `agent` at the end, taking ownership.
    ///
    /// The agent keeps the id it was built with; its RNG is seeded from
    /// `(seed, agent.id())`.  An id already in the container, or
    /// [`AgentId::INVALID`], is rejected and the container is left unchanged.
    pub fn append(&mut self, agent: Agent<B>) -> CoreResult<()> {
        let id = agent.id();
        if id == AgentId::INVALID {
            return Err(CoreError::Config("cannot append an agent with the invalid id".into()));
        }
        if !self.ids.insert(id) {
            return Err(CoreError::DuplicateAgentId(id));
        }
        self.rngs.push(AgentRng::new(self.seed, id));
        self.agents.push(agent);
        Ok(())
    }

    /// `true` if an agent with `id` has been appended.
    pub fn contains_id(&self, id: AgentId) -> bool {
        self.ids.contains(&id)
    }

    /// Call `f` once for every agent, in insertion order.
    pub fn for_each(&self, f: impl FnMut(&Agent<B>)) {
        self.agents.iter().for_each(f);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// The id an agent appended next would naturally take (its index).
    ///
    /// Fails once the container holds more agents than `AgentId` can number.
    pub fn next_id(&self) -> CoreResult<AgentId> {
        AgentId::try_from(self.agents.len()).map_err(|_| {
            CoreError::Config(format!("{} agents exceed the AgentId range", self.agents.len()))
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent<B>> + '_ {
        self.agents.iter()
    }

    /// Agent at insertion position `index`.
    pub fn get(&self, index: usize) -> Option<&Agent<B>> {
        self.agents.get(index)
    }

    /// Agent at `index` together with its RNG.
    #[inline]
    pub fn agent_and_rng_mut(&mut self, index: usize) -> Option<(&mut Agent<B>, &mut AgentRng)> {
        let agent = self.agents.get_mut(index)?;
        let rng = self.rngs.get_mut(index)?;
        Some((agent, rng))
    }

    /// Clamp every agent's position into `policy`'s region.
    pub fn apply_bounds(&mut self, policy: &BoundaryPolicy) {
        for agent in &mut self.agents {
            agent.state_mut().apply_bounds(policy);
        }
    }

    /// Iterator over every agent's state (e.g. for export).
    pub fn states(&self) -> impl Iterator<Item = &AgentState> + '_ {
        self.agents.iter().map(Agent::state)
    }
}
