//! Agent kinds and the capability table behavior modules dispatch on.
//!
//! Every agent carries an [`AgentKind`]; every kind maps to a fixed
//! [`CapabilitySet`].  Behavior modules declare the capabilities they need
//! and the scheduler compares the two sets with a single bit test instead of
//! a chain of type checks.  Populations may mix kinds freely.

use std::fmt;

/// One thing an agent can have done to it by a behavior module.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Capability {
    /// Position may be changed through `update_position`.
    Move,
}

impl Capability {
    #[inline]
    const fn bit(self) -> u8 {
        match self {
            Capability::Move => 1 << 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Capability::Move => "move",
        }
    }
}

/// A small bitset of [`Capability`] values.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct CapabilitySet(u8);

impl CapabilitySet {
    pub const EMPTY: CapabilitySet = CapabilitySet(0);

    /// Build a set from a slice of capabilities (usable in `const` context).
    pub const fn of(caps: &[Capability]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < caps.len() {
            bits |= caps[i].bit();
            i += 1;
        }
        CapabilitySet(bits)
    }

    #[inline]
    pub fn contains(self, cap: Capability) -> bool {
        self.0 & cap.bit() != 0
    }

    /// `true` if every capability in `required` is also in `self`.
    #[inline]
    pub fn satisfies(self, required: CapabilitySet) -> bool {
        self.0 & required.0 == required.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [Capability::Move]
            .into_iter()
            .filter(|c| self.contains(*c))
            .map(Capability::as_str)
            .collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

/// The kind of simulated entity.
///
/// The kind label is also what visualization export writes per agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum AgentKind {
    /// A free cell that moves.
    #[default]
    Cell,
    /// A fixed marker (e.g. an attachment point).  Occupies space but never
    /// moves, so movement modules attached to it are skipped.
    Anchor,
}

impl AgentKind {
    /// Capability table lookup.
    pub const fn capabilities(self) -> CapabilitySet {
        match self {
            AgentKind::Cell   => CapabilitySet::of(&[Capability::Move]),
            AgentKind::Anchor => CapabilitySet::EMPTY,
        }
    }

    /// Human-readable label, used as the `kind` column in export files.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Cell   => "Cell",
            AgentKind::Anchor => "Anchor",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
