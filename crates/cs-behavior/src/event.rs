//! Agent lifecycle events that can copy or adapt behavior modules.
//!
//! When an agent divides (or is otherwise cloned), each of its modules is
//! asked whether it applies to the event; those that do produce the module
//! for the new agent via [`BehaviorModule::derive_for`][crate::BehaviorModule::derive_for].

use std::fmt;

/// A lifecycle event on an agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[non_exhaustive]
pub enum EventKind {
    /// The agent splits into two daughters.
    Division,
    /// The agent is copied verbatim (e.g. seeding a population from a template).
    Clone,
}

impl EventKind {
    pub const ALL: [EventKind; 2] = [EventKind::Division, EventKind::Clone];

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            EventKind::Division => 1 << 0,
            EventKind::Clone    => 1 << 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Division => "division",
            EventKind::Clone    => "clone",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of events a module is copied on.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct EventMask(u8);

impl EventMask {
    /// Copied on no event: the module stays with the original agent only.
    pub const NONE: EventMask = EventMask(0);
    /// Copied on every event.
    pub const ALL: EventMask = EventMask::of(&EventKind::ALL);

    pub const fn of(events: &[EventKind]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < events.len() {
            bits |= events[i].bit();
            i += 1;
        }
        EventMask(bits)
    }

    #[inline]
    pub fn contains(self, event: EventKind) -> bool {
        self.0 & event.bit() != 0
    }
}

impl Default for EventMask {
    fn default() -> Self {
        EventMask::ALL
    }
}
