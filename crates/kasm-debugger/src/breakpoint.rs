use std::collections::BTreeSet;

/// Set of program addresses at which execution pauses.
///
/// Execution pauses **before** the instruction located at a breakpoint
/// address runs. The set holds plain addresses, so a breakpoint placed via a
/// label and one placed via the label's address are the same breakpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakpointSet {
    addrs: BTreeSet<u32>,
}

impl BreakpointSet {
    /// Creates an empty breakpoint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a breakpoint at the given address.
    ///
    /// It returns whether the breakpoint wasn't already set.
    pub fn insert(&mut self, addr: u32) -> bool {
        self.addrs.insert(addr)
    }

    /// Removes the breakpoint at the given address, if any.
    ///
    /// It returns whether a breakpoint was set.
    pub fn remove(&mut self, addr: u32) -> bool {
        self.addrs.remove(&addr)
    }

    /// Returns whether a breakpoint is set at the given address.
    pub fn contains(&self, addr: u32) -> bool {
        self.addrs.contains(&addr)
    }

    /// Removes all breakpoints.
    pub fn clear(&mut self) {
        self.addrs.clear();
    }

    /// Iterates over breakpoint addresses, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.addrs.iter().copied()
    }

    /// Number of breakpoints.
    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    /// Returns whether no breakpoint is set.
    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }
}
