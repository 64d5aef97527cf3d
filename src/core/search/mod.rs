//! # Search Module
//!
//! Partitioning and parallel execution of the exhaustive search.
//!
//! ## Partitioning
//! The space of `prefix + body` candidates is split into one work unit per
//! alphabet character: each unit owns the sub-space whose body starts with
//! that character, leaving `length - 1` positions to enumerate. The split
//! happens once at the top; deeper recursion lives inside each unit's own
//! enumeration.
//!
//! ## Ordering
//! The final result order is defined by unit creation order (alphabet order
//! of the split character), not by completion order. Workers may finish in
//! any order; per-unit results are buffered and reassembled in creation
//! order at merge time.
//!
//! ## Exhaustiveness
//! Every candidate in the configured space is checked. A match never stops
//! the search early — multiple targets mean multiple matches are expected.

mod coordinator;

pub use coordinator::Coordinator;

/// An independent, self-contained sub-search assigned to one worker.
///
/// Created by the coordinator, consumed by exactly one worker, destroyed
/// after its result is merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkUnit {
    /// Fixed prefix for every candidate in this unit (caller prefix plus
    /// the unit's split character).
    pub prefix: String,
    /// Remaining body length to enumerate.
    pub length: usize,
}

/// The merged result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Recovered candidates, in partition order (within a partition, in
    /// enumeration order).
    pub matches: Vec<String>,
    /// Total candidates hashed and checked.
    pub candidates_checked: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_unit_carries_extended_prefix_and_remaining_length() {
        let unit = WorkUnit {
            prefix: "xa".to_string(),
            length: 2,
        };
        assert_eq!(unit.prefix, "xa");
        assert_eq!(unit.length, 2);
    }
}
