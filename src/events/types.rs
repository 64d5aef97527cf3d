//! Event type definitions for progress reporting.

use serde::{Deserialize, Serialize};

/// All events emitted by the recovery pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// Target loading events
    Targets(TargetsEvent),
    /// Search phase events
    Search(SearchEvent),
    /// Pipeline-level events
    Pipeline(PipelineEvent),
}

/// Events while loading the target digest set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TargetsEvent {
    /// Target digests were loaded
    Loaded { count: usize },
}

/// Events during the search phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SearchEvent {
    /// The search has started
    Started {
        /// Number of work units dispatched
        units: usize,
        /// Total candidates in the search space (saturating)
        total_candidates: u64,
    },
    /// A candidate matched a target digest
    MatchFound { candidate: String },
    /// A work unit finished its sub-search
    UnitCompleted {
        /// Extended prefix that identified the unit
        prefix: String,
        /// Candidates checked by this unit
        candidates: u64,
        /// Matches found by this unit
        matches: usize,
    },
    /// The search completed
    Completed {
        matches: usize,
        candidates_checked: u64,
    },
}

/// Pipeline-level events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PipelineEvent {
    /// Pipeline has started
    Started,
    /// Moving to a new phase
    PhaseChanged { phase: PipelinePhase },
    /// Pipeline completed successfully
    Completed { summary: PipelineSummary },
    /// Pipeline encountered a fatal error
    Error { message: String },
}

/// Phases of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelinePhase {
    LoadingTargets,
    Searching,
    Reporting,
}

/// Summary of a completed run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSummary {
    /// Distinct target digests
    pub targets: usize,
    /// Candidates recovered
    pub matches: usize,
    /// Candidates hashed and checked
    pub candidates_checked: u64,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl std::fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelinePhase::LoadingTargets => write!(f, "Loading targets"),
            PipelinePhase::Searching => write!(f, "Searching"),
            PipelinePhase::Reporting => write!(f, "Reporting"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_serializable() {
        let event = Event::Search(SearchEvent::UnitCompleted {
            prefix: "a".to_string(),
            candidates: 36,
            matches: 1,
        });

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: Event = serde_json::from_str(&json).unwrap();

        match deserialized {
            Event::Search(SearchEvent::UnitCompleted { candidates, .. }) => {
                assert_eq!(candidates, 36);
            }
            _ => panic!("Wrong event type"),
        }
    }

    #[test]
    fn pipeline_summary_is_serializable() {
        let summary = PipelineSummary {
            targets: 3,
            matches: 2,
            candidates_checked: 1_296,
            duration_ms: 41,
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("1296"));
    }
}
