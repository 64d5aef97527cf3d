//! Parallel search coordinator.
//!
//! Builds one work unit per alphabet character, dispatches them across a
//! bounded worker pool, and merges per-unit match lists in unit creation
//! order regardless of completion order.

use crate::core::alphabet::Alphabet;
use crate::core::enumerator::{space_size, LexicographicEnumerator};
use crate::core::hasher::{CandidateHasher, Md5Hasher};
use crate::core::search::{SearchOutcome, WorkUnit};
use crate::core::targets::TargetSet;
use crate::error::{ConfigError, SearchError};
use crate::events::{Event, EventSender, SearchEvent};
use rayon::prelude::*;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::debug;

/// Coordinates the exhaustive search across a bounded pool of workers.
pub struct Coordinator<H = Md5Hasher> {
    hasher: H,
    cores: usize,
}

impl Coordinator<Md5Hasher> {
    /// Create a coordinator using MD5 with the requested worker count.
    pub fn new(cores: usize) -> Result<Self, ConfigError> {
        Self::with_hasher(Md5Hasher::new(), cores)
    }
}

impl<H: CandidateHasher> Coordinator<H> {
    /// Create a coordinator with a custom hasher (mainly for tests).
    ///
    /// The pool size is exactly `cores` regardless of alphabet size; excess
    /// work units queue until a worker frees up.
    pub fn with_hasher(hasher: H, cores: usize) -> Result<Self, ConfigError> {
        if cores == 0 {
            return Err(ConfigError::InvalidCores { requested: cores });
        }
        Ok(Self { hasher, cores })
    }

    /// Run the exhaustive search and return all matches in partition order.
    ///
    /// An empty target set still performs the full search and returns an
    /// empty outcome. A worker panic fails the whole run with
    /// [`SearchError::WorkerPanicked`]; a failed unit is never retried and
    /// never reported as an empty result.
    pub fn search(
        &self,
        targets: &TargetSet,
        alphabet: &Alphabet,
        length: usize,
        prefix: &str,
        events: &EventSender,
    ) -> Result<SearchOutcome, SearchError> {
        // Degenerate case: the prefix is the entire candidate
        if length == 0 {
            events.send(Event::Search(SearchEvent::Started {
                units: 1,
                total_candidates: 1,
            }));
            let unit = WorkUnit {
                prefix: prefix.to_string(),
                length: 0,
            };
            let (matches, checked) = self.crack_unit(&unit, alphabet, targets, events);
            events.send(Event::Search(SearchEvent::Completed {
                matches: matches.len(),
                candidates_checked: checked,
            }));
            return Ok(SearchOutcome {
                matches,
                candidates_checked: checked,
            });
        }

        // One unit per first-character choice, in alphabet order
        let units: Vec<WorkUnit> = alphabet
            .chars()
            .iter()
            .map(|&c| WorkUnit {
                prefix: format!("{prefix}{c}"),
                length: length - 1,
            })
            .collect();

        events.send(Event::Search(SearchEvent::Started {
            units: units.len(),
            total_candidates: space_size(alphabet.len(), length),
        }));
        debug!(
            units = units.len(),
            cores = self.cores,
            length,
            "dispatching work units"
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.cores)
            .build()?;

        // Ordered collect: rayon reassembles per-unit results in input
        // order even when workers complete out of order
        let per_unit: Result<Vec<(Vec<String>, u64)>, SearchError> = pool.install(|| {
            units
                .par_iter()
                .enumerate()
                .map(|(index, unit)| {
                    catch_unwind(AssertUnwindSafe(|| {
                        self.crack_unit(unit, alphabet, targets, events)
                    }))
                    .map_err(|_| SearchError::WorkerPanicked { unit: index })
                })
                .collect()
        });

        let per_unit = per_unit?;
        let mut matches = Vec::new();
        let mut candidates_checked = 0u64;
        for (unit_matches, checked) in per_unit {
            matches.extend(unit_matches);
            candidates_checked += checked;
        }

        events.send(Event::Search(SearchEvent::Completed {
            matches: matches.len(),
            candidates_checked,
        }));

        Ok(SearchOutcome {
            matches,
            candidates_checked,
        })
    }

    /// Exhaust one unit: enumerate its remaining body positions, hash each
    /// full candidate, and collect the ones whose digest is a target.
    fn crack_unit(
        &self,
        unit: &WorkUnit,
        alphabet: &Alphabet,
        targets: &TargetSet,
        events: &EventSender,
    ) -> (Vec<String>, u64) {
        let mut matches = Vec::new();
        let mut checked = 0u64;

        for body in LexicographicEnumerator::new(alphabet, unit.length) {
            let candidate = format!("{}{}", unit.prefix, body);
            checked += 1;
            if targets.contains(&self.hasher.digest_hex(&candidate)) {
                events.send(Event::Search(SearchEvent::MatchFound {
                    candidate: candidate.clone(),
                }));
                matches.push(candidate);
            }
        }

        events.send(Event::Search(SearchEvent::UnitCompleted {
            prefix: unit.prefix.clone(),
            candidates: checked,
            matches: matches.len(),
        }));
        (matches, checked)
    }
}
