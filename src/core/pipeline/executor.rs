//! Pipeline execution implementation.

use crate::core::alphabet::Alphabet;
use crate::core::pipeline::TargetSource;
use crate::core::search::Coordinator;
use crate::core::targets::TargetSet;
use crate::error::{ConfigError, CrackerError};
use crate::events::{
    null_sender, Event, EventSender, PipelineEvent, PipelinePhase, PipelineSummary, TargetsEvent,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Result of a completed recovery run
#[derive(Debug, Clone, serde::Serialize)]
pub struct CrackResult {
    /// Recovered candidates (`prefix + body`), in partition order
    pub matches: Vec<String>,
    /// Number of distinct target digests searched for
    pub targets: usize,
    /// Total candidates hashed and checked
    pub candidates_checked: u64,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

/// Configuration for the pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Candidate alphabet
    pub alphabet: Alphabet,
    /// Candidate body length
    pub length: usize,
    /// Fixed prefix prepended to every candidate
    pub prefix: String,
    /// Worker parallelism
    pub cores: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::lowercase_alphanumeric(),
            length: 1,
            prefix: String::new(),
            cores: 1,
        }
    }
}

/// Builder for pipeline configuration
pub struct PipelineBuilder {
    config: PipelineConfig,
    targets: TargetSource,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            config: PipelineConfig::default(),
            targets: TargetSource::Path(PathBuf::from("hashes.txt")),
        }
    }

    /// Set the candidate alphabet
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.config.alphabet = alphabet;
        self
    }

    /// Set the candidate body length
    pub fn length(mut self, length: usize) -> Self {
        self.config.length = length;
        self
    }

    /// Set the fixed candidate prefix
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    /// Set the worker count
    pub fn cores(mut self, cores: usize) -> Self {
        self.config.cores = cores;
        self
    }

    /// Load target digests from a file at run time
    pub fn targets_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.targets = TargetSource::Path(path.into());
        self
    }

    /// Use an already-loaded target set
    pub fn targets(mut self, targets: TargetSet) -> Self {
        self.targets = TargetSource::Preloaded(targets);
        self
    }

    /// Build the pipeline, validating the configuration
    pub fn build(self) -> Result<Pipeline, ConfigError> {
        if self.config.cores == 0 {
            return Err(ConfigError::InvalidCores {
                requested: self.config.cores,
            });
        }
        Ok(Pipeline {
            config: self.config,
            targets: self.targets,
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The digest recovery pipeline
pub struct Pipeline {
    config: PipelineConfig,
    targets: TargetSource,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Run the pipeline without events
    pub fn run(&self) -> Result<CrackResult, CrackerError> {
        self.run_with_events(&null_sender())
    }

    /// Run the pipeline with event reporting
    pub fn run_with_events(&self, events: &EventSender) -> Result<CrackResult, CrackerError> {
        match self.execute(events) {
            Ok(result) => Ok(result),
            Err(error) => {
                events.send(Event::Pipeline(PipelineEvent::Error {
                    message: error.to_string(),
                }));
                Err(error)
            }
        }
    }

    fn execute(&self, events: &EventSender) -> Result<CrackResult, CrackerError> {
        let start_time = Instant::now();

        events.send(Event::Pipeline(PipelineEvent::Started));

        // Phase 1: load targets
        events.send(Event::Pipeline(PipelineEvent::PhaseChanged {
            phase: PipelinePhase::LoadingTargets,
        }));

        let targets = match &self.targets {
            TargetSource::Path(path) => TargetSet::load(path)?,
            TargetSource::Preloaded(set) => set.clone(),
        };
        events.send(Event::Targets(TargetsEvent::Loaded {
            count: targets.len(),
        }));

        // Phase 2: search
        events.send(Event::Pipeline(PipelineEvent::PhaseChanged {
            phase: PipelinePhase::Searching,
        }));

        let coordinator = Coordinator::new(self.config.cores)?;
        let outcome = coordinator.search(
            &targets,
            &self.config.alphabet,
            self.config.length,
            &self.config.prefix,
            events,
        )?;

        let duration_ms = start_time.elapsed().as_millis() as u64;
        info!(
            matches = outcome.matches.len(),
            candidates = outcome.candidates_checked,
            duration_ms,
            "search complete"
        );

        events.send(Event::Pipeline(PipelineEvent::Completed {
            summary: PipelineSummary {
                targets: targets.len(),
                matches: outcome.matches.len(),
                candidates_checked: outcome.candidates_checked,
                duration_ms,
            },
        }));

        Ok(CrackResult {
            matches: outcome.matches,
            targets: targets.len(),
            candidates_checked: outcome.candidates_checked,
            duration_ms,
        })
    }
}
