//! Per-technology outcomes and the aggregated run report.

use serde::Serialize;

/// What happened to one detected technology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "reason", rename_all = "snake_case")]
pub enum SetupOutcome {
    /// Install and setup both completed.
    Succeeded,
    /// The install step failed; the setup step was never attempted.
    InstallFailed(String),
    /// The install step succeeded but the setup step failed.
    SetupFailed(String),
}

impl SetupOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SetupOutcome::Succeeded)
    }
}

/// A technology's name paired with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechnologyOutcome {
    pub technology: String,
    #[serde(flatten)]
    pub outcome: SetupOutcome,
}

/// Overall classification of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// No marker files matched; nothing was attempted.
    NothingDetected,
    /// Every detected technology succeeded.
    Clean,
    /// Some technologies succeeded, some failed.
    Partial,
    /// Every detected technology failed.
    AllFailed,
}

/// Aggregated outcome of one invocation. Constructed fresh per run;
/// nothing persists across invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub outcomes: Vec<TechnologyOutcome>,
}

impl RunReport {
    /// Record the outcome for a technology, preserving processing order.
    pub fn record(&mut self, technology: &str, outcome: SetupOutcome) {
        self.outcomes.push(TechnologyOutcome {
            technology: technology.to_string(),
            outcome,
        });
    }

    /// Number of technologies that completed install and setup.
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.outcome.is_success())
            .count()
    }

    /// Number of technologies that failed at either step.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Classify the run.
    pub fn status(&self) -> RunStatus {
        if self.outcomes.is_empty() {
            RunStatus::NothingDetected
        } else if self.failed() == 0 {
            RunStatus::Clean
        } else if self.succeeded() == 0 {
            RunStatus::AllFailed
        } else {
            RunStatus::Partial
        }
    }
}
