//! Terminal outcomes of one extraction run and the status value a front end
//! renders while a run is in flight.

use std::fmt;
use std::path::PathBuf;

/// Exactly one of these ends every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The feed was empty from page 1, or the site does not serve it.
    NoProducts,
    /// At least one record was written to `path`.
    Exported { count: usize, path: PathBuf },
    /// Any invalid-origin, transport, decode or export failure. The cause is
    /// logged for the operator and deliberately not carried here.
    Failed,
}

impl RunOutcome {
    /// User-facing status line for this outcome.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            RunOutcome::NoProducts => "No products found or not a Shopify site.".to_owned(),
            RunOutcome::Exported { count, .. } => format!("Success! {count} variants exported."),
            RunOutcome::Failed => "Error: See console for details.".to_owned(),
        }
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, RunOutcome::Failed)
    }
}

/// Tri-state run status observed by whatever renders progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RunStatus {
    #[default]
    Idle,
    Running,
    Done(RunOutcome),
}

impl RunStatus {
    /// Whether a new run may be triggered.
    #[must_use]
    pub fn accepts_trigger(&self) -> bool {
        matches!(self, RunStatus::Idle)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Idle => Ok(()),
            RunStatus::Running => f.write_str("Extracting products..."),
            RunStatus::Done(outcome) => f.write_str(&outcome.message()),
        }
    }
}
