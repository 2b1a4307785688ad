use crate::domain::Stay;
use std::fmt;

/// Raw seed data compiled into the binary. There is no remote data
/// source; the "fetch" below only pretends there is one.
const STAYS_JSON: &str = include_str!("../data/stays.json");

/// Failure of the simulated fetch. Policy at the call site is log and
/// continue with an empty store; this never becomes a response error.
#[derive(Debug)]
pub struct LoadError(String);

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to fetch stays: {}", self.0)
    }
}

impl std::error::Error for LoadError {}

enum FetchOutcome {
    Loaded(Vec<Stay>),
    Failed(String),
}

/// A single-shot deferred fetch of the stay collection.
///
/// The outcome is fixed at construction time, the way the original's
/// pre-resolved promise was, but the caller still has to go through the
/// fallible `take()` so the failure branch stays exercisable.
pub struct StayFetch {
    outcome: FetchOutcome,
}

impl StayFetch {
    pub fn resolved(stays: Vec<Stay>) -> Self {
        Self {
            outcome: FetchOutcome::Loaded(stays),
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            outcome: FetchOutcome::Failed(reason.into()),
        }
    }

    /// Consumes the fetch. Single-shot: there is no way to ask twice.
    pub fn take(self) -> Result<Vec<Stay>, LoadError> {
        match self.outcome {
            FetchOutcome::Loaded(stays) => Ok(stays),
            FetchOutcome::Failed(reason) => Err(LoadError(reason)),
        }
    }
}

/// Parses the embedded seed. A malformed seed is a build defect, not a
/// simulated network failure, so this surfaces as a hard error in main.
pub fn seed_stays() -> Result<Vec<Stay>, serde_json::Error> {
    serde_json::from_str(STAYS_JSON)
}
