//! Canonical build status taxonomy.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Overall status of a build, independent of the upstream vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildStatus {
    Success,
    Failure,
    Aborted,
    NotBuilt,
    Unstable,
    Timeout,
    Running,
}

/// Lowercase alias → status. The canonical name of every status is listed too.
const ALIASES: &[(&str, BuildStatus)] = &[
    ("success", BuildStatus::Success),
    ("failure", BuildStatus::Failure),
    ("failed", BuildStatus::Failure),
    ("abort", BuildStatus::Aborted),
    ("aborted", BuildStatus::Aborted),
    ("cancel", BuildStatus::Aborted),
    ("cancelled", BuildStatus::Aborted),
    ("not_built", BuildStatus::NotBuilt),
    ("skipped", BuildStatus::NotBuilt),
    ("unstable", BuildStatus::Unstable),
    ("timeout", BuildStatus::Timeout),
    ("timedout", BuildStatus::Timeout),
    ("running", BuildStatus::Running),
    ("building", BuildStatus::Running),
];

impl BuildStatus {
    /// Canonical status name as stored downstream.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
            Self::Aborted => "ABORTED",
            Self::NotBuilt => "NOT_BUILT",
            Self::Unstable => "UNSTABLE",
            Self::Timeout => "TIMEOUT",
            Self::Running => "RUNNING",
        }
    }

    /// Classify a free-form status token.
    ///
    /// Matching is exact after trimming and ignores case. Tokens outside the
    /// alias table yield [`AppError::UnknownStatus`]; there is no fallback.
    pub fn classify(token: &str) -> AppResult<Self> {
        let needle = token.trim().to_lowercase();
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == needle)
            .map(|(_, status)| *status)
            .ok_or_else(|| AppError::UnknownStatus(token.to_string()))
    }
}

impl std::fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
