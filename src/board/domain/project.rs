//! Project grouping and company profile records.

use super::{BoardDomainError, ProjectId};
use serde::{Deserialize, Serialize};

/// Validated completion percentage, 0 to 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress(u8);

impl Progress {
    /// Zero progress.
    pub const ZERO: Self = Self(0);

    /// Creates a validated progress value.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidProgress`] when the value exceeds
    /// 100.
    pub const fn new(value: u8) -> Result<Self, BoardDomainError> {
        if value > 100 {
            return Err(BoardDomainError::InvalidProgress(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying percentage.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Informational project grouping; not enforced against tasks in this scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    progress: Progress,
}

impl Project {
    /// Creates a project with a generated id.
    #[must_use]
    pub fn new(name: impl Into<String>, progress: Progress) -> Self {
        Self {
            id: ProjectId::new(),
            name: name.into(),
            progress,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the completion percentage.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }
}

/// Company profile captured during onboarding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Company or organisation name.
    pub name: String,
    /// Approximate headcount band, e.g. `"1-10"`.
    pub employees_count: String,
    /// Official contact email.
    pub contact_email: String,
    /// Contact phone number.
    pub phone: String,
    /// Company website, if any.
    pub website: String,
}
