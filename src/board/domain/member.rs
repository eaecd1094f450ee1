//! Team roster entities and validated member scalars.

use super::{BoardDomainError, MemberId, ParseRoleError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Workspace role of a team member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Account owner level; unrestricted override authority.
    Director,
    /// Department lead; may create and approve tasks.
    Manager,
    /// Regular member; executes tasks but cannot approve them.
    Employee,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Director => "Director",
            Self::Manager => "Manager",
            Self::Employee => "Employee",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "Director" => Ok(Self::Director),
            "Manager" => Ok(Self::Manager),
            "Employee" => Ok(Self::Employee),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized, validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address, trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidEmail`] when the value does not
    /// contain exactly one `@` with non-empty segments on both sides.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();
        let mut segments = normalized.split('@');
        let local = segments.next().unwrap_or_default();
        let domain = segments.next().unwrap_or_default();
        let has_more_segments = segments.next().is_some();
        let is_valid = !local.is_empty()
            && !domain.is_empty()
            && !has_more_segments
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(BoardDomainError::InvalidEmail(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// CSS class used to tint a member's avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvatarColor(String);

/// Palette the derived avatar color is drawn from.
const AVATAR_PALETTE: [&str; 8] = [
    "bg-blue-600",
    "bg-emerald-500",
    "bg-purple-500",
    "bg-yellow-500",
    "bg-red-500",
    "bg-green-500",
    "bg-pink-500",
    "bg-indigo-500",
];

impl AvatarColor {
    /// Creates an avatar color from an explicit CSS class.
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self(class.into())
    }

    /// Derives a stable palette entry from the member's email address.
    ///
    /// The same address always yields the same color across sessions.
    #[must_use]
    pub fn derived_from_email(email: &EmailAddress) -> Self {
        let digest = Sha256::digest(email.as_str().as_bytes());
        let index = usize::from(digest.first().copied().unwrap_or(0) & 0x07);
        let class = AVATAR_PALETTE.get(index).copied().unwrap_or("bg-blue-600");
        Self(class.to_owned())
    }

    /// Returns the CSS class.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AvatarColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated input for adding a roster member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    /// Full name.
    pub name: String,
    /// Job title shown on the member card.
    pub job_title: String,
    /// Workspace role.
    pub role: Role,
    /// Validated, roster-unique email address.
    pub email: EmailAddress,
}

/// A member of the workspace roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    id: MemberId,
    name: String,
    job_title: String,
    role: Role,
    email: EmailAddress,
    avatar_color: AvatarColor,
    joined_at: DateTime<Utc>,
}

impl TeamMember {
    /// Creates a roster member with a generated id and derived avatar color.
    #[must_use]
    pub fn new(input: NewMember, clock: &impl Clock) -> Self {
        let avatar_color = AvatarColor::derived_from_email(&input.email);
        Self {
            id: MemberId::new(),
            name: input.name,
            job_title: input.job_title,
            role: input.role,
            email: input.email,
            avatar_color,
            joined_at: clock.utc(),
        }
    }

    /// Returns the member identifier.
    #[must_use]
    pub const fn id(&self) -> MemberId {
        self.id
    }

    /// Returns the full name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the job title.
    #[must_use]
    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    /// Returns the workspace role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the avatar color.
    #[must_use]
    pub const fn avatar_color(&self) -> &AvatarColor {
        &self.avatar_color
    }

    /// Returns the join timestamp.
    #[must_use]
    pub const fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }
}
