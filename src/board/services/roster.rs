//! Service layer for team roster management.

use crate::board::domain::{
    BoardDomainError, CompanyProfile, EmailAddress, MemberId, NewMember, Role, TeamMember,
};
use crate::workspace::WorkspaceSession;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for adding a roster member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMemberRequest {
    name: String,
    job_title: String,
    role: Role,
    email: String,
}

impl NewMemberRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            job_title: "Staff".to_owned(),
            role,
            email: email.into(),
        }
    }

    /// Sets the job title shown on the member card.
    #[must_use]
    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = job_title.into();
        self
    }
}

/// The account owner seeded as the first Director during onboarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerProfile {
    /// Owner display name.
    pub name: String,
    /// Owner email address.
    pub email: String,
}

/// Service-level errors for roster operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// Another roster member already uses this email address.
    #[error("duplicate email: {0}")]
    DuplicateEmail(EmailAddress),

    /// Removing the target would leave the workspace without a Director.
    #[error("cannot remove last Director")]
    LastDirector,

    /// The referenced member does not exist.
    #[error("team member not found: {0}")]
    UnknownMember(MemberId),
}

/// Result type for roster operations.
pub type RosterResult<T> = Result<T, RosterError>;

/// Team roster orchestration service.
#[derive(Clone)]
pub struct RosterService<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
}

impl<C> RosterService<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a new roster service.
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    /// Adds a member to the roster.
    ///
    /// Emails are unique within the roster; the member id and avatar color
    /// are generated here.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::DuplicateEmail`] when the address is already
    /// taken, or a domain error when the address is invalid.
    pub fn add_member(
        &self,
        session: &mut WorkspaceSession,
        request: NewMemberRequest,
    ) -> RosterResult<TeamMember> {
        let email = EmailAddress::new(request.email)?;
        if session
            .roster()
            .iter()
            .any(|member| member.email() == &email)
        {
            return Err(RosterError::DuplicateEmail(email));
        }

        let member = TeamMember::new(
            NewMember {
                name: request.name,
                job_title: request.job_title,
                role: request.role,
                email,
            },
            &*self.clock,
        );
        session.push_member(member.clone());
        Ok(member)
    }

    /// Removes a member from the roster.
    ///
    /// Tasks assigned to the removed member keep their now-dangling
    /// assignee reference; there is no cascading reassignment in this
    /// scope.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::LastDirector`] when the target is the sole
    /// remaining Director (the roster is left unchanged), or
    /// [`RosterError::UnknownMember`] for unknown ids.
    pub fn remove_member(
        &self,
        session: &mut WorkspaceSession,
        id: MemberId,
    ) -> RosterResult<TeamMember> {
        let target = session.member(id).ok_or(RosterError::UnknownMember(id))?;
        if matches!(target.role(), Role::Director) && session.director_count() == 1 {
            return Err(RosterError::LastDirector);
        }
        session
            .remove_member(id)
            .ok_or(RosterError::UnknownMember(id))
    }

    /// Completes onboarding: seeds the owner as the first Director, adds
    /// the initial staff as Employees, and records the company profile.
    ///
    /// At least one Director exists on the roster afterwards.
    ///
    /// # Errors
    ///
    /// Returns the first roster error raised while seeding members.
    pub fn initialize_workspace(
        &self,
        session: &mut WorkspaceSession,
        owner: OwnerProfile,
        company: CompanyProfile,
        staff: Vec<NewMemberRequest>,
    ) -> RosterResult<()> {
        self.add_member(
            session,
            NewMemberRequest::new(owner.name, owner.email, Role::Director)
                .with_job_title("General Director"),
        )?;
        for request in staff {
            self.add_member(session, request)?;
        }
        session.set_company(company);
        Ok(())
    }
}
