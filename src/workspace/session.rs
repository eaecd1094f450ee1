//! The workspace session: owner of all mutable board and roster state.

use crate::board::domain::{
    Actor, BoardProjection, CompanyProfile, MemberId, Progress, Project, ProjectId, Role, Task,
    TaskId, TeamMember,
};
use crate::workspace::ports::{
    COMPANY_PROFILE_KEY, KeyValueStore, SESSION_USER_KEY, StoreError, StoreResult, TASK_LIST_KEY,
    TEAM_ROSTER_KEY,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The signed-in user record, persisted across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Provider access token, when signed in through the mail provider.
    pub access_token: Option<String>,
}

/// Explicit session-owned state for one workspace.
///
/// The task set and team roster are owned here and mutated only through
/// the lifecycle and roster services; the rendering layer reads through
/// the accessors and the [`BoardProjection`].
#[derive(Debug, Clone)]
pub struct WorkspaceSession {
    actor: Actor,
    user: Option<SessionUser>,
    company: Option<CompanyProfile>,
    roster: Vec<TeamMember>,
    tasks: Vec<Task>,
    projects: Vec<Project>,
    default_project_id: ProjectId,
}

impl WorkspaceSession {
    /// Creates an empty session acting as `actor`.
    ///
    /// A general project is seeded so new tasks always have a grouping.
    #[must_use]
    pub fn new(actor: Actor) -> Self {
        let general = Project::new("General", Progress::ZERO);
        let default_project_id = general.id();
        Self {
            actor,
            user: None,
            company: None,
            roster: Vec::new(),
            tasks: Vec::new(),
            projects: vec![general],
            default_project_id,
        }
    }

    /// Loads a session from the store, degrading to empty state on failure.
    ///
    /// Each persisted key is read independently. A missing key silently
    /// yields its default; an unexpected read or parse failure is logged
    /// and replaced by the empty value rather than propagated.
    pub async fn load<S: KeyValueStore + ?Sized>(store: &S, actor: Actor) -> Self {
        let mut session = Self::new(actor);
        session.user = load_key(store, SESSION_USER_KEY).await;
        session.company = load_key(store, COMPANY_PROFILE_KEY).await;
        session.roster = load_key(store, TEAM_ROSTER_KEY).await.unwrap_or_default();
        session.tasks = load_key(store, TASK_LIST_KEY).await.unwrap_or_default();
        session
    }

    /// Returns the current acting user.
    #[must_use]
    pub const fn actor(&self) -> Actor {
        self.actor
    }

    /// Switches the acting role (a local simulation toggle).
    pub const fn set_actor(&mut self, actor: Actor) {
        self.actor = actor;
    }

    /// Returns the signed-in user record, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Signs a user in and persists the record.
    ///
    /// # Errors
    ///
    /// Returns a store error when the write fails; the in-memory session
    /// is updated regardless.
    pub async fn login<S: KeyValueStore + ?Sized>(
        &mut self,
        user: SessionUser,
        store: &S,
    ) -> StoreResult<()> {
        let json = serde_json::to_string(&user).map_err(StoreError::backend)?;
        self.user = Some(user);
        store.set(SESSION_USER_KEY, &json).await
    }

    /// Signs the user out and clears the persisted record.
    ///
    /// This is the force-termination path taken when the mail provider
    /// reports an expired session.
    ///
    /// # Errors
    ///
    /// Returns a store error when the removal fails.
    pub async fn logout<S: KeyValueStore + ?Sized>(&mut self, store: &S) -> StoreResult<()> {
        self.user = None;
        store.remove(SESSION_USER_KEY).await
    }

    /// Returns the company profile, if onboarding has completed.
    #[must_use]
    pub const fn company(&self) -> Option<&CompanyProfile> {
        self.company.as_ref()
    }

    pub(crate) fn set_company(&mut self, company: CompanyProfile) {
        self.company = Some(company);
    }

    /// Returns the team roster.
    #[must_use]
    pub fn roster(&self) -> &[TeamMember] {
        &self.roster
    }

    /// Looks up a roster member by id.
    #[must_use]
    pub fn member(&self, id: MemberId) -> Option<&TeamMember> {
        self.roster.iter().find(|member| member.id() == id)
    }

    /// Returns the number of Directors currently on the roster.
    #[must_use]
    pub fn director_count(&self) -> usize {
        self.roster
            .iter()
            .filter(|member| matches!(member.role(), Role::Director))
            .count()
    }

    pub(crate) fn push_member(&mut self, member: TeamMember) {
        self.roster.push(member);
    }

    pub(crate) fn remove_member(&mut self, id: MemberId) -> Option<TeamMember> {
        let position = self.roster.iter().position(|member| member.id() == id)?;
        Some(self.roster.remove(position))
    }

    /// Returns the task set.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub(crate) fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    pub(crate) fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub(crate) fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == id)?;
        Some(self.tasks.remove(position))
    }

    /// Returns the known projects.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Returns the project new tasks default to.
    #[must_use]
    pub const fn default_project_id(&self) -> ProjectId {
        self.default_project_id
    }

    /// Projects the current task set into board columns.
    #[must_use]
    pub fn board(&self) -> BoardProjection {
        BoardProjection::project(&self.tasks)
    }

    /// Persists the task list.
    ///
    /// # Errors
    ///
    /// Returns a store error when serialization or the write fails.
    pub async fn persist_tasks<S: KeyValueStore + ?Sized>(&self, store: &S) -> StoreResult<()> {
        persist_key(store, TASK_LIST_KEY, &self.tasks).await
    }

    /// Persists the team roster.
    ///
    /// # Errors
    ///
    /// Returns a store error when serialization or the write fails.
    pub async fn persist_roster<S: KeyValueStore + ?Sized>(&self, store: &S) -> StoreResult<()> {
        persist_key(store, TEAM_ROSTER_KEY, &self.roster).await
    }

    /// Persists the company profile, when present.
    ///
    /// # Errors
    ///
    /// Returns a store error when serialization or the write fails.
    pub async fn persist_company<S: KeyValueStore + ?Sized>(&self, store: &S) -> StoreResult<()> {
        if let Some(company) = &self.company {
            persist_key(store, COMPANY_PROFILE_KEY, company).await?;
        }
        Ok(())
    }

    /// Persists every changed-on-write key in one pass.
    ///
    /// # Errors
    ///
    /// Returns the first store error encountered.
    pub async fn persist_all<S: KeyValueStore + ?Sized>(&self, store: &S) -> StoreResult<()> {
        self.persist_company(store).await?;
        self.persist_roster(store).await?;
        self.persist_tasks(store).await
    }
}

/// Reads and deserializes one persisted key, degrading to `None` on error.
async fn load_key<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get(key).await {
        Ok(value) => value?,
        Err(err) => {
            log::error!("failed to read '{key}' from the session store: {err}");
            return None;
        }
    };
    serde_json::from_str(&raw).map_or_else(
        |err| {
            log::warn!("discarding unreadable '{key}' session data: {err}");
            None
        },
        Some,
    )
}

/// Serializes and writes one persisted key.
async fn persist_key<T, S>(store: &S, key: &str, value: &T) -> StoreResult<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(value).map_err(StoreError::backend)?;
    store.set(key, &json).await
}
