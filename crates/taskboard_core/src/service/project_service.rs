//! Project use-case service.
//!
//! # Responsibility
//! - Provide project create/list/get/delete entry points for UI callers.
//! - Enforce the "name must not be blank" rule above the repository layer.
//!
//! # Invariants
//! - Deleting a project removes the project and all owned tasks as one unit.
//! - Validation failures never reach the store.

use crate::model::project::{Project, ProjectId};
use crate::repo::project_repo::ProjectRepository;
use crate::repo::RepoError;
use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for project use-cases.
#[derive(Debug)]
pub enum ProjectServiceError {
    /// Project name is blank after trim.
    EmptyProjectName,
    /// Target project does not exist.
    ProjectNotFound(ProjectId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ProjectServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyProjectName => write!(f, "project name must not be blank"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ProjectServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ProjectServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::ProjectNotFound(id) => Self::ProjectNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Project service facade.
pub struct ProjectService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one project. Description defaults to empty when not supplied.
    pub fn create_project(
        &self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<Project, ProjectServiceError> {
        let normalized = normalize_name(name.into()).ok_or(ProjectServiceError::EmptyProjectName)?;
        let description = description.unwrap_or_default();

        self.repo
            .create_project(normalized.as_str(), description.as_str())
            .map_err(|err| {
                error!("event=project_create module=service status=error error={err}");
                err.into()
            })
    }

    /// Lists all projects.
    pub fn list_projects(&self) -> Result<Vec<Project>, ProjectServiceError> {
        self.repo.list_projects().map_err(|err| {
            error!("event=project_list module=service status=error error={err}");
            err.into()
        })
    }

    /// Gets one project by id.
    pub fn get_project(&self, id: ProjectId) -> Result<Option<Project>, ProjectServiceError> {
        self.repo.get_project(id).map_err(Into::into)
    }

    /// Deletes one project together with every task it owns.
    pub fn delete_project(&self, id: ProjectId) -> Result<(), ProjectServiceError> {
        self.repo.delete_project(id).map_err(|err| {
            error!("event=project_delete module=service status=error project_id={id} error={err}");
            err.into()
        })
    }
}

/// Trims the name and rejects blank values.
pub(crate) fn normalize_name(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
