//! Command layer
//!
//! A [`Workspace`] pairs a working directory with the project store and
//! implements the five operations as read-modify-write cycles over the
//! whole project list. Interactive input is injected as closures so the
//! operations stay testable without a terminal.

use std::path::PathBuf;

use tracing::info;

use crate::domain::{find_by_id, find_by_name, names, Project};
use crate::error::{EnvarsError, Result};
use crate::storage::{ignore, scanner, Marker, MarkerFile, ProjectStore, MARKER_FILE_NAME};

/// Result of `sync`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub project: String,
    pub files: Vec<String>,
}

/// Result of `pull`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullReport {
    pub project: Project,
    /// True if the project came from an existing marker file
    pub from_marker: bool,
}

impl PullReport {
    pub fn files(&self) -> Vec<&str> {
        self.project.items.iter().map(|f| f.file_name.as_str()).collect()
    }
}

/// A working directory bound to a project store
pub struct Workspace {
    dir: PathBuf,
    store: ProjectStore,
    marker: MarkerFile,
}

impl Workspace {
    pub fn new(dir: impl Into<PathBuf>, store: ProjectStore) -> Self {
        let dir = dir.into();
        let marker = MarkerFile::in_dir(&dir);
        Self { dir, store, marker }
    }

    pub fn marker(&self) -> &MarkerFile {
        &self.marker
    }

    /// Creates a project and links the working directory to it
    ///
    /// `ask_name` is only called when the directory is not linked yet.
    pub fn new_project(&self, ask_name: impl FnOnce() -> Result<String>) -> Result<Project> {
        if let Some(marker) = self.marker.read()? {
            return Err(EnvarsError::AlreadyInitialized {
                name: marker.project_name,
            });
        }

        let name = ask_name()?.trim().to_string();
        if name.is_empty() {
            return Err(EnvarsError::EmptyName);
        }

        let mut projects = self.store.load()?;
        if let Some(existing) = find_by_name(&projects, &name) {
            return Err(EnvarsError::ProjectExists(existing.name.clone()));
        }

        let project = Project::new(name);
        projects.push(project.clone());
        self.store.save(&projects)?;

        self.link(&project)?;

        info!(event = "project.created", name = %project.name, id = %project.id);
        Ok(project)
    }

    /// Replaces the linked project's files with the env files found here
    pub fn sync(&self) -> Result<SyncReport> {
        let marker = self.marker.read()?.ok_or(EnvarsError::NotInitialized)?;

        let mut projects = self.store.load()?;
        let project = projects
            .iter_mut()
            .find(|p| p.id == marker.project_id)
            .ok_or_else(|| EnvarsError::ProjectNotFound(marker.project_name.clone()))?;

        let files = scanner::list_candidate_files(&self.dir)?;
        if files.is_empty() {
            return Err(EnvarsError::NoCandidates(self.dir.clone()));
        }

        let items = scanner::read_snapshots(&self.dir, &files)?;
        project.replace_items(items);

        let report = SyncReport {
            project: project.name.clone(),
            files,
        };
        self.store.save(&projects)?;

        info!(event = "project.synced", name = %report.project, files = report.files.len());
        Ok(report)
    }

    /// Returns all projects in store order
    pub fn list(&self) -> Result<Vec<Project>> {
        self.store.load()
    }

    /// Writes a project's files into the working directory
    ///
    /// The project is taken from the marker file when present; otherwise
    /// `pick` chooses a name among the stored projects.
    pub fn pull(&self, pick: impl FnOnce(&[String]) -> Result<String>) -> Result<PullReport> {
        let projects = self.store.load()?;

        let (project, from_marker) = match self.marker.read()? {
            Some(marker) => {
                let project = find_by_id(&projects, &marker.project_id)
                    .or_else(|| find_by_name(&projects, &marker.project_name))
                    .ok_or(EnvarsError::ProjectNotFound(marker.project_name))?;
                (project, true)
            }
            None => {
                if projects.is_empty() {
                    return Err(EnvarsError::NoProjects);
                }
                let name = pick(&names(&projects))?;
                let name = name.trim();
                if name.is_empty() {
                    return Err(EnvarsError::EmptyName);
                }
                let project = find_by_name(&projects, name)
                    .ok_or_else(|| EnvarsError::ProjectNotFound(name.to_string()))?;
                (project, false)
            }
        };

        scanner::validate_file_names(&project.items)?;
        self.link(project)?;
        scanner::write_snapshots(&self.dir, &project.items)?;

        info!(event = "project.pulled", name = %project.name, files = project.items.len());
        Ok(PullReport {
            project: project.clone(),
            from_marker,
        })
    }

    /// Removes a project from the store and unlinks the working directory
    pub fn delete(&self, pick: impl FnOnce(&[String]) -> Result<String>) -> Result<Project> {
        let mut projects = self.store.load()?;
        if projects.is_empty() {
            return Err(EnvarsError::NoProjects);
        }

        let name = pick(&names(&projects))?;
        let index = projects
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| EnvarsError::ProjectNotFound(name.clone()))?;

        let removed = projects.remove(index);
        self.store.save(&projects)?;
        self.marker.delete()?;

        info!(event = "project.deleted", name = %removed.name, id = %removed.id);
        Ok(removed)
    }

    fn link(&self, project: &Project) -> Result<()> {
        self.marker.write(&Marker::for_project(project))?;
        ignore::ensure_entry(&self.dir, MARKER_FILE_NAME)?;
        Ok(())
    }
}
