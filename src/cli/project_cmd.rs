//! Project commands: `new`, `list`, `delete`

use tracing::debug;

use super::output::Output;
use super::prompt;
use crate::error::{EnvarsError, Result};
use crate::workspace::Workspace;

pub fn new_project(output: &Output, workspace: &Workspace, name: Option<String>) -> Result<()> {
    let project = workspace.new_project(|| prompt::project_name(name))?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "id": project.id.to_string(),
            "name": project.name,
        }));
    } else {
        output.success(&format!("Created project '{}'", project.name));
        output.item("Add your .env files here, then run 'envars sync'.");
    }

    Ok(())
}

pub fn list_projects(output: &Output, workspace: &Workspace) -> Result<()> {
    let projects = workspace.list()?;
    debug!(event = "list", projects = projects.len());

    if output.is_json() {
        let items: Vec<_> = projects
            .iter()
            .map(|p| {
                serde_json::json!({
                    "id": p.id.to_string(),
                    "name": p.name,
                    "files": p.items.iter().map(|f| f.file_name.as_str()).collect::<Vec<_>>(),
                })
            })
            .collect();
        output.data(&items);
        return Ok(());
    }

    if projects.is_empty() {
        return Err(EnvarsError::NoProjects);
    }

    for project in &projects {
        output.line(&project.name);
    }

    Ok(())
}

pub fn delete_project(output: &Output, workspace: &Workspace, name: Option<String>) -> Result<()> {
    let removed = workspace.delete(|names| {
        prompt::choose_project("Which project do you want to delete?", name, names)
    })?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "deleted": true,
            "id": removed.id.to_string(),
            "name": removed.name,
        }));
    } else {
        output.success(&format!("Deleted project '{}'", removed.name));
    }

    Ok(())
}
