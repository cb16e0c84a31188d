//! Env file commands: `sync`, `pull`

use tracing::warn;

use super::output::Output;
use super::prompt;
use crate::error::Result;
use crate::workspace::Workspace;

pub fn sync(output: &Output, workspace: &Workspace) -> Result<()> {
    let report = workspace.sync()?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "project": report.project,
            "files": report.files,
        }));
    } else {
        output.success(&format!(
            "Synced {} file(s) to project '{}'",
            report.files.len(),
            report.project
        ));
        for file in &report.files {
            output.item(file);
        }
    }

    Ok(())
}

pub fn pull(output: &Output, workspace: &Workspace, name: Option<String>) -> Result<()> {
    let requested = name.clone();
    let report = workspace.pull(|names| {
        prompt::choose_project("Which project do you want to pull?", name, names)
    })?;
    let files = report.files();

    // The marker wins over --name
    if let Some(requested) = requested.filter(|_| report.from_marker) {
        if !report.project.has_name(&requested) {
            warn!(
                event = "pull.name_ignored",
                requested = %requested,
                project = %report.project.name,
                "Directory is already linked; --name was ignored"
            );
        }
    }

    if output.is_json() {
        output.data(&serde_json::json!({
            "project": report.project.name,
            "id": report.project.id.to_string(),
            "from_marker": report.from_marker,
            "files": files,
        }));
    } else if files.is_empty() {
        output.success(&format!(
            "Linked to project '{}', which has no synced files yet. Run 'envars sync' to add some.",
            report.project.name
        ));
    } else {
        output.success(&format!(
            "Pulled {} file(s) from project '{}'",
            files.len(),
            report.project.name
        ));
        for file in files {
            output.item(file);
        }
    }

    Ok(())
}
