//! Project domain model
//!
//! A project is a named bundle of env file snapshots. The store holds an
//! ordered list of projects whose names are unique ignoring case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::ProjectId;

/// A single `KEY=VALUE` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Snapshot of one env file at the time of the last sync
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvFile {
    pub file_name: String,

    #[serde(alias = "envars", default)]
    pub vars: Vec<KeyValue>,
}

impl EnvFile {
    pub fn new(file_name: impl Into<String>, vars: Vec<KeyValue>) -> Self {
        Self {
            file_name: file_name.into(),
            vars,
        }
    }
}

/// A stored project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,

    #[serde(default)]
    pub items: Vec<EnvFile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Creates an empty project with a fresh ID
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let now = Utc::now();
        Self {
            id: ProjectId::generate(&name, now),
            name,
            items: Vec::new(),
            created_at: Some(now),
            synced_at: None,
        }
    }

    /// Replaces every tracked file with a fresh set of snapshots
    ///
    /// Files tracked before but missing from `items` are dropped.
    pub fn replace_items(&mut self, items: Vec<EnvFile>) {
        self.items = items;
        self.synced_at = Some(Utc::now());
    }

    /// Case-insensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

/// Finds a project by name, ignoring case
pub fn find_by_name<'a>(projects: &'a [Project], name: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.has_name(name))
}

/// Finds a project by ID
pub fn find_by_id<'a>(projects: &'a [Project], id: &ProjectId) -> Option<&'a Project> {
    projects.iter().find(|p| &p.id == id)
}

/// Returns project names in store order
pub fn names(projects: &[Project]) -> Vec<String> {
    projects.iter().map(|p| p.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Project> {
        vec![Project::new("Demo"), Project::new("api")]
    }

    #[test]
    fn new_project_is_empty() {
        let project = Project::new("demo");
        assert!(project.items.is_empty());
        assert!(project.created_at.is_some());
        assert!(project.synced_at.is_none());
    }

    #[test]
    fn name_lookup_ignores_case() {
        let projects = sample();
        assert_eq!(find_by_name(&projects, "demo").unwrap().name, "Demo");
        assert_eq!(find_by_name(&projects, "API").unwrap().name, "api");
        assert!(find_by_name(&projects, "web").is_none());
    }

    #[test]
    fn id_lookup() {
        let projects = sample();
        let id = projects[1].id.clone();
        assert_eq!(find_by_id(&projects, &id).unwrap().name, "api");
        assert!(find_by_id(&projects, &ProjectId::from("nope")).is_none());
    }

    #[test]
    fn replace_items_discards_previous_files() {
        let mut project = Project::new("demo");
        project.replace_items(vec![
            EnvFile::new(".env", vec![KeyValue::new("A", "1")]),
            EnvFile::new(".env.local", vec![]),
        ]);
        project.replace_items(vec![EnvFile::new(".env", vec![KeyValue::new("B", "2")])]);

        assert_eq!(project.items.len(), 1);
        assert_eq!(project.items[0].vars, vec![KeyValue::new("B", "2")]);
        assert!(project.synced_at.is_some());
    }

    #[test]
    fn reads_minimal_json() {
        let json = r#"{"id":"a1","name":"demo","items":[{"file_name":".env","vars":[{"key":"FOO","value":"bar"}]}]}"#;
        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.id.as_str(), "a1");
        assert_eq!(project.items[0].vars[0], KeyValue::new("FOO", "bar"));
        assert!(project.created_at.is_none());
    }

    #[test]
    fn reads_legacy_envars_field() {
        let json = r#"{"file_name":".env","envars":[{"key":"FOO","value":"bar"}]}"#;
        let file: EnvFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.vars, vec![KeyValue::new("FOO", "bar")]);
    }

    #[test]
    fn omits_missing_timestamps() {
        let project = Project {
            id: ProjectId::from("a1"),
            name: "demo".into(),
            items: vec![],
            created_at: None,
            synced_at: None,
        };
        let json = serde_json::to_string(&project).unwrap();
        assert_eq!(json, r#"{"id":"a1","name":"demo","items":[]}"#);
    }
}
