// File-backed store for persisted group definitions
use crate::application::group_store::GroupStore;
use crate::domain::errors::{DashboardError, DashboardResult};
use crate::domain::group::Group;
use std::path::PathBuf;

/// Keeps the group list as one JSON array on disk, the file-system
/// equivalent of the browser storage key it replaces.
#[derive(Debug, Clone)]
pub struct FileGroupStore {
    path: PathBuf,
}

impl FileGroupStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl GroupStore for FileGroupStore {
    fn load(&self) -> Vec<Group> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("Could not read group storage {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(groups) => groups,
            Err(e) => {
                tracing::warn!(
                    "Corrupt group storage {}, resetting to an empty list: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&self, groups: &[Group]) -> DashboardResult<()> {
        let json = serde_json::to_string_pretty(groups)
            .map_err(|e| DashboardError::Storage(format!("serialize groups: {e}")))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DashboardError::Storage(format!("create {}: {e}", parent.display()))
                })?;
            }
        }

        std::fs::write(&self.path, json)
            .map_err(|e| DashboardError::Storage(format!("write {}: {e}", self.path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "dashboard-groups-{}-{}.json",
            label,
            std::process::id()
        ))
    }

    fn group(id: &str) -> Group {
        Group {
            id: id.to_string(),
            name: "Maison".to_string(),
            sensors: vec!["Paris".to_string(), "Bureau".to_string()],
            icon: "fa-home".to_string(),
            color: "#64ffda".to_string(),
        }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let path = temp_path("round-trip");
        let store = FileGroupStore::new(&path);

        store.save(&[group("1"), group("2")]).unwrap();
        let loaded = store.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0], group("1"));

        // Saves overwrite, they do not append
        store.save(&[group("3")]).unwrap();
        assert_eq!(store.load().len(), 1);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_an_empty_list() {
        let store = FileGroupStore::new(temp_path("missing"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_corrupt_file_resets_to_empty() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileGroupStore::new(&path);
        assert!(store.load().is_empty());

        std::fs::remove_file(&path).unwrap();
    }
}
