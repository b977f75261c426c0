use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CocoError, Result};
use crate::models::{Category, Transaction};

/// Working state carried between commands: the last parsed statement, the
/// user's row selection, and category assignments keyed by record id.
/// The file-backed stand-in for a per-user session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workspace {
    pub records: Vec<Transaction>,
    #[serde(default)]
    pub assignments: BTreeMap<u32, Category>,
    #[serde(default)]
    pub selection: Option<Vec<u32>>,
    #[serde(default)]
    pub source: Option<String>,
}

impl Workspace {
    /// The records the exporters will see: the selected subset when a
    /// selection exists, otherwise everything, always in parse order.
    pub fn working_set(&self) -> Vec<Transaction> {
        match &self.selection {
            Some(ids) => self
                .records
                .iter()
                .filter(|r| ids.contains(&r.id))
                .cloned()
                .collect(),
            None => self.records.clone(),
        }
    }

    pub fn find(&self, id: u32) -> Option<&Transaction> {
        self.records.iter().find(|r| r.id == id)
    }
}

/// Loads and saves the workspace as JSON in the data directory. Owned by
/// the CLI layer; the parser and exporters never touch it.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("workspace.json"),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Missing file means a fresh, empty workspace.
    pub fn load(&self) -> Result<Workspace> {
        if !self.path.exists() {
            return Ok(Workspace::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| CocoError::Session(e.to_string()))
    }

    pub fn save(&self, workspace: &Workspace) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(workspace)
            .map_err(|e| CocoError::Session(e.to_string()))?;
        std::fs::write(&self.path, format!("{json}\n"))?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: u32, amount: f64) -> Transaction {
        Transaction {
            id,
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            description: format!("txn {id}"),
            amount,
            category: Category::Uncategorized,
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        let mut workspace = Workspace {
            records: vec![record(0, -5.0), record(1, 10.0)],
            ..Workspace::default()
        };
        workspace.assignments.insert(1, Category::Utilities);
        store.save(&workspace).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.records[1].amount, 10.0);
        assert_eq!(loaded.assignments.get(&1), Some(&Category::Utilities));
        assert!(loaded.selection.is_none());
    }

    #[test]
    fn test_load_missing_file_is_empty_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        let workspace = store.load().unwrap();
        assert!(workspace.records.is_empty());
        assert!(workspace.assignments.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("workspace.json"), "{not json").unwrap();
        let store = SessionStore::new(dir.path());
        assert!(matches!(store.load(), Err(CocoError::Session(_))));
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        store.save(&Workspace::default()).unwrap();
        assert!(store.exists());
        store.clear().unwrap();
        assert!(!store.exists());
        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_working_set_respects_selection_and_order() {
        let workspace = Workspace {
            records: vec![record(0, 1.0), record(1, 2.0), record(2, 3.0)],
            selection: Some(vec![2, 0]),
            ..Workspace::default()
        };
        let set = workspace.working_set();
        let ids: Vec<u32> = set.iter().map(|r| r.id).collect();
        // Parse order, not selection order
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn test_working_set_without_selection_is_everything() {
        let workspace = Workspace {
            records: vec![record(0, 1.0), record(1, 2.0)],
            ..Workspace::default()
        };
        assert_eq!(workspace.working_set().len(), 2);
    }
}
