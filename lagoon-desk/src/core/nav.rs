//! Navigation memory
//!
//! Remembers which sidebar menu was active and which submenu was open, so
//! the next session starts where the last one left off. Storage is an
//! injected adapter; a storage failure is logged and the in-memory state
//! carries on.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::error::DeskResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavState {
    #[serde(default)]
    pub active_menu: Option<String>,
    #[serde(default)]
    pub open_submenu: Option<String>,
}

pub trait NavPersistence: Send + Sync {
    fn load(&self) -> DeskResult<Option<NavState>>;
    fn save(&self, state: &NavState) -> DeskResult<()>;
}

/// JSON file, normally `<work_dir>/nav.json`
#[derive(Debug, Clone)]
pub struct FileNavPersistence {
    path: PathBuf,
}

impl FileNavPersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NavPersistence for FileNavPersistence {
    fn load(&self) -> DeskResult<Option<NavState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&self, state: &NavState) -> DeskResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-process only
#[derive(Debug, Default)]
pub struct MemoryNavPersistence {
    slot: Mutex<Option<NavState>>,
}

impl NavPersistence for MemoryNavPersistence {
    fn load(&self) -> DeskResult<Option<NavState>> {
        Ok(self.slot.lock().map(|s| s.clone()).unwrap_or_default())
    }

    fn save(&self, state: &NavState) -> DeskResult<()> {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(state.clone());
        }
        Ok(())
    }
}

pub struct NavStore {
    state: NavState,
    persistence: Box<dyn NavPersistence>,
}

impl NavStore {
    /// Restore from `persistence`; unreadable state starts empty
    pub fn new(persistence: Box<dyn NavPersistence>) -> Self {
        let state = match persistence.load() {
            Ok(Some(state)) => state,
            Ok(None) => NavState::default(),
            Err(e) => {
                tracing::warn!(error = %e, "navigation memory unreadable, starting fresh");
                NavState::default()
            }
        };
        Self { state, persistence }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Activate a top-level menu. Its submenu stays open only if the menu
    /// did not change.
    pub fn select_menu(&mut self, menu: impl Into<String>) {
        let menu = menu.into();
        if self.state.active_menu.as_deref() != Some(menu.as_str()) {
            self.state.open_submenu = None;
        }
        self.state.active_menu = Some(menu);
        self.persist();
    }

    /// Open `submenu`, or close it when it is already open
    pub fn toggle_submenu(&mut self, submenu: impl Into<String>) {
        let submenu = submenu.into();
        if self.state.open_submenu.as_deref() == Some(submenu.as_str()) {
            self.state.open_submenu = None;
        } else {
            self.state.open_submenu = Some(submenu);
        }
        self.persist();
    }

    pub fn clear(&mut self) {
        self.state = NavState::default();
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.persistence.save(&self.state) {
            tracing::warn!(error = %e, "failed to save navigation memory");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_and_submenu() {
        let mut store = NavStore::new(Box::new(MemoryNavPersistence::default()));
        store.select_menu("rooms");
        store.toggle_submenu("room-types");
        assert_eq!(store.state().open_submenu.as_deref(), Some("room-types"));

        store.toggle_submenu("room-types");
        assert!(store.state().open_submenu.is_none());

        store.toggle_submenu("room-types");
        store.select_menu("rooms");
        assert_eq!(store.state().open_submenu.as_deref(), Some("room-types"));
        store.select_menu("bookings");
        assert!(store.state().open_submenu.is_none());
        assert_eq!(store.state().active_menu.as_deref(), Some("bookings"));
    }

    #[test]
    fn test_survives_reload_from_same_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("nav.json");

        let mut store = NavStore::new(Box::new(FileNavPersistence::new(&path)));
        store.select_menu("pos");
        store.toggle_submenu("orders");
        drop(store);

        let store = NavStore::new(Box::new(FileNavPersistence::new(&path)));
        assert_eq!(
            store.state(),
            &NavState {
                active_menu: Some("pos".into()),
                open_submenu: Some("orders".into()),
            }
        );
    }

    #[test]
    fn test_corrupt_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nav.json");
        std::fs::write(&path, "{not json").unwrap();
        let mut store = NavStore::new(Box::new(FileNavPersistence::new(&path)));
        assert_eq!(store.state(), &NavState::default());

        store.select_menu("events");
        let saved: NavState = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved.active_menu.as_deref(), Some("events"));
    }
}
