// Global preferences for the screen (not user-specific)
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;
use tracing::warn;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GlobalPrefs {
    pub slide_animation_enabled: bool,
    pub banner_glitch_enabled: bool,
}

impl Default for GlobalPrefs {
    fn default() -> Self {
        Self {
            slide_animation_enabled: true,
            banner_glitch_enabled: true,
        }
    }
}

impl GlobalPrefs {
    pub fn config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".portal_login_prefs.json")
    }

    pub fn load() -> Self {
        let path = Self::config_path();
        if let Ok(data) = fs::read_to_string(&path) {
            if let Ok(prefs) = serde_json::from_str(&data) {
                return prefs;
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        let path = Self::config_path();
        match serde_json::to_string_pretty(self) {
            Ok(data) => {
                if let Err(e) = fs::write(&path, data) {
                    warn!(path = %path.display(), "failed to save preferences: {e}");
                }
            }
            Err(e) => warn!("failed to serialize preferences: {e}"),
        }
    }
}

static GLOBAL_PREFS: OnceCell<RwLock<GlobalPrefs>> = OnceCell::new();

pub fn init_global_prefs() {
    let prefs = GlobalPrefs::load();
    GLOBAL_PREFS.set(RwLock::new(prefs)).ok();
}

pub fn global_prefs() -> std::sync::RwLockReadGuard<'static, GlobalPrefs> {
    GLOBAL_PREFS
        .get()
        .expect("GlobalPrefs not initialized")
        .read()
        .expect("RwLock poisoned")
}

pub fn global_prefs_mut() -> std::sync::RwLockWriteGuard<'static, GlobalPrefs> {
    GLOBAL_PREFS
        .get()
        .expect("GlobalPrefs not initialized")
        .write()
        .expect("RwLock poisoned")
}
