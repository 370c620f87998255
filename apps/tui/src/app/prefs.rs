use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk shape of the preference file. One key, as the original stored a
/// single "dark" flag.
#[derive(Debug, Serialize, Deserialize)]
struct StoredPrefs {
    dark: bool,
}

/// Presentation preferences: the persisted dark-mode flag plus the
/// ephemeral viewport width.
///
/// Storage failures are swallowed on purpose; an unwritable preference file
/// degrades to an in-memory flag for the session rather than an error.
#[derive(Debug, Clone)]
pub struct Preferences {
    dark_mode: bool,
    viewport_width: u16,
    path: Option<PathBuf>,
}

impl Preferences {
    /// Reads the persisted flag. A missing or unreadable file means light
    /// mode, matching a first run.
    pub fn load(path: PathBuf, viewport_width: u16) -> Self {
        let dark_mode = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str::<StoredPrefs>(&raw).ok())
            .is_some_and(|stored| stored.dark);

        Self {
            dark_mode,
            viewport_width,
            path: Some(path),
        }
    }

    /// Non-persisted preferences; also the fallback used in tests.
    pub const fn in_memory(dark_mode: bool, viewport_width: u16) -> Self {
        Self {
            dark_mode,
            viewport_width,
            path: None,
        }
    }

    pub const fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Flips the flag and persists the new value. Only the final value ever
    /// lands on disk.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.persist();
    }

    pub const fn viewport_width(&self) -> u16 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, width: u16) {
        self.viewport_width = width;
    }

    fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };
        let stored = StoredPrefs {
            dark: self.dark_mode,
        };
        if let Ok(raw) = serde_json::to_string(&stored) {
            // StorageUnavailable degrades to in-memory-only silently.
            let _ = fs::write(path, raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_prefs_path(tag: &str) -> PathBuf {
        env::temp_dir().join(format!("covid-tui-prefs-{tag}-{}.json", std::process::id()))
    }

    #[test]
    fn missing_file_defaults_to_light_mode() {
        let prefs = Preferences::load(temp_prefs_path("missing"), 100);
        assert!(!prefs.dark_mode());
    }

    #[test]
    fn garbage_file_defaults_to_light_mode() {
        let path = temp_prefs_path("garbage");
        fs::write(&path, "not json").unwrap();
        let prefs = Preferences::load(path.clone(), 100);
        assert!(!prefs.dark_mode());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn double_toggle_restores_flag_and_disk_reflects_final_value() {
        let path = temp_prefs_path("toggle");
        let mut prefs = Preferences::load(path.clone(), 100);
        assert!(!prefs.dark_mode());

        prefs.toggle_dark_mode();
        prefs.toggle_dark_mode();
        assert!(!prefs.dark_mode());

        let raw = fs::read_to_string(&path).unwrap();
        let stored: StoredPrefs = serde_json::from_str(&raw).unwrap();
        assert!(!stored.dark);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn persisted_flag_survives_reload() {
        let path = temp_prefs_path("reload");
        let mut prefs = Preferences::load(path.clone(), 100);
        prefs.toggle_dark_mode();
        assert!(prefs.dark_mode());

        let reloaded = Preferences::load(path.clone(), 100);
        assert!(reloaded.dark_mode());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn unwritable_path_degrades_to_in_memory() {
        let path = PathBuf::from("/definitely/not/a/writable/dir/prefs.json");
        let mut prefs = Preferences::load(path, 100);
        prefs.toggle_dark_mode();
        // No panic; the flag still flips for the session.
        assert!(prefs.dark_mode());
    }

    #[test]
    fn viewport_width_is_ephemeral() {
        let mut prefs = Preferences::in_memory(false, 80);
        prefs.set_viewport_width(120);
        assert_eq!(prefs.viewport_width(), 120);
    }
}
