//! Light/dark display preference.
//!
//! Read once at startup through [`ThemeSetting::load`] and changed only
//! through [`ThemeSetting::update`]. The calculators never see it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key under which the theme is stored.
pub const THEME_KEY: &str = "kbmw_calc_theme";

const PREFS_ENV: &str = "PAYEST_PREFS";
const DEFAULT_PREFS_FILE: &str = ".payest-prefs.json";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("cannot access preferences '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed preferences '{}': {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Stores
// ---------------------------------------------------------------------------

/// String key-value preference storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Preferences kept as a flat JSON object in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// `--prefs` if given, else `$PAYEST_PREFS`, else `.payest-prefs.json`
    /// in the working directory.
    pub fn resolve(flag: Option<&Path>) -> Self {
        let path = flag
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(PREFS_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFS_FILE));
        JsonFileStore::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(PreferenceError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&contents).map_err(|source| PreferenceError::Malformed {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        // A corrupt file is replaced rather than blocking the update.
        let mut all = self.read_all().unwrap_or_default();
        all.insert(key.to_string(), value.to_string());

        let json = serde_json::to_string_pretty(&all).map_err(|source| {
            PreferenceError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, json).map_err(|source| PreferenceError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

// ---------------------------------------------------------------------------
// Theme setting
// ---------------------------------------------------------------------------

/// The active theme, bound to the store it persists to.
pub struct ThemeSetting<S: PreferenceStore> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeSetting<S> {
    /// A stored choice wins; otherwise the system preference decides.
    /// An unreadable store is logged and treated as empty.
    pub fn load(store: S, system_prefers_dark: bool) -> Self {
        let saved = store.get(THEME_KEY).unwrap_or_else(|e| {
            tracing::warn!("ignoring stored theme: {e}");
            None
        });

        let current = match saved.as_deref() {
            Some("dark") => Theme::Dark,
            Some(_) => Theme::Light,
            None if system_prefers_dark => Theme::Dark,
            None => Theme::Light,
        };
        tracing::debug!(theme = %current, stored = saved.is_some(), "theme loaded");

        ThemeSetting { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Switches the theme and persists it. The in-memory value changes even
    /// if persisting fails.
    pub fn update(&mut self, theme: Theme) -> Result<(), PreferenceError> {
        self.current = theme;
        self.store.set(THEME_KEY, theme.as_str())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
