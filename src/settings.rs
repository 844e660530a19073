use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

use crate::log_warn;

const ENABLE_LOGS: bool = true;

pub const SETTINGS_ENV_VAR: &str = "MOODLENS_SETTINGS";
const DEFAULT_SETTINGS_FILE: &str = "moodlens.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisSettings {
    /// Pause before each analysis to mimic a remote call. Zero disables it.
    pub simulated_latency_ms: u64,
    pub enable_logs: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 800,
            enable_logs: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct UserSettings {
    analysis: AnalysisSettings,
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

/// `$MOODLENS_SETTINGS`, or `moodlens.json` in the working directory.
pub fn default_settings_path() -> PathBuf {
    env::var_os(SETTINGS_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log_warn!(
                    "Ignoring malformed settings in {}: {}",
                    path.display(),
                    err
                );
                UserSettings::default()
            })
        } else {
            UserSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn analysis(&self) -> AnalysisSettings {
        self.data
            .read()
            .map(|guard| guard.analysis.clone())
            .unwrap_or_default()
    }

    pub fn update_analysis(&self, settings: AnalysisSettings) -> Result<()> {
        let mut guard = self
            .data
            .write()
            .map_err(|_| anyhow::anyhow!("settings lock poisoned"))?;
        guard.analysis = settings;
        self.persist(&guard)
    }

    pub fn reload(&self) -> Result<()> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let data: UserSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid settings in {}", self.path.display()))?;
        let mut guard = self
            .data
            .write()
            .map_err(|_| anyhow::anyhow!("settings lock poisoned"))?;
        *guard = data;
        Ok(())
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_path() -> PathBuf {
        env::temp_dir().join(format!("moodlens-settings-{}.json", Uuid::new_v4()))
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let store = SettingsStore::new(temp_path()).unwrap();
        assert_eq!(store.analysis(), AnalysisSettings::default());
        assert_eq!(store.analysis().simulated_latency_ms, 800);
    }

    #[test]
    fn test_update_persists_and_reloads() {
        let path = temp_path();
        let store = SettingsStore::new(path.clone()).unwrap();
        let updated = AnalysisSettings {
            simulated_latency_ms: 0,
            enable_logs: false,
        };
        store.update_analysis(updated.clone()).unwrap();

        let reopened = SettingsStore::new(path.clone()).unwrap();
        assert_eq!(reopened.analysis(), updated);

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("simulatedLatencyMs"));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_path();
        fs::write(&path, r#"{"analysis": {"simulatedLatencyMs": 25}}"#).unwrap();
        let store = SettingsStore::new(path.clone()).unwrap();
        assert_eq!(store.analysis().simulated_latency_ms, 25);
        assert!(store.analysis().enable_logs);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let path = temp_path();
        fs::write(&path, "not json").unwrap();
        let store = SettingsStore::new(path.clone()).unwrap();
        assert_eq!(store.analysis(), AnalysisSettings::default());
        assert!(store.reload().is_err());
        fs::remove_file(&path).unwrap();
    }
}
