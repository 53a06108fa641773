use serde::{Serialize, Deserialize};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

// Default configuration
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_REFRESH_SECS: u64 = 30;

fn default_refresh_secs() -> u64 {
    DEFAULT_REFRESH_SECS
}

fn default_true() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Settings {
    /// Base URL of the FarmAssist backend serving /api/conversations and
    /// /api/get_tts.
    pub backend_url: String,
    pub theme: String,
    /// Seconds between automatic history refreshes. 0 disables polling.
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
    /// Keep an on-disk snapshot of the last fetched history.
    #[serde(default = "default_true")]
    pub offline_cache: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            theme: "dark".to_string(),
            refresh_secs: DEFAULT_REFRESH_SECS,
            offline_cache: true,
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("com", "farmassist", "farmassist-history") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

pub fn load_settings() -> Option<Settings> {
    let path = settings_path()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    if let Some(path) = settings_path() {
        let mut file = fs::File::create(path)?;
        let data = serde_json::to_string_pretty(settings).unwrap();
        file.write_all(data.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults_fill_missing_fields() {
        // Settings written by older builds carry only url and theme
        let s: Settings =
            serde_json::from_str(r#"{"backend_url": "http://farm.local:8000", "theme": "light"}"#)
                .unwrap();
        assert_eq!(s.backend_url, "http://farm.local:8000");
        assert_eq!(s.refresh_secs, DEFAULT_REFRESH_SECS);
        assert!(s.offline_cache);
    }
}
