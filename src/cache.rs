//! Offline history cache
//!
//! Persists the most recent successfully fetched conversation list so the
//! viewer still shows history when the backend is unreachable. Snapshots
//! are stored in XDG_DATA_HOME/farmassist-history/cache/conversations.json
//! and written by a background thread so the UI never blocks on disk I/O.

use std::fs;
use std::path::PathBuf;
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::record::ConversationRecord;

/// CacheWriter persists history snapshots without blocking the UI thread
pub struct CacheWriter {
    /// Channel to send snapshots to the background thread
    tx: Sender<Vec<ConversationRecord>>,
}

impl CacheWriter {
    /// Create a new cache writer and spawn its background I/O thread
    pub fn new() -> Result<Self, String> {
        let cache_file = cache_file_path()?;

        if let Some(dir) = cache_file.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create cache directory: {}", e))?;
        }

        let (tx, rx) = unbounded::<Vec<ConversationRecord>>();

        thread::spawn(move || {
            run_cache_thread(rx, cache_file);
        });

        Ok(Self { tx })
    }

    /// Queue a snapshot for writing (non-blocking)
    pub fn store(&self, records: &[ConversationRecord]) {
        // If send fails, the writer thread has stopped - silently ignore
        let _ = self.tx.send(records.to_vec());
    }
}

/// Background thread that handles all file I/O
fn run_cache_thread(rx: Receiver<Vec<ConversationRecord>>, cache_file: PathBuf) {
    while let Ok(snapshot) = rx.recv() {
        if let Err(e) = write_snapshot(&cache_file, &snapshot) {
            eprintln!("Cache error: {}", e);
        }
    }
}

/// Write one snapshot, going through a temp file so a crash mid-write
/// never leaves a truncated cache
fn write_snapshot(cache_file: &std::path::Path, snapshot: &[ConversationRecord]) -> Result<(), String> {
    let data = serde_json::to_string(snapshot)
        .map_err(|e| format!("Failed to serialize snapshot: {}", e))?;

    let tmp = cache_file.with_extension("json.tmp");
    fs::write(&tmp, data).map_err(|e| format!("Failed to write cache: {}", e))?;
    fs::rename(&tmp, cache_file).map_err(|e| format!("Failed to replace cache: {}", e))?;

    Ok(())
}

/// Load the cached history from the last run, if any
pub fn load_cached() -> Option<Vec<ConversationRecord>> {
    let path = cache_file_path().ok()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Get the platform-specific cache file path using XDG conventions
fn cache_file_path() -> Result<PathBuf, String> {
    let base = directories::BaseDirs::new()
        .ok_or("Failed to determine home directory")?;

    let data_dir = base.data_dir();
    Ok(data_dir
        .join("farmassist-history")
        .join("cache")
        .join("conversations.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_file_path() {
        let result = cache_file_path();
        assert!(result.is_ok());
        let path = result.unwrap();
        assert!(path.to_string_lossy().contains("farmassist-history"));
        assert!(path.ends_with("cache/conversations.json"));
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let dir = std::env::temp_dir().join("farmassist-history-test");
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("conversations.json");

        let records = vec![ConversationRecord {
            id: 42,
            user_id: None,
            created_at: Some("2024-01-05T15:45:30".to_string()),
            confidence: Some(0.873),
            transcript: Some("আমার ধানের পাতা হলুদ হয়ে যাচ্ছে".to_string()),
            media_url: None,
            tts_path: Some("/tmp/tts/resp_42.mp3".to_string()),
            metadata: None,
        }];

        write_snapshot(&file, &records).unwrap();
        let loaded: Vec<ConversationRecord> =
            serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
        assert_eq!(loaded, records);

        fs::remove_dir_all(&dir).ok();
    }
}
