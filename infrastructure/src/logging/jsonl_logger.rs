//! JSONL file writer for turn events.
//!
//! Each [`TurnEvent`] is serialized as a single JSON line with a `type`
//! field and `timestamp`, appended to the file via a buffered writer.

use moot_application::{TurnEvent, TurnLogger};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL turn logger that writes one JSON object per line.
///
/// Opens the file in append mode so one log accumulates across
/// sessions. Thread-safe via `Mutex<BufWriter<File>>`. Flushes on
/// `Drop`.
pub struct JsonlTurnLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlTurnLogger {
    /// Create a new logger appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened; callers run without
    /// a turn log in that case.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create turn log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open turn log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TurnLogger for JsonlTurnLogger {
    fn log(&self, event: TurnEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        // Build the record: merge payload with type + timestamp
        let record = if let serde_json::Value::Object(mut map) = event.payload {
            map.insert(
                "type".to_string(),
                serde_json::Value::String(event.event_type.to_string()),
            );
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
            serde_json::Value::Object(map)
        } else {
            serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": event.payload,
            })
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // Flush per record: a half-buffered log is useless after a crash.
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlTurnLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn read_lines(path: &Path) -> Vec<String> {
        let mut content = String::new();
        File::open(path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content.trim().lines().map(str::to_string).collect()
    }

    #[test]
    fn test_logger_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moot.turns.jsonl");
        let logger = JsonlTurnLogger::new(&path).unwrap();

        logger.log(TurnEvent::new(
            "turn_started",
            serde_json::json!({
                "conversation": "42",
                "mode": "single",
                "tone": "default"
            }),
        ));

        logger.log(TurnEvent::new(
            "model_answer",
            serde_json::json!({
                "model": "deepseek",
                "success": true
            }),
        ));

        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);

        for line in &lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("type").is_some());
            assert!(value.get("timestamp").is_some());
        }

        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["type"], "turn_started");
        assert_eq!(first["conversation"], "42");
        assert_eq!(first["mode"], "single");

        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(second["type"], "model_answer");
        assert_eq!(second["model"], "deepseek");
    }

    #[test]
    fn test_logger_handles_non_object_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moot.turns.jsonl");
        let logger = JsonlTurnLogger::new(&path).unwrap();

        logger.log(TurnEvent::new("note", serde_json::json!("just a string")));

        drop(logger);

        let lines = read_lines(&path);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["type"], "note");
        assert_eq!(value["data"], "just a string");
    }

    #[test]
    fn test_log_accumulates_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moot.turns.jsonl");

        let first = JsonlTurnLogger::new(&path).unwrap();
        first.log(TurnEvent::new("turn_started", serde_json::json!({})));
        drop(first);

        let second = JsonlTurnLogger::new(&path).unwrap();
        second.log(TurnEvent::new("reply_produced", serde_json::json!({})));
        drop(second);

        assert_eq!(read_lines(&path).len(), 2);
    }
}
