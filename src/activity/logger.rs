//! Activity logger for the append-only activity log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use uuid::Uuid;

use crate::error::{DashboardError, DashboardResult};

use super::entry::ActivityEntry;

/// Writes activity entries to a JSON-lines file
///
/// A disabled logger accepts entries and drops them, so callers do not
/// have to branch on the setting.
pub struct ActivityLogger {
    log_path: PathBuf,
    session_id: Uuid,
    enabled: bool,
}

impl ActivityLogger {
    /// Create a logger with a fresh session id
    pub fn new(log_path: PathBuf) -> Self {
        Self {
            log_path,
            session_id: Uuid::new_v4(),
            enabled: true,
        }
    }

    /// Turn writing on or off
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Session id stamped on entries from this process
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append an entry
    pub fn log(&self, entry: &ActivityEntry) -> DashboardResult<()> {
        if !self.enabled {
            return Ok(());
        }

        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DashboardError::Io(format!("Failed to create activity log directory: {}", e))
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| DashboardError::Io(format!("Failed to open activity log: {}", e)))?;

        let json = serde_json::to_string(entry).map_err(|e| {
            DashboardError::Json(format!("Failed to serialize activity entry: {}", e))
        })?;

        writeln!(file, "{}", json)
            .map_err(|e| DashboardError::Io(format!("Failed to write activity entry: {}", e)))?;

        file.flush()
            .map_err(|e| DashboardError::Io(format!("Failed to flush activity log: {}", e)))?;

        Ok(())
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> DashboardResult<Vec<ActivityEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| DashboardError::Io(format!("Failed to open activity log: {}", e)))?;

        let mut entries = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                DashboardError::Io(format!(
                    "Failed to read activity log line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: ActivityEntry = serde_json::from_str(&line).map_err(|e| {
                DashboardError::Json(format!(
                    "Failed to parse activity entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries
    pub fn read_recent(&self, count: usize) -> DashboardResult<Vec<ActivityEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    /// Get the path to the activity log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}
