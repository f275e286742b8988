//! Usage: Append-only JSONL audit log of prompt/response exchanges.

use crate::blocking;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

pub(super) const AUDIT_FILE_NAME: &str = "log.jsonl";

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct AuditEntry {
    pub(super) prompt: String,
    pub(super) response: String,
}

/// Serializes concurrent appends so each entry lands as one intact line.
#[derive(Debug)]
pub(super) struct AuditLog {
    dir: PathBuf,
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl AuditLog {
    pub(super) fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            path: dir.join(AUDIT_FILE_NAME),
            write_lock: Mutex::new(()),
        }
    }

    pub(super) async fn append(&self, entry: AuditEntry) -> Result<(), String> {
        let line = serde_json::to_string(&entry).map_err(|e| format!("AUDIT_SERIALIZE: {e}"))?;

        let _guard = self.write_lock.lock().await;
        let dir = self.dir.clone();
        let path = self.path.clone();
        blocking::run("audit_append", move || append_line(&dir, &path, &line)).await
    }
}

fn append_line(dir: &Path, path: &Path, line: &str) -> Result<(), String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("AUDIT_DIR: failed to create {}: {e}", dir.display()))?;

    // Opened in append mode only for this write; the handle drops on return.
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("AUDIT_OPEN: failed to open {}: {e}", path.display()))?;

    file.write_all(format!("{line}\n").as_bytes())
        .map_err(|e| format!("AUDIT_WRITE: failed to append to {}: {e}", path.display()))
}
