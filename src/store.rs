//! Named-pattern persistence as a JSON array file.
//!
//! Stored data is never trusted: every read re-validates each entry and drops
//! the ones that fail instead of surfacing a parse error.

use crate::consts::{AUTO_NAME_PREFIX, MAX_SCORE, MIN_SCORABLE_LEN, SAVED_NAME_MAX_CHARS};
use crate::error::{LfResult, LockForgeError};
use crate::geometry::{is_valid_node, NodeIndex};
use crate::pattern::Pattern;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedEntry {
    pub name: String,
    pub seq: Vec<NodeIndex>,
    pub len: usize,
    pub score: u8,
}

pub fn truncate_name(name: &str) -> String {
    name.trim().chars().take(SAVED_NAME_MAX_CHARS).collect()
}

impl SavedEntry {
    pub fn new(name: &str, pattern: &Pattern, score: u8) -> LfResult<Self> {
        if !pattern.is_scorable() {
            return Err(LockForgeError::Validation(format!(
                "a saved pattern needs at least {} nodes, got {}",
                MIN_SCORABLE_LEN,
                pattern.len()
            )));
        }
        Ok(Self {
            name: truncate_name(name),
            seq: pattern.nodes().to_vec(),
            len: pattern.len(),
            score: score.min(MAX_SCORE),
        })
    }

    /// Re-validates an untrusted JSON value. The stored sequence is re-run
    /// through the pattern builder, so the result is always canonical.
    pub fn sanitize(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        let name = match obj.get("name") {
            Some(Value::String(s)) => truncate_name(s),
            Some(Value::Null) | None => String::new(),
            Some(other) => truncate_name(&other.to_string()),
        };

        let taps: Vec<NodeIndex> = obj
            .get("seq")?
            .as_array()?
            .iter()
            .filter_map(Value::as_u64)
            .filter(|&n| n <= u8::MAX as u64 && is_valid_node(n as u8))
            .map(|n| n as u8)
            .collect();
        // Repeats and skipped middles are resolved before the length check.
        let pattern = Pattern::from_taps(taps);
        if !pattern.is_scorable() {
            return None;
        }
        let seq = pattern.nodes().to_vec();

        let score = obj
            .get("score")?
            .as_u64()
            .filter(|&s| s <= MAX_SCORE as u64)? as u8;

        Some(Self {
            name,
            len: seq.len(),
            seq,
            score,
        })
    }

    /// The stored sequence, re-run through the pattern builder.
    pub fn pattern(&self) -> Pattern {
        Pattern::from_taps(self.seq.iter().copied())
    }
}

/// Parses `"<prefix> <n>"` (space optional) into `n`.
fn auto_name_number(name: &str) -> Option<u64> {
    let rest = name.strip_prefix(AUTO_NAME_PREFIX)?.trim_start();
    if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok().filter(|&n| n > 0)
}

/// Next free default name: one past the highest numbered default name, or
/// `entries + 1` when none exist.
pub fn next_auto_name(entries: &[SavedEntry]) -> String {
    let next = entries
        .iter()
        .filter_map(|e| auto_name_number(&e.name))
        .max()
        .map_or(entries.len() as u64 + 1, |n| n + 1);
    format!("{} {}", AUTO_NAME_PREFIX, next)
}

#[derive(Debug, Clone)]
pub struct PatternStore {
    path: PathBuf,
}

impl PatternStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All valid entries; a missing or corrupt file reads as empty.
    pub fn load(&self) -> Vec<SavedEntry> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };
        let root: Value = match serde_json::from_str(&content) {
            Ok(v) => v,
            Err(e) => {
                warn!("Ignoring unreadable store {:?}: {}", self.path, e);
                return Vec::new();
            }
        };
        let Some(items) = root.as_array() else {
            warn!("Ignoring store {:?}: root is not an array", self.path);
            return Vec::new();
        };

        let entries: Vec<SavedEntry> = items.iter().filter_map(SavedEntry::sanitize).collect();
        if entries.len() < items.len() {
            warn!(
                "Dropped {} invalid saved entries from {:?}",
                items.len() - entries.len(),
                self.path
            );
        }
        entries
    }

    fn write(&self, entries: &[SavedEntry]) -> LfResult<()> {
        let clean: Vec<SavedEntry> = entries
            .iter()
            .filter(|e| e.seq.len() >= MIN_SCORABLE_LEN)
            .map(|e| SavedEntry {
                name: truncate_name(&e.name),
                len: e.seq.len(),
                score: e.score.min(MAX_SCORE),
                seq: e.seq.clone(),
            })
            .collect();

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&clean)?)?;
        info!("💾 Wrote {} saved patterns to {:?}", clean.len(), self.path);
        Ok(())
    }

    /// Appends a pattern, naming it automatically when `name` is blank.
    pub fn add(&self, name: Option<&str>, pattern: &Pattern, score: u8) -> LfResult<SavedEntry> {
        let mut entries = self.load();
        let name = match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(n) => n.to_string(),
            None => next_auto_name(&entries),
        };
        let entry = SavedEntry::new(&name, pattern, score)?;
        entries.push(entry.clone());
        self.write(&entries)?;
        Ok(entry)
    }

    pub fn remove(&self, index: usize) -> LfResult<Option<SavedEntry>> {
        let mut entries = self.load();
        if index >= entries.len() {
            return Ok(None);
        }
        let removed = entries.remove(index);
        self.write(&entries)?;
        Ok(Some(removed))
    }

    pub fn clear_all(&self) -> LfResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            info!("🗑️  Cleared saved patterns at {:?}", self.path);
        }
        Ok(())
    }
}
