//! Address-keyed index of known funding sources.
//!
//! The flat record list is convenient to publish but awkward to query, so it is
//! also stored as `{ "<address>": { "label": ..., "type": ... } }` for direct
//! membership checks.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::record::{FundingRecord, SourceKind};
use crate::json_writer::write_json_file;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownSource {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: SourceKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnownSources {
    entries: IndexMap<String, KnownSource>,
}

impl KnownSources {
    /// Index records by address.
    ///
    /// A repeated address takes the later record's label and type but keeps the
    /// position where it first appeared.
    pub fn from_records(records: &[FundingRecord]) -> Self {
        let entries = records
            .iter()
            .map(|record| {
                (
                    record.address.clone(),
                    KnownSource {
                        label: record.label.clone(),
                        kind: record.kind,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Read a flat `[{address, label, type}]` file and index it.
    pub fn from_records_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read records file: {}", path.display()))?;
        let records: Vec<FundingRecord> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse records file: {}", path.display()))?;
        Ok(Self::from_records(&records))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read known sources: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse known sources: {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_json_file(path, self)
    }

    /// Look up an address, ignoring case.
    pub fn lookup(&self, address: &str) -> Option<&KnownSource> {
        self.entries.get(&address.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
