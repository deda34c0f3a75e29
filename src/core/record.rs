use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification tag attached to every funding-source record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Centralized exchange.
    Cex,
    /// Cross-chain bridge contract.
    Bridge,
    /// Externally owned account.
    Eoa,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Cex => "cex",
            SourceKind::Bridge => "bridge",
            SourceKind::Eoa => "eoa",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single flattened `{address, label, type}` record.
///
/// Field order matters: records serialize as `address`, `label`, `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingRecord {
    pub address: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: SourceKind,
}

impl FundingRecord {
    /// Build a `cex` record, lowercasing both address and label.
    pub fn cex(address: &str, label: &str) -> Self {
        Self {
            address: address.to_lowercase(),
            label: label.to_lowercase(),
            kind: SourceKind::Cex,
        }
    }
}
