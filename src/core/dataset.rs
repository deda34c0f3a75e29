//! Typed boundary over the untyped wallets dataset.
//!
//! The dataset is an arbitrary JSON document. Somewhere inside it (by default at
//! `/ethereum/walletsByExchange`) sits an object mapping exchange labels to address
//! arrays. Each value is classified once here so the flattener only deals with
//! [`LabelEntry`] variants.

use std::{
    fmt, fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

pub const DEFAULT_WALLETS_POINTER: &str = "/ethereum/walletsByExchange";

/// Path value that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// Why a label's value could not be used as an address list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// The value was not an array at all.
    NotArray,
    /// The value was an array but this element was not a string.
    NonStringAddress { index: usize },
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Malformed::NotArray => f.write_str("value was not an array"),
            Malformed::NonStringAddress { index } => {
                write!(f, "address at index {} was not a string", index)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelEntry {
    Addresses(Vec<String>),
    Malformed(Malformed),
}

impl LabelEntry {
    /// Classify a raw JSON value.
    pub fn from_value(value: &Value) -> Self {
        let Value::Array(items) = value else {
            return LabelEntry::Malformed(Malformed::NotArray);
        };

        let mut addresses = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::String(address) => addresses.push(address.clone()),
                _ => return LabelEntry::Malformed(Malformed::NonStringAddress { index }),
            }
        }
        LabelEntry::Addresses(addresses)
    }
}

/// Exchange label to address list mapping, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeWallets {
    entries: Vec<(String, LabelEntry)>,
}

impl ExchangeWallets {
    pub fn from_map(map: &Map<String, Value>) -> Self {
        map.iter()
            .map(|(label, value)| (label.clone(), LabelEntry::from_value(value)))
            .collect()
    }

    /// Resolve `pointer` inside a dataset document and classify the mapping found there.
    ///
    /// An empty pointer refers to the document root.
    pub fn from_document(document: &Value, pointer: &str) -> Result<Self> {
        let Some(target) = document.pointer(pointer) else {
            bail!("Dataset has no value at \"{}\"", pointer);
        };
        match target {
            Value::Object(map) => Ok(Self::from_map(map)),
            _ => bail!("Dataset value at \"{}\" must be an object", pointer),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LabelEntry)> {
        self.entries
            .iter()
            .map(|(label, entry)| (label.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, LabelEntry)> for ExchangeWallets {
    fn from_iter<I: IntoIterator<Item = (String, LabelEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Read a dataset file (or stdin for `-`) and extract the wallets mapping.
pub fn load_dataset(path: &Path, pointer: &str) -> Result<ExchangeWallets> {
    let content = if path == Path::new(STDIN_PATH) {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read dataset from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset: {}", path.display()))?
    };

    let document: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse dataset: {}", path.display()))?;

    ExchangeWallets::from_document(&document, pointer)
        .with_context(|| format!("Invalid dataset: {}", path.display()))
}
