use std::fmt;

use super::dataset::{ExchangeWallets, LabelEntry, Malformed};
use super::record::FundingRecord;

/// A label that contributed no records because its value was malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLabel {
    pub label: String,
    pub reason: Malformed,
}

impl fmt::Display for SkippedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Skipped {} \u{2014} {}", self.label, self.reason)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flattened {
    pub records: Vec<FundingRecord>,
    /// Malformed labels in encounter order.
    pub skipped: Vec<SkippedLabel>,
}

/// Flatten `label -> [address]` into `cex` records.
///
/// Records follow label order, then address order within each label.
/// Malformed labels are collected in [`Flattened::skipped`] instead of failing.
pub fn flatten(wallets: &ExchangeWallets) -> Flattened {
    let mut result = Flattened::default();

    for (label, entry) in wallets.iter() {
        match entry {
            LabelEntry::Addresses(addresses) => {
                result.records.extend(
                    addresses
                        .iter()
                        .map(|address| FundingRecord::cex(address, label)),
                );
            }
            LabelEntry::Malformed(reason) => result.skipped.push(SkippedLabel {
                label: label.to_string(),
                reason: *reason,
            }),
        }
    }

    result
}
