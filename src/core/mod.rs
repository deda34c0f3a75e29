//! Core transform: dataset boundary, flattening, and the known sources index.
//!
//! ## Module Structure
//!
//! - `dataset`: Loads the wallets dataset and classifies each label's value
//! - `flatten`: Turns `label -> [address]` into flat `cex` records
//! - `known_sources`: Address-keyed index built from flat records
//! - `record`: `FundingRecord` and `SourceKind`

pub mod dataset;
pub mod flatten;
pub mod known_sources;
pub mod record;

pub use dataset::{
    DEFAULT_WALLETS_POINTER, ExchangeWallets, LabelEntry, Malformed, STDIN_PATH, load_dataset,
};
pub use flatten::{Flattened, SkippedLabel, flatten};
pub use known_sources::{KnownSource, KnownSources};
pub use record::{FundingRecord, SourceKind};
