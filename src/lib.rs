//! cexflat - exchange wallet dataset flattener
//!
//! Loads a dataset of exchange wallets keyed by exchange label, lowercases and
//! tags each address as a centralized-exchange (`cex`) funding source, and emits
//! a flat JSON array of `{address, label, type}` records. The same records can
//! be indexed by address for funding-source lookups.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Dataset boundary, flattener and known sources index
//! - `json_writer`: Pretty JSON output

pub mod cli;
pub mod config;
pub mod core;
pub mod json_writer;
