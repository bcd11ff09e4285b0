//! # I/O Module
//!
//! Readers for the documents registration data arrives in.
//!
//! - [`fasta`] - FASTA records for amino acid and DNA uploads, via the [`traits::SequenceFile`] interface
//! - [`target`] - TOML description of a target and its subunits
//! - [`batch`] - TOML batch of PTM and interaction drafts entered against a target
//! - [`inventory`] - TOML listing of registered targets for searching

pub mod batch;
pub mod fasta;
pub mod inventory;
pub mod target;
pub mod traits;
