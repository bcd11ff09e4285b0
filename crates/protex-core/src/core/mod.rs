//! # Core Module
//!
//! Fundamental data structures of protex and the readers that produce them.
//!
//! - **Registration Models** ([`models`]) - Targets, subunits, genes, bond endpoints
//!   and the typed drafts that stand in for partially filled entry forms
//! - **File I/O** ([`io`]) - FASTA records and TOML target/batch/inventory files

pub mod io;
pub mod models;
