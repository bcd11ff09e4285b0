//! # protex Core Library
//!
//! Validation rules for registering laboratory protein-expression constructs:
//! targets, subunits, genes, subunit interactions and post-translational
//! modifications (PTMs).
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Plain data models (`Target`, `Subunit`, bond
//!   endpoints and drafts) and readers for the file formats they arrive in
//!   (FASTA, TOML target and batch files).
//!
//! - **[`validation`]: The Rule Set.** Pure, stateless predicates over the models:
//!   range derivation for copy and residue inputs, the PTM cross-field validator,
//!   interaction and copy-selection checks, the gene upload check and the target
//!   search filter. Every call is re-entrant and never blocks.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `validation` together to
//!   check a whole registration batch or a gene upload in one call.

pub mod core;
pub mod validation;
pub mod workflows;
