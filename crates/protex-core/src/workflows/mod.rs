//! # Workflows Module
//!
//! High-level entry points that run the validation rules over everything a
//! user submits in one go.
//!
//! - **Registration** ([`register`]) - PTMs, interactions and an optional copy
//!   selection for one target, summarized into a report.
//! - **Gene upload** ([`genes`]) - Screening FASTA entries for a subunit and
//!   staging them as gene records.

pub mod error;
pub mod genes;
pub mod register;
