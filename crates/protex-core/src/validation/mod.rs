//! # Validation Module
//!
//! Pure rule set applied to registration entries before submission.
//!
//! Every validator returns one of three outcomes (see [`outcome::Outcome`]):
//! `Deferred` while inputs are incomplete, `Invalid` with the accumulated
//! violation tags, or `Valid`. Selecting a subunit the caller did not supply
//! is a precondition failure and surfaces as [`error::ValidationError::NotFound`].
//!
//! - [`ranges`] - Copy and residue bounds derived from a subunit
//! - [`ptm`] - Cysteine and distinct-bond-point rules for PTM bonds
//! - [`interaction`] - Completeness and copy bounds for subunit interactions
//! - [`copies`] - Per-subunit copy selections (`notAllZero`)
//! - [`genes`] - Wrong-subunit and duplicate screening of uploaded genes
//! - [`number`] - Parsing of numeric entry fields
//! - [`search`] - Comma-separated target search terms

pub mod config;
pub mod copies;
pub mod error;
pub mod genes;
pub mod interaction;
pub mod number;
pub mod outcome;
pub mod ptm;
pub mod ranges;
pub mod rule;
pub mod search;
