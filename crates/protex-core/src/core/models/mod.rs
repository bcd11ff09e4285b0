//! # Core Models Module
//!
//! Plain-data models for protein-expression registration.
//!
//! ## Key Components
//!
//! - [`ids`] - Identifier type for subunits
//! - [`residue`] - One-letter amino acid codes
//! - [`subunit`] - Targets, their subunits and registered genes
//! - [`bond`] - Bond endpoints, PTM and interaction candidates, and their drafts
//!
//! ## Usage
//!
//! ```ignore
//! use protex::core::models::{bond::PtmDraft, ids::SubunitId, subunit::Subunit};
//!
//! let subunits = vec![Subunit::new(SubunitId(1), "TP53", "MCDE", 2)];
//! let draft = PtmDraft::new()
//!     .endpoint_one(SubunitId(1), 1, 2)
//!     .endpoint_two(SubunitId(1), 2, 2)
//!     .bond_type("disulfide");
//! ```

pub mod bond;
pub mod ids;
pub mod residue;
pub mod subunit;
