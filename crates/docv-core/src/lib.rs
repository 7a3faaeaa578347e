//! # docv-core — Domain Types for Document Verification
//!
//! Foundational types shared by the verification client and the workflow
//! engine: the static check-type registry, the document sub-type and
//! jurisdiction catalogs, and the per-workflow selection state with its
//! invariants.
//!
//! ## Architecture
//!
//! This crate is pure data — no I/O, no clock, no network. Everything here
//! is either immutable registry content (defined once at process start,
//! safely shared by every workflow instance without locking) or a small
//! mutable value owned by exactly one workflow instance
//! ([`VerificationSelection`]).

pub mod check_type;
pub mod document_type;
pub mod jurisdiction;
pub mod selection;

pub use check_type::{CheckType, CheckTypeConfig, EntityClass, UnknownCheckTypeError};
pub use document_type::DocumentTypeValue;
pub use jurisdiction::Jurisdiction;
pub use selection::{SelectionError, ValidityPeriod, VerificationSelection};
