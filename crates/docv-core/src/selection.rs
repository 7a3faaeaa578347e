//! # Verification Selection
//!
//! The mutable per-workflow options a user can adjust before submitting a
//! document: which document sub-types to accept, the age limit, the
//! jurisdiction, and an optional auxiliary identifier.
//!
//! ## Invariant
//!
//! For check types that discriminate by document sub-type, the accepted set
//! must never become empty. [`VerificationSelection::toggle_document_type`]
//! refuses to remove the last member (a no-op, mirroring a disabled
//! checkbox), and the workflow controller re-checks the invariant before
//! entering validation.

use crate::check_type::{CheckType, CheckTypeConfig};
use crate::document_type::DocumentTypeValue;
use crate::jurisdiction::{Jurisdiction, ANY_JURISDICTION};

/// Age limit for proof-of-address documents. The backend accepts exactly
/// these three periods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ValidityPeriod {
    #[default]
    Days90,
    Days365,
    Days1825,
}

impl ValidityPeriod {
    /// All periods, shortest first.
    pub const ALL: [ValidityPeriod; 3] = [
        ValidityPeriod::Days90,
        ValidityPeriod::Days365,
        ValidityPeriod::Days1825,
    ];

    /// The period in days, as sent in `check_args.validity_period`.
    pub fn days(&self) -> u32 {
        match self {
            Self::Days90 => 90,
            Self::Days365 => 365,
            Self::Days1825 => 1825,
        }
    }

    /// Human-readable label for selection UIs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Days90 => "90 days",
            Self::Days365 => "1 year",
            Self::Days1825 => "5 years",
        }
    }
}

/// Invalid or incomplete user-selected options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// The active check type requires at least one accepted document
    /// sub-type.
    #[error("Please select at least one document type")]
    NoDocumentTypes,
}

/// User-adjustable options for one in-progress verification workflow.
///
/// Owned by exactly one workflow instance. Constructed from registry
/// defaults via [`VerificationSelection::defaults_for`] and mutated only
/// through methods that preserve the non-empty invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationSelection {
    accepted_document_types: Vec<DocumentTypeValue>,
    /// Age limit applied when the check type supports one.
    pub validity_period: ValidityPeriod,
    /// Selected jurisdiction; the any-jurisdiction sentinel when the check
    /// type does not discriminate (or the user opted out).
    pub jurisdiction: Jurisdiction,
    /// Optional free-text identifier merged into check args for check types
    /// that accept one (e.g. a tax identifier).
    pub auxiliary_identifier: Option<String>,
}

impl VerificationSelection {
    /// Registry defaults for a check type: every offered document sub-type
    /// selected, the first jurisdiction entry, a 90-day age limit, and no
    /// auxiliary identifier.
    pub fn defaults_for(check_type: CheckType) -> Self {
        let config = check_type.config();
        Self {
            accepted_document_types: config.document_type_options.to_vec(),
            validity_period: ValidityPeriod::default(),
            jurisdiction: config
                .jurisdiction_options
                .first()
                .copied()
                .unwrap_or(ANY_JURISDICTION),
            auxiliary_identifier: None,
        }
    }

    /// The accepted document sub-types, in catalog order.
    pub fn accepted_document_types(&self) -> &[DocumentTypeValue] {
        &self.accepted_document_types
    }

    /// Toggle one document sub-type in or out of the accepted set.
    ///
    /// Deselecting the last remaining member is a no-op; returns whether the
    /// set changed.
    pub fn toggle_document_type(&mut self, value: DocumentTypeValue) -> bool {
        if let Some(pos) = self
            .accepted_document_types
            .iter()
            .position(|dt| *dt == value)
        {
            if self.accepted_document_types.len() == 1 {
                return false;
            }
            self.accepted_document_types.remove(pos);
            true
        } else {
            // Re-insert in catalog order so requests stay deterministic
            // regardless of toggle order.
            let rank = |dt: DocumentTypeValue| {
                DocumentTypeValue::ALL
                    .iter()
                    .position(|c| *c == dt)
                    .unwrap_or(usize::MAX)
            };
            let insert_at = self
                .accepted_document_types
                .iter()
                .position(|dt| rank(*dt) > rank(value))
                .unwrap_or(self.accepted_document_types.len());
            self.accepted_document_types.insert(insert_at, value);
            true
        }
    }

    /// Check the non-empty invariant against a check type's configuration.
    pub fn ensure_document_types_selected(
        &self,
        config: &CheckTypeConfig,
    ) -> Result<(), SelectionError> {
        if !config.document_type_options.is_empty() && self.accepted_document_types.is_empty() {
            return Err(SelectionError::NoDocumentTypes);
        }
        Ok(())
    }
}
