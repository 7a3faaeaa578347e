//! # Check-Type Registry
//!
//! Static mapping from a check-type identifier to the parameters of the
//! remote verification procedure it runs: the backend check id, the schema
//! attribute the encoded document nests under, fixed check arguments, and
//! the option sets the check exposes (document sub-types, validity period,
//! jurisdictions).
//!
//! ## Entity Class
//!
//! Each check type carries an [`EntityClass`] tag resolved here, at registry
//! construction — the request builder branches on the tag, never on the
//! identifier string. A business-class check describes the subject with
//! business-identifying fields; an individual-class check with
//! person-identifying fields.
//!
//! ## Failure Mode
//!
//! Lookup by [`CheckType`] cannot fail — an unknown procedure is not
//! representable. Parsing an identifier string can fail with
//! [`UnknownCheckTypeError`]; that indicates a registry/configuration
//! mismatch in the embedding application, not a user-recoverable condition.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::document_type::DocumentTypeValue;
use crate::jurisdiction::{Jurisdiction, US_JURISDICTIONS};

/// Class of subject a check verifies. Resolved once per check type;
/// the request builder selects the subject-description shape by this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityClass {
    /// A company or organization (KYB-style checks).
    Business,
    /// A natural person (KYC-style checks).
    Individual,
}

impl fmt::Display for EntityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Business => write!(f, "business"),
            Self::Individual => write!(f, "individual"),
        }
    }
}

/// A supported verification procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckType {
    /// Proof-of-address verification for a business.
    BusinessProofOfAddress,
    /// Proof-of-address verification for an individual.
    IndividualProofOfAddress,
    /// Incorporation-document verification.
    Incorporation,
    /// EIN-document verification.
    Ein,
}

/// Parameters of one verification procedure. Immutable; one entry per
/// supported check type, built once and shared read-only.
#[derive(Debug, Clone)]
pub struct CheckTypeConfig {
    /// Identifier of the remote verification procedure.
    pub check_id: &'static str,
    /// Schema attribute the encoded document is nested under.
    pub document_field: &'static str,
    /// Fixed check arguments always sent with this check type.
    pub static_args: serde_json::Map<String, serde_json::Value>,
    /// Acceptable document sub-types; empty if the check does not
    /// discriminate by sub-type.
    pub document_type_options: &'static [DocumentTypeValue],
    /// Whether an age-limit argument applies to this check.
    pub supports_validity_period: bool,
    /// Jurisdiction choices; empty if jurisdiction does not apply.
    pub jurisdiction_options: &'static [Jurisdiction],
    /// Subject-description shape the request builder emits.
    pub entity_class: EntityClass,
    /// Check-args key an auxiliary identifier merges under, for check
    /// types that accept one.
    pub auxiliary_arg: Option<&'static str>,
}

impl CheckType {
    /// Every supported check type.
    pub const ALL: [CheckType; 4] = [
        CheckType::BusinessProofOfAddress,
        CheckType::IndividualProofOfAddress,
        CheckType::Incorporation,
        CheckType::Ein,
    ];

    /// The check-type identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BusinessProofOfAddress => "business_proof_of_address",
            Self::IndividualProofOfAddress => "individual_proof_of_address",
            Self::Incorporation => "incorporation",
            Self::Ein => "ein",
        }
    }

    /// Look up this check type's verification parameters. Pure; no side
    /// effects.
    pub fn config(&self) -> &'static CheckTypeConfig {
        let registry = REGISTRY.get_or_init(build_registry);
        match self {
            Self::BusinessProofOfAddress => &registry[0],
            Self::IndividualProofOfAddress => &registry[1],
            Self::Incorporation => &registry[2],
            Self::Ein => &registry[3],
        }
    }
}

impl fmt::Display for CheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The identifier does not name a statically known check type. This is a
/// registry/configuration mismatch in the embedding application and is not
/// recoverable at the workflow level.
#[derive(Debug, thiserror::Error)]
#[error("unknown check type: {identifier}")]
pub struct UnknownCheckTypeError {
    /// The identifier that failed to resolve.
    pub identifier: String,
}

impl FromStr for CheckType {
    type Err = UnknownCheckTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CheckType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownCheckTypeError {
                identifier: s.to_string(),
            })
    }
}

static REGISTRY: OnceLock<[CheckTypeConfig; 4]> = OnceLock::new();

fn build_registry() -> [CheckTypeConfig; 4] {
    // Proof-of-address checks always send the full sub-type catalog and the
    // 90-day age limit as their baseline arguments; the builder overlays the
    // user's selection on top.
    let proof_of_address_args = || {
        let mut args = serde_json::Map::new();
        args.insert("validity_period".into(), 90.into());
        args.insert(
            "accepted_documents".into(),
            DocumentTypeValue::ALL
                .iter()
                .map(|dt| serde_json::Value::from(dt.as_str()))
                .collect(),
        );
        args
    };

    [
        CheckTypeConfig {
            check_id: "kyb.proof_of_address_verification",
            document_field: "proof_of_address_documents",
            static_args: proof_of_address_args(),
            document_type_options: &DocumentTypeValue::ALL,
            supports_validity_period: true,
            jurisdiction_options: &[],
            entity_class: EntityClass::Business,
            auxiliary_arg: None,
        },
        CheckTypeConfig {
            check_id: "kyc.proof_of_address_verification",
            document_field: "proof_of_address_documents",
            static_args: proof_of_address_args(),
            document_type_options: &DocumentTypeValue::ALL,
            supports_validity_period: true,
            jurisdiction_options: &[],
            entity_class: EntityClass::Individual,
            auxiliary_arg: None,
        },
        CheckTypeConfig {
            check_id: "kyb.incorporation_document_verification",
            document_field: "incorporation_documents",
            static_args: serde_json::Map::new(),
            document_type_options: &[],
            supports_validity_period: false,
            jurisdiction_options: US_JURISDICTIONS,
            entity_class: EntityClass::Business,
            auxiliary_arg: None,
        },
        CheckTypeConfig {
            check_id: "kyb.ein_document_verification",
            document_field: "ein_documents",
            static_args: serde_json::Map::new(),
            document_type_options: &[],
            supports_validity_period: false,
            jurisdiction_options: &[],
            entity_class: EntityClass::Business,
            auxiliary_arg: Some("ein"),
        },
    ]
}
