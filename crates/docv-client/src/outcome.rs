//! # Verification Outcomes
//!
//! The response shape of the verification backend, deserialized directly —
//! the backend's response **is** the outcome; no client-side reshaping.
//!
//! Fields use `#[serde(default)]` for resilience against schema evolution
//! in the live API, and the per-check payload union carries an untagged
//! fallback so a new result type degrades to raw JSON instead of a
//! deserialization failure. `serde(deny_unknown_fields)` is intentionally
//! NOT used.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use url::Url;

/// Postal address fields extracted from a verified document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtractedAddress {
    #[serde(default)]
    pub street_1: Option<String>,
    #[serde(default)]
    pub street_2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

/// Fields extracted by a business proof-of-address check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProofOfAddressResult {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub document_date: Option<String>,
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub document_address: Option<ExtractedAddress>,
}

/// Fields extracted by an individual proof-of-address check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndividualProofOfAddressResult {
    #[serde(default)]
    pub individual_name: Option<String>,
    #[serde(default)]
    pub document_date: Option<String>,
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub document_address: Option<ExtractedAddress>,
}

/// Fields extracted by an incorporation-document check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncorporationResult {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub document_date: Option<String>,
    #[serde(default)]
    pub jurisdiction: Option<ExtractedAddress>,
}

/// Fields extracted by an EIN-document check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EinResult {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub document_date: Option<String>,
    #[serde(default)]
    pub ein: Option<String>,
}

/// Check-type-specific extracted fields, tagged by the backend's `type`
/// discriminator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum CheckResultPayload {
    #[serde(rename = "ProofOfAddressFlashCheckResult")]
    ProofOfAddress(ProofOfAddressResult),
    #[serde(rename = "KYCProofOfAddressFlashCheckResult")]
    IndividualProofOfAddress(IndividualProofOfAddressResult),
    #[serde(rename = "IncorporationFlashCheckResult")]
    Incorporation(IncorporationResult),
    #[serde(rename = "EinFlashCheckResult")]
    Ein(EinResult),
    /// Forward-compatible catch-all for result types the backend introduces
    /// after this client version is deployed.
    #[serde(untagged)]
    Other(Value),
}

/// The document record the backend stored for this verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredDocument {
    /// Backend-hosted (possibly expiring) URL of the document.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub source_type: Option<String>,
    #[serde(default)]
    pub num_pages: Option<u32>,
}

/// The input the backend echoed back: the stored document reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckInputData {
    pub document: StoredDocument,
}

/// Result of a completed verification. Immutable once created; the backend
/// response body deserializes directly into this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerificationOutcome {
    /// Whether the document passed verification.
    pub passed: bool,
    /// Human-readable explanation of the result.
    #[serde(default)]
    pub answer: String,
    /// Check-type-specific extracted fields.
    pub payload: CheckResultPayload,
    /// Warning keys mapped to messages, when the check raised any.
    #[serde(default)]
    pub alerts: Option<BTreeMap<String, Value>>,
    /// Echoed input, carrying the stored document reference.
    #[serde(default)]
    pub input_data: Option<CheckInputData>,
    /// Identifier of the check run; pairs with the document URL to fetch
    /// the verified document through the proxy.
    pub command_instance_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl VerificationOutcome {
    /// Derive the document-preview URL resolved by the external document
    /// proxy: `{proxy}?case_id=<run id>&expired_url=<stored url>`.
    ///
    /// Returns `None` when the outcome carries no document URL. The engine
    /// only builds this URL; fetching and rendering belong to the caller.
    pub fn preview_url(&self, proxy_base: &Url) -> Option<Url> {
        let document_url = self.input_data.as_ref()?.document.url.as_deref()?;
        let mut url = proxy_base.clone();
        url.query_pairs_mut()
            .append_pair("case_id", &self.command_instance_id)
            .append_pair("expired_url", document_url);
        Some(url)
    }
}
