//! # Verification Request Construction
//!
//! Builds the JSON body for a verification submission from the check-type
//! registry parameters, the user's selection, the encoded document, and the
//! tenant identity.
//!
//! ## Determinism
//!
//! [`build_request`] is pure: no network, no clock, no mutation of its
//! inputs. Identical inputs serialize to byte-identical bodies, so a
//! request can be rebuilt at any time for display or audit.
//!
//! ## Subject Shapes
//!
//! The subject-description branch is resolved by the check type's
//! [`EntityClass`] tag: business-class checks emit a `kyb_schema` with
//! business-identifying fields (plus jurisdiction of operation where the
//! check discriminates by jurisdiction); individual-class checks emit a
//! `kyc_schema` with person-identifying fields. The encoded document nests
//! under the check type's configured document field in either shape.

use serde::Serialize;
use serde_json::{Map, Value};

use docv_core::{CheckType, EntityClass, VerificationSelection};

use crate::config::TenantCredentials;

/// An encoded document ready for submission: the base64 payload plus the
/// display name of the originating file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPayload {
    /// Display name of the uploaded file.
    pub file_name: String,
    /// Base64-encoded file content, no format prefix.
    pub b64_document: String,
}

/// Subject identity supplied by the embedding application. Carries both
/// shapes; the check type's entity class picks which one a request uses.
#[derive(Debug, Clone)]
pub struct SubjectProfile {
    /// Schema version identifier sent as the subject schema `id`.
    pub schema_id: String,
    /// Business-identifying fields for business-class checks.
    pub business: BusinessSubject,
    /// Person-identifying fields for individual-class checks.
    pub individual: IndividualSubject,
}

/// Business-identifying self-attested fields.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessSubject {
    pub business_name: String,
    pub registered_business_name: String,
}

/// Person-identifying self-attested fields.
#[derive(Debug, Clone, Serialize)]
pub struct IndividualSubject {
    pub first_name: String,
    pub last_name: String,
}

/// One document attachment nested under the check type's document field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DocumentAttachment {
    pub b64_document: String,
    pub file_name: String,
    pub source_type: &'static str,
}

/// Subject description: schema id plus self-attested data.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubjectSchema {
    pub id: String,
    pub self_attested_data: Map<String, Value>,
}

/// The complete verification request body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VerificationRequest {
    pub agent_key: String,
    pub check_id: String,
    pub check_args: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kyb_schema: Option<SubjectSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kyc_schema: Option<SubjectSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descope_user_id: Option<String>,
}

/// Compose a verification request from registry parameters, user-selected
/// options, the encoded document, and the tenant identity.
///
/// `correlation_id` is an optional external-subject identifier attached
/// verbatim when supplied by the caller.
pub fn build_request(
    check_type: CheckType,
    selection: &VerificationSelection,
    document: &DocumentPayload,
    credentials: &TenantCredentials,
    subject: &SubjectProfile,
    correlation_id: Option<&str>,
) -> VerificationRequest {
    let config = check_type.config();

    let mut check_args = config.static_args.clone();
    if config.supports_validity_period {
        check_args.insert(
            "validity_period".into(),
            selection.validity_period.days().into(),
        );
    }
    if !config.document_type_options.is_empty() {
        check_args.insert(
            "accepted_documents".into(),
            selection
                .accepted_document_types()
                .iter()
                .map(|dt| Value::from(dt.as_str()))
                .collect(),
        );
    }
    if let (Some(key), Some(identifier)) =
        (config.auxiliary_arg, selection.auxiliary_identifier.as_ref())
    {
        check_args.insert(key.into(), Value::from(identifier.as_str()));
    }

    let attachment = DocumentAttachment {
        b64_document: document.b64_document.clone(),
        file_name: document.file_name.clone(),
        source_type: "file_url",
    };
    let attachments = Value::Array(vec![serde_json::json!(attachment)]);

    let mut self_attested = Map::new();
    match config.entity_class {
        EntityClass::Business => {
            self_attested.insert(
                "business_name".into(),
                subject.business.business_name.clone().into(),
            );
            self_attested.insert(
                "registered_business_name".into(),
                subject.business.registered_business_name.clone().into(),
            );
            if !config.jurisdiction_options.is_empty() && !selection.jurisdiction.is_any() {
                self_attested.insert(
                    "address_of_operation".into(),
                    serde_json::json!({
                        "state": selection.jurisdiction.state,
                        "country_code": selection.jurisdiction.country,
                    }),
                );
            }
        }
        EntityClass::Individual => {
            self_attested.insert(
                "first_name".into(),
                subject.individual.first_name.clone().into(),
            );
            self_attested.insert(
                "last_name".into(),
                subject.individual.last_name.clone().into(),
            );
        }
    }
    self_attested.insert(config.document_field.into(), attachments);

    let schema = SubjectSchema {
        id: subject.schema_id.clone(),
        self_attested_data: self_attested,
    };
    let (kyb_schema, kyc_schema) = match config.entity_class {
        EntityClass::Business => (Some(schema), None),
        EntityClass::Individual => (None, Some(schema)),
    };

    VerificationRequest {
        agent_key: credentials.agent_key.clone(),
        check_id: config.check_id.to_string(),
        check_args,
        kyb_schema,
        kyc_schema,
        descope_user_id: correlation_id.map(str::to_string),
    }
}
