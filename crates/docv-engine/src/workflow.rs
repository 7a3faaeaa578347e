//! # Workflow Controller
//!
//! The lifecycle state machine for one verification workflow instance:
//!
//! ```text
//! Idle → Validating → Encoding → Submitting → Succeeded | Failed
//! ```
//!
//! From `Succeeded` or `Failed`, a new file submission or a check-type
//! change returns the instance to `Idle` before re-entering `Validating`.
//!
//! ## Guards
//!
//! - A submission is refused while the active selection has no accepted
//!   document sub-types for a check type that requires them (pre-flight,
//!   the file is not consumed by a failed transition).
//! - At most one submission is in flight per instance; a second submission
//!   while `Submitting` is rejected without touching the client, which is
//!   also what guarantees outcomes apply in submission order.
//! - In read-only mode the instance still answers snapshot, outcome, and
//!   request-preview queries, but rejects any mutation.
//!
//! Every recoverable failure parks the instance in `Failed` with a short
//! user-facing message; the instance stays usable for a fresh submission.

use std::time::Instant;

use url::Url;

use docv_client::{
    build_request, ClientError, EndpointConfig, SubjectProfile, TenantCredentials,
    VerificationClient, VerificationOutcome, VerificationRequest,
};
use docv_core::{
    CheckType, DocumentTypeValue, Jurisdiction, SelectionError, ValidityPeriod,
    VerificationSelection,
};

use crate::document::{self, RawFile, UploadedDocument};

/// Lifecycle state of a workflow instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    /// No submission in progress.
    Idle,
    /// Checking the uploaded file's declared format.
    Validating,
    /// Producing the transport encoding.
    Encoding,
    /// Awaiting the verification backend.
    Submitting,
    /// A complete outcome is available.
    Succeeded,
    /// The last submission failed; see the snapshot's error message.
    Failed,
}

/// A mutation was refused without changing the instance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowRejection {
    /// Read-only mode is enabled; no new submissions or option changes.
    #[error("workflow is read-only")]
    ReadOnly,
    /// A verification is already in flight for this instance.
    #[error("a verification is already in progress")]
    SubmissionInFlight,
    /// The current selection is incomplete.
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Partial update to the active selection.
#[derive(Debug, Clone, Default)]
pub struct SelectionUpdate {
    /// Toggle one document sub-type in or out of the accepted set.
    /// Deselecting the last member is a no-op.
    pub toggle_document_type: Option<DocumentTypeValue>,
    pub validity_period: Option<ValidityPeriod>,
    pub jurisdiction: Option<Jurisdiction>,
    /// `Some(None)` clears the auxiliary identifier.
    pub auxiliary_identifier: Option<Option<String>>,
}

/// Read-only view of a workflow instance, emitted on every transition.
#[derive(Debug, Clone)]
pub struct WorkflowSnapshot {
    pub state: WorkflowState,
    pub check_type: CheckType,
    pub selection: VerificationSelection,
    /// Display name of the current document, once one passed validation
    /// and encoding.
    pub document_name: Option<String>,
    pub outcome: Option<VerificationOutcome>,
    /// User-facing message for the last failure.
    pub error: Option<String>,
    /// Wall-clock duration of the last successful submission.
    pub elapsed_seconds: Option<f64>,
}

/// Owns one verification workflow: the active check type and selection,
/// the current document, and at most one outcome.
pub struct WorkflowController {
    check_type: CheckType,
    selection: VerificationSelection,
    client: VerificationClient,
    credentials: TenantCredentials,
    subject: SubjectProfile,
    document_proxy_url: Url,
    correlation_id: Option<String>,
    state: WorkflowState,
    document: Option<UploadedDocument>,
    outcome: Option<VerificationOutcome>,
    error: Option<String>,
    elapsed_seconds: Option<f64>,
    read_only: bool,
}

impl WorkflowController {
    /// Create a workflow instance for `check_type`, with the selection at
    /// that check type's registry defaults.
    ///
    /// Endpoint and credential values are supplied by the embedding
    /// application; the engine reads no ambient configuration.
    pub fn new(
        check_type: CheckType,
        endpoint: &EndpointConfig,
        credentials: TenantCredentials,
        subject: SubjectProfile,
    ) -> Result<Self, ClientError> {
        let client = VerificationClient::new(endpoint, &credentials)?;
        Ok(Self {
            check_type,
            selection: VerificationSelection::defaults_for(check_type),
            client,
            credentials,
            subject,
            document_proxy_url: endpoint.document_proxy_url.clone(),
            correlation_id: None,
            state: WorkflowState::Idle,
            document: None,
            outcome: None,
            error: None,
            elapsed_seconds: None,
            read_only: false,
        })
    }

    /// Attach an external-subject correlation identifier to every request
    /// this instance builds.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// The active check type.
    pub fn check_type(&self) -> CheckType {
        self.check_type
    }

    /// Current view of the instance.
    pub fn snapshot(&self) -> WorkflowSnapshot {
        WorkflowSnapshot {
            state: self.state,
            check_type: self.check_type,
            selection: self.selection.clone(),
            document_name: self.document.as_ref().map(|d| d.file_name().to_string()),
            outcome: self.outcome.clone(),
            error: self.error.clone(),
            elapsed_seconds: self.elapsed_seconds,
        }
    }

    /// Run the full verification lifecycle for a user-supplied file.
    ///
    /// Validates, encodes, builds the request, and submits it, returning
    /// the post-transition snapshot. Recoverable failures park the
    /// instance in [`WorkflowState::Failed`] (reflected in the snapshot);
    /// rejections leave it untouched.
    pub async fn submit_file(
        &mut self,
        file: RawFile,
    ) -> Result<WorkflowSnapshot, WorkflowRejection> {
        if self.read_only {
            return Err(WorkflowRejection::ReadOnly);
        }
        if self.state == WorkflowState::Submitting {
            return Err(WorkflowRejection::SubmissionInFlight);
        }
        self.selection
            .ensure_document_types_selected(self.check_type.config())?;

        // A fresh submission discards any prior result.
        self.state = WorkflowState::Validating;
        self.outcome = None;
        self.error = None;
        self.elapsed_seconds = None;

        if let Err(e) = document::validate(&file) {
            tracing::warn!(declared_type = %e.declared_type, file = %file.name,
                "rejected non-document upload");
            self.document = None;
            return Ok(self.fail(e.to_string()));
        }

        self.state = WorkflowState::Encoding;
        let encoded = match document::encode(&file).await {
            Ok(payload) => payload,
            Err(e) => {
                self.document = None;
                return Ok(self.fail(e.to_string()));
            }
        };
        let uploaded = UploadedDocument::new(file, encoded);

        let request = build_request(
            self.check_type,
            &self.selection,
            &uploaded.to_payload(),
            &self.credentials,
            &self.subject,
            self.correlation_id.as_deref(),
        );
        self.document = Some(uploaded);

        self.state = WorkflowState::Submitting;
        tracing::info!(check_type = %self.check_type, "submitting document for verification");
        let started = Instant::now();
        match self.client.submit(&request).await {
            Ok(outcome) => {
                self.elapsed_seconds = Some(started.elapsed().as_secs_f64());
                self.state = WorkflowState::Succeeded;
                self.outcome = Some(outcome);
                Ok(self.snapshot())
            }
            Err(e) => Ok(self.fail(e.user_message())),
        }
    }

    /// Switch the active check type, resetting the selection to the new
    /// type's registry defaults and discarding the current document and
    /// outcome.
    ///
    /// Postcondition: state is [`WorkflowState::Idle`] and the instance
    /// holds no document, outcome, error, or timing.
    pub fn select_check_type(
        &mut self,
        check_type: CheckType,
    ) -> Result<WorkflowSnapshot, WorkflowRejection> {
        if self.read_only {
            return Err(WorkflowRejection::ReadOnly);
        }
        if self.state == WorkflowState::Submitting {
            return Err(WorkflowRejection::SubmissionInFlight);
        }
        self.check_type = check_type;
        self.selection = VerificationSelection::defaults_for(check_type);
        self.document = None;
        self.outcome = None;
        self.error = None;
        self.elapsed_seconds = None;
        self.state = WorkflowState::Idle;
        Ok(self.snapshot())
    }

    /// Apply a partial selection update.
    pub fn update_selection(
        &mut self,
        update: SelectionUpdate,
    ) -> Result<WorkflowSnapshot, WorkflowRejection> {
        if self.read_only {
            return Err(WorkflowRejection::ReadOnly);
        }
        if self.state == WorkflowState::Submitting {
            return Err(WorkflowRejection::SubmissionInFlight);
        }
        if let Some(value) = update.toggle_document_type {
            self.selection.toggle_document_type(value);
        }
        if let Some(period) = update.validity_period {
            self.selection.validity_period = period;
        }
        if let Some(jurisdiction) = update.jurisdiction {
            self.selection.jurisdiction = jurisdiction;
        }
        if let Some(identifier) = update.auxiliary_identifier {
            self.selection.auxiliary_identifier = identifier;
        }
        Ok(self.snapshot())
    }

    /// Enable or disable read-only mode. While enabled, the instance
    /// rejects new submissions and option changes but keeps answering
    /// inspection queries.
    pub fn set_read_only(&mut self, read_only: bool) -> WorkflowSnapshot {
        self.read_only = read_only;
        self.snapshot()
    }

    /// Rebuild the request for the current document and selection, for
    /// display or audit. Available in read-only mode; `None` until a
    /// document has been encoded.
    pub fn preview_request(&self) -> Option<VerificationRequest> {
        let document = self.document.as_ref()?;
        Some(build_request(
            self.check_type,
            &self.selection,
            &document.to_payload(),
            &self.credentials,
            &self.subject,
            self.correlation_id.as_deref(),
        ))
    }

    /// The document-preview URL for the current outcome, resolved by the
    /// external document proxy.
    pub fn preview_url(&self) -> Option<Url> {
        self.outcome
            .as_ref()?
            .preview_url(&self.document_proxy_url)
    }

    fn fail(&mut self, message: String) -> WorkflowSnapshot {
        tracing::warn!(check_type = %self.check_type, error = %message, "workflow failed");
        self.state = WorkflowState::Failed;
        self.error = Some(message);
        self.elapsed_seconds = None;
        self.snapshot()
    }
}
