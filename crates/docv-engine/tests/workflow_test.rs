//! End-to-end workflow tests against a simulated verification backend.
//!
//! Each test drives a `WorkflowController` through the full lifecycle with
//! wiremock standing in for the remote API, covering the submission
//! scenarios the engine guarantees: request shape, failure normalization,
//! the in-flight guard, and read-only mode.

use std::io::Write;
use std::time::Duration;

use docv_client::request::{BusinessSubject, IndividualSubject};
use docv_client::{EndpointConfig, SubjectProfile, TenantCredentials};
use docv_core::{CheckType, DocumentTypeValue, VerificationSelection};
use docv_engine::{RawFile, SelectionUpdate, WorkflowController, WorkflowRejection, WorkflowState};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn subject() -> SubjectProfile {
    SubjectProfile {
        schema_id: "parcha-latest".into(),
        business: BusinessSubject {
            business_name: "Acme".into(),
            registered_business_name: "Acme Labs Inc".into(),
        },
        individual: IndividualSubject {
            first_name: "John".into(),
            last_name: "Doe".into(),
        },
    }
}

fn controller(mock_server: &MockServer, check_type: CheckType) -> WorkflowController {
    let endpoint = EndpointConfig::new(
        mock_server.uri().parse().unwrap(),
        "https://demo.parcha.ai/getDocument".parse().unwrap(),
    );
    let credentials = TenantCredentials::new("test-api-key", "test-agent").unwrap();
    WorkflowController::new(check_type, &endpoint, credentials, subject()).unwrap()
}

fn pdf_file() -> RawFile {
    RawFile::from_bytes("statement.pdf", "application/pdf", b"%PDF-1.4".to_vec())
}

fn success_body() -> serde_json::Value {
    serde_json::json!({
        "passed": true,
        "answer": "Document verified.",
        "payload": {
            "type": "ProofOfAddressFlashCheckResult",
            "company_name": "Acme Labs Inc",
            "document_type": "BANK_STATEMENT"
        },
        "input_data": {
            "document": {
                "url": "https://storage.example.com/doc-1",
                "file_name": "statement.pdf",
                "source_type": "file_url"
            }
        },
        "command_instance_id": "ci-12345"
    })
}

// ── Happy path ───────────────────────────────────────────────────────

#[tokio::test]
async fn successful_submission_reaches_succeeded_with_timing() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/runFlashCheck"))
        .and(body_partial_json(serde_json::json!({
            "check_id": "kyb.proof_of_address_verification",
            "check_args": { "validity_period": 90, "accepted_documents": ["BANK_STATEMENT"] }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut ctl = controller(&mock_server, CheckType::BusinessProofOfAddress);
    // Narrow the accepted set down to bank statements.
    for dt in DocumentTypeValue::ALL.iter().skip(1) {
        ctl.update_selection(SelectionUpdate {
            toggle_document_type: Some(*dt),
            ..Default::default()
        })
        .unwrap();
    }

    let snapshot = ctl.submit_file(pdf_file()).await.unwrap();
    assert_eq!(snapshot.state, WorkflowState::Succeeded);
    assert!(snapshot.error.is_none());
    assert!(snapshot.elapsed_seconds.unwrap() > 0.0);
    let outcome = snapshot.outcome.unwrap();
    assert!(outcome.passed);
    assert_eq!(snapshot.document_name.as_deref(), Some("statement.pdf"));
}

#[tokio::test]
async fn submission_reads_documents_from_disk() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/runFlashCheck"))
        // STANDARD base64 of "%PDF-1.4".
        .and(body_partial_json(serde_json::json!({
            "kyb_schema": { "self_attested_data": {
                "proof_of_address_documents": [
                    { "b64_document": "JVBERi0xLjQ=", "source_type": "file_url" }
                ]
            }}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut tmp = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    tmp.write_all(b"%PDF-1.4").unwrap();
    let file = RawFile::from_path(tmp.path(), "application/pdf");

    let mut ctl = controller(&mock_server, CheckType::BusinessProofOfAddress);
    let snapshot = ctl.submit_file(file).await.unwrap();
    assert_eq!(snapshot.state, WorkflowState::Succeeded);
}

// ── Scenario: wrong file format ──────────────────────────────────────

#[tokio::test]
async fn non_pdf_upload_never_reaches_the_client() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/runFlashCheck"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut ctl = controller(&mock_server, CheckType::BusinessProofOfAddress);
    let file = RawFile::from_bytes("photo.jpg", "image/jpeg", vec![0xff, 0xd8]);
    let snapshot = ctl.submit_file(file).await.unwrap();

    assert_eq!(snapshot.state, WorkflowState::Failed);
    assert_eq!(snapshot.error.as_deref(), Some("Please upload a PDF file"));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

// ── Scenario: server-side failure ────────────────────────────────────

#[tokio::test]
async fn server_failure_message_is_stored_verbatim() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/runFlashCheck"))
        .respond_with(
            ResponseTemplate::new(429).set_body_string(r#"{"message": "quota exceeded"}"#),
        )
        .mount(&mock_server)
        .await;

    let mut ctl = controller(&mock_server, CheckType::BusinessProofOfAddress);
    let snapshot = ctl.submit_file(pdf_file()).await.unwrap();

    assert_eq!(snapshot.state, WorkflowState::Failed);
    assert_eq!(snapshot.error.as_deref(), Some("quota exceeded"));
    assert!(snapshot.outcome.is_none());
    assert!(snapshot.elapsed_seconds.is_none());

    // The instance stays usable: a retry can succeed.
    mock_server.reset().await;
    Mock::given(method("POST"))
        .and(path("/runFlashCheck"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .mount(&mock_server)
        .await;
    let snapshot = ctl.submit_file(pdf_file()).await.unwrap();
    assert_eq!(snapshot.state, WorkflowState::Succeeded);
}

// ── At-most-one-in-flight ────────────────────────────────────────────

#[tokio::test]
async fn second_submission_is_rejected_while_one_is_in_flight() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/runFlashCheck"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_body())
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&mock_server)
        .await;

    let mut ctl = controller(&mock_server, CheckType::BusinessProofOfAddress);

    // Abandon the first submission mid-flight; the instance stays
    // `Submitting` because the backend never resolved.
    let first = tokio::time::timeout(Duration::from_millis(250), ctl.submit_file(pdf_file()));
    assert!(first.await.is_err(), "backend delay should outlast the timeout");
    assert_eq!(ctl.snapshot().state, WorkflowState::Submitting);

    let rejection = ctl.submit_file(pdf_file()).await.unwrap_err();
    assert_eq!(rejection, WorkflowRejection::SubmissionInFlight);
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
}

// ── Read-only mode ───────────────────────────────────────────────────

#[tokio::test]
async fn read_only_mode_preserves_the_outcome_and_blocks_mutation() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/runFlashCheck"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut ctl = controller(&mock_server, CheckType::BusinessProofOfAddress);
    let snapshot = ctl.submit_file(pdf_file()).await.unwrap();
    assert_eq!(snapshot.state, WorkflowState::Succeeded);

    ctl.set_read_only(true);
    assert_eq!(
        ctl.submit_file(pdf_file()).await.unwrap_err(),
        WorkflowRejection::ReadOnly
    );
    assert_eq!(
        ctl.update_selection(SelectionUpdate {
            toggle_document_type: Some(DocumentTypeValue::UtilityBill),
            ..Default::default()
        })
        .unwrap_err(),
        WorkflowRejection::ReadOnly
    );

    // Outcome, generated request, and preview URL remain inspectable.
    let snapshot = ctl.snapshot();
    assert_eq!(snapshot.state, WorkflowState::Succeeded);
    assert!(snapshot.outcome.unwrap().passed);
    assert_eq!(
        snapshot.selection,
        VerificationSelection::defaults_for(CheckType::BusinessProofOfAddress)
    );
    let request = ctl.preview_request().unwrap();
    assert_eq!(request.check_id, "kyb.proof_of_address_verification");
    let preview = ctl.preview_url().unwrap();
    assert_eq!(
        preview.as_str(),
        "https://demo.parcha.ai/getDocument?case_id=ci-12345&\
         expired_url=https%3A%2F%2Fstorage.example.com%2Fdoc-1"
    );
}

// ── Check-type switch ────────────────────────────────────────────────

#[tokio::test]
async fn switching_check_type_discards_the_previous_outcome() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/runFlashCheck"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .mount(&mock_server)
        .await;

    let mut ctl = controller(&mock_server, CheckType::BusinessProofOfAddress);
    let snapshot = ctl.submit_file(pdf_file()).await.unwrap();
    assert!(snapshot.outcome.is_some());

    let snapshot = ctl.select_check_type(CheckType::Incorporation).unwrap();
    assert_eq!(snapshot.state, WorkflowState::Idle);
    assert!(snapshot.outcome.is_none());
    assert!(snapshot.document_name.is_none());
    assert!(ctl.preview_request().is_none());
    assert!(ctl.preview_url().is_none());
}

#[tokio::test]
async fn individual_check_submits_a_kyc_schema() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/runFlashCheck"))
        .and(body_partial_json(serde_json::json!({
            "check_id": "kyc.proof_of_address_verification",
            "kyc_schema": { "self_attested_data": { "first_name": "John", "last_name": "Doe" } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "passed": true,
            "answer": "Address matches.",
            "payload": {
                "type": "KYCProofOfAddressFlashCheckResult",
                "individual_name": "John Doe",
                "document_type": "UTILITY_BILL"
            },
            "command_instance_id": "ci-67890"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut ctl = controller(&mock_server, CheckType::IndividualProofOfAddress);
    let snapshot = ctl.submit_file(pdf_file()).await.unwrap();
    assert_eq!(snapshot.state, WorkflowState::Succeeded);
}
