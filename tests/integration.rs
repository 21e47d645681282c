//! End-to-end flow: validate, snapshot, persist, restore, submit.
mod common;
use common::*;
use periksa::prelude::*;
use std::time::Duration;

#[test]
fn valid_email_produces_no_error_and_invalid_exactly_one() {
    let validator = Validator::new();

    let good = FieldSpec::email("email")
        .required()
        .with_value("user@example.com");
    assert!(validator.validate_field(&good).is_none());

    let bad = FieldSpec::email("email").required().with_value("not-an-email");
    let err = validator.validate_field(&bad).expect("must fail");
    assert_eq!(err.rule, RuleViolation::EmailInvalid);
    assert_eq!(err.message, "Format email tidak valid");
}

#[tokio::test]
async fn validate_save_restore_submit_round_trip() {
    let fields = contact_fields("user@example.com", "support", "Saya butuh bantuan segera");

    let report = Validator::new().validate(&fields, FormKind::Contact);
    assert!(report.valid, "unexpected errors: {:?}", report.errors);

    // Persist a draft of the validated state.
    let drafts = DraftStore::new(MemoryStore::new());
    let snapshot = FormSnapshot::capture(&fields);
    drafts.save("contact", &snapshot).expect("save failed");

    // Simulate a reload: blank fields, then restore from the draft.
    let mut restored = contact_fields("", "", "");
    let loaded = drafts.load("contact").expect("draft must exist");
    loaded.apply(&mut restored);

    let report = Validator::new().validate(&restored, FormKind::Contact);
    assert!(report.valid, "restored draft must still validate");

    // Submission succeeds; the draft is retired afterwards.
    let transport = FakeTransport::new()
        .with_success_rate(1.0)
        .with_latency(Duration::ZERO);
    let receipt = transport.submit(&loaded).await.expect("submit failed");
    assert!(receipt.accepted_at <= chrono::Utc::now());

    drafts.clear("contact").expect("clear failed");
    assert!(drafts.load("contact").is_none());
}

#[tokio::test]
async fn transport_rejection_surfaces_as_submit_error() {
    let snapshot = FormSnapshot::capture(&newsletter_fields("user@example.com"));
    let transport = FakeTransport::new()
        .with_success_rate(0.0)
        .with_latency(Duration::ZERO);

    let result = transport.submit(&snapshot).await;
    assert_eq!(result, Err(SubmitError::Rejected));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Terjadi kesalahan. Silakan coba lagi."
    );
}

#[tokio::test(start_paused = true)]
async fn transport_latency_is_honored() {
    let snapshot = FormSnapshot::capture(&newsletter_fields("user@example.com"));
    let transport = FakeTransport::new().with_success_rate(1.0);

    let started = tokio::time::Instant::now();
    transport.submit(&snapshot).await.expect("submit failed");

    // Paused clock auto-advances through the sleep, so elapsed time is
    // exactly the configured latency.
    assert_eq!(started.elapsed(), Duration::from_millis(1500));
}

#[test]
fn invalid_application_blocks_submission_path() {
    let mut fields = valid_application_fields();
    fields
        .iter_mut()
        .find(|f| f.name == "email")
        .expect("builder declares email")
        .value = FieldValue::Text("broken@".to_string());

    let report = Validator::new().validate(&fields, FormKind::Application);
    assert!(!report.valid);

    // Drafts still capture invalid state; autosave never gates on validity.
    let snapshot = FormSnapshot::capture(&fields);
    assert_eq!(
        snapshot.get("email"),
        Some(&SnapshotValue::Text("broken@".to_string()))
    );
}
