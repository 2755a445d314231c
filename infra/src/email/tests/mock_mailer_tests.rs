//! Tests for the mock mailer

use crate::email::email_service::EmailService;
use crate::email::message::EmailMessage;
use crate::email::mock_mailer::MockMailer;
use crate::InfraError;

fn sample_message() -> EmailMessage {
    EmailMessage::new("no-reply@tasknest.app", "jane@example.com", "Hello")
        .with_text("Just checking in.")
}

#[tokio::test]
async fn test_send_records_message() {
    let mailer = MockMailer::new();

    let id = mailer.send(&sample_message()).await.unwrap();
    assert!(id.starts_with("mock_"));
    assert_eq!(mailer.sent_count(), 1);

    let recorded = mailer.sent_messages();
    assert_eq!(recorded[0].subject, "Hello");
    assert_eq!(recorded[0].to, vec!["jane@example.com"]);
}

#[tokio::test]
async fn test_clones_share_the_record() {
    let mailer = MockMailer::new();
    let clone = mailer.clone();

    clone.send(&sample_message()).await.unwrap();
    assert_eq!(mailer.sent_count(), 1);

    mailer.reset();
    assert_eq!(clone.sent_count(), 0);
}

#[tokio::test]
async fn test_simulated_failure() {
    let mailer = MockMailer::failing();

    let result = mailer.send(&sample_message()).await;
    assert!(matches!(result, Err(InfraError::Delivery(_))));
    assert_eq!(mailer.sent_count(), 0);
    assert!(!mailer.is_available().await);
}

#[tokio::test]
async fn test_rejects_invalid_recipient() {
    let mailer = MockMailer::new();
    let message = EmailMessage::new("no-reply@tasknest.app", "nonsense", "Hello");

    let result = mailer.send(&message).await;
    assert!(matches!(result, Err(InfraError::Delivery(_))));
    assert_eq!(mailer.sent_count(), 0);
}

#[tokio::test]
async fn test_rejects_empty_recipient_list() {
    let mailer = MockMailer::new();
    let mut message = sample_message();
    message.to.clear();

    let result = mailer.send(&message).await;
    assert!(matches!(result, Err(InfraError::Delivery(_))));
}

#[tokio::test]
async fn test_provider_name() {
    assert_eq!(MockMailer::new().provider_name(), "Mock");
}
