//! Tests for the email message wire format

use crate::email::message::{Attachment, EmailMessage};

#[test]
fn test_minimal_message_wire_shape() {
    let message = EmailMessage::new("no-reply@tasknest.app", "jane@example.com", "Welcome");
    let json = serde_json::to_value(&message).unwrap();

    assert_eq!(json["from"], "no-reply@tasknest.app");
    assert_eq!(json["to"], serde_json::json!(["jane@example.com"]));
    assert_eq!(json["subject"], "Welcome");
    // A body-less message still carries an empty text field
    assert_eq!(json["text"], "");

    // Unset optionals stay off the wire entirely
    let object = json.as_object().unwrap();
    for absent in ["html", "cc", "bcc", "reply_to", "headers", "tags", "attachments"] {
        assert!(!object.contains_key(absent), "{} should be absent", absent);
    }
}

#[test]
fn test_full_message_serializes_all_fields() {
    let message = EmailMessage::new("no-reply@tasknest.app", "jane@example.com", "Report")
        .and_to("joe@example.com")
        .with_text("See attachment.")
        .with_html("<p>See attachment.</p>")
        .with_cc("boss@example.com")
        .with_bcc("audit@example.com")
        .with_reply_to("support@tasknest.app")
        .with_header("X-Entity-Ref-ID", "42")
        .with_tag("category", "reports")
        .with_attachment(
            Attachment::from_content("report.pdf", "JVBERi0=").with_content_type("application/pdf"),
        );

    let json = serde_json::to_value(&message).unwrap();

    assert_eq!(
        json["to"],
        serde_json::json!(["jane@example.com", "joe@example.com"])
    );
    assert_eq!(json["html"], "<p>See attachment.</p>");
    assert_eq!(json["cc"], serde_json::json!(["boss@example.com"]));
    assert_eq!(json["bcc"], serde_json::json!(["audit@example.com"]));
    assert_eq!(json["reply_to"], "support@tasknest.app");
    assert_eq!(json["headers"]["X-Entity-Ref-ID"], "42");
    assert_eq!(json["tags"][0]["name"], "category");
    assert_eq!(json["tags"][0]["value"], "reports");
    assert_eq!(json["attachments"][0]["filename"], "report.pdf");
    assert_eq!(json["attachments"][0]["content"], "JVBERi0=");
    assert_eq!(json["attachments"][0]["content_type"], "application/pdf");
    assert!(json["attachments"][0].get("path").is_none());
}

#[test]
fn test_hosted_attachment() {
    let attachment = Attachment::from_path("https://cdn.tasknest.app/terms.pdf");
    let json = serde_json::to_value(&attachment).unwrap();

    assert_eq!(json["path"], "https://cdn.tasknest.app/terms.pdf");
    assert!(json.get("content").is_none());
    assert!(json.get("filename").is_none());
}
