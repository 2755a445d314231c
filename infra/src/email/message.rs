//! Email message description
//!
//! [`EmailMessage`] serializes directly to the Resend `/emails` request
//! body, so the struct's field names and shapes follow that wire format.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A structured email message
///
/// Built with the constructor plus chained setters:
///
/// ```
/// use tn_infra::email::EmailMessage;
///
/// let message = EmailMessage::new("TaskNest <no-reply@tasknest.app>", "jane@example.com", "Welcome")
///     .with_text("Glad to have you.")
///     .with_tag("category", "onboarding");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Sender address, optionally in `Name <addr>` form
    ///
    /// When left empty, the mailer substitutes its configured default.
    pub from: String,

    /// Recipient addresses
    pub to: Vec<String>,

    /// Subject line
    pub subject: String,

    /// Plain-text body
    ///
    /// Always present on the wire; a message built without a text body
    /// sends an empty string.
    #[serde(default)]
    pub text: String,

    /// HTML body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    /// Carbon-copy recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<String>>,

    /// Blind-carbon-copy recipients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<String>>,

    /// Reply-To address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,

    /// Additional message headers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,

    /// Provider-side tags for analytics and filtering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// File attachments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

impl EmailMessage {
    /// Create a message with a single recipient and no body
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: vec![to.into()],
            subject: subject.into(),
            text: String::new(),
            html: None,
            cc: None,
            bcc: None,
            reply_to: None,
            headers: None,
            tags: None,
            attachments: None,
        }
    }

    /// Add another recipient
    pub fn and_to(mut self, to: impl Into<String>) -> Self {
        self.to.push(to.into());
        self
    }

    /// Set the plain-text body
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the HTML body
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Add a carbon-copy recipient
    pub fn with_cc(mut self, cc: impl Into<String>) -> Self {
        self.cc.get_or_insert_with(Vec::new).push(cc.into());
        self
    }

    /// Add a blind-carbon-copy recipient
    pub fn with_bcc(mut self, bcc: impl Into<String>) -> Self {
        self.bcc.get_or_insert_with(Vec::new).push(bcc.into());
        self
    }

    /// Set the Reply-To address
    pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }

    /// Add a message header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Add a provider-side tag
    pub fn with_tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(Tag {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Attach a file
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments
            .get_or_insert_with(Vec::new)
            .push(attachment);
        self
    }
}

/// Name/value tag attached to a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

/// File attachment, either inline base64 content or a hosted path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// Base64-encoded file content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Filename shown to the recipient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// URL of a hosted file, as an alternative to inline content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// MIME type of the attachment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl Attachment {
    /// Attachment from base64-encoded content
    pub fn from_content(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            filename: Some(filename.into()),
            path: None,
            content_type: None,
        }
    }

    /// Attachment referencing a hosted file
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            content: None,
            filename: None,
            path: Some(path.into()),
            content_type: None,
        }
    }

    /// Set the MIME type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}
