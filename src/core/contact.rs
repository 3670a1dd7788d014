use crate::domain::model::ContactMessage;
use crate::domain::ports::MessageSink;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill all required fields";
pub const SENT_MESSAGE: &str = "Message sent successfully! I will get back to you soon.";
pub const DELIVERY_FAILED_MESSAGE: &str =
    "Your message could not be sent right now. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormStatus {
    Empty,
    Editing,
    Invalid,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    /// Form-encoded parameter name.
    pub fn key(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, ContactField::Subject)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn is_blank(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

/// Transient, non-blocking message shown after a submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    status: FormStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            status: FormStatus::Empty,
        }
    }

    pub fn from_fields(fields: ContactFields) -> Self {
        let status = if fields.is_blank() {
            FormStatus::Empty
        } else {
            FormStatus::Editing
        };
        Self { fields, status }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
        self.status = if self.fields.is_blank() {
            FormStatus::Empty
        } else {
            FormStatus::Editing
        };
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Required fields that are empty. Values are checked as typed, without trimming.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.fields.get(*f).is_empty())
            .collect()
    }

    /// Validate and move to `Submitting`, or to `Invalid` with the warning to show.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, Notification> {
        if !self.missing_fields().is_empty() {
            self.status = FormStatus::Invalid;
            return Err(Notification::warning(MISSING_FIELDS_MESSAGE));
        }

        self.status = FormStatus::Submitting;
        Ok(ContactMessage {
            name: self.fields.name.clone(),
            email: self.fields.email.clone(),
            subject: self.fields.subject.clone(),
            message: self.fields.message.clone(),
            received_at: Utc::now(),
        })
    }

    pub fn complete_submit(&mut self) -> Notification {
        self.fields = ContactFields::default();
        self.status = FormStatus::Submitted;
        Notification::success(SENT_MESSAGE)
    }

    /// Delivery failed: keep what the visitor typed so they can resend.
    pub fn fail_submit(&mut self) -> Notification {
        self.status = FormStatus::Editing;
        Notification::error(DELIVERY_FAILED_MESSAGE)
    }
}

#[derive(Clone)]
pub struct ContactService {
    sink: Arc<dyn MessageSink>,
}

impl ContactService {
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self { sink }
    }

    pub fn sink_name(&self) -> &str {
        self.sink.name()
    }

    pub async fn submit(&self, form: &mut ContactForm) -> Notification {
        let message = match form.begin_submit() {
            Ok(message) => message,
            Err(notice) => {
                tracing::warn!(
                    "⚠️ Contact form rejected, missing: {:?}",
                    form.missing_fields()
                );
                return notice;
            }
        };

        tracing::debug!("Contact message body: {:?}", message);

        match self.sink.deliver(&message).await {
            Ok(()) => {
                tracing::info!(
                    "📨 Contact message from {} delivered via {}",
                    message.email,
                    self.sink.name()
                );
                form.complete_submit()
            }
            Err(e) => {
                tracing::error!(
                    "❌ Contact delivery via {} failed: {} (Severity: {:?})",
                    self.sink.name(),
                    e,
                    e.severity()
                );
                form.fail_submit()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{PortfolioError, Result};
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        fail: bool,
        seen: Mutex<Vec<ContactMessage>>,
    }

    #[async_trait]
    impl MessageSink for RecordingSink {
        async fn deliver(&self, message: &ContactMessage) -> Result<()> {
            if self.fail {
                return Err(PortfolioError::DeliveryError {
                    message: "down".to_string(),
                });
            }
            self.seen.lock().await.push(message.clone());
            Ok(())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    fn filled(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, name);
        form.set(ContactField::Email, email);
        form.set(ContactField::Subject, subject);
        form.set(ContactField::Message, message);
        form
    }

    #[test]
    fn test_status_follows_edits() {
        let mut form = ContactForm::new();
        assert_eq!(form.status(), FormStatus::Empty);
        form.set(ContactField::Subject, "Hello");
        assert_eq!(form.status(), FormStatus::Editing);
        form.set(ContactField::Subject, "");
        assert_eq!(form.status(), FormStatus::Empty);
    }

    #[tokio::test]
    async fn test_empty_required_fields_warn_and_keep_values() {
        let sink = Arc::new(RecordingSink::default());
        let service = ContactService::new(sink.clone());
        let mut form = filled("", "", "Job offer", "");

        let notice = service.submit(&mut form).await;

        assert_eq!(notice, Notification::warning("Please fill all required fields"));
        assert_eq!(form.status(), FormStatus::Invalid);
        assert_eq!(form.value(ContactField::Subject), "Job offer");
        assert_eq!(
            form.missing_fields(),
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
        assert!(sink.seen.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_valid_submit_delivers_and_resets() {
        let sink = Arc::new(RecordingSink::default());
        let service = ContactService::new(sink.clone());
        let mut form = filled("Jane", "jane@x.com", "", "Hi");

        let notice = service.submit(&mut form).await;

        assert_eq!(notice.kind, NotificationKind::Success);
        assert_eq!(
            notice.message,
            "Message sent successfully! I will get back to you soon."
        );
        assert_eq!(form.status(), FormStatus::Submitted);
        assert_eq!(form.fields(), &ContactFields::default());

        let seen = sink.seen.lock().await;
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].name, "Jane");
        assert_eq!(seen[0].subject, "");
    }

    #[tokio::test]
    async fn test_email_format_is_not_checked() {
        let service = ContactService::new(Arc::new(RecordingSink::default()));
        let mut form = filled("Jane", "not-an-email", "", "Hi");
        let notice = service.submit(&mut form).await;
        assert_eq!(notice.kind, NotificationKind::Success);
    }

    #[tokio::test]
    async fn test_whitespace_only_name_is_accepted_untrimmed() {
        let sink = Arc::new(RecordingSink::default());
        let service = ContactService::new(sink.clone());
        let mut form = filled("   ", "jane@x.com", "", " Hi ");

        assert!(form.missing_fields().is_empty());
        let notice = service.submit(&mut form).await;

        assert_eq!(notice.kind, NotificationKind::Success);
        let seen = sink.seen.lock().await;
        assert_eq!(seen[0].name, "   ");
        assert_eq!(seen[0].message, " Hi ");
    }

    #[tokio::test]
    async fn test_delivery_failure_keeps_values() {
        let sink = Arc::new(RecordingSink {
            fail: true,
            ..Default::default()
        });
        let service = ContactService::new(sink);
        let mut form = filled("Jane", "jane@x.com", "", "Hi");

        let notice = service.submit(&mut form).await;

        assert_eq!(notice.kind, NotificationKind::Error);
        assert_eq!(form.status(), FormStatus::Editing);
        assert_eq!(form.value(ContactField::Message), "Hi");
    }

    #[test]
    fn test_begin_submit_moves_to_submitting() {
        let mut form = filled("Jane", "jane@x.com", "", "Hi");
        let message = form.begin_submit().unwrap();
        assert_eq!(form.status(), FormStatus::Submitting);
        assert_eq!(message.email, "jane@x.com");
    }
}
