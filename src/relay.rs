use serde::Serialize;
use thiserror::Error;

use crate::config::RelayConfig;

/// Which fields a contact form asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormVariant {
    #[default]
    Basic,
    WithSubject,
}

/// Message as entered in the contact form. Doubles as the relay's template
/// parameters, so field names here are the template's variable names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

impl ContactPayload {
    /// Names of required fields left blank for `variant`.
    pub fn missing_fields(&self, variant: FormVariant) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if variant == FormVariant::WithSubject
            && self.subject.as_deref().is_none_or(|s| s.trim().is_empty())
        {
            missing.push("subject");
        }
        if self.message.trim().is_empty() {
            missing.push("message");
        }
        missing
    }

    /// Empties every editable field.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        if let Some(subject) = self.subject.as_mut() {
            subject.clear();
        }
        self.message.clear();
    }
}

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("couldn't reach email relay: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("email relay rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Something that delivers a contact message on the site owner's behalf.
#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    async fn send(&self, payload: &ContactPayload) -> Result<(), RelayError>;
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

/// EmailJS REST relay.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    client: reqwest::Client,
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn request<'a>(&'a self, payload: &'a ContactPayload) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.user_id,
            template_params: payload,
        }
    }
}

impl EmailRelay for EmailJsRelay {
    async fn send(&self, payload: &ContactPayload) -> Result<(), RelayError> {
        let res = self
            .client
            .post(&self.config.endpoint)
            .json(&self.request(payload))
            .send()
            .await?;
        let status = res.status();
        if status.is_success() {
            log::info!("email relay accepted message");
            return Ok(());
        }
        let body = res.text().await.unwrap_or_default();
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
