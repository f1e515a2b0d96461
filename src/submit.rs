//! Submission handler for the contact form: one POST round trip per
//! explicit user action, interpreted into a status line.

use crate::form::ContactForm;
use anyhow::{Context, Result, anyhow};
use futures_util::future::{AbortHandle, Abortable};
use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;

/// Path the form posts to, resolved against the page origin.
pub const CONTACT_PATH: &str = "/api/contact";

pub const SENDING: &str = "Sending...";
pub const DELIVERED_FALLBACK: &str = "Message sent successfully!";
pub const REJECTED_FALLBACK: &str = "Failed to send message. Please try again.";
pub const FAILED_STATUS: &str = "An error occurred. Please try again later.";

/// Body shape the contact endpoint replies with. Both fields are optional
/// and unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// What one completed round trip means for the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 2xx reply. The form is cleared.
    Delivered(String),
    /// Non-2xx reply. The form is kept so the user can edit and resubmit.
    Rejected(String),
    /// The request never completed or the body was not valid JSON.
    Failed,
}

impl Outcome {
    pub fn into_status(self) -> String {
        match self {
            Outcome::Delivered(status) | Outcome::Rejected(status) => status,
            Outcome::Failed => FAILED_STATUS.to_string(),
        }
    }

    pub fn clears_form(&self) -> bool {
        matches!(self, Outcome::Delivered(_))
    }
}

/// Maps a parsed reply to its outcome. Missing, `null`, and empty-string
/// fields all fall back to the default texts, so a completed submission
/// never leaves the status empty.
pub fn classify(ok: bool, reply: ContactReply) -> Outcome {
    if ok {
        let status = reply
            .message
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| DELIVERED_FALLBACK.to_string());
        Outcome::Delivered(status)
    } else {
        let status = reply
            .error
            .filter(|error| !error.is_empty())
            .unwrap_or_else(|| REJECTED_FALLBACK.to_string());
        Outcome::Rejected(status)
    }
}

/// Owns the signals a submission mutates plus the abort handle of the
/// request currently in flight, if any.
#[derive(Debug, Clone, Copy)]
pub struct Submitter {
    form: RwSignal<ContactForm>,
    status: RwSignal<String>,
    in_flight: StoredValue<Option<AbortHandle>>,
}

impl Submitter {
    pub fn new(form: RwSignal<ContactForm>, status: RwSignal<String>) -> Self {
        Submitter {
            form,
            status,
            in_flight: StoredValue::new(None),
        }
    }

    /// Posts the current form contents to the contact endpoint.
    ///
    /// The status flips to [`SENDING`] before the request leaves. A prior
    /// request still in flight is aborted first, so a stale reply can never
    /// overwrite the status of a newer attempt. No automatic retry.
    pub fn submit(&self) {
        self.status.set(SENDING.to_string());

        if let Some(prior) = self.in_flight.get_value() {
            prior.abort();
        }
        let (handle, registration) = AbortHandle::new_pair();
        self.in_flight.set_value(Some(handle));

        let this = *self;
        let payload = self.form.get_untracked();
        spawn_local(async move {
            let Ok(outcome) = Abortable::new(deliver(payload), registration).await else {
                // Aborted by a newer submission, which owns the status now.
                return;
            };
            this.in_flight.set_value(None);
            let clears_form = outcome.clears_form();
            this.status.set(outcome.into_status());
            if clears_form {
                this.form.set(ContactForm::default());
            }
        });
    }
}

async fn deliver(form: ContactForm) -> Outcome {
    match request(&form).await {
        Ok((ok, reply)) => classify(ok, reply),
        Err(err) => {
            error!("contact request failed: {err:#}");
            Outcome::Failed
        }
    }
}

/// One round trip. Transport errors and body-parse errors share this single
/// failure path regardless of the HTTP status.
async fn request(form: &ContactForm) -> Result<(bool, ContactReply)> {
    let response = reqwest::Client::new()
        .post(endpoint()?)
        .json(form)
        .send()
        .await?;
    let ok = response.status().is_success();
    let reply = response.json::<ContactReply>().await?;
    Ok((ok, reply))
}

// reqwest needs an absolute URL on wasm.
fn endpoint() -> Result<String> {
    let origin = web_sys::window()
        .context("no window")?
        .location()
        .origin()
        .map_err(|_| anyhow!("window origin unavailable"))?;
    Ok(format!("{origin}{CONTACT_PATH}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(json: &str) -> ContactReply {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn delivered_uses_the_server_message() {
        let outcome = classify(true, reply(r#"{"message":"Thanks!"}"#));
        assert_eq!(outcome, Outcome::Delivered("Thanks!".to_string()));
        assert!(outcome.clears_form());
        assert_eq!(outcome.into_status(), "Thanks!");
    }

    #[test]
    fn delivered_falls_back_when_the_message_is_absent() {
        //missing, null and empty all mean "no usable message"
        for body in [r#"{}"#, r#"{"message":null}"#, r#"{"message":""}"#] {
            let outcome = classify(true, reply(body));
            assert_eq!(outcome.into_status(), DELIVERED_FALLBACK);
        }
    }

    #[test]
    fn rejected_uses_the_server_error() {
        let outcome = classify(false, reply(r#"{"error":"Invalid email"}"#));
        assert_eq!(outcome, Outcome::Rejected("Invalid email".to_string()));
        assert!(!outcome.clears_form());
        assert_eq!(outcome.into_status(), "Invalid email");
    }

    #[test]
    fn rejected_falls_back_when_the_error_is_absent() {
        for body in [r#"{}"#, r#"{"error":null}"#, r#"{"error":""}"#] {
            let outcome = classify(false, reply(body));
            assert_eq!(outcome.into_status(), REJECTED_FALLBACK);
        }
    }

    #[test]
    fn failed_keeps_the_form_and_uses_the_fixed_text() {
        assert!(!Outcome::Failed.clears_form());
        assert_eq!(Outcome::Failed.into_status(), FAILED_STATUS);
    }

    #[test]
    fn reply_parsing_tolerates_extra_fields() {
        let parsed = reply(r#"{"message":"ok","requestId":42}"#);
        assert_eq!(parsed.message.as_deref(), Some("ok"));
        assert_eq!(parsed.error, None);
    }

    #[test]
    fn reply_parsing_rejects_non_json() {
        //a non-JSON body feeds the unified failure path
        assert!(serde_json::from_str::<ContactReply>("<html>oops</html>").is_err());
    }
}
