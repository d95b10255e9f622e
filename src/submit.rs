//! Simulated submission endpoint for the careers and contact forms.
//!
//! Nothing is sent anywhere: the gateway waits a fixed delay standing in for
//! the network round trip, logs the payload and hands back a receipt.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::forms::careers::Application;
use crate::forms::contact::ContactForm;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Submission {
    Application(Application),
    Contact(ContactForm),
}

impl Submission {
    fn prefix(&self) -> &'static str {
        match self {
            Submission::Application(_) => "APP",
            Submission::Contact(_) => "MSG",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub reference: String,
    pub received_at: DateTime<Utc>,
}

/// Why a submission could not be delivered. Encoding is the only failure the
/// simulated gateway has; a real transport adds its errors here and the form
/// handlers already show them as a retry banner.
#[derive(Debug)]
pub enum SubmitError {
    Encode(serde_json::Error),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Encode(e) => write!(f, "failed to encode submission: {e}"),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmitError::Encode(e) => Some(e),
        }
    }
}

#[derive(Debug)]
pub struct Gateway {
    delay: Duration,
    applications: AtomicU64,
    messages: AtomicU64,
}

impl Gateway {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            applications: AtomicU64::new(0),
            messages: AtomicU64::new(0),
        }
    }

    pub async fn deliver(&self, submission: &Submission) -> Result<Receipt, SubmitError> {
        let payload = serde_json::to_string(submission).map_err(SubmitError::Encode)?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let counter = match submission {
            Submission::Application(_) => &self.applications,
            Submission::Contact(_) => &self.messages,
        };
        let n = counter.fetch_add(1, Ordering::Relaxed) + 1;
        let receipt = Receipt {
            reference: format!("{}-{n:04}", submission.prefix()),
            received_at: Utc::now(),
        };
        tracing::info!(reference = %receipt.reference, %payload, "submission received");
        Ok(receipt)
    }
}
