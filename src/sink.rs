//! Downstream consumers of accepted credentials

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Consumer invoked once per successful submit, with the email then the password
#[cfg_attr(test, mockall::automock)]
pub trait CredentialSink {
    fn deliver(&mut self, email: String, password: String);
}

/// Accepted credentials as written to stdout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub submitted_at: DateTime<Utc>,
}

/// Sink that keeps every delivery until the caller drains it
#[derive(Debug, Default)]
pub struct CollectingSink {
    received: Vec<Credentials>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.received.len()
    }

    pub fn is_empty(&self) -> bool {
        self.received.is_empty()
    }

    /// Most recent delivery, if any
    #[cfg(test)]
    pub fn latest(&self) -> Option<&Credentials> {
        self.received.last()
    }

    /// Take all deliveries, oldest first
    pub fn drain(&mut self) -> Vec<Credentials> {
        std::mem::take(&mut self.received)
    }
}

impl CredentialSink for CollectingSink {
    fn deliver(&mut self, email: String, password: String) {
        tracing::debug!("Credentials delivered to collecting sink");
        self.received.push(Credentials {
            email,
            password,
            submitted_at: Utc::now(),
        });
    }
}
