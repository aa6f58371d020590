//! Fact checker: fetch a fact, assess it, render a report line.

use factcheck_core::Assessor;
use serde_json::Value;
use tracing::{error, warn};

use crate::fetcher::{FetchError, Fetcher};
use crate::notify::{Notifier, NullNotifier};

/// Default fact source.
pub const API_URL: &str = "https://catfact.ninja/fact";

/// Orchestrates the fetch capability and the assessment engine.
///
/// The checker owns a fetcher, an assessor, and a notifier. The
/// notifier defaults to [`NullNotifier`] and only fires on the
/// missing-field failure path, where the payload shape itself is
/// suspect and operators should hear about it.
pub struct FactChecker {
    fetcher: Box<dyn Fetcher>,
    assessor: Box<dyn Assessor>,
    notifier: Box<dyn Notifier>,
    url: String,
}

impl FactChecker {
    pub fn new(fetcher: impl Fetcher + 'static, assessor: impl Assessor + 'static) -> Self {
        Self {
            fetcher: Box::new(fetcher),
            assessor: Box::new(assessor),
            notifier: Box::new(NullNotifier),
            url: API_URL.to_string(),
        }
    }

    /// Override the fact source URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Replace the no-op notifier with a real collaborator.
    pub fn set_notifier(&mut self, notifier: impl Notifier + 'static) {
        self.notifier = Box::new(notifier);
    }

    /// Fetch a random fact and return it with an assessment appended,
    /// or a diagnostic line when the fact cannot be retrieved.
    pub fn random_fact(&self) -> String {
        let fact = match self.fetch_fact() {
            Ok(fact) => fact,
            Err(e) => return format!("Cannot retrieve a fact due to an error: {e}."),
        };

        let assessment = self.assess_fact(&fact);

        format!("{fact} {assessment}")
    }

    /// Fetch the raw payload and extract the fact text from it.
    pub fn fetch_fact(&self) -> Result<String, FetchError> {
        let raw = self.fetcher.fetch(&self.url).map_err(|e| {
            error!(url = %self.url, %e, "fetch failed");
            e
        })?;

        let payload: Value = serde_json::from_str(&raw).map_err(|e| {
            error!(%e, "response body is not JSON");
            FetchError::Malformed(e.to_string())
        })?;

        match payload.get("fact") {
            Some(Value::String(fact)) => Ok(fact.clone()),
            Some(other) => {
                error!(%other, "fact field is not a string");
                Err(FetchError::Malformed(format!(
                    "the fact field is not a string: {other}"
                )))
            }
            None => {
                let err = FetchError::MissingField { payload: raw };
                warn!(%err, "unexpected payload shape");
                self.notifier.notify("email", &err.to_string());
                self.notifier.notify("slack", &err.to_string());
                Err(err)
            }
        }
    }

    fn assess_fact(&self, fact: &str) -> String {
        let assessment = self.assessor.assess(fact);

        format!(
            "It seems to be {}. Our score is {} point{}.",
            assessment.opinion,
            assessment.score,
            if assessment.score != 1 { "s" } else { "" }
        )
    }
}
