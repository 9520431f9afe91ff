//! Jooble search API client.
//!
//! Posts a [`JoobleQuery`] to `{base}/api/{api_key}` and returns whatever
//! JSON comes back. Unlike the Greenhouse client there is no request timeout,
//! and every failure is logged and returned to the caller.

use std::time::Duration;

use common::settings::DEFAULT_JOOBLE_BASE_URL;
use common::{JoobleQuery, JoobleRequest, Settings};
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{error, info};

use crate::error::{Error, Result};

#[derive(Clone)]
pub struct JoobleClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for JoobleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JoobleClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl JoobleClient {
    /// Fails with [`Error::MissingApiKey`] when `api_key` is blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(Error::Client)?;

        Ok(JoobleClient {
            client,
            api_key,
            base_url: DEFAULT_JOOBLE_BASE_URL.to_string(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.jooble_api_key.clone().ok_or(Error::MissingApiKey)?;
        Ok(Self::new(api_key)?.with_base_url(&settings.jooble_base_url))
    }

    /// Reads [`Settings`] from the environment; `JOOBLE_API_KEY` must be set.
    pub fn from_env() -> Result<Self> {
        Self::from_settings(&Settings::from_env()?)
    }

    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = base_url.as_ref().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/api/{}", self.base_url, self.api_key)
    }

    // Used in errors and logs in place of `endpoint()`.
    fn redacted_endpoint(&self) -> String {
        format!("{}/api/***", self.base_url)
    }

    /// Positional form of [`search`](Self::search).
    pub fn search_jobs(
        &self,
        keywords: &str,
        location: &str,
        radius: Option<u32>,
        page: u32,
        companysearch: bool,
    ) -> Result<Value> {
        self.search(&JoobleQuery {
            keywords: keywords.to_string(),
            location: location.to_string(),
            radius,
            page,
            companysearch,
        })
    }

    /// Runs one search and returns the decoded response body untouched.
    pub fn search(&self, query: &JoobleQuery) -> Result<Value> {
        let payload = JoobleRequest::from(query);
        info!(
            keywords = %payload.keywords,
            location = %payload.location,
            page = %payload.page,
            companysearch = %payload.companysearch,
            radius = ?payload.radius,
            "Searching jobs"
        );

        let response = match self.client.post(self.endpoint()).json(&payload).send() {
            Ok(resp) => resp,
            Err(source) => {
                let err = self.request_error(source);
                error!(error = %err, "Request error occurred");
                return Err(err);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let err = Error::Status {
                url: self.redacted_endpoint(),
                status,
            };
            error!(error = %err, "HTTP error occurred");
            return Err(err);
        }

        let body = match response.text() {
            Ok(text) => text,
            Err(source) => {
                let err = self.request_error(source);
                error!(error = %err, "Request error occurred");
                return Err(err);
            }
        };

        let data: Value = match serde_json::from_str(&body) {
            Ok(data) => data,
            Err(e) => {
                error!(error = %e, "Failed to parse JSON response");
                return Err(Error::Decode(e));
            }
        };

        let count = data
            .get("jobs")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);
        info!(count, "API Response: {} jobs found", count);

        Ok(data)
    }

    // reqwest puts the request URL, and with it the API key, into its errors.
    fn request_error(&self, source: reqwest::Error) -> Error {
        Error::Request {
            url: self.redacted_endpoint(),
            source: source.without_url(),
        }
    }
}
