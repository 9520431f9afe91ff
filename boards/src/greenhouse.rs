//! Greenhouse public job board client.
//!
//! Talks to `GET {base}/v1/boards/{company}/jobs`. A failed board is logged
//! and reported as having no jobs, so a caller walking several companies is
//! never stopped by one of them.

use std::time::Duration;

use common::settings::DEFAULT_GREENHOUSE_BASE_URL;
use common::{BoardResponse, ConfigError, Job, Settings};
use reqwest::blocking::Client;
use tracing::{debug, error, info};

use crate::error::{Error, Result};
use crate::filter::filter_jobs;

#[derive(Debug, Clone)]
pub struct GreenhouseJobClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl GreenhouseJobClient {
    /// Creates a client whose requests give up after `timeout`.
    ///
    /// A zero timeout is rejected, as it is for `GREENHOUSE_TIMEOUT_SECS`.
    pub fn new(timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            return Err(Error::Config(ConfigError::InvalidValue {
                key: "timeout",
                value: format!("{:?}", timeout),
                reason: "timeout must be greater than zero".to_string(),
            }));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::Client)?;

        Ok(GreenhouseJobClient {
            client,
            base_url: DEFAULT_GREENHOUSE_BASE_URL.to_string(),
            timeout,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(settings.greenhouse_timeout)?.with_base_url(&settings.greenhouse_base_url))
    }

    /// Reads [`Settings`] from the environment and builds a client from them.
    pub fn from_env() -> Result<Self> {
        Self::from_settings(&Settings::from_env()?)
    }

    /// Points the client at another host, e.g. a mirror or a test server.
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = base_url.as_ref().trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn board_url(&self, company: &str) -> String {
        format!("{}/v1/boards/{}/jobs", self.base_url, company)
    }

    /// Fetches `company`'s board and filters it.
    ///
    /// Any failure (unreachable host, timeout, non-2xx status, unreadable
    /// body) is logged and turned into an empty list.
    pub fn search_jobs(
        &self,
        company: &str,
        keyword: Option<&str>,
        department: Option<&str>,
    ) -> Vec<Job> {
        match self.try_search_jobs(company, keyword, department) {
            Ok(jobs) => jobs,
            Err(e) => {
                error!(company, error = %e, "Error fetching jobs for {}", company);
                Vec::new()
            }
        }
    }

    /// Same as [`search_jobs`](Self::search_jobs) but reports failures to the
    /// caller instead of hiding them.
    pub fn try_search_jobs(
        &self,
        company: &str,
        keyword: Option<&str>,
        department: Option<&str>,
    ) -> Result<Vec<Job>> {
        let board = self.fetch_board(company)?;
        let jobs = filter_jobs(board.jobs, keyword, department);

        info!(company, count = jobs.len(), "Found {} jobs for {}", jobs.len(), company);
        Ok(jobs)
    }

    fn fetch_board(&self, company: &str) -> Result<BoardResponse> {
        let url = self.board_url(company);
        debug!(%url, "Fetching Greenhouse board");

        let response = match self.client.get(&url).send() {
            Ok(resp) => resp,
            Err(source) => return Err(Error::Request { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { url, status });
        }

        let body = match response.text() {
            Ok(text) => text,
            Err(source) => return Err(Error::Request { url, source }),
        };

        // A board without a `jobs` key is an empty board, not an error.
        Ok(serde_json::from_str(&body)?)
    }
}
