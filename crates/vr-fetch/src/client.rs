//! Overpass client: per-endpoint retries with failover across mirrors.

use std::thread;

use tracing::{info, warn};

use vr_core::{BBox, FetchConfig};

use crate::query::build_query;
use crate::response::OverpassResponse;
use crate::transport::{ReqwestTransport, Transport};
use crate::FetchResult;

/// Result of a fetch over every configured endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Data(OverpassResponse),
    /// Every attempt against every endpoint failed.
    NoData,
}

impl FetchOutcome {
    pub fn into_data(self) -> Option<OverpassResponse> {
        match self {
            FetchOutcome::Data(response) => Some(response),
            FetchOutcome::NoData => None,
        }
    }
}

pub struct OverpassClient<T: Transport> {
    transport: T,
    config: FetchConfig,
}

impl OverpassClient<ReqwestTransport> {
    /// Client over a blocking `reqwest` transport using `config.timeout`.
    pub fn from_config(config: FetchConfig) -> FetchResult<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Self::new(transport, config)
    }
}

impl<T: Transport> OverpassClient<T> {
    pub fn new(transport: T, config: FetchConfig) -> FetchResult<Self> {
        config.validate()?;
        Ok(Self { transport, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch every queried way inside `bbox`.
    ///
    /// Endpoints are tried in configured order; each gets up to
    /// `max_retries` attempts.  The first successful decode wins and no
    /// further endpoint is contacted.  Never errors: exhausting every
    /// endpoint yields [`FetchOutcome::NoData`].
    pub fn fetch(&self, bbox: &BBox) -> FetchOutcome {
        let query = build_query(bbox, &self.config);

        for server in &self.config.servers {
            info!("  Trying {}...", server_short_name(server));
            if let Some(response) = self.fetch_with_retry(server, &query) {
                return FetchOutcome::Data(response);
            }
        }
        FetchOutcome::NoData
    }

    fn fetch_with_retry(&self, url: &str, query: &str) -> Option<OverpassResponse> {
        let retries = self.config.max_retries;
        let delay = self.config.retry_delay;

        for attempt in 1..=retries {
            match self.attempt(url, query) {
                Ok(response) => return Some(response),
                Err(e) => {
                    warn!("    Attempt {attempt}/{retries} failed: {e}");
                    if attempt < retries && !delay.is_zero() {
                        info!("    Waiting {}s before retry...", delay.as_secs());
                        thread::sleep(delay);
                    }
                }
            }
        }
        None
    }

    fn attempt(&self, url: &str, query: &str) -> FetchResult<OverpassResponse> {
        let body = self.transport.post_form(url, &[("data", query)])?;
        let response = OverpassResponse::parse(&body)?;
        if let Some(remark) = &response.remark {
            warn!("    Server remark: {remark}");
        }
        Ok(response)
    }
}

/// First label of the endpoint's host, e.g. `overpass-api` for
/// `https://overpass-api.de/api/interpreter`.  Falls back to the full URL.
pub fn server_short_name(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().and_then(|h| h.split('.').next()).map(str::to_owned))
        .unwrap_or_else(|| url.to_owned())
}
