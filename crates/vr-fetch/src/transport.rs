//! HTTP transport seam.
//!
//! [`OverpassClient`](crate::OverpassClient) only ever issues form-encoded
//! POSTs, so the trait is that one call.  Production uses
//! [`ReqwestTransport`]; tests script responses per URL.

use std::time::Duration;

use crate::{FetchError, FetchResult};

pub trait Transport {
    /// POST `fields` as `application/x-www-form-urlencoded` and return the
    /// body of a 2xx response.
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> FetchResult<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> FetchResult<String> {
        (**self).post_form(url, fields)
    }
}

/// Blocking `reqwest` transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> FetchResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("vr-road-data/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> FetchResult<String> {
        let response = self.client.post(url).form(fields).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.text()?)
    }
}
