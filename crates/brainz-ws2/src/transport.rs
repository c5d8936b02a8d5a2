// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::error::Result;

/// Status and raw body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking "GET a URL, return status and body" capability.
///
/// Implementations own connection handling, TLS and timeouts. Sharing a
/// client across threads is only as safe as the transport behind it.
pub trait Transport: Send + Sync {
    fn get(&self, url: &Url) -> Result<TransportResponse>;
}

/// [`Transport`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<TransportResponse> {
        let response = self.client.get(url.clone()).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();
        Ok(TransportResponse { status, body })
    }
}
