//! Default [`Transport`] backed by `reqwest`'s blocking client.

use crate::error::Result;
use crate::traits::Transport;
use crate::types::TransportResponse;
use serde_json::Value;
use std::collections::BTreeMap;

/// The platform-default transport.
///
/// Owns a `reqwest::blocking::Client`; connection pooling, TLS, redirects and
/// timeouts are all reqwest's. Response header names come back the way
/// reqwest stores them (lowercased); `Navigator::get_header` lookups ignore
/// case, so callers are insulated from that.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::with_client(reqwest::blocking::Client::new())
    }

    /// Wrap an existing client, keeping its pool and configuration.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        ReqwestTransport { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_headers(
    mut builder: reqwest::blocking::RequestBuilder,
    headers: &BTreeMap<String, String>,
) -> reqwest::blocking::RequestBuilder {
    for (name, value) in headers {
        builder = builder.header(name, value);
    }
    builder
}

fn into_response(response: reqwest::blocking::Response) -> Result<TransportResponse> {
    let status = response.status().as_u16();
    let final_url = response.url().clone();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    let body = response.bytes()?;

    Ok(TransportResponse {
        status,
        final_url,
        headers,
        body,
    })
}

impl Transport for ReqwestTransport {
    fn get(
        &self,
        url: &str,
        headers: &BTreeMap<String, String>,
        params: &BTreeMap<String, String>,
    ) -> Result<TransportResponse> {
        let builder = apply_headers(self.client.get(url), headers).query(params);
        into_response(builder.send()?)
    }

    fn post(
        &self,
        url: &str,
        headers: &BTreeMap<String, String>,
        body: &Value,
        params: &BTreeMap<String, String>,
    ) -> Result<TransportResponse> {
        let builder = apply_headers(self.client.post(url), headers)
            .query(params)
            .json(body);
        into_response(builder.send()?)
    }
}
