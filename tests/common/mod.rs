//! Shared test fixtures: an in-memory transport with canned responses.

use halboy::{HalError, Transport, TransportResponse};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::BTreeMap;
use url::Url;

/// One request the mock saw, for asserting on what was dispatched.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: String,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub params: BTreeMap<String, String>,
    pub body: Option<Value>,
}

/// A [`Transport`] that serves canned responses keyed on `(method, url)` and
/// records every call it sees. The query parameters the navigator computes
/// are recorded separately from the URL, so routes match on the plain URL.
#[derive(Default)]
pub struct MockTransport {
    routes: BTreeMap<(String, String), TransportResponse>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        MockTransport::default()
    }

    /// Serve `body` with status 200 for GETs of `url`.
    pub fn on_get(self, url: &str, body: Value) -> Self {
        let response = TransportResponse::new(200, Url::parse(url).unwrap(), body.to_string());
        self.on_get_response(url, response)
    }

    pub fn on_get_response(mut self, url: &str, response: TransportResponse) -> Self {
        self.routes.insert(("GET".into(), url.into()), response);
        self
    }

    pub fn on_post_response(mut self, url: &str, response: TransportResponse) -> Self {
        self.routes.insert(("POST".into(), url.into()), response);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    fn dispatch(
        &self,
        method: &str,
        url: &str,
        headers: &BTreeMap<String, String>,
        params: &BTreeMap<String, String>,
        body: Option<Value>,
    ) -> Result<TransportResponse, HalError> {
        self.calls.lock().push(RecordedCall {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            params: params.clone(),
            body,
        });
        self.routes
            .get(&(method.to_string(), url.to_string()))
            .cloned()
            .ok_or_else(|| HalError::Transport(format!("no mock route for {method} {url}")))
    }
}

impl Transport for MockTransport {
    fn get(
        &self,
        url: &str,
        headers: &BTreeMap<String, String>,
        params: &BTreeMap<String, String>,
    ) -> Result<TransportResponse, HalError> {
        self.dispatch("GET", url, headers, params, None)
    }

    fn post(
        &self,
        url: &str,
        headers: &BTreeMap<String, String>,
        body: &Value,
        params: &BTreeMap<String, String>,
    ) -> Result<TransportResponse, HalError> {
        self.dispatch("POST", url, headers, params, Some(body.clone()))
    }
}
