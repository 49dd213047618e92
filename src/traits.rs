//! Abstraction over the HTTP collaborator.

use crate::error::Result;
use crate::types::TransportResponse;
use serde_json::Value;
use std::collections::BTreeMap;

/// The external HTTP transport the [`Navigator`](crate::Navigator) dispatches
/// through.
///
/// Implementations own everything network-level: connections, TLS, redirects,
/// timeouts. Calls block until a response is available or the exchange fails.
/// A non-2xx status is a successful exchange at this layer; only
/// network-level failures produce an `Err`.
///
/// `params` are sent as query-string parameters. Response header names may
/// come back however the implementation normalizes them; lookups through
/// `Navigator::get_header` ignore ASCII case.
pub trait Transport: Send + Sync {
    fn get(
        &self,
        url: &str,
        headers: &BTreeMap<String, String>,
        params: &BTreeMap<String, String>,
    ) -> Result<TransportResponse>;

    fn post(
        &self,
        url: &str,
        headers: &BTreeMap<String, String>,
        body: &Value,
        params: &BTreeMap<String, String>,
    ) -> Result<TransportResponse>;
}
