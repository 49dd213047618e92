//! HTTP response snapshot handed back by a [`Transport`](crate::Transport).

use bytes::Bytes;
use std::collections::BTreeMap;
use url::Url;

/// What the transport collaborator returns for one exchange.
///
/// `final_url` is the URL the response actually came from, after any
/// redirects. Relative-link resolution on the next hop happens against it,
/// not against the requested URL.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub final_url: Url,
    pub headers: BTreeMap<String, String>,
    pub body: Bytes,
}

/// Case-insensitive header lookup. Transports differ in how they normalize
/// header names (reqwest lowercases them), so lookups must not depend on the
/// wire casing.
pub(crate) fn find_header<'a>(
    headers: &'a BTreeMap<String, String>,
    name: &str,
) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

impl TransportResponse {
    pub fn new(status: u16, final_url: Url, body: impl Into<Bytes>) -> Self {
        TransportResponse {
            status,
            final_url,
            headers: BTreeMap::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// A header value by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}
