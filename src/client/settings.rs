//! Per-traversal settings: static headers and the transport handle.

use crate::client::reqwest_transport::ReqwestTransport;
use crate::traits::Transport;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Settings carried through one traversal chain.
///
/// Resolved once at `discover` time and then threaded unchanged through every
/// subsequent hop; cloning shares the transport handle.
#[derive(Clone)]
pub struct Settings {
    pub headers: BTreeMap<String, String>,
    pub transport: Arc<dyn Transport>,
}

impl Settings {
    /// Empty headers and the default reqwest-backed transport.
    pub fn default_settings() -> Settings {
        Settings {
            headers: BTreeMap::new(),
            transport: Arc::new(ReqwestTransport::new()),
        }
    }

    /// Apply one optional layer of overrides.
    ///
    /// Headers merge shallowly with the override winning on collision; the
    /// transport is replaced only when the overrides carry one. Nothing
    /// deeper is merged.
    pub fn resolve(base: Settings, overrides: Option<SettingsOverrides>) -> Settings {
        let Some(overrides) = overrides else {
            return base;
        };

        let mut headers = base.headers;
        headers.extend(overrides.headers);

        Settings {
            headers,
            transport: overrides.transport.unwrap_or(base.transport),
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Caller-supplied overrides for [`Navigator::discover`](crate::Navigator::discover).
#[derive(Default)]
pub struct SettingsOverrides {
    headers: BTreeMap<String, String>,
    transport: Option<Arc<dyn Transport>>,
}

impl SettingsOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header sent on every request in the traversal chain.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_headers<K, V, I>(mut self, entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (name, value) in entries {
            self.headers.insert(name.into(), value.into());
        }
        self
    }

    /// Swap the transport the chain dispatches through. This is also the
    /// seam tests use to inject a mock.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }
}
