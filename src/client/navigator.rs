//! The link-following client.

use crate::client::link_resolver;
use crate::client::settings::{Settings, SettingsOverrides};
use crate::error::{HalError, Result};
use crate::resource::Resource;
use crate::types::{find_header, TransportResponse};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;
use url::Url;

/// An immutable snapshot of the most recent HTTP exchange.
///
/// Built by [`Navigator::discover`], advanced by [`Navigator::get`] /
/// [`Navigator::post`], each of which returns a brand-new `Navigator`,
/// never mutating the old one. That makes a navigator a safe bookmark: a
/// traversal can branch from one snapshot into several independent follow-on
/// requests without synchronization, provided the transport is thread-safe.
#[derive(Debug)]
pub struct Navigator {
    settings: Settings,
    status: u16,
    location: Url,
    headers: BTreeMap<String, String>,
    resource: Resource,
}

impl Navigator {
    /// Fetch a starting resource and wrap it.
    ///
    /// The settings resolved here (defaults layered with `overrides`) are
    /// carried unchanged through every subsequent hop in the chain. The
    /// snapshot's location is the response's final URL, after redirects,
    /// so relative links resolve against where the document actually came
    /// from.
    pub fn discover(url: &str, overrides: Option<SettingsOverrides>) -> Result<Navigator> {
        let settings = Settings::resolve(Settings::default_settings(), overrides);
        debug!(url, "discovering root resource");
        let response = settings
            .transport
            .get(url, &settings.headers, &BTreeMap::new())?;
        Navigator::from_response(settings, response)
    }

    fn from_response(settings: Settings, response: TransportResponse) -> Result<Navigator> {
        let resource = Resource::from_slice(&response.body)?;
        Ok(Navigator {
            settings,
            status: response.status,
            location: response.final_url,
            headers: response.headers,
            resource,
        })
    }

    /// Follow a relation with a GET, producing the next snapshot.
    ///
    /// Multi-valued relations use the first link; see [`Navigator::get_nth`]
    /// for positional selection. The href is expanded as a URI template
    /// against `params`; parameters no placeholder consumed are sent as query
    /// parameters (consumed ones are not re-sent). A missing relation fails
    /// before any request is issued.
    pub fn get(&self, rel: &str, params: Option<BTreeMap<String, String>>) -> Result<Navigator> {
        self.get_nth(rel, 0, params)
    }

    /// Follow the `index`-th link of a multi-valued relation with a GET.
    pub fn get_nth(
        &self,
        rel: &str,
        index: usize,
        params: Option<BTreeMap<String, String>>,
    ) -> Result<Navigator> {
        let (url, unused) = self.resolve_link(rel, index, params)?;
        debug!(rel, url = %url, "following link");
        let response = self
            .settings
            .transport
            .get(url.as_str(), &self.settings.headers, &unused)?;
        Navigator::from_response(self.settings.clone(), response)
    }

    /// Follow a relation with a POST carrying a JSON body.
    ///
    /// Link resolution is identical to [`Navigator::get`].
    pub fn post(
        &self,
        rel: &str,
        body: &Value,
        params: Option<BTreeMap<String, String>>,
    ) -> Result<Navigator> {
        self.post_nth(rel, 0, body, params)
    }

    /// Follow the `index`-th link of a multi-valued relation with a POST.
    pub fn post_nth(
        &self,
        rel: &str,
        index: usize,
        body: &Value,
        params: Option<BTreeMap<String, String>>,
    ) -> Result<Navigator> {
        let (url, unused) = self.resolve_link(rel, index, params)?;
        debug!(rel, url = %url, "posting to link");
        let response =
            self.settings
                .transport
                .post(url.as_str(), &self.settings.headers, body, &unused)?;
        Navigator::from_response(self.settings.clone(), response)
    }

    /// The status code of the wrapped exchange. Non-2xx codes are surfaced
    /// here, not raised as errors.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The wrapped resource.
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Where the wrapped response came from (post-redirect).
    pub fn location(&self) -> &Url {
        &self.location
    }

    /// A response header by name, ignoring ASCII case; fails with
    /// [`HalError::HeaderNotFound`] when absent. Transports differ in how
    /// they normalize header names on the way in, so the lookup must not.
    pub fn get_header(&self, name: &str) -> Result<&str> {
        find_header(&self.headers, name)
            .ok_or_else(|| HalError::HeaderNotFound(name.to_string()))
    }

    /// Turn a relation into the absolute URL to dispatch plus the leftover
    /// query parameters. No I/O: failures here mean no request was made.
    fn resolve_link(
        &self,
        rel: &str,
        index: usize,
        params: Option<BTreeMap<String, String>>,
    ) -> Result<(Url, BTreeMap<String, String>)> {
        let href = self.resource.get_href(rel)?;
        let href = href
            .get(index)
            .ok_or_else(|| HalError::LinkIndexOutOfRange {
                rel: rel.to_string(),
                index,
                len: href.len(),
            })?;

        let params = params.unwrap_or_default();
        let (expanded, unused) = link_resolver::expand(href, &params);
        let url = link_resolver::make_absolute(&self.location, &expanded)?;
        Ok((url, unused))
    }
}
