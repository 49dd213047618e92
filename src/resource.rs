//! The in-memory model of one HAL document.
//!
//! A [`Resource`] is the parsed form of a HAL+JSON body: ordinary properties,
//! a `_links` table of named relation targets, and an `_embedded` table of
//! already-inlined related resources. It is built either empty through the
//! chained `add_*` builders or from a document via [`Resource::from_value`] /
//! [`Resource::from_json`], and serialized back with [`Resource::to_object`].
//!
//! Every `add_*` method consumes the resource and returns the updated value;
//! the returned resource is the one to keep using.

use crate::error::{HalError, Result};
use crate::types::{Link, Slot};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A value that can be stacked onto a link relation.
///
/// Covers the shapes HAL producers use: a bare href string (normalized to
/// `{href}`), a full [`Link`], or a sequence of either. `None` and empty
/// sequences are deliberately accepted and ignored, so optional links can be
/// threaded through a builder chain without branching.
pub trait IntoLinkValue {
    fn into_link_value(self) -> Option<Slot<Link>>;
}

impl IntoLinkValue for Link {
    fn into_link_value(self) -> Option<Slot<Link>> {
        Some(Slot::Single(self))
    }
}

impl IntoLinkValue for &str {
    fn into_link_value(self) -> Option<Slot<Link>> {
        Some(Slot::Single(Link::new(self)))
    }
}

impl IntoLinkValue for String {
    fn into_link_value(self) -> Option<Slot<Link>> {
        Some(Slot::Single(Link::new(self)))
    }
}

impl IntoLinkValue for Slot<Link> {
    fn into_link_value(self) -> Option<Slot<Link>> {
        Some(self)
    }
}

impl<T: Into<Link>> IntoLinkValue for Vec<T> {
    fn into_link_value(self) -> Option<Slot<Link>> {
        Slot::from_vec(self.into_iter().map(Into::into).collect())
    }
}

impl<V: IntoLinkValue> IntoLinkValue for Option<V> {
    fn into_link_value(self) -> Option<Slot<Link>> {
        self.and_then(IntoLinkValue::into_link_value)
    }
}

/// A value that can be stacked onto an embedded-resource relation.
///
/// Same skip-on-`None` and skip-on-empty semantics as [`IntoLinkValue`].
pub trait IntoResourceValue {
    fn into_resource_value(self) -> Option<Slot<Resource>>;
}

impl IntoResourceValue for Resource {
    fn into_resource_value(self) -> Option<Slot<Resource>> {
        Some(Slot::Single(self))
    }
}

impl IntoResourceValue for Slot<Resource> {
    fn into_resource_value(self) -> Option<Slot<Resource>> {
        Some(self)
    }
}

impl IntoResourceValue for Vec<Resource> {
    fn into_resource_value(self) -> Option<Slot<Resource>> {
        Slot::from_vec(self)
    }
}

impl<V: IntoResourceValue> IntoResourceValue for Option<V> {
    fn into_resource_value(self) -> Option<Slot<Resource>> {
        self.and_then(IntoResourceValue::into_resource_value)
    }
}

/// One parsed HAL document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resource {
    properties: Map<String, Value>,
    links: BTreeMap<String, Slot<Link>>,
    embedded: BTreeMap<String, Slot<Resource>>,
}

/// Append `value` under `rel`, promoting to a sequence on the second add.
fn stack<T>(map: &mut BTreeMap<String, Slot<T>>, rel: String, value: Slot<T>) {
    match map.remove(&rel) {
        Some(existing) => {
            map.insert(rel, existing.push(value));
        }
        None => {
            map.insert(rel, value);
        }
    }
}

impl Resource {
    pub fn new() -> Self {
        Resource::default()
    }

    // --- properties ---

    /// Set a property. Last write wins on value.
    pub fn add_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn add_properties<K, V, I>(mut self, entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (name, value) in entries {
            self = self.add_property(name, value);
        }
        self
    }

    /// Look up a property, failing with [`HalError::PropertyNotFound`] when
    /// absent.
    pub fn get_property(&self, name: &str) -> Result<&Value> {
        self.properties
            .get(name)
            .ok_or_else(|| HalError::PropertyNotFound(name.to_string()))
    }

    pub fn get_properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    // --- links ---

    /// Stack a link (or links) under a relation.
    ///
    /// A first add stores the value as given; further adds under the same
    /// relation promote it to an ordered sequence and append. `None` and
    /// empty sequences are no-ops.
    pub fn add_link(mut self, rel: impl Into<String>, value: impl IntoLinkValue) -> Self {
        if let Some(slot) = value.into_link_value() {
            stack(&mut self.links, rel.into(), slot);
        }
        self
    }

    /// Stack links for several relations at once.
    ///
    /// A sequence value stacks one element at a time, in order, so later
    /// elements land after earlier ones.
    pub fn add_links<K, V, I>(mut self, entries: I) -> Self
    where
        K: Into<String>,
        V: IntoLinkValue,
        I: IntoIterator<Item = (K, V)>,
    {
        for (rel, value) in entries {
            let rel = rel.into();
            if let Some(slot) = value.into_link_value() {
                for link in slot.iter() {
                    self = self.add_link(rel.clone(), link.clone());
                }
            }
        }
        self
    }

    /// The stored link value for a relation, single or sequence, verbatim.
    pub fn get_link(&self, rel: &str) -> Result<&Slot<Link>> {
        self.links
            .get(rel)
            .ok_or_else(|| HalError::RelationNotFound(rel.to_string()))
    }

    /// The relation's href(s), preserving single-vs-sequence shape.
    pub fn get_href(&self, rel: &str) -> Result<Slot<String>> {
        Ok(self.get_link(rel)?.map(|link| link.href.clone()))
    }

    /// Every known relation's href(s). Total: an empty map for a resource
    /// with no links.
    pub fn get_hrefs(&self) -> BTreeMap<String, Slot<String>> {
        self.links
            .iter()
            .map(|(rel, slot)| (rel.clone(), slot.map(|link| link.href.clone())))
            .collect()
    }

    pub fn get_links(&self) -> BTreeMap<String, Slot<Link>> {
        self.links.clone()
    }

    // --- embedded resources ---

    /// Stack an embedded resource (or resources) under a relation. Same
    /// promotion and skip-on-`None` semantics as [`Resource::add_link`].
    pub fn add_resource(mut self, rel: impl Into<String>, value: impl IntoResourceValue) -> Self {
        if let Some(slot) = value.into_resource_value() {
            stack(&mut self.embedded, rel.into(), slot);
        }
        self
    }

    pub fn add_resources<K, V, I>(mut self, entries: I) -> Self
    where
        K: Into<String>,
        V: IntoResourceValue,
        I: IntoIterator<Item = (K, V)>,
    {
        for (rel, value) in entries {
            let rel = rel.into();
            if let Some(slot) = value.into_resource_value() {
                for resource in slot.iter() {
                    self = self.add_resource(rel.clone(), resource.clone());
                }
            }
        }
        self
    }

    pub fn get_resource(&self, rel: &str) -> Result<&Slot<Resource>> {
        self.embedded
            .get(rel)
            .ok_or_else(|| HalError::RelationNotFound(rel.to_string()))
    }

    pub fn get_resources(&self) -> BTreeMap<String, Slot<Resource>> {
        self.embedded.clone()
    }

    // --- parse / serialize ---

    /// Parse a HAL document out of an already-decoded JSON value.
    ///
    /// The value must be a JSON object; anything else fails with
    /// [`HalError::InvalidDocument`]. `_links` and `_embedded` are pulled out
    /// and converted (recursively for `_embedded`); every other top-level key
    /// becomes a property. Null links are skipped, matching the builder's
    /// skip-falsy behavior.
    pub fn from_value(value: Value) -> Result<Resource> {
        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(HalError::InvalidDocument(format!(
                    "expected a JSON object, got {other}"
                )))
            }
        };

        let mut resource = Resource::new();
        for (key, value) in object {
            match key.as_str() {
                "_links" => {
                    for (rel, entry) in as_table(&key, value)? {
                        if let Some(slot) = link_slot_from_value(&entry)? {
                            stack(&mut resource.links, rel, slot);
                        }
                    }
                }
                "_embedded" => {
                    for (rel, entry) in as_table(&key, value)? {
                        if let Some(slot) = resource_slot_from_value(entry)? {
                            stack(&mut resource.embedded, rel, slot);
                        }
                    }
                }
                _ => {
                    resource.properties.insert(key, value);
                }
            }
        }
        Ok(resource)
    }

    /// Parse a HAL document from JSON text.
    pub fn from_json(text: &str) -> Result<Resource> {
        Resource::from_value(serde_json::from_str(text)?)
    }

    /// Parse a HAL document from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Resource> {
        Resource::from_value(serde_json::from_slice(bytes)?)
    }

    /// Serialize back to a plain JSON object.
    ///
    /// `_links` and `_embedded` keys appear only when the corresponding table
    /// has at least one entry; their presence in the output signals content.
    pub fn to_object(&self) -> Value {
        let mut object = self.properties.clone();
        if !self.links.is_empty() {
            let links: Map<String, Value> = self
                .links
                .iter()
                .map(|(rel, slot)| (rel.clone(), slot_to_value(slot, |link| serde_json::to_value(link).unwrap_or(Value::Null))))
                .collect();
            object.insert("_links".to_string(), Value::Object(links));
        }
        if !self.embedded.is_empty() {
            let embedded: Map<String, Value> = self
                .embedded
                .iter()
                .map(|(rel, slot)| (rel.clone(), slot_to_value(slot, Resource::to_object)))
                .collect();
            object.insert("_embedded".to_string(), Value::Object(embedded));
        }
        Value::Object(object)
    }
}

fn as_table(key: &str, value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(table) => Ok(table),
        Value::Null => Ok(Map::new()),
        other => Err(HalError::InvalidDocument(format!(
            "{key} must be an object, got {other}"
        ))),
    }
}

fn slot_to_value<T, F: Fn(&T) -> Value>(slot: &Slot<T>, to_value: F) -> Value {
    match slot {
        Slot::Single(item) => to_value(item),
        Slot::Many(items) => Value::Array(items.iter().map(|item| to_value(item)).collect()),
    }
}

/// Values producers leave in a `_links`/`_embedded` table that mean "no
/// relation here": null, false, empty string, empty array, empty object.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(object) => object.is_empty(),
        _ => false,
    }
}

/// Convert one `_links` entry, preserving the document's single-vs-array
/// shape. Falsy entries (and falsy array elements) are skipped.
fn link_slot_from_value(value: &Value) -> Result<Option<Slot<Link>>> {
    if is_falsy(value) {
        return Ok(None);
    }
    match value {
        Value::Array(items) => {
            let mut links = Vec::with_capacity(items.len());
            for item in items {
                if !is_falsy(item) {
                    links.push(Link::from_value(item)?);
                }
            }
            Ok(Slot::from_vec(links))
        }
        single => Ok(Some(Slot::Single(Link::from_value(single)?))),
    }
}

/// Convert one `_embedded` entry, recursing into full resources.
fn resource_slot_from_value(value: Value) -> Result<Option<Slot<Resource>>> {
    if is_falsy(&value) {
        return Ok(None);
    }
    match value {
        Value::Array(items) => {
            let mut resources = Vec::with_capacity(items.len());
            for item in items {
                if !is_falsy(&item) {
                    resources.push(Resource::from_value(item)?);
                }
            }
            Ok(Slot::from_vec(resources))
        }
        single => Ok(Some(Slot::Single(Resource::from_value(single)?))),
    }
}
