//! HAL link objects.

use crate::error::{HalError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One named relation target from a `_links` table.
///
/// `templated` signals that `href` contains RFC 6570 placeholders to be
/// filled from caller-supplied parameters before the link can be followed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templated: Option<bool>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Link {
            href: href.into(),
            title: None,
            templated: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn templated(mut self) -> Self {
        self.templated = Some(true);
        self
    }

    /// Parse a single link out of a `_links` entry.
    ///
    /// HAL producers are loose here: a bare string is shorthand for
    /// `{"href": ...}`, and is normalized on the way in.
    pub fn from_value(value: &Value) -> Result<Link> {
        match value {
            Value::String(href) => Ok(Link::new(href.clone())),
            Value::Object(_) => Ok(serde_json::from_value(value.clone())?),
            other => Err(HalError::InvalidDocument(format!(
                "link value must be a string or object, got {other}"
            ))),
        }
    }
}

impl From<&str> for Link {
    fn from(href: &str) -> Self {
        Link::new(href)
    }
}

impl From<String> for Link {
    fn from(href: String) -> Self {
        Link::new(href)
    }
}
