//! halboy: a HAL+JSON hypermedia client.
//!
//! HAL documents carry, alongside ordinary properties, a `_links` table of
//! named relations and an `_embedded` table of inlined related resources.
//! This crate models such documents as [`Resource`] values and follows their
//! links with a [`Navigator`]: discover a starting resource, then hop from
//! relation to relation, getting a fresh immutable snapshot per hop.
//!
//! ```no_run
//! use halboy::{Navigator, SettingsOverrides};
//! use std::collections::BTreeMap;
//!
//! # fn main() -> halboy::Result<()> {
//! let root = Navigator::discover(
//!     "https://api.example.com",
//!     Some(SettingsOverrides::new().with_header("authorization", "some-token")),
//! )?;
//!
//! let mut params = BTreeMap::new();
//! params.insert("userId".to_string(), "fred".to_string());
//! let user = root.get("user", Some(params))?;
//!
//! assert_eq!(user.status(), 200);
//! println!("{}", user.resource().get_property("name")?);
//! # Ok(())
//! # }
//! ```
//!
//! HTTP is behind the [`Transport`] trait; the default implementation wraps
//! `reqwest`'s blocking client, and tests inject mocks through
//! [`SettingsOverrides::with_transport`].

pub mod client;
pub mod error;
pub mod resource;
pub mod traits;
pub mod types;

pub use client::{Navigator, ReqwestTransport, Settings, SettingsOverrides};
pub use error::{HalError, Result};
pub use resource::{IntoLinkValue, IntoResourceValue, Resource};
pub use traits::Transport;
pub use types::{Link, Slot, TransportResponse};
