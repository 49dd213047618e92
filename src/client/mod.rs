//! The navigation layer: settings, link resolution, and the HTTP-dispatching
//! navigator.

pub mod link_resolver;
mod navigator;
pub mod reqwest_transport;
mod settings;

pub use navigator::Navigator;
pub use reqwest_transport::ReqwestTransport;
pub use settings::{Settings, SettingsOverrides};
