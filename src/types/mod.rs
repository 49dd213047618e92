//! Core value types for the HAL client.

mod link;
mod response;
mod slot;

pub use bytes::Bytes;
pub use link::Link;
pub use response::TransportResponse;
pub use slot::Slot;

pub(crate) use response::find_header;
