//! Data transfer objects for the `/play` endpoint.
//!
//! Request and response bodies, serializable via `serde`. Field names are
//! part of the public wire format and must not change.
mod request;
mod response;

pub use request::*;
pub use response::*;
