//! HTTP boundary.
//!
//! - `GET  /`         — landing page
//! - `GET  /game/rps` — game page
//! - `POST /play`     — play one round
//! - `GET  /health`   — liveness probe
mod handlers;
mod pages;
mod server;

pub use handlers::*;
pub use pages::*;
pub use server::*;
