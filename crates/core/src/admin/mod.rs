//! Admin control over the censorship flag.
//!
//! Authorization happens only in [`AdminService`], once per request, against
//! the server-held [`AdminSecret`]. [`AdminGate`] is a convenience state for
//! clients and grants nothing.

mod admin_gate;
mod admin_service;
mod secret;

pub use admin_gate::{AdminGate, CensorshipToggle};
pub use admin_service::AdminService;
pub use secret::AdminSecret;
