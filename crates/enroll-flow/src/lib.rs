//! # enroll-flow
//!
//! The registration/authentication/profile-linkage flow.
//!
//! This crate owns the ordering that makes the portal consistent:
//! - account creation commits before the session learns about it
//! - the confirmed session pointer is set only by a login that also
//!   resolved a profile
//! - a login that finds an account without a profile deletes the orphaned
//!   account and sends the caller back to registration
//!
//! It also owns the per-session identity pointers, the access guard over
//! gated operations, and the single tagged [`Notice`] outcome the
//! presentation layer renders.

#![warn(clippy::all)]

pub mod errors;
pub mod guard;
pub mod service;
pub mod session;
pub mod types;

#[cfg(test)]
mod tests;

pub use errors::{FlowError, Result};
pub use guard::{require_confirmed, AccessState};
pub use service::Enrollment;
pub use session::SessionManager;
pub use types::*;
