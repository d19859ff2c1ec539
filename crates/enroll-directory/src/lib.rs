//! # enroll-directory
//!
//! Account and profile stores for the enroll portal.
//!
//! This crate owns the persisted records and their invariants:
//! - Account creation with atomic username/email uniqueness
//! - Password authentication against stored Argon2id hashes
//! - At most one profile per account, linked by owner id
//! - Linked account+profile updates and deletes as single batches

#![warn(clippy::all)]

pub mod errors;
pub mod service;
pub mod traits;
pub mod types;
pub mod validation;

pub use errors::{DirectoryError, Result};
pub use service::DirectoryService;
pub use traits::{CredentialStore, Directory, ProfileStore};
pub use types::*;
