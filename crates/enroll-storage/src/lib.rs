//! # enroll-storage
//!
//! Storage abstraction layer for the enroll portal using RocksDB.
//!
//! This crate provides the storage interface and RocksDB implementation
//! used by the credential and profile stores.

#![warn(clippy::all)]

pub mod column_families;
pub mod errors;
pub mod rocksdb_impl;
pub mod traits;

pub use column_families::*;
pub use errors::{Result, StorageError};
pub use rocksdb_impl::RocksDbStorage;
pub use traits::{Batch, BatchExt, Storage};
