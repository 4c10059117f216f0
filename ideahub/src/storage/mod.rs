//! Storage module
//!
//! Provides durable key-value storage for per-device state.

pub mod kv_store;

pub use kv_store::{FileKvStore, KeyValueStore, MemoryKvStore};
