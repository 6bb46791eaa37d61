//! monolog-core
//!
//! Domain types, the post store and its derived stats, and the storage key
//! conventions. No I/O of its own: persistence goes through
//! [`repository::PostRepository`].

pub mod error;
pub mod models;
pub mod repository;
pub mod stats;
pub mod storage_keys;
pub mod store;
