//! monolog-storage
//!
//! Local key-value storage and the post repository built on it.

pub mod error;
pub mod kv;
pub mod posts;
