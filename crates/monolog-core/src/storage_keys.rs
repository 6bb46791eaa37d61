//! Local storage key conventions.
//!
//! Every piece of client state lives under one fixed key and is written
//! wholesale.

/// The JSON-serialized post list.
pub const POSTS: &str = "posts";
