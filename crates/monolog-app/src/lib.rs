//! monolog-app
//!
//! The client side of the personal page: profile view/edit, the monologue
//! post board, and the navigation shell that switches between them. Views
//! render to plain text.

pub mod api;
pub mod board;
pub mod config;
pub mod profile;
pub mod routes;
pub mod shell;
