//! Top-level pages, one per shell view.

pub mod auth;
pub mod map_view;
pub mod routes;
pub mod search;
