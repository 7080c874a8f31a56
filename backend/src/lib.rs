//! Server-side access to the investor-relations API.

pub mod config;
pub mod api;
pub mod api_utils;
pub mod server_extra;
