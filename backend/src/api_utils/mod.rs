//! HTTP helpers for talking to the IR API.

pub mod http_client;
