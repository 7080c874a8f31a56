//! Server functions proxying the IR API.

pub mod ir_api;
