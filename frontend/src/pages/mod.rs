//! Top-level routed pages.

pub mod dashboard_page;
pub mod kap_page;
pub mod assistant_page;
