//! Extra axum routes mounted next to the Dioxus server functions.

pub mod export_csv;
