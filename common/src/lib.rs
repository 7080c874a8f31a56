//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod text_highlight;
pub mod csv_export;
pub mod format;
pub mod ir_models;
pub mod kpi_analysis;
pub mod company_config;
