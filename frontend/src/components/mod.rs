//! Shared UI components.

pub mod error_boundary;
pub mod suspend_boundary;
pub mod navbar;
pub mod page_section;
pub mod highlighted_text;
pub mod csv_export_button;
pub mod kpi_card;
pub mod trend_chart;
pub mod portfolio_section;
