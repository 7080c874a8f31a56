//! Client API calls for the investor-relations endpoints.

use common::ir_models::{AssistantResponse, FinancialKpi, KapNotification, KapSyncResult, MetaResponse, PortfolioProperty};
use dioxus::prelude::*;

#[server]
pub async fn get_meta() -> Result<MetaResponse, ServerFnError> {
    let x = backend::api::get_meta().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_kap_notifications() -> Result<Vec<KapNotification>, ServerFnError> {
    let x = backend::api::list_kap_notifications().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn sync_kap() -> Result<KapSyncResult, ServerFnError> {
    let x = backend::api::sync_kap_notifications().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_kpis() -> Result<Vec<FinancialKpi>, ServerFnError> {
    let x = backend::api::list_kpis().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_portfolio() -> Result<Vec<PortfolioProperty>, ServerFnError> {
    let x = backend::api::list_portfolio().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn ask_assistant(question: String) -> Result<AssistantResponse, ServerFnError> {
    let x = backend::api::ask_assistant(question).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
