use common::ir_models::FinancialKpi;

use crate::api_utils::http_client::api_get_json;

/// KPI series ordered by period, oldest first.
pub async fn list_kpis() -> anyhow::Result<Vec<FinancialKpi>> {
    api_get_json("/api/kpi").await
}
