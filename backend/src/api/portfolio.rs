use common::ir_models::PortfolioProperty;

use crate::api_utils::http_client::api_get_json;

/// Properties ordered by valuation, largest first.
pub async fn list_portfolio() -> anyhow::Result<Vec<PortfolioProperty>> {
    api_get_json("/api/portfolio").await
}
