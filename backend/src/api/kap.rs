//! KAP disclosure feed.

use common::ir_models::{KapNotification, KapSyncResult};

use crate::api_utils::http_client::{api_get_json, api_post_json};

/// Latest notifications, newest first.
pub async fn list_kap_notifications() -> anyhow::Result<Vec<KapNotification>> {
    api_get_json("/kap").await
}

/// Ask the API to pull new notifications from KAP.
pub async fn sync_kap_notifications() -> anyhow::Result<KapSyncResult> {
    let result: KapSyncResult = api_post_json::<(), _>("/kap/sync", None).await?;
    tracing::info!("KAP sync finished: status={} count={}", result.status, result.count);
    Ok(result)
}
