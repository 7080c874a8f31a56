use common::ir_models::MetaResponse;

use crate::api_utils::http_client::api_get_json;

pub async fn get_meta() -> anyhow::Result<MetaResponse> {
    api_get_json("/meta").await
}
