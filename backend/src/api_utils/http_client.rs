use anyhow::Context;
use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};

use crate::config::ApiConfig;

pub fn get_api_client(config: &ApiConfig) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .context("Failed to build IR API client")
}

async fn api_request_json<B: Serialize, T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<&B>,
) -> anyhow::Result<T> {
    let config = ApiConfig::from_env();
    let url = config.url(path);
    let client = get_api_client(&config)?;

    let t0 = std::time::Instant::now();
    let mut request = client.request(method.clone(), &url);
    if let Some(body) = body {
        request = request.json(body);
    }
    let response = request.send().await.with_context(|| format!("{method} {url} failed"))?;
    let status = response.status();
    let response_txt = response.text().await?;
    let dt_ms = t0.elapsed().as_millis();
    if status.is_client_error() || status.is_server_error() {
        tracing::error!("IR API {method} {path}: {status} in {dt_ms}ms");
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    tracing::info!("IR API {method} {path}: {status}, len = {} in {dt_ms}ms", response_txt.len());
    let parsed = serde_json::from_str(&response_txt)
        .with_context(|| format!("Failed to parse response of {method} {path}"))?;
    Ok(parsed)
}

pub async fn api_get_json<T: DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    api_request_json::<(), T>(Method::GET, path, None).await
}

pub async fn api_post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: Option<&B>,
) -> anyhow::Result<T> {
    api_request_json(Method::POST, path, body).await
}
