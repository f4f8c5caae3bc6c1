// Shared HTTP plumbing for the clusters management API

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// User-Agent string for all API requests
const USER_AGENT: &str = concat!("occ/", env!("CARGO_PKG_VERSION"));

lazy_static::lazy_static! {
    /// Shared HTTP client with proper User-Agent
    static ref CLIENT: Client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to create HTTP client");
}

/// Error body the API wraps failures in
#[derive(Debug, serde::Deserialize)]
struct ApiError {
    reason: String,
}

/// GET a JSON resource with bearer authentication
pub async fn get_json<T: DeserializeOwned>(url: &str, token: &str) -> Result<T> {
    let response = CLIENT.get(url).bearer_auth(token).send().await?;
    let response = check_status(response, url).await?;
    Ok(response.json().await?)
}

/// POST a JSON body and deserialize the JSON reply
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    token: &str,
    body: &B,
) -> Result<T> {
    let response = CLIENT.post(url).bearer_auth(token).json(body).send().await?;
    let response = check_status(response, url).await?;
    Ok(response.json().await?)
}

/// Map error statuses to messages, preferring the API's own reason text
async fn check_status(response: Response, url: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        anyhow::bail!("Authentication failed ({}). Check your offline token.", status);
    }

    match response.json::<ApiError>().await {
        Ok(e) => anyhow::bail!("{} (HTTP {})", e.reason, status),
        Err(_) => anyhow::bail!("HTTP request failed: {} ({})", url, status),
    }
}
