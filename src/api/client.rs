use crate::config::Config;
use crate::error::AppError;
use reqwest::header::RETRY_AFTER;
use serde_json::Value;
use std::time::Duration;

use super::endpoints;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin authenticated GET client for the Riot API.
///
/// One request per tool call, no retries, no caching. Rate limiting is
/// reported to the caller, never handled here.
#[derive(Clone)]
pub struct RiotApiClient {
    http: reqwest::Client,
    api_key: String,
}

impl RiotApiClient {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;
        Ok(RiotApiClient {
            http,
            api_key: config.api_key,
        })
    }

    /// Issues one GET and maps every outcome into the error taxonomy.
    ///
    /// Status precedence: 429, 404, 403, 401, then any other non-2xx as a
    /// generic HTTP error. A 2xx body is parsed as JSON.
    pub async fn fetch(&self, url: &str) -> Result<Value, AppError> {
        tracing::debug!(url, "riot api request");
        let response = self
            .http
            .get(url)
            .header("X-Riot-Token", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout
                } else {
                    AppError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get(RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("unknown")
                    .to_string();
                tracing::warn!(url, retry_after, "rate limited");
                Err(AppError::RateLimited(retry_after))
            }
            404 => Err(AppError::NotFound),
            403 => Err(AppError::Forbidden),
            401 => Err(AppError::Unauthorized),
            code if !status.is_success() => Err(AppError::Http(code)),
            _ => response.json::<Value>().await.map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout
                } else if e.is_decode() {
                    AppError::Malformed(e.to_string())
                } else {
                    AppError::Network(e.to_string())
                }
            }),
        }
    }

    pub async fn get_account(
        &self,
        region: &str,
        game_name: &str,
        tag_line: &str,
    ) -> Result<Value, AppError> {
        let url = endpoints::account_url(region, game_name, tag_line)?;
        self.fetch(&url).await
    }

    pub async fn get_champion_masteries(
        &self,
        region: &str,
        puuid: &str,
    ) -> Result<Value, AppError> {
        let url = endpoints::masteries_url(region, puuid)?;
        self.fetch(&url).await
    }

    pub async fn get_match_ids(
        &self,
        region: &str,
        puuid: &str,
        count: usize,
    ) -> Result<Value, AppError> {
        let url = endpoints::match_ids_url(region, puuid, count)?;
        self.fetch(&url).await
    }

    pub async fn get_match(&self, region: &str, match_id: &str) -> Result<Value, AppError> {
        let url = endpoints::match_url(region, match_id)?;
        self.fetch(&url).await
    }

    pub async fn get_match_timeline(
        &self,
        region: &str,
        match_id: &str,
    ) -> Result<Value, AppError> {
        let url = endpoints::timeline_url(region, match_id)?;
        self.fetch(&url).await
    }
}
