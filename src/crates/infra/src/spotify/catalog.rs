use super::token::{AccessToken, TokenCache};
use crate::config::SpotifyConfig;
use domain::provider::{CatalogError, CatalogProvider, ProviderTrack};
use log::{debug, info};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// client credentials 授权返回
#[derive(Debug, Deserialize)]
struct ClientCredentialsToken {
    access_token: String,
    expires_in: u64,
}

/// Spotify Web API search, authorised with the client-credentials flow.
pub struct SpotifyCatalogClient {
    http: reqwest::Client,
    cfg: SpotifyConfig,
    token: TokenCache,
}

impl SpotifyCatalogClient {
    pub fn new(cfg: SpotifyConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(cfg.timeout).build()?;
        Ok(Self {
            http,
            cfg,
            token: TokenCache::new(),
        })
    }

    async fn access_token(&self) -> Result<String, CatalogError> {
        self.token.get_or_refresh(|| self.request_token()).await
    }

    async fn request_token(&self) -> Result<AccessToken, CatalogError> {
        if !self.cfg.has_client_credentials() {
            return Err(CatalogError::Unavailable(
                "Spotify client credentials are not configured".to_string(),
            ));
        }

        let url = format!("{}/api/token", self.cfg.accounts_url);
        let response = self
            .http
            .post(&url)
            .basic_auth(&self.cfg.client_id, Some(&self.cfg.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| CatalogError::Unavailable(format!("token request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(CatalogError::Unavailable(format!(
                "token request rejected: HTTP {}",
                response.status()
            )));
        }

        let token: ClientCredentialsToken = response
            .json()
            .await
            .map_err(|e| CatalogError::Unavailable(format!("invalid token response: {}", e)))?;

        info!("Obtained Spotify catalog token, expires in {}s", token.expires_in);
        Ok(AccessToken::new(
            token.access_token,
            Duration::from_secs(token.expires_in),
        ))
    }
}

#[async_trait::async_trait]
impl CatalogProvider for SpotifyCatalogClient {
    async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<ProviderTrack>, CatalogError> {
        let token = self.access_token().await?;
        let url = format!("{}/v1/search", self.cfg.api_url);
        let limit = limit.to_string();
        debug!("Searching catalog for {:?} (limit {})", query, limit);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&token)
            .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(|e| CatalogError::Unavailable(format!("search request failed: {}", e)))?;

        match response.status() {
            StatusCode::UNAUTHORIZED => {
                self.token.invalidate().await;
                return Err(CatalogError::Unavailable(
                    "search rejected the access token".to_string(),
                ));
            }
            status if !status.is_success() => {
                return Err(CatalogError::Request(format!("search returned HTTP {}", status)));
            }
            _ => {}
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| CatalogError::InvalidResponse(e.to_string()))?;
        parse_search_items(body)
    }
}

// 搜索结果位于 tracks.items
fn parse_search_items(mut body: Value) -> Result<Vec<ProviderTrack>, CatalogError> {
    match body.pointer_mut("/tracks/items").map(Value::take) {
        Some(Value::Array(items)) => Ok(items.into_iter().map(ProviderTrack).collect()),
        _ => Err(CatalogError::InvalidResponse(
            "search response has no tracks.items list".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_search_items() {
        let body = json!({
            "tracks": {
                "href": "https://api.spotify.com/v1/search?query=x",
                "items": [{"id": "a"}, {"id": "b"}],
                "limit": 2
            }
        });

        let items = parse_search_items(body).unwrap();
        let ids: Vec<_> = items.iter().map(|t| t.id().unwrap()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_empty_search() {
        let items = parse_search_items(json!({"tracks": {"items": []}})).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_parse_search_without_items() {
        assert!(matches!(
            parse_search_items(json!({"error": {"status": 400}})),
            Err(CatalogError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_search_items(json!({"tracks": {"items": null}})),
            Err(CatalogError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_credentials_is_unavailable() {
        let client = SpotifyCatalogClient::new(SpotifyConfig::default()).unwrap();

        let err = client.search_tracks("anything", 1).await.unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable(_)));
    }
}
