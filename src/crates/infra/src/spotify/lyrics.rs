use super::token::{AccessToken, TokenCache};
use crate::config::SpotifyConfig;
use domain::provider::{LyricsProvider, LyricsProviderError, ProviderLyrics};
use domain::value::TrackId;
use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE, USER_AGENT};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const WEB_PLAYER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36";

/// 网页播放器 token 接口返回
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WebPlayerToken {
    access_token: String,
    access_token_expiration_timestamp_ms: i64,
    #[serde(default)]
    is_anonymous: bool,
}

impl WebPlayerToken {
    fn into_access_token(self, now_ms: i64) -> Result<AccessToken, LyricsProviderError> {
        // 匿名 token 说明 sp_dc 已失效
        if self.is_anonymous {
            return Err(LyricsProviderError::Unavailable(
                "sp_dc cookie is invalid or expired".to_string(),
            ));
        }
        let remaining_ms = (self.access_token_expiration_timestamp_ms - now_ms).max(0) as u64;
        Ok(AccessToken::new(
            self.access_token,
            Duration::from_millis(remaining_ms),
        ))
    }
}

/// `<base>/color-lyrics/v2/track/<id>`，id 作为单个路径段编码
fn lyrics_url(base: &str, track_id: &TrackId) -> Result<Url, LyricsProviderError> {
    let mut url = Url::parse(base)
        .map_err(|e| LyricsProviderError::Request(format!("invalid lyrics url {}: {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| LyricsProviderError::Request(format!("invalid lyrics url {}", base)))?
        .pop_if_empty()
        .extend(["color-lyrics", "v2", "track"])
        .push(track_id.as_str());
    Ok(url)
}

/// Lyrics from the web player's color-lyrics endpoint, authorised by the
/// `sp_dc` session cookie.
pub struct SpotifyLyricsClient {
    http: reqwest::Client,
    cfg: SpotifyConfig,
    token: TokenCache,
}

impl SpotifyLyricsClient {
    pub fn new(cfg: SpotifyConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(WEB_PLAYER_USER_AGENT));
        headers.insert("App-Platform", HeaderValue::from_static("WebPlayer"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(cfg.timeout)
            .build()?;
        Ok(Self {
            http,
            cfg,
            token: TokenCache::new(),
        })
    }

    async fn access_token(&self) -> Result<String, LyricsProviderError> {
        self.token.get_or_refresh(|| self.request_token()).await
    }

    async fn request_token(&self) -> Result<AccessToken, LyricsProviderError> {
        if !self.cfg.has_sp_dc() {
            return Err(LyricsProviderError::Unavailable(
                "sp_dc cookie is not configured".to_string(),
            ));
        }

        let url = format!("{}/get_access_token", self.cfg.web_url);
        let cookie = HeaderValue::from_str(&format!("sp_dc={}", self.cfg.sp_dc))
            .map_err(|e| LyricsProviderError::Unavailable(format!("invalid sp_dc cookie: {}", e)))?;
        let response = self
            .http
            .get(&url)
            .header(COOKIE, cookie)
            .query(&[("reason", "transport"), ("productType", "web_player")])
            .send()
            .await
            .map_err(|e| LyricsProviderError::Unavailable(format!("token request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(LyricsProviderError::Unavailable(format!(
                "token request rejected: HTTP {}",
                response.status()
            )));
        }

        let token: WebPlayerToken = response.json().await.map_err(|e| {
            LyricsProviderError::Unavailable(format!("invalid token response: {}", e))
        })?;

        info!("Obtained Spotify web player token");
        token.into_access_token(chrono::Utc::now().timestamp_millis())
    }
}

#[async_trait::async_trait]
impl LyricsProvider for SpotifyLyricsClient {
    async fn get_lyrics_by_id(
        &self,
        track_id: &TrackId,
    ) -> Result<Option<ProviderLyrics>, LyricsProviderError> {
        let token = self.access_token().await?;
        let url = lyrics_url(&self.cfg.lyrics_url, track_id)?;
        debug!("Fetching lyrics for track {}", track_id);

        let response = self
            .http
            .get(url)
            .bearer_auth(&token)
            .query(&[("format", "json"), ("market", "from_token")])
            .send()
            .await
            .map_err(|e| LyricsProviderError::Request(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND | StatusCode::NO_CONTENT => return Ok(None),
            StatusCode::UNAUTHORIZED => {
                self.token.invalidate().await;
                return Err(LyricsProviderError::Unavailable(
                    "lyrics endpoint rejected the access token".to_string(),
                ));
            }
            status if !status.is_success() => {
                return Err(LyricsProviderError::Request(format!(
                    "lyrics endpoint returned HTTP {}",
                    status
                )));
            }
            _ => {}
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| LyricsProviderError::InvalidResponse(e.to_string()))?;
        Ok(Some(ProviderLyrics(body)))
    }
}
