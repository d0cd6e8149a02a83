use config::{Config, Environment, File};
use dotenvy::dotenv;
use serde::Deserialize;
use std::error::Error;
use std::time::Duration;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawConfig {
    /// 键值存储（offset）所用的数据库连接串，为空时使用内存存储
    database_url: String,
    /// 服务器配置
    server: RawServerConfig,
    /// Spotify 相关配置
    spotify: RawSpotifyConfig,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            database_url: "".to_string(),
            server: RawServerConfig::default(),
            spotify: RawSpotifyConfig::default(),
        }
    }
}

/// 服务器配置（原始配置）
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawServerConfig {
    /// 监听地址
    host: String,
    /// 监听端口
    port: u16,
}

impl Default for RawServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3839,
        }
    }
}

/// Spotify 配置（原始配置）
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawSpotifyConfig {
    /// catalog（Web API）client credentials
    client_id: String,
    client_secret: String,
    /// 网页播放器的 sp_dc cookie，用于获取歌词
    sp_dc: String,
    accounts_url: String,
    api_url: String,
    web_url: String,
    lyrics_url: String,
    /// 上游请求超时（秒）
    timeout_secs: u64,
}

impl Default for RawSpotifyConfig {
    fn default() -> Self {
        Self {
            client_id: "".to_string(),
            client_secret: "".to_string(),
            sp_dc: "".to_string(),
            accounts_url: "https://accounts.spotify.com".to_string(),
            api_url: "https://api.spotify.com".to_string(),
            web_url: "https://open.spotify.com".to_string(),
            lyrics_url: "https://spclient.wg.spotify.com".to_string(),
            timeout_secs: 10,
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
}

/// Spotify 配置
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub sp_dc: String,
    pub accounts_url: String,
    pub api_url: String,
    pub web_url: String,
    pub lyrics_url: String,
    pub timeout: Duration,
}

impl SpotifyConfig {
    pub fn has_client_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }

    pub fn has_sp_dc(&self) -> bool {
        !self.sp_dc.is_empty()
    }
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        AppConfigImpl::new(RawConfig::default(), |_| None).spotify
    }
}

#[derive(Debug, Clone)]
pub struct AppConfigImpl {
    database_url: String,
    server: ServerConfig,
    spotify: SpotifyConfig,
}

impl AppConfigImpl {
    /// `env` resolves the legacy plain variables (`SPOTIFY_CLIENT_ID`, ...) used
    /// when the structured keys are left empty.
    fn new(data: RawConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let fallback = |value: String, key: &str| -> String {
            if value.is_empty() {
                env(key).unwrap_or_default()
            } else {
                value
            }
        };

        let spotify = SpotifyConfig {
            client_id: fallback(data.spotify.client_id, "SPOTIFY_CLIENT_ID"),
            client_secret: fallback(data.spotify.client_secret, "SPOTIFY_CLIENT_SECRET"),
            sp_dc: fallback(data.spotify.sp_dc, "SPOTIFY_SP_DC"),
            accounts_url: trim_base(data.spotify.accounts_url),
            api_url: trim_base(data.spotify.api_url),
            web_url: trim_base(data.spotify.web_url),
            lyrics_url: trim_base(data.spotify.lyrics_url),
            timeout: Duration::from_secs(data.spotify.timeout_secs),
        };

        AppConfigImpl {
            database_url: fallback(data.database_url, "DATABASE_URL"),
            server: ServerConfig {
                host: data.server.host,
                port: data.server.port,
            },
            spotify,
        }
    }

    pub fn load() -> Result<AppConfigImpl, Box<dyn Error>> {
        dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        let raw: RawConfig = config.try_deserialize()?; // serde 自动填充默认值
        let app_config = AppConfigImpl::new(raw, |key| std::env::var(key).ok());
        Ok(app_config)
    }

    pub fn server(&self) -> ServerConfig {
        self.server.clone()
    }

    pub fn spotify(&self) -> SpotifyConfig {
        self.spotify.clone()
    }

    pub fn database_url(&self) -> String {
        self.database_url.clone()
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
