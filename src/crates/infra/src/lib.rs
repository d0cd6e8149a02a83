pub mod repository;

pub mod spotify;
pub use spotify::{SpotifyCatalogClient, SpotifyLyricsClient};

pub mod config;
pub use config::{ServerConfig, SpotifyConfig};
