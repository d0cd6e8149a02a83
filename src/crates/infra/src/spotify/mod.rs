pub mod catalog;
pub mod lyrics;
pub mod token;

pub use catalog::SpotifyCatalogClient;
pub use lyrics::SpotifyLyricsClient;
