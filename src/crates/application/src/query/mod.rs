pub mod fetch_lyrics;
pub mod search_tracks;
