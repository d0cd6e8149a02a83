use domain::track::Track;
use domain::value::TrackId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// 专辑名、封面 url 只用于展示：非字符串（null、数字等）按空串处理，不拒绝整个请求
fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// Track as the browser extension sends and receives it.
///
/// ```json
/// { "id": "...", "name": "...",
///   "artists": { "items": [ { "profile": { "name": "..." } } ] },
///   "albumOfTrack": { "name": "...", "coverArt": { "sources": [ { "url": "..." } ] } },
///   "durationMs": 123 }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackDto {
    pub id: String,
    pub name: String,
    pub artists: ArtistList,
    pub album_of_track: AlbumOfTrack,
    pub duration_ms: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ArtistList {
    #[serde(default)]
    pub items: Vec<ArtistItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ArtistItem {
    #[serde(default)]
    pub profile: ArtistProfile,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ArtistProfile {
    #[serde(default)]
    pub name: String,
}

// 请求中的 albumOfTrack 只要求是对象，字段缺失时取默认值
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AlbumOfTrack {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub name: String,
    #[serde(default)]
    pub cover_art: CoverArt,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CoverArt {
    #[serde(default)]
    pub sources: Vec<CoverArtSource>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CoverArtSource {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub url: String,
}

impl From<Track> for TrackDto {
    fn from(track: Track) -> Self {
        Self {
            id: track.id.into(),
            name: track.name,
            artists: ArtistList {
                items: track
                    .artists
                    .into_iter()
                    .map(|name| ArtistItem {
                        profile: ArtistProfile { name },
                    })
                    .collect(),
            },
            album_of_track: AlbumOfTrack {
                name: track.album_name,
                cover_art: CoverArt {
                    sources: track
                        .cover_art
                        .into_iter()
                        .map(|url| CoverArtSource { url })
                        .collect(),
                },
            },
            duration_ms: track.duration_ms,
        }
    }
}

impl From<TrackDto> for Track {
    fn from(dto: TrackDto) -> Self {
        Track::new(
            TrackId::new(dto.id),
            dto.name,
            dto.artists
                .items
                .into_iter()
                .map(|item| item.profile.name)
                .collect(),
            dto.album_of_track.name,
            dto.album_of_track
                .cover_art
                .sources
                .into_iter()
                .map(|source| source.url)
                .filter(|url| !url.is_empty())
                .collect(),
            dto.duration_ms,
        )
    }
}
