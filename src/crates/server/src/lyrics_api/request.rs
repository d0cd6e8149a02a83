use super::response::track::TrackDto;
use crate::error::ApiError;
use application::command::offset::SetOffsetCmd;
use application::query::fetch_lyrics::{FetchLyricsRequest, LyricsTarget};
use domain::value::VideoId;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct GetTracksBody {
    pub query: String,
}

/// `{videoID, track}` 或 `{videoID, query}`，两者都有时以 track 为准
#[derive(Deserialize, Debug)]
pub struct FetchLyricsBody {
    #[serde(rename = "videoID")]
    pub video_id: String,
    #[serde(default)]
    pub track: Option<TrackDto>,
    #[serde(default)]
    pub query: Option<String>,
}

impl TryFrom<FetchLyricsBody> for FetchLyricsRequest {
    type Error = ApiError;

    fn try_from(body: FetchLyricsBody) -> Result<Self, Self::Error> {
        let target = match (body.track, body.query) {
            (Some(track), _) => LyricsTarget::ByTrack(track.into()),
            (None, Some(query)) => LyricsTarget::ByQuery(query),
            (None, None) => {
                return Err(ApiError::InvalidInput(
                    "either 'track' or 'query' is required".to_string(),
                ))
            }
        };
        Ok(FetchLyricsRequest {
            video_id: VideoId::new(body.video_id),
            target,
        })
    }
}

#[derive(Deserialize, Debug)]
pub struct SetOffsetBody {
    #[serde(rename = "videoID")]
    pub video_id: String,
    pub offset: i64,
}

impl From<SetOffsetBody> for SetOffsetCmd {
    fn from(body: SetOffsetBody) -> Self {
        SetOffsetCmd {
            video_id: VideoId::new(body.video_id),
            offset_ms: body.offset,
        }
    }
}
