use super::{field, NormalizeError};
use domain::provider::ProviderTrack;
use domain::track::Track;
use domain::value::TrackId;
use serde_json::{Map, Value};

/// Converts one catalog search item into a [`Track`].
///
/// Required upstream fields: `id`, `name`, `artists[].name`, `album.name`,
/// `duration_ms`. `album.images` may be missing, in which case the track has
/// no cover art. Any missing required field fails the whole track.
pub fn normalize_track(raw: &ProviderTrack) -> Result<Track, NormalizeError> {
    let obj = as_object(raw.raw(), "track")?;

    let id = required_str(obj, "id")?;
    let name = required_str(obj, "name")?;

    let album = field(obj, "album")
        .ok_or_else(|| missing("album"))
        .and_then(|v| as_object(v, "album"))?;
    let album_name = required_str(album, "name")?;
    let cover_art = cover_art_urls(album)?;

    let artists = field(obj, "artists")
        .ok_or_else(|| missing("artists"))?
        .as_array()
        .ok_or_else(|| invalid("artists is not a list"))?
        .iter()
        .map(|artist| as_object(artist, "artist").and_then(|a| required_str(a, "name")))
        .collect::<Result<Vec<_>, _>>()?;

    let duration_ms = field(obj, "duration_ms")
        .ok_or_else(|| missing("duration_ms"))?
        .as_i64()
        .ok_or_else(|| invalid("duration_ms is not an integer"))?;

    Ok(Track::new(
        TrackId::new(id),
        name,
        artists,
        album_name,
        cover_art,
        duration_ms,
    ))
}

// 封面图列表：images 缺失视为空列表，顺序保持上游返回的顺序
fn cover_art_urls(album: &Map<String, Value>) -> Result<Vec<String>, NormalizeError> {
    let Some(images) = field(album, "images") else {
        return Ok(Vec::new());
    };
    images
        .as_array()
        .ok_or_else(|| invalid("album.images is not a list"))?
        .iter()
        .map(|image| as_object(image, "image").and_then(|img| required_str(img, "url")))
        .collect()
}

fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>, NormalizeError> {
    value
        .as_object()
        .ok_or_else(|| invalid(&format!("{} is not an object", what)))
}

fn required_str(obj: &Map<String, Value>, key: &str) -> Result<String, NormalizeError> {
    field(obj, key)
        .ok_or_else(|| missing(key))?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid(&format!("{} is not a string", key)))
}

fn missing(key: &str) -> NormalizeError {
    NormalizeError::TrackDataInvalid(format!("missing field '{}'", key))
}

fn invalid(msg: &str) -> NormalizeError {
    NormalizeError::TrackDataInvalid(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spotify_item() -> Value {
        json!({
            "id": "4cOdK2wGLETKBW3PvgPWqT",
            "name": "Never Gonna Give You Up",
            "artists": [{"name": "Rick Astley"}, {"name": "Somebody Else"}],
            "album": {
                "name": "Whenever You Need Somebody",
                "images": [
                    {"url": "https://i.scdn.co/image/640", "height": 640},
                    {"url": "https://i.scdn.co/image/300", "height": 300},
                    {"url": "https://i.scdn.co/image/64", "height": 64}
                ]
            },
            "duration_ms": 213573
        })
    }

    #[test]
    fn test_normalize_full_track() {
        let track = normalize_track(&ProviderTrack(spotify_item())).unwrap();

        assert_eq!(track.id.as_str(), "4cOdK2wGLETKBW3PvgPWqT");
        assert_eq!(track.name, "Never Gonna Give You Up");
        assert_eq!(track.artists, vec!["Rick Astley", "Somebody Else"]);
        assert_eq!(track.album_name, "Whenever You Need Somebody");
        assert_eq!(
            track.cover_art,
            vec![
                "https://i.scdn.co/image/640",
                "https://i.scdn.co/image/300",
                "https://i.scdn.co/image/64"
            ]
        );
        assert_eq!(track.duration_ms, 213573);
    }

    #[test]
    fn test_missing_images_means_no_cover_art() {
        let mut item = spotify_item();
        item["album"].as_object_mut().unwrap().remove("images");

        let track = normalize_track(&ProviderTrack(item)).unwrap();
        assert!(track.cover_art.is_empty());
    }

    #[test]
    fn test_missing_duration_is_invalid() {
        let mut item = spotify_item();
        item.as_object_mut().unwrap().remove("duration_ms");

        let err = normalize_track(&ProviderTrack(item)).unwrap_err();
        assert!(matches!(err, NormalizeError::TrackDataInvalid(_)));
        assert!(err.to_string().contains("duration_ms"));
    }

    #[test]
    fn test_missing_required_fields_are_invalid() {
        for key in ["id", "name", "artists", "album"] {
            let mut item = spotify_item();
            item.as_object_mut().unwrap().remove(key);
            assert!(
                matches!(
                    normalize_track(&ProviderTrack(item)),
                    Err(NormalizeError::TrackDataInvalid(_))
                ),
                "removing {} should fail",
                key
            );
        }

        let mut item = spotify_item();
        item["album"].as_object_mut().unwrap().remove("name");
        assert!(normalize_track(&ProviderTrack(item)).is_err());

        let mut item = spotify_item();
        item["artists"][1].as_object_mut().unwrap().remove("name");
        assert!(normalize_track(&ProviderTrack(item)).is_err());

        let mut item = spotify_item();
        item["album"]["images"][0].as_object_mut().unwrap().remove("url");
        assert!(normalize_track(&ProviderTrack(item)).is_err());
    }

    #[test]
    fn test_non_object_record_is_invalid() {
        assert!(normalize_track(&ProviderTrack(json!("nope"))).is_err());
        assert!(normalize_track(&ProviderTrack(json!(null))).is_err());
    }
}
