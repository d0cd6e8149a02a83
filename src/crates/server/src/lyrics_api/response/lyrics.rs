use application::query::fetch_lyrics::LyricsPayload;
use domain::lyrics::{ColorHints, LyricsDocument, LyricsLine, SyncType};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize, Debug)]
pub struct LyricsResponse {
    pub lyrics: Lyrics,
    pub offset: i64,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Lyrics {
    pub sync_type: SyncType,
    pub lines: Vec<Line>,
    pub provider: String,
    pub provider_lyrics_id: String,
    pub provider_display_name: String,
    pub sync_lyrics_uri: String,
    pub is_dense_typeface: bool,
    pub alternatives: Vec<Value>,
    pub language: String,
    pub is_rtl_language: bool,
    pub cap_status: String,
    pub colors: Colors,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub start_time_ms: String,
    pub end_time_ms: String,
    pub words: String,
    pub syllables: Vec<Value>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    pub background: u32,
    pub text: u32,
    pub highlight_text: u32,
}

impl From<LyricsLine> for Line {
    fn from(line: LyricsLine) -> Self {
        Self {
            start_time_ms: line.start_time_ms,
            end_time_ms: line.end_time_ms,
            words: line.words,
            syllables: line.syllables,
        }
    }
}

impl From<ColorHints> for Colors {
    fn from(colors: ColorHints) -> Self {
        Self {
            background: colors.background,
            text: colors.text,
            highlight_text: colors.highlight_text,
        }
    }
}

impl Lyrics {
    fn new(doc: LyricsDocument, colors: ColorHints) -> Self {
        Self {
            sync_type: doc.sync_type,
            lines: doc.lines.into_iter().map(Line::from).collect(),
            provider: doc.provider,
            provider_lyrics_id: doc.provider_lyrics_id,
            provider_display_name: doc.provider_display_name,
            sync_lyrics_uri: doc.sync_lyrics_uri,
            is_dense_typeface: doc.is_dense_typeface,
            alternatives: doc.alternatives,
            language: doc.language,
            is_rtl_language: doc.is_rtl_language,
            cap_status: doc.cap_status,
            colors: colors.into(),
        }
    }
}

impl From<LyricsPayload> for LyricsResponse {
    fn from(payload: LyricsPayload) -> Self {
        Self {
            lyrics: Lyrics::new(payload.lyrics, payload.colors),
            offset: payload.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_payload() {
        let doc = LyricsDocument::new(
            vec![
                LyricsLine::new("1000".into(), "0".into(), "first".into()),
                LyricsLine::new("2500".into(), "0".into(), "second".into()),
            ],
            "123".to_string(),
            "en".to_string(),
        );
        let payload = LyricsPayload {
            lyrics: doc,
            colors: ColorHints::default(),
            offset: -200,
        };

        let value = serde_json::to_value(LyricsResponse::from(payload)).unwrap();
        assert_eq!(
            value,
            json!({
                "lyrics": {
                    "syncType": "LINE_SYNCED",
                    "lines": [
                        {"startTimeMs": "1000", "endTimeMs": "0", "words": "first", "syllables": []},
                        {"startTimeMs": "2500", "endTimeMs": "0", "words": "second", "syllables": []}
                    ],
                    "provider": "Syrics",
                    "providerLyricsId": "123",
                    "providerDisplayName": "Syrics",
                    "syncLyricsUri": "",
                    "isDenseTypeface": false,
                    "alternatives": [],
                    "language": "en",
                    "isRtlLanguage": false,
                    "capStatus": "NONE",
                    "colors": {
                        "background": 3429719594u32,
                        "text": 3019898879u32,
                        "highlightText": 4278255615u32
                    }
                },
                "offset": -200
            })
        );
    }
}
