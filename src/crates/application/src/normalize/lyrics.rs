use super::{field, NormalizeError};
use domain::lyrics::{LyricsDocument, LyricsLine, DEFAULT_LANGUAGE, NO_TIMING};
use domain::provider::ProviderLyrics;
use serde_json::{Map, Value};

/// Converts a lyrics provider record into a [`LyricsDocument`].
///
/// Lines are looked up under `lyrics.lines` first and then under a flat
/// `lines`. A record with neither yields [`LyricsDocument::no_lyrics`].
/// Line order is kept exactly as received.
pub fn normalize_lyrics(raw: &ProviderLyrics) -> Result<LyricsDocument, NormalizeError> {
    let obj = raw
        .raw()
        .as_object()
        .ok_or_else(|| invalid("lyrics record is not an object"))?;
    let nested = obj.get("lyrics").and_then(Value::as_object);

    // 优先取嵌套的 lyrics.lines，其次取顶层 lines
    let Some(raw_lines) = nested
        .and_then(|lyrics| lyrics.get("lines"))
        .or_else(|| obj.get("lines"))
    else {
        return Ok(LyricsDocument::no_lyrics());
    };

    let lines = raw_lines
        .as_array()
        .ok_or_else(|| invalid("lines is not a list"))?
        .iter()
        .map(normalize_line)
        .collect::<Result<Vec<_>, _>>()?;

    // id 和 language 只取顶层字段，嵌套 lyrics 对象中的同名字段不参与
    let provider_lyrics_id = provider_lyrics_id(obj)?;
    let language = language(obj)?;

    Ok(LyricsDocument::new(lines, provider_lyrics_id, language))
}

fn normalize_line(raw: &Value) -> Result<LyricsLine, NormalizeError> {
    let line = raw
        .as_object()
        .ok_or_else(|| invalid("lyrics line is not an object"))?;

    let start_time_ms = timing(line, "startTimeMs")?;
    let end_time_ms = timing(line, "endTimeMs")?;
    let words = match field(line, "words") {
        None => String::new(),
        Some(Value::String(words)) => words.clone(),
        Some(_) => return Err(invalid("words is not a string")),
    };

    Ok(LyricsLine::new(start_time_ms, end_time_ms, words))
}

// 时间字段可能是字符串也可能是数字，统一转成十进制字符串；缺失时为 "0"
fn timing(line: &Map<String, Value>, key: &str) -> Result<String, NormalizeError> {
    match field(line, key) {
        None => Ok(NO_TIMING.to_string()),
        Some(Value::String(ms)) => Ok(ms.clone()),
        Some(Value::Number(ms)) => Ok(ms.to_string()),
        Some(_) => Err(invalid(&format!("{} is neither a string nor a number", key))),
    }
}

fn provider_lyrics_id(obj: &Map<String, Value>) -> Result<String, NormalizeError> {
    match field(obj, "id") {
        None => Ok(String::new()),
        Some(Value::String(id)) => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        Some(_) => Err(invalid("lyrics id is neither a string nor a number")),
    }
}

fn language(obj: &Map<String, Value>) -> Result<String, NormalizeError> {
    match field(obj, "language") {
        None => Ok(DEFAULT_LANGUAGE.to_string()),
        Some(Value::String(language)) => Ok(language.clone()),
        Some(_) => Err(invalid("language is not a string")),
    }
}

fn invalid(msg: &str) -> NormalizeError {
    NormalizeError::LyricsDataInvalid(msg.to_string())
}
