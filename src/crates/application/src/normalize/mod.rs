//! Normalization engine: provider-native JSON → canonical domain values.
//!
//! Pure functions only; nothing in here awaits or touches I/O.

mod lyrics;
mod track;

pub use lyrics::normalize_lyrics;
pub use track::normalize_track;

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizeError {
    #[error("Error processing track data: {0}")]
    TrackDataInvalid(String),
    #[error("Error processing lyrics data: {0}")]
    LyricsDataInvalid(String),
}

/// 读取对象字段：字段不存在与字段为 null 同等对待
fn field<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}
