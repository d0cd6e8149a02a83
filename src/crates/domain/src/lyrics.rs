use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// 歌词来源名称（同时用作展示名称）
pub const LYRICS_PROVIDER: &str = "Syrics";
/// 上游未给出语言时的默认值
pub const DEFAULT_LANGUAGE: &str = "en";
/// 无时间信息的哨兵值
pub const NO_TIMING: &str = "0";
pub const CAP_STATUS_NONE: &str = "NONE";

// 歌词同步类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncType {
    LineSynced,
    Unsynced,
}

impl SyncType {
    /// `LineSynced` iff there is at least one line whose start time is not the sentinel.
    pub fn infer(lines: &[LyricsLine]) -> Self {
        if lines.iter().any(LyricsLine::is_timed) {
            SyncType::LineSynced
        } else {
            SyncType::Unsynced
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SyncType::LineSynced => "LINE_SYNCED",
            SyncType::Unsynced => "UNSYNCED",
        }
    }
}

impl fmt::Display for SyncType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// 歌词行
#[derive(Debug, Clone, PartialEq)]
pub struct LyricsLine {
    pub start_time_ms: String, // 开始时间（毫秒，字符串形式）
    pub end_time_ms: String,   // 结束时间（毫秒，字符串形式）
    pub words: String,
    pub syllables: Vec<Value>, // 预留给逐字时间轴，始终为空
}

impl LyricsLine {
    pub fn new(start_time_ms: String, end_time_ms: String, words: String) -> Self {
        Self {
            start_time_ms,
            end_time_ms,
            words,
            syllables: Vec::new(),
        }
    }

    pub fn is_timed(&self) -> bool {
        self.start_time_ms != NO_TIMING
    }
}

/// 规范化后的歌词文档
#[derive(Debug, Clone, PartialEq)]
pub struct LyricsDocument {
    pub sync_type: SyncType,
    pub lines: Vec<LyricsLine>,
    pub provider: String,
    pub provider_lyrics_id: String,
    pub provider_display_name: String,
    pub sync_lyrics_uri: String,
    pub is_dense_typeface: bool,
    pub alternatives: Vec<Value>,
    pub language: String,
    pub is_rtl_language: bool,
    pub cap_status: String,
}

impl LyricsDocument {
    /// Builds a document from already normalized lines; sync type is derived from them.
    pub fn new(lines: Vec<LyricsLine>, provider_lyrics_id: String, language: String) -> Self {
        Self {
            sync_type: SyncType::infer(&lines),
            lines,
            provider: LYRICS_PROVIDER.to_string(),
            provider_lyrics_id,
            provider_display_name: LYRICS_PROVIDER.to_string(),
            sync_lyrics_uri: String::new(),
            is_dense_typeface: false,
            alternatives: Vec::new(),
            language,
            is_rtl_language: false,
            cap_status: CAP_STATUS_NONE.to_string(),
        }
    }

    /// 上游返回了记录，但其中没有可用的歌词行
    pub fn no_lyrics() -> Self {
        Self::new(Vec::new(), String::new(), DEFAULT_LANGUAGE.to_string())
    }
}

/// Fixed ARGB colour hints attached to every lyrics payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorHints {
    pub background: u32,
    pub text: u32,
    pub highlight_text: u32,
}

impl Default for ColorHints {
    fn default() -> Self {
        Self {
            background: 3429719594,
            text: 3019898879,
            highlight_text: 4278255615,
        }
    }
}
