pub mod lyrics;
pub mod track;

use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

/// fetchLyrics 的业务错误以 200 + `{"error": kind}` 返回
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: &'static str,
}

#[derive(Serialize, Debug)]
pub struct SetOffsetAck {
    pub success: bool,
}
