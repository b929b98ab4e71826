//! # エラーレスポンス
//!
//! 呼び出し元へ返すエラーレスポンスの共通構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は BFF の責務（shared に axum 依存を入れない）
//! - JSON 形状は `{ "statusCode": u16, "message": String }` で固定

use serde::{Deserialize, Serialize};

/// 予期しないエラー時に返す固定メッセージ
///
/// 内部情報を漏らさないため、詳細はログにのみ出力する。
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message:     String,
}

impl ErrorResponse {
    /// 汎用コンストラクタ
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    /// 400 Bad Request
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    /// 500 Internal Server Error
    ///
    /// message は固定値。
    pub fn internal_error() -> Self {
        Self::new(500, UNEXPECTED_ERROR_MESSAGE)
    }

    /// 502 Bad Gateway
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(502, message)
    }
}
