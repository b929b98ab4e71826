//! ReqRes API クライアントのエラー型

use reqres_shared::error_response::UNEXPECTED_ERROR_MESSAGE;
use reqwest::StatusCode;
use thiserror::Error;

/// 上流・通信エラーのメッセージが空の場合に返す文言
const FALLBACK_MESSAGE: &str = "Failed to fetch users from upstream API";

/// ReqRes API クライアントエラー
///
/// 呼び出し元に返すステータスは [`ReqresApiError::status_code`] で決まる。
///
/// | バリアント | 呼び出し元へのステータス |
/// |---|---|
/// | `ClientError` | 上流の 4xx をそのまま |
/// | `ServerError` / `Network` / `InvalidResponse` | 502 |
/// | `Unexpected` | 500 |
#[derive(Debug, Clone, Error)]
pub enum ReqresApiError {
   /// 上流が 4xx を返した
   #[error("{message}")]
   ClientError { status: u16, message: String },

   /// 上流が 5xx（またはその他の非成功ステータス）を返した
   #[error("{message}")]
   ServerError { status: u16, message: String },

   /// 上流に到達できなかった（接続失敗・タイムアウト等）
   #[error("{0}")]
   Network(String),

   /// 上流の成功レスポンスを解釈できなかった
   #[error("上流のレスポンスが不正です: {0}")]
   InvalidResponse(String),

   /// 予期しないエラー（リクエスト構築の失敗等）
   #[error("予期しないエラー: {0}")]
   Unexpected(String),
}

impl ReqresApiError {
   /// 呼び出し元に返す HTTP ステータス
   pub fn status_code(&self) -> StatusCode {
      match self {
         Self::ClientError { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
         }
         Self::ServerError { .. } | Self::Network(_) | Self::InvalidResponse(_) => {
            StatusCode::BAD_GATEWAY
         }
         Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
      }
   }

   /// 上流が返した HTTP ステータス（HTTP レスポンスを受け取れた場合のみ）
   pub fn upstream_status(&self) -> Option<u16> {
      match self {
         Self::ClientError { status, .. } | Self::ServerError { status, .. } => Some(*status),
         _ => None,
      }
   }

   /// 呼び出し元に返すメッセージ
   ///
   /// `Unexpected` は内部情報を漏らさないため固定メッセージを返す。
   pub fn caller_message(&self) -> String {
      let message = match self {
         Self::ClientError { message, .. }
         | Self::ServerError { message, .. }
         | Self::Network(message)
         | Self::InvalidResponse(message) => message.as_str(),
         Self::Unexpected(_) => UNEXPECTED_ERROR_MESSAGE,
      };
      if message.trim().is_empty() {
         return FALLBACK_MESSAGE.to_string();
      }
      message.to_string()
   }
}

impl From<reqwest::Error> for ReqresApiError {
   fn from(err: reqwest::Error) -> Self {
      if err.is_builder() {
         ReqresApiError::Unexpected(err.to_string())
      } else if err.is_decode() {
         ReqresApiError::InvalidResponse(err.to_string())
      } else {
         ReqresApiError::Network(err.to_string())
      }
   }
}
