//! # BFF エラーハンドリング
//!
//! ReqRes API クライアントのエラーを呼び出し元向けの HTTP レスポンスに変換する。
//!
//! レスポンスボディは常に `{ "statusCode": u16, "message": String }` 形式。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use reqres_shared::ErrorResponse;

use crate::client::ReqresApiError;

// --- IntoResponse for ReqresApiError ---

impl IntoResponse for ReqresApiError {
   fn into_response(self) -> Response {
      let status = self.status_code();
      let body = match status {
         StatusCode::INTERNAL_SERVER_ERROR => ErrorResponse::internal_error(),
         StatusCode::BAD_GATEWAY => ErrorResponse::bad_gateway(self.caller_message()),
         _ => ErrorResponse::new(status.as_u16(), self.caller_message()),
      };
      (status, Json(body)).into_response()
   }
}

/// ReqRes API エラーをログ付きでレスポンスに変換する
///
/// 4xx は呼び出し元起因のため warn、それ以外は error で出力する。
/// 上流が HTTP レスポンスを返した場合は `upstream.status` に記録する。
pub fn log_and_convert_reqres_error(context: &str, err: ReqresApiError) -> Response {
   let upstream_status = err.upstream_status();
   match &err {
      ReqresApiError::ClientError { .. } => {
         tracing::warn!(
            error.category = "external_service",
            upstream.status = upstream_status,
            "{}: ReqRes API がクライアントエラーを返しました: {}",
            context,
            err
         );
      }
      ReqresApiError::ServerError { .. }
      | ReqresApiError::Network(_)
      | ReqresApiError::InvalidResponse(_) => {
         let kind = if upstream_status.is_some() {
            "upstream_error"
         } else {
            "service_communication"
         };
         tracing::error!(
            error.category = "external_service",
            error.kind = kind,
            upstream.status = upstream_status,
            "{}: ReqRes API の呼び出しに失敗しました: {}",
            context,
            err
         );
      }
      ReqresApiError::Unexpected(_) => {
         tracing::error!(
            error.category = "internal",
            "{}で予期しないエラー: {}",
            context,
            err
         );
      }
   }
   err.into_response()
}

// --- レスポンスヘルパー ---

/// バリデーションエラーレスポンス（400）
pub fn validation_error_response(message: &str) -> Response {
   (
      StatusCode::BAD_REQUEST,
      Json(ErrorResponse::bad_request(message)),
   )
      .into_response()
}
