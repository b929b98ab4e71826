//! ReqRes API レスポンスの共通ハンドリング

use serde::{Deserialize, de::DeserializeOwned};

use super::error::ReqresApiError;

/// 上流エラーボディのうち、メッセージ抽出に使う部分
#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
   message: Option<String>,
}

/// ReqRes API レスポンスの共通ハンドリング
///
/// 成功時はレスポンスボディを `T` にデシリアライズし、
/// エラー時はステータスコードに応じた `ReqresApiError` を返す。
///
/// - 4xx → `ClientError`（ステータスとメッセージを保持）
/// - それ以外の非成功 → `ServerError`
pub(super) async fn handle_response<T: DeserializeOwned>(
   response: reqwest::Response,
) -> Result<T, ReqresApiError> {
   let status = response.status();

   if status.is_success() {
      let body = response.json::<T>().await?;
      return Ok(body);
   }

   let body = response.text().await.unwrap_or_default();
   let message = extract_upstream_message(status, &body);

   if status.is_client_error() {
      return Err(ReqresApiError::ClientError {
         status: status.as_u16(),
         message,
      });
   }

   Err(ReqresApiError::ServerError {
      status: status.as_u16(),
      message,
   })
}

/// 上流のエラーボディからメッセージを取り出す
///
/// 優先順位: ボディの `message` フィールド → `Request failed with status code {status}`
fn extract_upstream_message(status: reqwest::StatusCode, body: &str) -> String {
   serde_json::from_str::<UpstreamErrorBody>(body)
      .ok()
      .and_then(|b| b.message)
      .filter(|m| !m.trim().is_empty())
      .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()))
}
