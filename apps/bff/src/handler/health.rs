//! # ヘルスチェックハンドラ
//!
//! BFF の稼働状態を確認するためのエンドポイント。
//! 上流（ReqRes API）の状態は確認しない。

use axum::Json;
use reqres_shared::HealthResponse;

/// BFF のヘルスチェックエンドポイント
///
/// `GET /health` — Liveness Check（常に `"healthy"` を返す）
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
