//! # BFF アプリケーション構築
//!
//! クライアント・State の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, middleware::from_fn, routing::get};
use reqres_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
   request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
   trace::TraceLayer,
};

use crate::{
   client::{ReqresApiClientImpl, ReqresUserClient},
   config::ReqresConfig,
   handler::{UserState, health_check, list_users},
   middleware::request_id::store_request_id,
};

/// 設定から ReqRes API クライアントを作り、ルーターを構築する
pub fn build_app(config: &ReqresConfig) -> Result<Router, reqwest::Error> {
   let reqres_client: Arc<dyn ReqresUserClient> = Arc::new(ReqresApiClientImpl::new(config)?);
   Ok(build_router(reqres_client))
}

/// クライアントを受け取ってルーターを構築する
///
/// テストではスタブクライアントを注入できる。
pub fn build_router(reqres_client: Arc<dyn ReqresUserClient>) -> Router {
   let user_state = Arc::new(UserState { reqres_client });

   // Request ID + TraceLayer により、すべての HTTP リクエストに request_id が付与されログに自動注入される
   Router::new()
      .route("/health", get(health_check))
      .route("/users", get(list_users))
      .with_state(user_state)
      // レイヤー順序が重要: 下に書いたものが外側
      // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
      // 2. TraceLayer: カスタムスパンに request_id を含める
      // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
      // 4. store_request_id: task-local に保存し、ReqRes API へのヘッダー伝播に使用
      .layer(from_fn(store_request_id))
      .layer(PropagateRequestIdLayer::x_request_id())
      .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
      .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
