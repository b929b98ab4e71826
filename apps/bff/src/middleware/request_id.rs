//! # 上流呼び出しへの Request ID 引き継ぎ
//!
//! `SetRequestIdLayer` が決めた Request ID を、ハンドラから呼ばれる
//! ReqRes API クライアントまで届ける。
//!
//! `ReqresUserClient::list_users` の引数には Request ID を含めず、
//! リクエスト処理タスクの task-local に置いて受け渡す。

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use reqres_shared::observability::REQUEST_ID_HEADER;
use tower_http::request_id::RequestId;

tokio::task_local! {
   static REQUEST_ID: String;
}

/// 処理中リクエストの Request ID
///
/// [`store_request_id`] のスコープ外では `None`。
pub fn current_request_id() -> Option<String> {
   REQUEST_ID.try_with(Clone::clone).ok()
}

/// Request ID を task-local に置いて後続を実行するミドルウェア
///
/// `SetRequestIdLayer` より内側に置くこと。ID が取れない場合は `-` を置く。
pub async fn store_request_id(request: Request<Body>, next: Next) -> Response {
   let request_id = request
      .extensions()
      .get::<RequestId>()
      .and_then(|id| id.header_value().to_str().ok())
      .map_or_else(|| "-".to_string(), str::to_string);

   REQUEST_ID.scope(request_id, next.run(request)).await
}

/// ReqRes API へのリクエストに `x-request-id` を付ける
pub fn inject_request_id(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
   match current_request_id() {
      Some(id) => builder.header(REQUEST_ID_HEADER, id),
      None => builder,
   }
}

#[cfg(test)]
mod tests {
   use axum::{Router, routing::get};
   use pretty_assertions::assert_eq;
   use reqres_shared::observability::MakeRequestUuidV7;
   use tower::ServiceExt;
   use tower_http::request_id::SetRequestIdLayer;

   use super::*;

   const USERS_URL: &str = "https://reqres.in/api/users";

   #[test]
   fn test_スコープ外ではcurrent_request_idがnoneを返す() {
      assert_eq!(current_request_id(), None);
   }

   #[tokio::test]
   async fn test_スコープ内ではinject_request_idがヘッダーを付ける() {
      let client = reqwest::Client::new();

      let request = REQUEST_ID
         .scope("req-users-001".to_string(), async {
            inject_request_id(client.get(USERS_URL)).build().unwrap()
         })
         .await;

      assert_eq!(
         request.headers().get(REQUEST_ID_HEADER).unwrap(),
         "req-users-001"
      );
   }

   #[tokio::test]
   async fn test_スコープ外ではinject_request_idがヘッダーを付けない() {
      let client = reqwest::Client::new();

      let request = inject_request_id(client.get(USERS_URL)).build().unwrap();

      assert!(request.headers().get(REQUEST_ID_HEADER).is_none());
   }

   #[tokio::test]
   async fn test_store_request_idがハンドラから参照できるidを保存する() {
      let app = Router::new()
         .route(
            "/users",
            get(|| async { current_request_id().unwrap_or_default() }),
         )
         .layer(axum::middleware::from_fn(store_request_id))
         .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7));

      let response = app
         .oneshot(
            Request::builder()
               .uri("/users")
               .header(REQUEST_ID_HEADER, "req-users-002")
               .body(Body::empty())
               .unwrap(),
         )
         .await
         .unwrap();

      let body = axum::body::to_bytes(response.into_body(), usize::MAX)
         .await
         .unwrap();
      assert_eq!(&body[..], b"req-users-002");
   }
}
