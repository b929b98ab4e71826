//! # ユーザー一覧ハンドラ
//!
//! `GET /users` を受け取り、ReqRes API の `GET /users` に中継する。
//!
//! ## フロー
//!
//! 1. クエリパラメータのパースと範囲チェック（失敗時は 400、上流は呼ばない）
//! 2. 未指定パラメータへのデフォルト適用（page=1, per_page=6）
//! 3. ReqRes API を 1 回だけ呼び出す
//! 4. 成功時は上流のボディをそのまま返し、失敗時はエラーを変換して返す

use std::sync::Arc;

use axum::{
   Json,
   extract::{Query, State, rejection::QueryRejection},
   http::StatusCode,
   response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
   client::{ListUsersParams, ReqresUserClient},
   error::{log_and_convert_reqres_error, validation_error_response},
};

const MIN_PAGE: u32 = 1;
const MIN_PER_PAGE: u32 = 1;
const MAX_PER_PAGE: u32 = 100;
const MAX_DELAY: u32 = 60;

/// ユーザー API の共有状態
pub struct UserState {
   pub reqres_client: Arc<dyn ReqresUserClient>,
}

// --- リクエスト型 ---

/// `GET /users` のクエリパラメータ
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListUsersQuery {
   pub page:     Option<u32>,
   #[serde(rename = "perPage")]
   pub per_page: Option<u32>,
   pub delay:    Option<u32>,
}

impl ListUsersQuery {
   /// 値の範囲を検証する
   ///
   /// 最初に見つかった違反をメッセージとして返す。
   pub fn validate(&self) -> Result<(), String> {
      if let Some(page) = self.page
         && page < MIN_PAGE
      {
         return Err(format!("page must not be less than {MIN_PAGE}"));
      }
      if let Some(per_page) = self.per_page {
         if per_page < MIN_PER_PAGE {
            return Err(format!("perPage must not be less than {MIN_PER_PAGE}"));
         }
         if per_page > MAX_PER_PAGE {
            return Err(format!("perPage must not be greater than {MAX_PER_PAGE}"));
         }
      }
      if let Some(delay) = self.delay
         && delay > MAX_DELAY
      {
         return Err(format!("delay must not be greater than {MAX_DELAY}"));
      }
      Ok(())
   }

   /// デフォルトを適用した上流向けパラメータに変換する
   pub fn to_params(&self) -> ListUsersParams {
      ListUsersParams::with_defaults(self.page, self.per_page, self.delay)
   }
}

// --- ハンドラ ---

/// GET /users
///
/// ReqRes API からユーザー一覧を取得し、そのまま返す。
#[tracing::instrument(skip_all)]
pub async fn list_users(
   State(state): State<Arc<UserState>>,
   query: Result<Query<ListUsersQuery>, QueryRejection>,
) -> Response {
   let query = match query {
      Ok(Query(query)) => query,
      Err(rejection) => {
         tracing::debug!(error = %rejection, "クエリパラメータのパースに失敗しました");
         return validation_error_response(&rejection.body_text());
      }
   };

   if let Err(message) = query.validate() {
      tracing::debug!(%message, "クエリパラメータの検証に失敗しました");
      return validation_error_response(&message);
   }

   let params = query.to_params();

   match state.reqres_client.list_users(&params).await {
      Ok(body) => (StatusCode::OK, Json(body)).into_response(),
      Err(e) => log_and_convert_reqres_error("ユーザー一覧取得", e),
   }
}
