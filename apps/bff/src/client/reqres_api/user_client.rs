//! ユーザー関連の ReqRes API クライアント

use async_trait::async_trait;

use super::{
   client_impl::ReqresApiClientImpl,
   error::ReqresApiError,
   response::handle_response,
   types::{ListUsersParams, PaginatedUsersResponse},
};
use crate::middleware::request_id::inject_request_id;

/// API キーを運ぶヘッダー名
pub(super) const API_KEY_HEADER: &str = "x-api-key";

/// ユーザー関連の ReqRes API クライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait ReqresUserClient: Send + Sync {
   /// ユーザー一覧を取得する
   ///
   /// ReqRes API の `GET /users` を 1 回だけ呼び出す。
   ///
   /// # 引数
   ///
   /// - `params`: デフォルト適用済みのクエリパラメータ
   ///
   /// # 戻り値
   ///
   /// 上流のページネーション付きレスポンス。失敗時は `ReqresApiError`
   async fn list_users(
      &self,
      params: &ListUsersParams,
   ) -> Result<PaginatedUsersResponse, ReqresApiError>;
}

impl ReqresApiClientImpl {
   /// `GET {base_url}/users` のリクエストを組み立てる
   fn list_users_request(&self, params: &ListUsersParams) -> reqwest::RequestBuilder {
      let url = format!("{}/users", self.base_url);

      let builder = self
         .client
         .get(&url)
         .query(params)
         .header(API_KEY_HEADER, &self.api_key);
      inject_request_id(builder)
   }
}

#[async_trait]
impl ReqresUserClient for ReqresApiClientImpl {
   async fn list_users(
      &self,
      params: &ListUsersParams,
   ) -> Result<PaginatedUsersResponse, ReqresApiError> {
      tracing::info!(
         page = params.page,
         per_page = params.per_page,
         delay = ?params.delay,
         "ReqRes API からユーザー一覧を取得します"
      );

      let response = self.list_users_request(params).send().await?;
      handle_response(response).await
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;
   use crate::config::ReqresConfig;

   fn client(base_url: &str) -> ReqresApiClientImpl {
      ReqresApiClientImpl::new(&ReqresConfig::new(base_url, "reqres-free-v1")).unwrap()
   }

   fn build(client: &ReqresApiClientImpl, params: &ListUsersParams) -> reqwest::Request {
      client.list_users_request(params).build().unwrap()
   }

   #[test]
   fn test_パラメータ未指定でpage1_per_page6のリクエストを組み立てる() {
      let client = client("https://reqres.in/api");

      let request = build(&client, &ListUsersParams::default());

      assert_eq!(request.method(), reqwest::Method::GET);
      assert_eq!(
         request.url().as_str(),
         "https://reqres.in/api/users?page=1&per_page=6"
      );
   }

   #[test]
   fn test_delay指定でクエリにdelayを含める() {
      let client = client("https://reqres.in/api");
      let params = ListUsersParams::with_defaults(Some(1), Some(6), Some(3));

      let request = build(&client, &params);

      assert_eq!(
         request.url().as_str(),
         "https://reqres.in/api/users?page=1&per_page=6&delay=3"
      );
   }

   #[test]
   fn test_x_api_keyヘッダーを付与する() {
      let client = client("https://reqres.in/api");

      let request = build(&client, &ListUsersParams::default());

      assert_eq!(
         request.headers().get("x-api-key").unwrap(),
         "reqres-free-v1"
      );
   }

   #[test]
   fn test_設定したベースurlがリクエスト先に反映される() {
      let client = client("https://custom-api.example.com/");

      let request = build(&client, &ListUsersParams::with_defaults(Some(2), Some(10), None));

      assert_eq!(client.base_url, "https://custom-api.example.com");
      assert_eq!(
         request.url().as_str(),
         "https://custom-api.example.com/users?page=2&per_page=10"
      );
   }
}
