//! # ReqRes API クライアント
//!
//! BFF から ReqRes（ユーザーディレクトリ API）への通信を担当する。
//!
//! ## エンドポイント
//!
//! - `GET {base_url}/users?page=&per_page=&delay=` - ユーザー一覧（ページネーション付き）
//!
//! 全リクエストに `x-api-key` ヘッダーを付与する。リトライは行わない。

mod client_impl;
mod error;
mod response;
mod types;
mod user_client;

pub use client_impl::ReqresApiClientImpl;
pub use error::ReqresApiError;
pub use types::*;
pub use user_client::ReqresUserClient;
