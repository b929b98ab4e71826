//! # 外部 API クライアント
//!
//! ReqRes API など外部サービスとの通信を担当する。

pub mod reqres_api;

pub use reqres_api::{
   ListUsersParams,
   PaginatedUsersResponse,
   ReqresApiClientImpl,
   ReqresApiError,
   ReqresUserClient,
};
