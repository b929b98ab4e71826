//! ReqRes API クライアント実装の構造体

use reqwest::redirect::Policy;

use crate::config::ReqresConfig;

/// リダイレクトを追跡する最大回数
const MAX_REDIRECTS: usize = 5;

/// ReqRes API クライアント実装
///
/// ベース URL と API キーは構築時に確定し、以降変更しない。
/// `reqwest::Client` はコネクションプールを内部に持つため、
/// 1 インスタンスを `Arc` で共有して使う。
#[derive(Clone)]
pub struct ReqresApiClientImpl {
   pub(super) base_url: String,
   pub(super) api_key:  String,
   pub(super) client:   reqwest::Client,
}

impl ReqresApiClientImpl {
   /// 新しい ReqresApiClient を作成する
   ///
   /// # 引数
   ///
   /// - `config`: ベース URL（例: `https://reqres.in/api`）、API キー、タイムアウト
   pub fn new(config: &ReqresConfig) -> Result<Self, reqwest::Error> {
      let client = reqwest::Client::builder()
         .timeout(config.timeout)
         .redirect(Policy::limited(MAX_REDIRECTS))
         .build()?;

      Ok(Self {
         base_url: config.base_url.trim_end_matches('/').to_string(),
         api_key: config.api_key.clone(),
         client,
      })
   }
}
