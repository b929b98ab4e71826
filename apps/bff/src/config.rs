//! # BFF 設定
//!
//! 環境変数から BFF サーバーと ReqRes API クライアントの設定を読み込む。
//! 設定は起動時に一度だけ読み込み、以降は変更しない。

use std::{env, time::Duration};

use thiserror::Error;

/// ReqRes API のデフォルトベース URL
pub const DEFAULT_REQRES_BASE_URL: &str = "https://reqres.in/api";

/// ReqRes API のデフォルト API キー
pub const DEFAULT_REQRES_API_KEY: &str = "reqres-free-v1";

/// ReqRes API 呼び出しのデフォルトタイムアウト（秒）
///
/// 呼び出し元が `delay` で指定する人工的な遅延（最大 60 秒）を含めて
/// 受け切れるよう、クライアント単位で設定する。
pub const DEFAULT_REQRES_TIMEOUT_SECS: u64 = 70;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   /// ポート番号が不正
   #[error("BFF_PORT は有効なポート番号である必要があります: {0}")]
   InvalidPort(String),

   /// タイムアウト秒数が不正
   #[error("REQRES_TIMEOUT_SECS は正の整数である必要があります: {0}")]
   InvalidTimeout(String),
}

/// ReqRes API クライアントの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReqresConfig {
   /// ReqRes API のベース URL
   pub base_url: String,
   /// `x-api-key` ヘッダーに付与する API キー
   pub api_key:  String,
   /// 1 リクエストあたりのタイムアウト
   pub timeout:  Duration,
}

impl ReqresConfig {
   /// ベース URL と API キーを指定して作成する（タイムアウトはデフォルト値）
   pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
      Self {
         base_url: base_url.into(),
         api_key:  api_key.into(),
         timeout:  Duration::from_secs(DEFAULT_REQRES_TIMEOUT_SECS),
      }
   }
}

impl Default for ReqresConfig {
   fn default() -> Self {
      Self::new(DEFAULT_REQRES_BASE_URL, DEFAULT_REQRES_API_KEY)
   }
}

/// BFF サーバーの設定
#[derive(Debug, Clone)]
pub struct BffConfig {
   /// バインドアドレス
   pub host:   String,
   /// ポート番号
   pub port:   u16,
   /// ReqRes API クライアントの設定
   pub reqres: ReqresConfig,
}

impl BffConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|key| env::var(key).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// 未設定または空文字の値はデフォルト値にフォールバックする。
   pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
   where
      F: Fn(&str) -> Option<String>,
   {
      let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

      let port = match read("BFF_PORT") {
         Some(v) => v.parse().map_err(|_| ConfigError::InvalidPort(v))?,
         None => DEFAULT_PORT,
      };

      let timeout_secs = match read("REQRES_TIMEOUT_SECS") {
         Some(v) => v
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::InvalidTimeout(v))?,
         None => DEFAULT_REQRES_TIMEOUT_SECS,
      };

      Ok(Self {
         host: read("BFF_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
         port,
         reqres: ReqresConfig {
            base_url: read("REQRES_BASE_URL")
               .unwrap_or_else(|| DEFAULT_REQRES_BASE_URL.to_string()),
            api_key:  read("REQRES_API_KEY")
               .unwrap_or_else(|| DEFAULT_REQRES_API_KEY.to_string()),
            timeout:  Duration::from_secs(timeout_secs),
         },
      })
   }
}
