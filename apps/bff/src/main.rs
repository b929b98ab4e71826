//! # BFF (Backend for Frontend) サーバー
//!
//! ReqRes のユーザーディレクトリ API を中継する API サーバー。
//!
//! ## 役割
//!
//! - **パラメータ正規化**: `page` / `perPage` / `delay` の検証とデフォルト適用
//! - **中継**: ReqRes API へ API キー付きで 1 回だけ問い合わせる
//! - **エラー変換**: 上流の 4xx はそのまま、5xx・通信失敗は 502、その他は 500
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │    Client    │────▶│     BFF      │────▶│  ReqRes API  │
//! │              │     │  port: 3000  │     │  (external)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `BFF_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `BFF_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `REQRES_BASE_URL` | No | ReqRes API のベース URL（デフォルト: `https://reqres.in/api`） |
//! | `REQRES_API_KEY` | No | ReqRes API キー（デフォルト: `reqres-free-v1`） |
//! | `REQRES_TIMEOUT_SECS` | No | ReqRes API のタイムアウト秒数（デフォルト: `70`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p reqres-bff
//!
//! # 本番環境（環境変数を直接指定）
//! BFF_PORT=8080 LOG_FORMAT=json cargo run -p reqres-bff --release
//! ```

use std::net::SocketAddr;

use reqres_bff::{app_builder::build_app, config::BffConfig};
use reqres_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// BFF サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   init_tracing(TracingConfig::from_env("bff"));
   let _tracing_guard = tracing::info_span!("app", service = "bff").entered();

   let config = BffConfig::from_env()?;

   tracing::info!(
      reqres.base_url = %config.reqres.base_url,
      reqres.timeout_secs = config.reqres.timeout.as_secs(),
      "BFF サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   let app = build_app(&config.reqres)?;

   let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("BFF サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
