//! # BFF (Backend for Frontend) ライブラリ
//!
//! ReqRes のユーザーディレクトリ API を中継する API サーバーのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーターとレイヤーの組み立て
//! - `client`: 外部 API クライアント（ReqRes API）
//! - `config`: 環境変数からの設定読み込み
//! - `error`: クライアントエラーから HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `middleware`: ミドルウェア（Request ID 伝播）

pub mod app_builder;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
