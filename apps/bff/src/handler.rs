//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、上流との通信はクライアントに委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `user`: ユーザー一覧（ReqRes API の中継）

pub mod health;
pub mod user;

pub use health::health_check;
pub use user::{ListUsersQuery, UserState, list_users};
