//! ReqRes API のリクエスト / レスポンス型

use serde::Serialize;
use serde_json::Value;

/// `page` 未指定時のデフォルト値
pub const DEFAULT_PAGE: u32 = 1;

/// `per_page` 未指定時のデフォルト値
pub const DEFAULT_PER_PAGE: u32 = 6;

// --- リクエスト型 ---

/// ユーザー一覧取得のクエリパラメータ（ReqRes API 向け）
///
/// `delay` は呼び出し元が明示した場合のみクエリに含める。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListUsersParams {
   pub page:     u32,
   pub per_page: u32,
   #[serde(skip_serializing_if = "Option::is_none")]
   pub delay:    Option<u32>,
}

impl ListUsersParams {
   /// 未指定のパラメータにデフォルト値を適用して作成する
   pub fn with_defaults(page: Option<u32>, per_page: Option<u32>, delay: Option<u32>) -> Self {
      Self {
         page: page.unwrap_or(DEFAULT_PAGE),
         per_page: per_page.unwrap_or(DEFAULT_PER_PAGE),
         delay,
      }
   }
}

impl Default for ListUsersParams {
   fn default() -> Self {
      Self::with_defaults(None, None, None)
   }
}

// --- レスポンス型 ---

/// ページネーション付きユーザー一覧レスポンス
///
/// 上流の JSON を形を検証せずにそのまま保持する。通常は次の形をとる:
///
/// ```json
/// {
///   "page": 1, "per_page": 6, "total": 12, "total_pages": 2,
///   "data": [{ "id": 1, "email": "...", "first_name": "...", "last_name": "...", "avatar": "..." }],
///   "support": { "url": "...", "text": "..." }
/// }
/// ```
///
/// `null` のフィールドや未知のフィールド、型の異なる値も加工せずに中継する。
pub type PaginatedUsersResponse = Value;

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use serde_json::json;

   use super::*;

   #[test]
   fn test_with_defaultsで未指定のpageとper_pageにデフォルトを適用する() {
      let params = ListUsersParams::with_defaults(None, None, None);

      assert_eq!(
         params,
         ListUsersParams {
            page:     1,
            per_page: 6,
            delay:    None,
         }
      );
   }

   #[test]
   fn test_with_defaultsで指定値をそのまま使う() {
      let params = ListUsersParams::with_defaults(Some(2), Some(10), Some(3));

      assert_eq!(params.page, 2);
      assert_eq!(params.per_page, 10);
      assert_eq!(params.delay, Some(3));
   }

   #[test]
   fn test_delay未指定のときクエリにdelayキーが含まれない() {
      let json = serde_json::to_value(ListUsersParams::default()).unwrap();

      assert_eq!(json, json!({ "page": 1, "per_page": 6 }));
   }

   #[test]
   fn test_delay指定のときクエリにdelayが含まれる() {
      let params = ListUsersParams::with_defaults(Some(1), Some(6), Some(3));
      let json = serde_json::to_value(params).unwrap();

      assert_eq!(json, json!({ "page": 1, "per_page": 6, "delay": 3 }));
   }
}
