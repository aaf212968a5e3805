//! 環境変数ユーティリティ

/// 設定ファイルのパス
pub const CONFIG_PATH: &str = "STOREFRONT_CONFIG";
/// 商品APIのベースURL
pub const API_URL: &str = "STOREFRONT_API_URL";
/// セッショントークン（`token` Cookie）
pub const SESSION_TOKEN: &str = "STOREFRONT_TOKEN";
/// ログフィルタ
pub const LOG_FILTER: &str = "STOREFRONT_LOG";

pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列・空白のみはNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
