//! 設定ファイル・HTTP設定と認証プロバイダー
//!
//! 設定は `~/.storefront/config.toml` から読み込み、環境変数で上書きする。
//! 優先順位: 環境変数 > 設定ファイル > デフォルト

use crate::env::{self, EnvVar};
use crate::error::{CatalogError, Result};
use crate::query::DEFAULT_PAGE_SIZE;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 商品APIのデフォルトベースURL
pub const DEFAULT_API_BASE_URL: &str = "http://localhost";

/// サジェスト件数のデフォルト
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// CLI設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// 商品APIのベースURL
    pub api_base_url: String,
    /// 1ページの件数
    pub page_size: usize,
    /// サジェストの最大件数
    pub suggestion_limit: usize,
    /// リクエストタイムアウト（秒）。0 で無制限
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE.get(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            timeout_secs: 30,
            user_agent: "storefront-cli".to_string(),
        }
    }
}

impl CatalogConfig {
    /// デフォルトの設定ファイルパス
    ///
    /// `STOREFRONT_CONFIG` があればそれを使う。
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = EnvVar::get(env::CONFIG_PATH) {
            return Ok(PathBuf::from(path));
        }
        let home = std::env::var("HOME")
            .map_err(|_| CatalogError::Config("HOME environment variable not set".to_string()))?;
        Ok(PathBuf::from(home).join(".storefront").join("config.toml"))
    }

    /// デフォルトパスから読み込み、環境変数を適用
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        Ok(Self::load_from(&path)?.with_env_overrides())
    }

    /// 指定パスから読み込む（ファイルがなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: CatalogConfig = toml::from_str(&content).map_err(|e| {
            CatalogError::Config(format!("failed to parse {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// 環境変数による上書きを適用
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(url) = EnvVar::get(env::API_URL) {
            self.api_base_url = url;
        }
        self
    }

    /// ページサイズ（0 はデフォルトに戻す）
    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.page_size).unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            timeout: (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs)),
            user_agent: self.user_agent.clone(),
        }
    }
}

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: "storefront-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Result<Client> {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }
}

/// 認証プロバイダー
///
/// 商品APIは `token` Cookie によるセッション認証を使う。
/// 優先順位: 明示的なトークン > 環境変数
#[derive(Clone, Default)]
pub struct AuthProvider {
    session_token: Option<String>,
}

impl std::fmt::Debug for AuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthProvider")
            .field("session_token", &self.session_token.as_ref().map(|_| "***"))
            .finish()
    }
}

impl AuthProvider {
    /// 環境変数 `STOREFRONT_TOKEN` から作成
    pub fn from_env() -> Self {
        match EnvVar::get(env::SESSION_TOKEN) {
            Some(token) => Self::default().with_session_token(token),
            None => Self::default(),
        }
    }

    /// セッショントークンを設定
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    /// `Cookie` ヘッダーの値
    pub fn cookie_header(&self) -> Option<String> {
        self.session_token().map(|t| format!("token={}", t))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
