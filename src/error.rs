pub mod code;
pub mod formatter;

use thiserror::Error;

pub use code::ErrorCode;

/// カタログ統一エラー型
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Product API error: {message} (status: {status})")]
    Api { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Product not found: {0}")]
    ProductNotFound(u64),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// リトライ可能なエラーかどうか
    ///
    /// エンジン自体はリトライしない。トランスポート側の判断材料としてのみ使う。
    pub fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Network(_) => true,
            CatalogError::Api { status, .. } => {
                // 5xx と 429 はリトライ可能
                (*status >= 500 && *status < 600) || *status == 429
            }
            _ => false,
        }
    }

    /// エラーコードを取得
    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::Network(e) if e.is_timeout() => ErrorCode::Net002,
            CatalogError::Network(_) => ErrorCode::Net001,
            CatalogError::Api { status, .. } => match *status {
                429 => ErrorCode::Api001,
                401 | 403 => ErrorCode::Api002,
                404 => ErrorCode::Api003,
                s if s >= 500 => ErrorCode::Api004,
                _ => ErrorCode::Api005,
            },
            CatalogError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => ErrorCode::Io001,
            CatalogError::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                ErrorCode::Io002
            }
            CatalogError::Io(_) => ErrorCode::Int001,
            CatalogError::Json(_) | CatalogError::InvalidDataset(_) => ErrorCode::Cat002,
            CatalogError::Config(_) => ErrorCode::Cfg001,
            CatalogError::InvalidArgument(_) => ErrorCode::Val001,
            CatalogError::ProductNotFound(_) => ErrorCode::Cat001,
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
