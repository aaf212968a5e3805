//! ストアフロントのカタログクエリエンジン
//!
//! 商品データセット（またはリモートの商品API）に対して、検索・カテゴリ/会社/価格
//! フィルタ・ソート・ページネーション・検索サジェストを提供する。

pub mod catalog;
pub mod config;
pub mod env;
pub mod error;
pub mod logging;
pub mod output;
pub mod query;
pub mod remote;
pub mod source;
pub mod view;

pub use catalog::{CategoryDirectory, CompanyId, Dataset, Product, ProductId};
pub use error::{CatalogError, Result};
pub use query::{Action, FilterState, Page};
