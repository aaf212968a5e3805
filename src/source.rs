//! 商品ソース
//!
//! 「クエリを渡すと該当レコードを返す」共通インターフェース。
//! ローカルのパイプラインとリモートAPIの両方がこれを実装し、差し替え可能。

mod local;
mod ticket;

pub use local::LocalSource;
pub use ticket::{QueryTicket, RequestTracker};

use crate::catalog::Product;
use crate::error::Result;
use crate::query::{FilterState, Page};
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;

/// ソースが返すクエリ結果
///
/// `items` は要求ページ分のみ、`total_count` はフィルタ適用後の全件数。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub items: Vec<Product>,
    pub total_count: usize,
}

impl QueryResult {
    /// 要求したフィルタのページ情報と合わせて Page に変換
    pub fn into_page(self, filter: &FilterState) -> Page<Product> {
        Page::from_window(
            self.items,
            self.total_count,
            filter.page_index(),
            filter.page_size(),
        )
    }
}

/// 商品ソース trait
pub trait ProductSource: Send + Sync {
    /// ソース名（ログ用）
    fn name(&self) -> &'static str;

    /// フィルタに一致する商品の1ページ分と総件数を取得
    fn query<'a>(
        &'a self,
        filter: &'a FilterState,
    ) -> Pin<Box<dyn Future<Output = Result<QueryResult>> + Send + 'a>>;
}
