//! 読み込み済みデータセットに対するローカルソース

use super::{ProductSource, QueryResult};
use crate::catalog::Dataset;
use crate::error::Result;
use crate::query::{paginate, FilterState, ResultCache};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

/// ローカルソース
///
/// パイプラインとページネータを同期的に実行する。結果集合はキャッシュし、
/// ページ移動だけなら再計算しない。
pub struct LocalSource {
    dataset: Arc<Dataset>,
    cache: Mutex<ResultCache>,
}

impl LocalSource {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            cache: Mutex::new(ResultCache::new()),
        }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// 同期版のクエリ
    pub fn run(&self, filter: &FilterState) -> QueryResult {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        let results = cache.get_or_compute(&self.dataset, filter);
        let page = paginate(&results, filter.page_index(), filter.page_size());

        QueryResult {
            items: page.items.into_iter().cloned().collect(),
            total_count: page.total_count,
        }
    }
}

impl ProductSource for LocalSource {
    fn name(&self) -> &'static str {
        "local"
    }

    fn query<'a>(
        &'a self,
        filter: &'a FilterState,
    ) -> Pin<Box<dyn Future<Output = Result<QueryResult>> + Send + 'a>> {
        let result = self.run(filter);
        Box::pin(std::future::ready(Ok(result)))
    }
}
