//! フィルタ/ソートパイプライン
//!
//! `(Dataset, FilterState)` から順序付きの結果集合を作る純粋関数。
//! 手順は固定: カテゴリ → 会社 → 価格 → テキスト → ソート。

use super::state::{FilterState, SortDirection, SortKey};
use crate::catalog::{Dataset, Product};
use std::cmp::Ordering;

/// フィルタ適用後の順序付き商品列
pub type ResultSet<'a> = Vec<&'a Product>;

/// フィルタを適用して結果集合を返す
///
/// 同じ入力に対して常に同じ順序を返す。失敗しない。
pub fn apply<'a>(dataset: &'a Dataset, filter: &FilterState) -> ResultSet<'a> {
    let indices = matching_indices(dataset, filter);
    let products = dataset.products();
    indices.into_iter().map(|i| &products[i]).collect()
}

/// 条件に合う商品のインデックスをソート済みで返す
fn matching_indices(dataset: &Dataset, filter: &FilterState) -> Vec<usize> {
    let products = dataset.products();
    let needle = filter.search_term().to_lowercase();

    let mut indices: Vec<usize> = products
        .iter()
        .enumerate()
        .filter(|(_, p)| matches_category(p, filter))
        .filter(|(_, p)| matches_company(p, filter))
        .filter(|(_, p)| matches_price(p, filter))
        .filter(|(_, p)| needle.is_empty() || p.title_contains_lowercase(&needle))
        .map(|(i, _)| i)
        .collect();

    indices.sort_by(|&a, &b| {
        compare(
            &products[a],
            &products[b],
            filter.sort_key(),
            filter.sort_direction(),
        )
    });
    indices
}

fn matches_category(product: &Product, filter: &FilterState) -> bool {
    filter.categories().is_empty() || filter.categories().contains(&product.category)
}

fn matches_company(product: &Product, filter: &FilterState) -> bool {
    filter.companies().is_empty()
        || product
            .company_id
            .is_some_and(|c| filter.companies().contains(&c))
}

/// 両端を含む
fn matches_price(product: &Product, filter: &FilterState) -> bool {
    product.price >= filter.min_price() && product.price <= filter.max_price()
}

/// ソートキーで比較し、同値なら ID 昇順（方向に関係なく）
pub(crate) fn compare(a: &Product, b: &Product, key: SortKey, direction: SortDirection) -> Ordering {
    let by_key = match key {
        SortKey::Price => a.price.total_cmp(&b.price),
        SortKey::Title => compare_titles(&a.title, &b.title),
        SortKey::Popularity => a.popularity.cmp(&b.popularity),
        SortKey::Date => a.created_at.cmp(&b.created_at),
    };
    let by_key = match direction {
        SortDirection::Asc => by_key,
        SortDirection::Desc => by_key.reverse(),
    };
    by_key.then_with(|| a.id.cmp(&b.id))
}

/// タイトル比較
///
/// 小文字化した文字列をコードポイント順で比較し、大小の違いだけなら小文字を先にする。
/// ロケール照合ではないため、アクセント付きの頭文字（例: `Éclair`）は ASCII の後に並ぶ。
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

// ============================================================================
// ResultCache（結果集合のキャッシュ）
// ============================================================================

struct CacheEntry {
    dataset_version: u64,
    filter: FilterState,
    indices: Vec<usize>,
}

/// 直近1件の結果集合を保持するキャッシュ
///
/// キーはデータセットのバージョンと、結果に影響するフィルタ項目。
/// ページ移動だけなら再計算しない。
#[derive(Default)]
pub struct ResultCache {
    entry: Option<CacheEntry>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// キャッシュから結果集合を返す（なければ計算して保持）
    pub fn get_or_compute<'a>(&mut self, dataset: &'a Dataset, filter: &FilterState) -> ResultSet<'a> {
        let hit = self.entry.as_ref().is_some_and(|e| {
            e.dataset_version == dataset.version() && e.filter.same_results_as(filter)
        });

        if hit {
            tracing::trace!("result cache hit");
        } else {
            tracing::trace!("result cache miss");
            self.entry = Some(CacheEntry {
                dataset_version: dataset.version(),
                filter: filter.clone(),
                indices: matching_indices(dataset, filter),
            });
        }

        let products = dataset.products();
        self.entry
            .as_ref()
            .map(|e| e.indices.iter().map(|&i| &products[i]).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;

#[cfg(test)]
#[path = "pipeline_proptests.rs"]
mod proptests;
