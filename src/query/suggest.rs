//! 検索サジェスト

use crate::catalog::{Dataset, Product};

/// 入力途中の検索語に対するサジェスト候補を返す
///
/// - 空（または空白のみ）の検索語なら空を返す
/// - case-insensitive な部分一致で `title` を検索
/// - 順位付けはせず、データセット順のまま最大 `limit` 件
pub fn suggest<'a>(dataset: &'a Dataset, term: &str, limit: usize) -> Vec<&'a Product> {
    let term = term.trim();
    if term.is_empty() || limit == 0 {
        return Vec::new();
    }

    let needle = term.to_lowercase();
    dataset
        .products()
        .iter()
        .filter(|p| p.title_contains_lowercase(&needle))
        .take(limit)
        .collect()
}

#[cfg(test)]
#[path = "suggest_test.rs"]
mod tests;
