//! ページネーション
//!
//! ページ番号は 0 始まり。`page_index = 0` が先頭ページ。
//! 範囲外のページは空のページとして返し、要求された番号はそのまま保持する。

use serde::Serialize;
use std::num::NonZeroUsize;

/// 結果集合の1ページ分
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_index: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl<T> Page<T> {
    /// 取得済みのページ内容から Page を組み立てる（リモート結果用）
    pub fn from_window(items: Vec<T>, total_count: usize, page_index: usize, page_size: NonZeroUsize) -> Self {
        Self {
            items,
            page_index,
            total_pages: total_pages(total_count, page_size),
            total_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 要求ページが結果の範囲外か
    pub fn is_out_of_range(&self) -> bool {
        self.page_index >= self.total_pages
    }

    pub fn has_next(&self) -> bool {
        self.page_index.saturating_add(1) < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 0 && self.total_pages > 0
    }

    /// 表示用の通し番号範囲（1 始まり、両端含む）
    pub fn item_range(&self, page_size: NonZeroUsize) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = self.page_index * page_size.get() + 1;
        Some((first, first + self.items.len() - 1))
    }
}

/// 総ページ数（0件なら 0）
pub fn total_pages(total_count: usize, page_size: NonZeroUsize) -> usize {
    total_count.div_ceil(page_size.get())
}

/// 結果集合を切り出して1ページを作る
pub fn paginate<T: Clone>(results: &[T], page_index: usize, page_size: NonZeroUsize) -> Page<T> {
    let total_count = results.len();
    let items = page_index
        .checked_mul(page_size.get())
        .filter(|&start| start < total_count)
        .map(|start| {
            let end = start.saturating_add(page_size.get()).min(total_count);
            results[start..end].to_vec()
        })
        .unwrap_or_default();

    Page {
        items,
        page_index,
        total_pages: total_pages(total_count, page_size),
        total_count,
    }
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;

#[cfg(test)]
#[path = "page_proptests.rs"]
mod proptests;
