//! CLI向けの出力整形

use crate::catalog::Product;
use crate::query::Page;
use owo_colors::OwoColorize;
use std::num::NonZeroUsize;

/// 価格表示
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// ページ表示の末尾に出すサマリ行
pub struct PageSummary {
    pub prefix: String,
    pub message: String,
    /// 前後ページへの移動方法（`--page` の値）
    pub hint: Option<String>,
}

impl PageSummary {
    pub fn format(page: &Page<Product>, page_size: NonZeroUsize) -> Self {
        if page.total_count == 0 {
            return Self {
                prefix: "•".yellow().to_string(),
                message: "No products matched".to_string(),
                hint: None,
            };
        }

        match page.item_range(page_size) {
            Some((first, last)) if !page.is_out_of_range() => Self {
                prefix: "✓".green().to_string(),
                message: format!(
                    "Showing {}-{} of {} product(s) (page {} of {})",
                    first,
                    last,
                    page.total_count.green(),
                    page.page_index + 1,
                    page.total_pages
                ),
                hint: navigation_hint(page),
            },
            _ => Self {
                prefix: "✗".red().to_string(),
                message: format!(
                    "Page {} is out of range ({} page(s), {} product(s))",
                    page.page_index, page.total_pages, page.total_count
                ),
                hint: Some(format!("last page: --page {}", page.total_pages.saturating_sub(1))),
            },
        }
    }
}

fn navigation_hint(page: &Page<Product>) -> Option<String> {
    let mut parts = Vec::new();
    if page.has_prev() {
        parts.push(format!("previous: --page {}", page.page_index - 1));
    }
    if page.has_next() {
        parts.push(format!("next: --page {}", page.page_index + 1));
    }
    (!parts.is_empty()).then(|| parts.join(", "))
}

impl std::fmt::Display for PageSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.prefix, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " [{}]", hint.dimmed())?;
        }
        Ok(())
    }
}
