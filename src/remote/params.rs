//! FilterState から商品APIのクエリパラメータへの変換

use crate::catalog::CategoryDirectory;
use crate::error::{CatalogError, Result};
use crate::query::FilterState;

/// 上限価格が無制限のときに送る値
///
/// サービスは `maxprice` が無いと上限を 0 とみなすため、価格帯は常に両端を送る。
pub const UNBOUNDED_MAX_PRICE: f64 = 1_000_000_000_000.0;

/// クエリパラメータを組み立てる
///
/// 空のカテゴリ/会社集合と空の検索語は送らない。
pub fn query_params(
    filter: &FilterState,
    directory: &CategoryDirectory,
) -> Result<Vec<(&'static str, String)>> {
    let mut params = Vec::new();

    if !filter.categories().is_empty() {
        let ids = filter
            .categories()
            .iter()
            .map(|name| {
                directory.id_of(name).ok_or_else(|| {
                    CatalogError::InvalidArgument(format!("unknown category '{}'", name))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        params.push(("category", join(ids)));
    }

    if !filter.companies().is_empty() {
        params.push(("company", join(filter.companies().iter().map(|c| c.0))));
    }

    let term = filter.search_term().trim();
    if !term.is_empty() {
        params.push(("search", term.to_string()));
    }

    params.push(("pagesize", filter.page_size().to_string()));
    params.push(("offset", filter.offset().to_string()));
    params.push(("minprice", format_price(filter.min_price())));
    let max_price = if filter.max_price().is_finite() {
        filter.max_price()
    } else {
        UNBOUNDED_MAX_PRICE
    };
    params.push(("maxprice", format_price(max_price)));
    params.push(("sort", filter.sort_direction().as_str().to_string()));
    params.push(("sortby", filter.sort_key().as_param().to_string()));

    Ok(params)
}

fn join(ids: impl IntoIterator<Item = u64>) -> String {
    ids.into_iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// 整数値は小数点なしで送る
fn format_price(price: f64) -> String {
    if price.fract() == 0.0 && price.abs() < 1e15 {
        format!("{}", price as i64)
    } else {
        price.to_string()
    }
}
