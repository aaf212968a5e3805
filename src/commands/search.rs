//! storefront search コマンド
//!
//! フィルタ状態を組み立ててクエリを1回実行し、1ページ分を表示する。

use super::DataArgs;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use indicatif::{ProgressBar, ProgressStyle};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;
use storefront::catalog::{CategoryDirectory, CompanyId, Dataset, Product};
use storefront::config::{AuthProvider, CatalogConfig};
use storefront::error::{CatalogError, Result};
use storefront::output::{format_price, PageSummary};
use storefront::query::{
    Action, CategoryMode, FilterState, Page, SortDirection, SortKey, SortPreset,
};
use storefront::remote::RemoteSource;
use storefront::source::{LocalSource, ProductSource};
use storefront::view::{self, Model, Msg, ViewStatus};

#[derive(Debug, Parser)]
pub struct Args {
    /// Case-insensitive substring of the product title
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    /// Category name (repeatable)
    #[arg(long, short = 'c')]
    pub category: Vec<String>,

    /// Only one category; the first --category wins
    #[arg(long)]
    pub exclusive: bool,

    /// Company id (repeatable)
    #[arg(long)]
    pub company: Vec<u64>,

    /// Minimum price (inclusive)
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price (inclusive)
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Sort key
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,

    /// Sort direction
    #[arg(long, value_enum)]
    pub order: Option<SortDirection>,

    /// Sort preset: priceAsc, priceDesc, titleAsc or titleDesc
    #[arg(long, conflicts_with_all = ["sort", "order"])]
    pub preset: Option<String>,

    /// Page to show (0 = first page)
    #[arg(long, default_value_t = 0)]
    pub page: usize,

    /// Products per page
    #[arg(long)]
    pub page_size: Option<NonZeroUsize>,

    /// Query the product API instead of a local dataset
    #[arg(long, conflicts_with = "data")]
    pub remote: bool,

    #[command(flatten)]
    pub data: DataArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args, config: &CatalogConfig) -> Result<()> {
    let (dataset, source): (Arc<Dataset>, Box<dyn ProductSource>) = if args.remote {
        let source = RemoteSource::new(
            config.api_base_url.clone(),
            &config.http_config(),
            AuthProvider::from_env(),
            CategoryDirectory::default(),
        )?;
        (Arc::new(Dataset::empty()), Box::new(source) as Box<dyn ProductSource>)
    } else {
        let dataset = Arc::new(args.data.load()?);
        let source = Box::new(LocalSource::new(Arc::clone(&dataset))) as Box<dyn ProductSource>;
        (dataset, source)
    };

    let filter = build_filter(&args, config, &dataset)?;
    let page_size = filter.page_size();
    let mut model = Model::new(dataset, filter, config.suggestion_limit);

    let effect = view::update(&mut model, Msg::Refresh);
    let spinner = args.remote.then(spinner);
    let completed = view::perform(source.as_ref(), effect).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    if let Some(msg) = completed {
        view::update(&mut model, msg);
    }

    match model.status {
        ViewStatus::Ready(page) => {
            if args.json {
                print_json(&page)
            } else {
                print_table(&page, page_size);
                Ok(())
            }
        }
        ViewStatus::Failed(e) => Err(e),
        ViewStatus::Idle | ViewStatus::Loading { .. } => Ok(()),
    }
}

/// コマンドライン引数から FilterState を組み立てる
///
/// ページ番号以外の操作はページを 0 に戻すため、ページ指定は最後に適用する。
pub fn build_filter(args: &Args, config: &CatalogConfig, dataset: &Dataset) -> Result<FilterState> {
    let page_size = args.page_size.unwrap_or_else(|| config.page_size());
    let mut actions = Vec::new();

    if args.exclusive {
        actions.push(Action::SetCategoryMode(CategoryMode::Exclusive));
    }
    if let Some(term) = &args.query {
        actions.push(Action::SetSearchTerm(term.clone()));
    }
    for category in &args.category {
        actions.push(Action::ToggleCategory(canonical_category(dataset, category)));
    }
    for company in &args.company {
        actions.push(Action::ToggleCompany(CompanyId(*company)));
    }

    let min = args.min_price.unwrap_or(0.0);
    let max = args.max_price.unwrap_or(f64::INFINITY);
    if min > max {
        return Err(CatalogError::InvalidArgument(format!(
            "--min-price ({}) is greater than --max-price ({})",
            min, max
        )));
    }
    actions.push(Action::SetPriceRange { min, max });

    let (key, direction) = match &args.preset {
        Some(preset) => preset.parse::<SortPreset>()?.key_and_direction(),
        None => (
            args.sort.unwrap_or_default(),
            args.order.unwrap_or_default(),
        ),
    };
    actions.push(Action::SetSort { key, direction });
    actions.push(Action::SetPage(args.page));

    Ok(actions
        .into_iter()
        .fold(FilterState::with_page_size(page_size), |state, action| {
            state.apply(action)
        }))
}

/// データセット上のカテゴリ表記に合わせる（大文字小文字を区別しない）
fn canonical_category(dataset: &Dataset, name: &str) -> String {
    let name = name.trim();
    dataset
        .products()
        .iter()
        .find(|p| p.category.eq_ignore_ascii_case(name))
        .map(|p| p.category.clone())
        .unwrap_or_else(|| name.to_string())
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} Querying products...") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn print_json(page: &Page<Product>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(page)?);
    Ok(())
}

fn print_table(page: &Page<Product>, page_size: NonZeroUsize) {
    if !page.items.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["ID", "Title", "Category", "Price"]);

        for product in &page.items {
            table.add_row(vec![
                product.id.to_string(),
                product.title.clone(),
                product.category.clone(),
                format_price(product.price),
            ]);
        }

        println!("{table}");
    }
    println!("{}", PageSummary::format(page, page_size));
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
