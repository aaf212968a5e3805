//! storefront suggest コマンド

use super::DataArgs;
use clap::Parser;
use owo_colors::OwoColorize;
use storefront::catalog::Product;
use storefront::config::CatalogConfig;
use storefront::error::Result;
use storefront::query::suggest;

#[derive(Debug, Parser)]
pub struct Args {
    /// Partial search term
    pub term: String,

    /// Maximum number of suggestions
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub data: DataArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args, config: &CatalogConfig) -> Result<()> {
    let dataset = args.data.load()?;
    let limit = args.limit.unwrap_or(config.suggestion_limit);
    let suggestions = suggest(&dataset, &args.term, limit);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else {
        print_simple(&suggestions);
    }
    Ok(())
}

fn print_simple(suggestions: &[&Product]) {
    if suggestions.is_empty() {
        println!("{} No suggestions", "•".yellow());
        return;
    }
    for product in suggestions {
        println!("{:>4}  {}", product.id.dimmed(), product.title);
    }
}
