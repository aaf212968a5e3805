//! storefront show コマンド
//!
//! 商品の詳細を表示する。パイプラインは通さない。

use super::DataArgs;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use storefront::catalog::{Product, ProductId};
use storefront::error::Result;
use storefront::output::format_price;

#[derive(Debug, Parser)]
pub struct Args {
    /// Product id
    pub id: ProductId,

    #[command(flatten)]
    pub data: DataArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args) -> Result<()> {
    let dataset = args.data.load()?;
    let product = dataset.find(args.id)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(product)?);
    } else {
        print_table(product);
    }
    Ok(())
}

fn print_table(product: &Product) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec!["ID".to_string(), product.id.to_string()]);
    table.add_row(vec!["Title".to_string(), product.title.clone()]);
    table.add_row(vec!["Category".to_string(), product.category.clone()]);
    table.add_row(vec!["Price".to_string(), format_price(product.price)]);
    if !product.description.is_empty() {
        table.add_row(vec!["Description".to_string(), product.description.clone()]);
    }
    if let Some(company) = product.company_id {
        table.add_row(vec!["Company".to_string(), company.to_string()]);
    }
    if let Some(created_at) = product.created_at {
        table.add_row(vec![
            "Created".to_string(),
            created_at.format("%Y-%m-%d").to_string(),
        ]);
    }

    println!("{table}");
}
