//! storefront categories コマンド

use super::DataArgs;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use storefront::catalog::CategoryDirectory;
use storefront::error::Result;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub data: DataArgs,
}

pub fn run(args: Args) -> Result<()> {
    let dataset = args.data.load()?;
    let categories = dataset.categories();

    if categories.is_empty() {
        println!("No categories");
        return Ok(());
    }

    let directory = CategoryDirectory::default();
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Category", "API ID", "Products"]);

    for (name, count) in &categories {
        let id = directory
            .id_of(name)
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![name.to_string(), id, count.to_string()]);
    }

    println!("{table}");
    Ok(())
}
