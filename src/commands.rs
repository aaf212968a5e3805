use crate::cli::Command;
use std::path::PathBuf;
use storefront::catalog::Dataset;
use storefront::config::CatalogConfig;
use storefront::error::Result;

pub mod categories;
pub mod search;
pub mod show;
pub mod suggest;

/// データセットの指定（省略時は組み込みのモックデータ）
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DataArgs {
    /// Product dataset (JSON array of products). Defaults to the built-in catalog
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,
}

impl DataArgs {
    pub fn load(&self) -> Result<Dataset> {
        match &self.data {
            Some(path) => Dataset::load(path),
            None => Ok(Dataset::mock()),
        }
    }
}

pub async fn dispatch(cli: crate::cli::Cli) -> Result<()> {
    let config = CatalogConfig::load()?;

    match cli.command {
        Command::Search(args) => search::run(args, &config).await,
        Command::Suggest(args) => suggest::run(args, &config),
        Command::Show(args) => show::run(args),
        Command::Categories(args) => categories::run(args),
    }
}
