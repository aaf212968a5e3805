use clap::{ArgAction, Parser, Subcommand};

use crate::commands::{categories, search, show, suggest};

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "Storefront catalog CLI", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 商品を検索・絞り込み・ソートしてページ表示
    Search(search::Args),

    /// 検索語に対するサジェスト
    Suggest(suggest::Args),

    /// 商品の詳細表示
    Show(show::Args),

    /// カテゴリ一覧と件数
    Categories(categories::Args),
}
