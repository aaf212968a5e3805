//! 商品APIに対するリモートソース
//!
//! - `params`: FilterState → クエリパラメータ
//! - `wire`: APIのリクエスト/レスポンス型
//! - `client`: reqwest による `ProductSource` 実装

mod client;
pub mod params;
pub mod wire;

pub use client::{RemoteSource, PRODUCTS_PATH};
pub use params::query_params;
