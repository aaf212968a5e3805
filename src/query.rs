//! カタログクエリエンジン
//!
//! - `state`: FilterState と状態遷移
//! - `suggest`: 検索サジェスト
//! - `pipeline`: フィルタ/ソート
//! - `page`: ページネーション

pub mod page;
pub mod pipeline;
pub mod state;
pub mod suggest;

pub use page::{paginate, total_pages, Page};
pub use pipeline::{apply, ResultCache, ResultSet};
pub use state::{
    Action, CategoryMode, FilterState, SortDirection, SortKey, SortPreset, DEFAULT_PAGE_SIZE,
};
pub use suggest::suggest;
