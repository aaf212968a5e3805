//! カタログ画面の状態管理（Elm Architecture）
//!
//! 入力は `Msg` として `update` に渡し、副作用（クエリ発行・画面遷移）は
//! `Effect` として呼び出し側に返す。非同期の実行は `perform` が担う。

use crate::catalog::{Dataset, Product, ProductId};
use crate::error::{CatalogError, Result};
use crate::query::{suggest, Action, FilterState, Page};
use crate::source::{ProductSource, QueryResult, QueryTicket, RequestTracker};
use std::sync::Arc;

// ============================================================================
// Model
// ============================================================================

/// 検索結果の表示状態
#[derive(Debug)]
pub enum ViewStatus {
    /// まだクエリを発行していない
    Idle,
    /// クエリ実行中
    Loading { ticket: QueryTicket },
    /// 結果を表示中
    Ready(Page<Product>),
    /// クエリが失敗した（「0件」とは区別して表示する）
    Failed(CatalogError),
}

impl ViewStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewStatus::Loading { .. })
    }

    pub fn page(&self) -> Option<&Page<Product>> {
        match self {
            ViewStatus::Ready(page) => Some(page),
            _ => None,
        }
    }
}

/// カタログ画面の状態
pub struct Model {
    /// 現在のフィルタ
    pub filter: FilterState,
    /// 検索語に対するサジェスト
    pub suggestions: Vec<Product>,
    pub status: ViewStatus,
    /// 詳細表示中の商品
    pub selected: Option<ProductId>,
    tracker: RequestTracker,
    dataset: Arc<Dataset>,
    suggestion_limit: usize,
}

impl Model {
    pub fn new(dataset: Arc<Dataset>, filter: FilterState, suggestion_limit: usize) -> Self {
        Self {
            filter,
            suggestions: Vec::new(),
            status: ViewStatus::Idle,
            selected: None,
            tracker: RequestTracker::new(),
            dataset,
            suggestion_limit,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// 詳細表示中の商品
    pub fn selected_product(&self) -> Option<&Product> {
        self.selected.and_then(|id| self.dataset.get(id))
    }

    fn issue_query(&mut self) -> Effect {
        let ticket = self.tracker.issue();
        tracing::debug!(ticket = ticket.id(), "query issued");
        self.status = ViewStatus::Loading { ticket };
        Effect::Query {
            ticket,
            filter: self.filter.clone(),
        }
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions = suggest(&self.dataset, self.filter.search_term(), self.suggestion_limit)
            .into_iter()
            .cloned()
            .collect();
    }
}

// ============================================================================
// Msg / Effect
// ============================================================================

/// 画面へのメッセージ
#[derive(Debug)]
pub enum Msg {
    /// 検索欄の入力
    SearchInput(String),
    /// フィルタ操作
    Filter(Action),
    /// サジェストを選択（詳細画面へ）
    SelectSuggestion(ProductId),
    /// クエリ完了
    QueryCompleted {
        ticket: QueryTicket,
        result: Result<QueryResult>,
    },
    /// 現在のフィルタで再取得
    Refresh,
    /// 詳細画面を閉じる
    CloseDetail,
}

/// update() の戻り値
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// クエリを実行して `Msg::QueryCompleted` を返す
    Query {
        ticket: QueryTicket,
        filter: FilterState,
    },
    /// 商品詳細へ遷移
    Navigate(ProductId),
}

// ============================================================================
// update
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) -> Effect {
    match msg {
        Msg::SearchInput(term) => apply_filter(model, Action::SetSearchTerm(term)),
        Msg::Filter(action) => apply_filter(model, action),
        Msg::SelectSuggestion(id) => {
            let Some(title) = model.dataset.get(id).map(|p| p.title.clone()) else {
                model.status = ViewStatus::Failed(CatalogError::ProductNotFound(id));
                return Effect::None;
            };
            model.filter = model.filter.apply(Action::SetSearchTerm(title));
            model.suggestions.clear();
            model.tracker.invalidate();
            model.status = ViewStatus::Idle;
            model.selected = Some(id);
            Effect::Navigate(id)
        }
        Msg::QueryCompleted { ticket, result } => {
            if !model.tracker.is_current(ticket) {
                tracing::debug!(ticket = ticket.id(), "stale response dropped");
                return Effect::None;
            }
            model.status = match result {
                Ok(result) => ViewStatus::Ready(result.into_page(&model.filter)),
                Err(e) => {
                    tracing::warn!(error = %e, retryable = e.is_retryable(), "query failed");
                    ViewStatus::Failed(e)
                }
            };
            Effect::None
        }
        Msg::Refresh => model.issue_query(),
        Msg::CloseDetail => {
            if model.selected.take().is_none() {
                return Effect::None;
            }
            // 遷移中に捨てた結果を取り直す
            match model.status {
                ViewStatus::Ready(_) => Effect::None,
                _ => model.issue_query(),
            }
        }
    }
}

/// フィルタ操作を適用し、変化があればクエリを発行
///
/// 検索語が変わった場合はサジェストも作り直す。
fn apply_filter(model: &mut Model, action: Action) -> Effect {
    let next = model.filter.apply(action);
    if next == model.filter {
        return Effect::None;
    }
    let term_changed = next.search_term() != model.filter.search_term();
    model.filter = next;
    if term_changed {
        model.refresh_suggestions();
    }
    model.issue_query()
}

/// Effect を実行する
///
/// `Effect::Query` のみ非同期処理を伴い、完了メッセージを返す。
pub async fn perform(source: &dyn ProductSource, effect: Effect) -> Option<Msg> {
    match effect {
        Effect::Query { ticket, filter } => {
            tracing::debug!(source = source.name(), ticket = ticket.id(), "running query");
            let result = source.query(&filter).await;
            Some(Msg::QueryCompleted { ticket, result })
        }
        Effect::None | Effect::Navigate(_) => None,
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
