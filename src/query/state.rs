//! フィルタ状態と状態遷移
//!
//! `FilterState` はユーザー操作（`Action`）によってのみ変化する。
//! パイプラインやページネータが内部で書き換えることはない。

use crate::catalog::CompanyId;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// デフォルトのページサイズ
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => panic!("page size must be non-zero"),
};

/// ソートキー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Price,
    Title,
    Popularity,
    Date,
}

impl SortKey {
    /// 商品APIの `sortby` パラメータ値
    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Title => "name",
            SortKey::Popularity => "popularity",
            SortKey::Date => "date",
        }
    }
}

/// ソート方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// ソートのプリセット（並び替えドロップダウンの選択肢）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortPreset {
    PriceAsc,
    PriceDesc,
    TitleAsc,
    TitleDesc,
}

impl SortPreset {
    pub fn key_and_direction(&self) -> (SortKey, SortDirection) {
        match self {
            SortPreset::PriceAsc => (SortKey::Price, SortDirection::Asc),
            SortPreset::PriceDesc => (SortKey::Price, SortDirection::Desc),
            SortPreset::TitleAsc => (SortKey::Title, SortDirection::Asc),
            SortPreset::TitleDesc => (SortKey::Title, SortDirection::Desc),
        }
    }
}

impl FromStr for SortPreset {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "priceAsc" => Ok(SortPreset::PriceAsc),
            "priceDesc" => Ok(SortPreset::PriceDesc),
            "titleAsc" => Ok(SortPreset::TitleAsc),
            "titleDesc" => Ok(SortPreset::TitleDesc),
            other => Err(CatalogError::InvalidArgument(format!(
                "unknown sort preset '{}'. Expected priceAsc, priceDesc, titleAsc or titleDesc",
                other
            ))),
        }
    }
}

/// カテゴリ選択モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryMode {
    /// 複数カテゴリを自由に選択できる
    #[default]
    Multi,
    /// 1カテゴリのみ。選択後はリセットするまでカテゴリ操作をロックする
    Exclusive,
}

/// フィルタ状態への操作
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// 検索語を設定
    SetSearchTerm(String),
    /// カテゴリの選択を切り替え（Exclusive モードでは選択してロック）
    ToggleCategory(String),
    /// カテゴリをひとつだけ選択
    SelectCategory(String),
    /// カテゴリ選択をクリアしてロックを解除
    ResetCategories,
    /// 会社の選択を切り替え
    ToggleCompany(CompanyId),
    /// 会社選択をクリア
    ClearCompanies,
    /// 価格帯を設定
    SetPriceRange { min: f64, max: f64 },
    /// 下限価格を設定
    SetMinPrice(f64),
    /// 上限価格を設定
    SetMaxPrice(f64),
    /// ソートを設定
    SetSort {
        key: SortKey,
        direction: SortDirection,
    },
    /// ページを移動（0 始まり）
    SetPage(usize),
    /// 次のページへ
    NextPage,
    /// 前のページへ
    PrevPage,
    /// ページサイズを設定
    SetPageSize(NonZeroUsize),
    /// カテゴリ選択モードを設定
    SetCategoryMode(CategoryMode),
    /// 全てを初期値に戻す
    Reset,
}

/// 現在のカタログクエリ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    search_term: String,
    categories: BTreeSet<String>,
    companies: BTreeSet<CompanyId>,
    min_price: f64,
    #[serde(with = "unbounded_price")]
    max_price: f64,
    sort_key: SortKey,
    sort_direction: SortDirection,
    page_index: usize,
    page_size: NonZeroUsize,
    category_mode: CategoryMode,
    category_locked: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            categories: BTreeSet::new(),
            companies: BTreeSet::new(),
            min_price: 0.0,
            max_price: f64::INFINITY,
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            category_mode: CategoryMode::default(),
            category_locked: false,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    pub fn companies(&self) -> &BTreeSet<CompanyId> {
        &self.companies
    }

    pub fn min_price(&self) -> f64 {
        self.min_price
    }

    pub fn max_price(&self) -> f64 {
        self.max_price
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn category_mode(&self) -> CategoryMode {
        self.category_mode
    }

    /// カテゴリ操作が可能か（Exclusive モードで選択済みなら不可）
    pub fn category_controls_enabled(&self) -> bool {
        !self.category_locked
    }

    /// 現在ページの先頭オフセット（オーバーフロー時は飽和）
    pub fn offset(&self) -> usize {
        self.page_index.saturating_mul(self.page_size.get())
    }

    /// 同じ結果集合を生むクエリか（ページ位置・表示設定は無視）
    pub fn same_results_as(&self, other: &FilterState) -> bool {
        self.search_term == other.search_term
            && self.categories == other.categories
            && self.companies == other.companies
            && self.min_price == other.min_price
            && self.max_price == other.max_price
            && self.sort_key == other.sort_key
            && self.sort_direction == other.sort_direction
    }

    /// 操作を適用した新しい状態を返す
    ///
    /// `page_index` 以外のフィールドが変化した場合は `page_index` を 0 に戻す。
    /// 何も変化しない操作では状態をそのまま返す。
    pub fn apply(&self, action: Action) -> FilterState {
        let mut next = self.clone();

        match action {
            Action::SetSearchTerm(term) => next.search_term = term,
            Action::ToggleCategory(category) => next.toggle_category(category),
            Action::SelectCategory(category) => next.select_category(category),
            Action::ResetCategories => {
                next.categories.clear();
                next.category_locked = false;
            }
            Action::ToggleCompany(company) => {
                if !next.companies.remove(&company) {
                    next.companies.insert(company);
                }
            }
            Action::ClearCompanies => next.companies.clear(),
            Action::SetPriceRange { min, max } => next.set_price_range(min, max),
            Action::SetMinPrice(min) => next.set_price_range(min, self.max_price),
            Action::SetMaxPrice(max) => next.set_price_range(self.min_price, max),
            Action::SetSort { key, direction } => {
                next.sort_key = key;
                next.sort_direction = direction;
            }
            Action::SetPage(index) => next.page_index = index,
            Action::NextPage => next.page_index = self.page_index.saturating_add(1),
            Action::PrevPage => next.page_index = self.page_index.saturating_sub(1),
            Action::SetPageSize(size) => next.page_size = size,
            Action::SetCategoryMode(mode) => {
                if mode != self.category_mode {
                    next.category_mode = mode;
                    next.categories.clear();
                    next.category_locked = false;
                }
            }
            Action::Reset => {
                next = FilterState {
                    page_size: self.page_size,
                    category_mode: self.category_mode,
                    ..FilterState::default()
                };
            }
        }

        if !next.same_except_page(self) {
            next.page_index = 0;
        }
        next
    }

    fn same_except_page(&self, other: &FilterState) -> bool {
        self.same_results_as(other)
            && self.page_size == other.page_size
            && self.category_mode == other.category_mode
            && self.category_locked == other.category_locked
    }

    fn toggle_category(&mut self, category: String) {
        match self.category_mode {
            CategoryMode::Multi => {
                if !self.categories.remove(&category) {
                    self.categories.insert(category);
                }
            }
            CategoryMode::Exclusive => self.select_category(category),
        }
    }

    fn select_category(&mut self, category: String) {
        if self.category_locked {
            return;
        }
        self.categories.clear();
        self.categories.insert(category);
        if self.category_mode == CategoryMode::Exclusive {
            self.category_locked = true;
        }
    }

    /// 価格帯を正規化して設定する
    ///
    /// - NaN は無視（状態を変えない）
    /// - 負の下限は 0
    /// - 下限 > 上限 になる場合は範囲を初期値 (0, +∞) に戻す
    /// 下限は有限値のみ受け付ける（`+∞` の下限は無視）
    fn set_price_range(&mut self, min: f64, max: f64) {
        if min.is_nan() || max.is_nan() || min == f64::INFINITY {
            return;
        }
        let min = min.max(0.0);
        if min > max {
            self.min_price = 0.0;
            self.max_price = f64::INFINITY;
        } else {
            self.min_price = min;
            self.max_price = max;
        }
    }
}

/// `+∞` を JSON の `null` として扱う
mod unbounded_price {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_some(value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
