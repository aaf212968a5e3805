use super::*;
use crate::query::state::Action;
use proptest::prelude::*;

const CATEGORIES: &[&str] = &["Clothing", "Electronics", "Sports"];

fn product_strategy() -> impl Strategy<Value = (String, usize, u32, u32)> {
    (
        "[A-Za-z]{1,8}",
        0..CATEGORIES.len(),
        0u32..500,
        0u32..100,
    )
}

/// ID が一意なデータセット
fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(product_strategy(), 0..40).prop_map(|rows| {
        let products = rows
            .into_iter()
            .enumerate()
            .map(|(i, (title, category, price, popularity))| {
                Product::new(i as u64 + 1, title, CATEGORIES[category], price as f64)
                    .with_popularity(popularity)
            })
            .collect();
        Dataset::new(products).unwrap()
    })
}

fn sort_strategy() -> impl Strategy<Value = (SortKey, SortDirection)> {
    (
        prop_oneof![
            Just(SortKey::Price),
            Just(SortKey::Title),
            Just(SortKey::Popularity),
            Just(SortKey::Date),
        ],
        prop_oneof![Just(SortDirection::Asc), Just(SortDirection::Desc)],
    )
}

fn filter_strategy() -> impl Strategy<Value = FilterState> {
    (
        "[a-z]{0,2}",
        prop::option::of(0..CATEGORIES.len()),
        0u32..300,
        0u32..300,
        sort_strategy(),
    )
        .prop_map(|(term, category, a, b, (key, direction))| {
            let mut state = FilterState::default()
                .apply(Action::SetSearchTerm(term))
                .apply(Action::SetPriceRange {
                    min: a.min(b) as f64,
                    max: a.max(b) as f64,
                })
                .apply(Action::SetSort { key, direction });
            if let Some(c) = category {
                state = state.apply(Action::ToggleCategory(CATEGORIES[c].to_string()));
            }
            state
        })
}

proptest! {
    /// 同じ入力なら常に同じ順序
    #[test]
    fn prop_apply_is_deterministic(dataset in dataset_strategy(), state in filter_strategy()) {
        let first: Vec<u64> = apply(&dataset, &state).iter().map(|p| p.id).collect();
        let second: Vec<u64> = apply(&dataset, &state).iter().map(|p| p.id).collect();
        prop_assert_eq!(first, second);
    }

    /// 結果は全て条件を満たす
    #[test]
    fn prop_results_satisfy_filter(dataset in dataset_strategy(), state in filter_strategy()) {
        let needle = state.search_term().to_lowercase();
        for p in apply(&dataset, &state) {
            prop_assert!(p.price >= state.min_price() && p.price <= state.max_price());
            prop_assert!(state.categories().is_empty() || state.categories().contains(&p.category));
            prop_assert!(p.title.to_lowercase().contains(&needle));
        }
    }

    /// 結果は比較関数に従って整列している
    #[test]
    fn prop_results_are_sorted(dataset in dataset_strategy(), state in filter_strategy()) {
        let result = apply(&dataset, &state);
        for pair in result.windows(2) {
            prop_assert_ne!(
                compare(pair[0], pair[1], state.sort_key(), state.sort_direction()),
                Ordering::Greater
            );
        }
    }

    /// キャッシュ経由でも直接計算と同じ結果
    #[test]
    fn prop_cache_matches_direct(dataset in dataset_strategy(), a in filter_strategy(), b in filter_strategy()) {
        let mut cache = ResultCache::new();
        for state in [&a, &b, &a] {
            let cached: Vec<u64> = cache.get_or_compute(&dataset, state).iter().map(|p| p.id).collect();
            let direct: Vec<u64> = apply(&dataset, state).iter().map(|p| p.id).collect();
            prop_assert_eq!(cached, direct);
        }
    }
}
