use super::*;

fn parse(args: &[&str]) -> Args {
    let mut argv = vec!["search"];
    argv.extend_from_slice(args);
    Args::try_parse_from(argv).unwrap()
}

fn filter(args: &[&str]) -> Result<FilterState> {
    build_filter(&parse(args), &CatalogConfig::default(), &Dataset::mock())
}

#[test]
fn test_defaults() {
    let state = filter(&[]).unwrap();
    assert_eq!(state, FilterState::default());
}

#[test]
fn test_category_name_is_canonicalized() {
    let state = filter(&["--category", "clothing", "-c", "SPORTS"]).unwrap();
    let categories: Vec<_> = state.categories().iter().map(String::as_str).collect();
    assert_eq!(categories, vec!["Clothing", "Sports"]);
}

#[test]
fn test_exclusive_keeps_first_category() {
    let state = filter(&["--exclusive", "-c", "Clothing", "-c", "Sports"]).unwrap();
    let categories: Vec<_> = state.categories().iter().map(String::as_str).collect();
    assert_eq!(categories, vec!["Clothing"]);
    assert!(!state.category_controls_enabled());
}

#[test]
fn test_page_survives_other_options() {
    let state = filter(&["--page", "2", "-q", "a", "--company", "4"]).unwrap();
    assert_eq!(state.page_index(), 2);
    assert_eq!(state.search_term(), "a");
    assert!(state.companies().contains(&CompanyId(4)));
}

#[test]
fn test_preset_sets_sort() {
    let state = filter(&["--preset", "titleDesc"]).unwrap();
    assert_eq!(state.sort_key(), SortKey::Title);
    assert_eq!(state.sort_direction(), SortDirection::Desc);
}

#[test]
fn test_unknown_preset_is_rejected() {
    assert!(matches!(
        filter(&["--preset", "newest"]),
        Err(CatalogError::InvalidArgument(_))
    ));
}

#[test]
fn test_preset_conflicts_with_sort() {
    let result = Args::try_parse_from(["search", "--preset", "priceAsc", "--sort", "title"]);
    assert!(result.is_err());
}

#[test]
fn test_inverted_price_range_is_rejected() {
    assert!(matches!(
        filter(&["--min-price", "100", "--max-price", "10"]),
        Err(CatalogError::InvalidArgument(_))
    ));
}

#[test]
fn test_price_range_is_applied() {
    let state = filter(&["--min-price", "60", "--max-price", "100"]).unwrap();
    assert_eq!(state.min_price(), 60.0);
    assert_eq!(state.max_price(), 100.0);
}

#[test]
fn test_page_size_from_config() {
    let config = CatalogConfig {
        page_size: 4,
        ..CatalogConfig::default()
    };
    let state = build_filter(&parse(&[]), &config, &Dataset::mock()).unwrap();
    assert_eq!(state.page_size().get(), 4);

    let state = build_filter(&parse(&["--page-size", "7"]), &config, &Dataset::mock()).unwrap();
    assert_eq!(state.page_size().get(), 7);
}

#[test]
fn test_zero_page_size_is_rejected_by_parser() {
    assert!(Args::try_parse_from(["search", "--page-size", "0"]).is_err());
}

#[test]
fn test_remote_conflicts_with_data() {
    assert!(Args::try_parse_from(["search", "--remote", "--data", "products.json"]).is_err());
}
