use super::*;

fn sample() -> Dataset {
    Dataset::new(vec![
        Product::new(1, "Shirt", "Clothing", 50.0),
        Product::new(2, "Shoes", "Clothing", 80.0),
    ])
    .unwrap()
}

fn titles(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.title.clone()).collect()
}

#[test]
fn test_suggest_returns_matches_in_dataset_order() {
    let dataset = sample();
    let result = suggest(&dataset, "sh", 5);
    assert_eq!(titles(&result), vec!["Shirt", "Shoes"]);
}

#[test]
fn test_suggest_is_case_insensitive() {
    let dataset = sample();
    assert_eq!(titles(&suggest(&dataset, "SHO", 5)), vec!["Shoes"]);
}

#[test]
fn test_suggest_empty_term_returns_nothing() {
    let dataset = sample();
    assert!(suggest(&dataset, "", 5).is_empty());
    assert!(suggest(&dataset, "   ", 5).is_empty());
}

#[test]
fn test_suggest_respects_limit() {
    let dataset = sample();
    let result = suggest(&dataset, "s", 1);
    assert_eq!(titles(&result), vec!["Shirt"]);
    assert!(suggest(&dataset, "s", 0).is_empty());
}

#[test]
fn test_suggest_matches_inside_title() {
    let dataset = Dataset::mock();
    let result = suggest(&dataset, "ball", 10);
    assert_eq!(titles(&result), vec!["Basketball", "Football"]);
}

#[test]
fn test_suggest_no_match() {
    let dataset = sample();
    assert!(suggest(&dataset, "xyz", 5).is_empty());
}
