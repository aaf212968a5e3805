use super::*;

fn size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn numbers(n: usize) -> Vec<usize> {
    (1..=n).collect()
}

#[test]
fn test_twenty_five_items_make_three_pages() {
    let results = numbers(25);

    let first = paginate(&results, 0, size(10));
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.items, numbers(10));

    let last = paginate(&results, 2, size(10));
    assert_eq!(last.items, vec![21, 22, 23, 24, 25]);
    assert_eq!(last.total_count, 25);
    assert!(!last.has_next());
}

#[test]
fn test_page_past_the_end_is_empty_and_keeps_index() {
    let results = numbers(25);
    let page = paginate(&results, 3, size(10));

    assert!(page.is_empty());
    assert!(page.is_out_of_range());
    assert_eq!(page.page_index, 3);
    assert_eq!(page.total_pages, 3);
}

#[test]
fn test_empty_results_have_zero_pages() {
    let results: Vec<usize> = Vec::new();
    let page = paginate(&results, 0, size(10));

    assert_eq!(page.total_pages, 0);
    assert!(page.is_empty());
    assert!(page.is_out_of_range());
    assert!(!page.has_prev());
}

#[test]
fn test_exact_multiple_has_no_trailing_page() {
    let results = numbers(20);
    assert_eq!(paginate(&results, 0, size(10)).total_pages, 2);
    assert!(paginate(&results, 2, size(10)).is_empty());
}

#[test]
fn test_huge_page_index_does_not_overflow() {
    let results = numbers(5);
    let page = paginate(&results, usize::MAX, size(10));
    assert!(page.is_empty());
    assert_eq!(page.page_index, usize::MAX);
}

#[test]
fn test_has_next_and_prev() {
    let results = numbers(25);
    let middle = paginate(&results, 1, size(10));
    assert!(middle.has_next());
    assert!(middle.has_prev());

    let first = paginate(&results, 0, size(10));
    assert!(!first.has_prev());
}

#[test]
fn test_item_range_is_one_based() {
    let results = numbers(25);
    assert_eq!(paginate(&results, 2, size(10)).item_range(size(10)), Some((21, 25)));
    assert_eq!(paginate(&results, 5, size(10)).item_range(size(10)), None);
}

#[test]
fn test_from_window_computes_total_pages() {
    let page = Page::from_window(vec!["a", "b"], 12, 1, size(10));
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.total_count, 12);
    assert_eq!(page.page_index, 1);
}

