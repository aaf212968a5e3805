use super::*;
use proptest::prelude::*;

proptest! {
    /// 全ページを連結すると元の結果集合と一致する（重複・欠落なし）
    #[test]
    fn prop_pages_partition_results(len in 0usize..200, page_size in 1usize..30) {
        let results: Vec<usize> = (0..len).collect();
        let page_size = NonZeroUsize::new(page_size).unwrap();
        let total = total_pages(len, page_size);

        let mut joined = Vec::new();
        for index in 0..total {
            let page = paginate(&results, index, page_size);
            prop_assert!(!page.items.is_empty());
            prop_assert!(page.items.len() <= page_size.get());
            joined.extend(page.items);
        }

        prop_assert_eq!(joined, results);
    }

    /// 範囲外のページは常に空
    #[test]
    fn prop_out_of_range_pages_are_empty(len in 0usize..100, page_size in 1usize..30, extra in 0usize..5) {
        let results: Vec<usize> = (0..len).collect();
        let page_size = NonZeroUsize::new(page_size).unwrap();
        let index = total_pages(len, page_size) + extra;

        let page = paginate(&results, index, page_size);
        prop_assert!(page.items.is_empty());
        prop_assert_eq!(page.page_index, index);
    }
}
