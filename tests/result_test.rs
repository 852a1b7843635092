use epistasis::result::{by_score_desc, SearchResult};

#[test]
fn ties_break_by_combination_order() {
    let a = SearchResult::new(vec![0, 1], 2.0);
    let b = SearchResult::new(vec![0, 2], 2.0);
    let mut results = vec![b.clone(), a.clone()];
    results.sort_by(by_score_desc);
    assert_eq!(results, vec![a, b]);
}
