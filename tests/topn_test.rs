use epistasis::result::SearchResult;
use epistasis::topn::TopN;

fn r(combo: &[usize], score: f32) -> SearchResult {
    SearchResult::new(combo.to_vec(), score)
}

#[test]
fn keeps_only_capacity_best() {
    let mut top = TopN::new(3);
    for (combo, score) in [([0], 1.0), ([1], 5.0), ([2], 3.0), ([3], 4.0), ([4], 0.5)] {
        top.add(r(&combo, score));
    }
    let results = top.into_sorted_vec();
    assert_eq!(results.len(), 3);
    let scores: Vec<f32> = results.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![5.0, 4.0, 3.0]);
}

#[test]
fn ties_favor_the_earlier_arrival() {
    let mut top = TopN::new(1);
    top.add(r(&[0], 2.0));
    top.add(r(&[1], 2.0));
    let results = top.into_sorted_vec();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].combination, vec![0]);
}

#[test]
fn merge_across_parts_respects_capacity() {
    let mut a = TopN::new(2);
    a.add(r(&[0], 1.0));
    a.add(r(&[1], 3.0));
    let mut b = TopN::new(2);
    b.add(r(&[2], 5.0));
    b.add(r(&[3], 0.5));

    let merged = TopN::merge(2, [a, b]);
    let results = merged.into_sorted_vec();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].combination, vec![2]);
    assert_eq!(results[1].combination, vec![1]);
}

#[test]
fn stays_sorted_after_many_inserts_below_capacity() {
    let mut top = TopN::new(10);
    for score in [3.0, 1.0, 4.0, 1.5, 5.0, 9.0, 2.0, 6.0] {
        top.add(r(&[0], score));
    }
    let results = top.into_sorted_vec();
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
}
