use epistasis::result::SearchResult;
use epistasis::transport::{RankTransport, SingleRankTransport};

#[test]
fn single_rank_gather_echoes_local_results() {
    let transport = SingleRankTransport;
    assert_eq!(transport.rank(), 0);
    assert_eq!(transport.world_size(), 1);

    let local = vec![SearchResult::new(vec![0, 1], 0.5)];
    let gathered = transport.gather(&local).unwrap();
    assert_eq!(gathered, Some(vec![local]));
}
