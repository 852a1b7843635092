use epistasis::genotype::arena::{set_bit, words_for, Arena, BITS};

#[test]
fn words_for_rounds_up() {
    assert_eq!(words_for(0), 0);
    assert_eq!(words_for(1), 1);
    assert_eq!(words_for(BITS), 1);
    assert_eq!(words_for(BITS + 1), 2);
    assert_eq!(words_for(BITS * 3), 3);
}

#[test]
fn arena_rows_are_independently_addressable() {
    let mut arena = Arena::new(3, 2);
    set_bit(arena.row_mut(0), 5);
    set_bit(arena.row_mut(1), 64);
    assert_eq!(arena.row(0)[0], 1 << 5);
    assert_eq!(arena.row(0)[1], 0);
    assert_eq!(arena.row(1)[1], 1);
    assert_eq!(arena.row(2), &[0u64, 0u64]);
    assert_eq!(arena.rows(), 3);
    assert_eq!(arena.row_words(), 2);
}
