use epistasis::genotype::ContingencyTable;
use epistasis::mi::mutual_information;

#[test]
fn independent_split_has_zero_mutual_information() {
    let mut table = ContingencyTable::zeroed(1);
    // Every genotype class split 50/50 between case and control.
    table.set_case_count(0, 10);
    table.set_ctrl_count(0, 10);
    table.set_case_count(1, 10);
    table.set_ctrl_count(1, 10);
    table.set_case_count(2, 10);
    table.set_ctrl_count(2, 10);
    let mi = mutual_information(&table);
    assert!(mi.abs() < 1e-5);
}

#[test]
fn perfect_correlation_has_positive_mutual_information() {
    let mut table = ContingencyTable::zeroed(1);
    table.set_case_count(0, 20);
    table.set_ctrl_count(1, 20);
    let mi = mutual_information(&table);
    assert!(mi > 0.0);
}

#[test]
fn empty_cells_do_not_produce_nan_or_inf() {
    let mut table = ContingencyTable::zeroed(1);
    table.set_case_count(0, 5);
    table.set_ctrl_count(0, 5);
    // states 1 and 2 stay at zero.
    let mi = mutual_information(&table);
    assert!(mi.is_finite());
}

#[test]
fn mutual_information_is_never_negative() {
    let mut table = ContingencyTable::zeroed(2);
    let counts = [3u32, 1, 4, 1, 5, 9, 2, 6, 0];
    for (g, &c) in counts.iter().enumerate() {
        table.set_case_count(g, c);
        table.set_ctrl_count(g, counts[(g + 2) % counts.len()]);
    }
    let mi = mutual_information(&table);
    assert!(mi >= -1e-6);
}
