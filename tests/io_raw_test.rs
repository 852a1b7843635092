use epistasis::error::LoaderError;
use epistasis::io::raw;
use std::io::Cursor;

#[test]
fn loads_a_minimal_raw_file() {
    let input = "FID IID PAT MAT SEX PHENOTYPE rs1 rs2\n\
                 1 1 0 0 1 2 0 1\n\
                 2 2 0 0 1 1 2 0\n\
                 3 3 0 0 2 2 1 1\n";
    let ds = raw::load(Cursor::new(input)).unwrap();
    assert_eq!(ds.n_snps(), 2);
    assert_eq!(ds.n_cases(), 2);
    assert_eq!(ds.n_ctrls(), 1);
}

#[test]
fn rejects_unknown_phenotype_codes() {
    let input = "PHENOTYPE rs1\n3 0\n";
    let err = raw::load(Cursor::new(input)).unwrap_err();
    assert!(matches!(err, LoaderError::BadPhenotype { .. }));
}

#[test]
fn rejects_missing_phenotype_column() {
    let input = "rs1 rs2\n0 1\n";
    let err = raw::load(Cursor::new(input)).unwrap_err();
    assert!(matches!(err, LoaderError::CountMismatch { .. }));
}
