//! PLINK `.raw` / GAMETES-style genotype file loader.
//!
//! Grounded in `original_source/include/fiuncho/dataset/RAWFile.hpp`: a
//! whitespace-delimited table with an optional leading block of sample-info
//! columns (`FID IID PAT MAT SEX`), a `PHENOTYPE`/`Class` column (`1` =
//! control, `2` = case), and one allele-dosage column per SNP holding the
//! genotype code directly (`0`, `1`, or `2`).

use crate::dataset::Dataset;
use crate::error::LoaderError;
use std::io::BufRead;

const SAMPLE_INFO_COLUMNS: &[&str] = &["FID", "IID", "PAT", "MAT", "SEX"];

/// Parses a `.raw`-format genotype file into a [`Dataset`].
pub fn load<R: BufRead>(reader: R) -> Result<Dataset, LoaderError> {
    let mut lines = reader.lines();
    let header_line = lines
        .next()
        .ok_or_else(|| LoaderError::CountMismatch {
            detail: "empty input: missing header row".into(),
        })??;
    let header: Vec<&str> = header_line.split_whitespace().collect();

    let phenotype_idx = header
        .iter()
        .position(|&h| h.eq_ignore_ascii_case("PHENOTYPE") || h.eq_ignore_ascii_case("Class"))
        .ok_or_else(|| LoaderError::CountMismatch {
            detail: "no PHENOTYPE/Class column found in header".into(),
        })?;

    let snp_indices: Vec<usize> = header
        .iter()
        .enumerate()
        .filter(|(i, &h)| {
            *i != phenotype_idx
                && !SAMPLE_INFO_COLUMNS.iter().any(|c| h.eq_ignore_ascii_case(c))
        })
        .map(|(i, _)| i)
        .collect();
    let n_snps = snp_indices.len();

    let mut case_cols: Vec<Vec<u8>> = vec![Vec::new(); n_snps];
    let mut ctrl_cols: Vec<Vec<u8>> = vec![Vec::new(); n_snps];

    for (row_no, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != header.len() {
            return Err(LoaderError::CountMismatch {
                detail: format!(
                    "row {} has {} fields, expected {}",
                    row_no + 2,
                    fields.len(),
                    header.len()
                ),
            });
        }

        let ph: i32 = fields[phenotype_idx].parse().map_err(|_| LoaderError::BadPhenotype {
            value: fields[phenotype_idx].to_string(),
        })?;
        let is_case = match ph {
            2 => true,
            1 => false,
            _ => {
                return Err(LoaderError::BadPhenotype {
                    value: fields[phenotype_idx].to_string(),
                })
            }
        };

        for (col, &field_idx) in snp_indices.iter().enumerate() {
            let code: u8 = fields[field_idx].parse().map_err(|_| LoaderError::CountMismatch {
                detail: format!(
                    "row {}: non-numeric genotype code {:?} in column {:?}",
                    row_no + 2,
                    fields[field_idx],
                    header[field_idx]
                ),
            })?;
            if code > 2 {
                return Err(LoaderError::CountMismatch {
                    detail: format!("row {}: genotype code {} out of range 0..=2", row_no + 2, code),
                });
            }
            if is_case {
                case_cols[col].push(code);
            } else {
                ctrl_cols[col].push(code);
            }
        }
    }

    Ok(Dataset::from_columns(&case_cols, &ctrl_cols))
}
