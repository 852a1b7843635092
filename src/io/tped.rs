//! PLINK TPED/TFAM genotype file loader.
//!
//! Grounded in `original_source/include/fiuncho/dataset/TPEDFile.hpp`: TFAM
//! lines are `FID IID PAT MAT SEX PHENOTYPE` (phenotype `1` = control, `2` =
//! case); TPED lines are `CHR VARIANT_ID POS_CM COORD` followed by two
//! nucleotide letters per sample. The minor allele (the less frequent of the
//! two nucleotides observed at a variant) is counted per sample to produce
//! the 0/1/2 genotype code the core operates on.

use crate::dataset::Dataset;
use crate::error::LoaderError;
use std::io::BufRead;

struct Sample {
    is_case: bool,
}

fn read_tfam<R: BufRead>(reader: R) -> Result<Vec<Sample>, LoaderError> {
    let mut samples = Vec::new();
    for (row, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(LoaderError::CountMismatch {
                detail: format!("tfam row {}: expected 6 columns, found {}", row + 1, fields.len()),
            });
        }
        let ph: i32 = fields[5].parse().map_err(|_| LoaderError::BadPhenotype {
            value: fields[5].to_string(),
        })?;
        let is_case = match ph {
            2 => true,
            1 => false,
            _ => {
                return Err(LoaderError::BadPhenotype {
                    value: fields[5].to_string(),
                })
            }
        };
        samples.push(Sample { is_case });
    }
    Ok(samples)
}

fn is_nucleotide(c: char) -> bool {
    matches!(c, 'A' | 'C' | 'G' | 'T')
}

/// Decodes one TPED variant line's alleles into a 0/1/2 genotype code per
/// sample, counting the minor (less frequent) nucleotide occurrences in each
/// sample's pair.
fn decode_variant_row(alleles: &[char], n_samples: usize) -> Result<Vec<u8>, LoaderError> {
    if alleles.len() != 2 * n_samples {
        return Err(LoaderError::CountMismatch {
            detail: format!(
                "variant has {} alleles, expected {} ({} samples x 2)",
                alleles.len(),
                2 * n_samples,
                n_samples
            ),
        });
    }

    let mut counts = std::collections::BTreeMap::new();
    for &a in alleles {
        *counts.entry(a).or_insert(0u32) += 1;
    }
    let minor = counts
        .iter()
        .min_by_key(|&(&nt, &count)| (count, nt))
        .map(|(&nt, _)| nt);

    let mut codes = Vec::with_capacity(n_samples);
    for pair in alleles.chunks_exact(2) {
        let code = match minor {
            Some(m) => pair.iter().filter(|&&a| a == m).count() as u8,
            None => 0,
        };
        codes.push(code);
    }
    Ok(codes)
}

/// Parses a TPED+TFAM pair into a [`Dataset`].
pub fn load<R1: BufRead, R2: BufRead>(tfam: R1, tped: R2) -> Result<Dataset, LoaderError> {
    let samples = read_tfam(tfam)?;
    let n_samples = samples.len();

    let mut case_cols: Vec<Vec<u8>> = Vec::new();
    let mut ctrl_cols: Vec<Vec<u8>> = Vec::new();

    for (row, line) in tped.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let _chr_code = fields.next().ok_or_else(|| LoaderError::CountMismatch {
            detail: format!("tped row {}: missing chromosome code", row + 1),
        })?;
        let _v_id = fields.next();
        let _pos = fields.next();
        let _coord = fields.next();

        let rest: Vec<&str> = fields.collect();
        let mut alleles = Vec::with_capacity(rest.len());
        for tok in &rest {
            let c = tok.chars().next().ok_or_else(|| LoaderError::BadNucleotide {
                value: tok.to_string(),
            })?;
            if !is_nucleotide(c) {
                return Err(LoaderError::BadNucleotide { value: tok.to_string() });
            }
            alleles.push(c);
        }

        let codes = decode_variant_row(&alleles, n_samples)?;

        let mut case_col = Vec::new();
        let mut ctrl_col = Vec::new();
        for (sample, &code) in samples.iter().zip(codes.iter()) {
            if sample.is_case {
                case_col.push(code);
            } else {
                ctrl_col.push(code);
            }
        }
        case_cols.push(case_col);
        ctrl_cols.push(ctrl_col);
    }

    Ok(Dataset::from_columns(&case_cols, &ctrl_cols))
}
