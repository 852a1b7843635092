//! The external dataset loader: dispatches on file extension to the RAW or
//! TPED/TFAM reader, and writes the final result file.
pub mod raw;
pub mod tped;
pub mod writer;

use crate::dataset::Dataset;
use crate::error::LoaderError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Loads a [`Dataset`] from one RAW file, or a TPED+TFAM pair (in either
/// order), matching the CLI's 1-or-2 positional `inputs` contract.
pub fn load_dataset(inputs: &[impl AsRef<Path>]) -> Result<Dataset, LoaderError> {
    match inputs {
        [single] => {
            let path = single.as_ref();
            match path.extension().and_then(|e| e.to_str()) {
                Some(ext) if ext.eq_ignore_ascii_case("raw") => {
                    let file = open(path)?;
                    raw::load(BufReader::new(file))
                }
                other => Err(LoaderError::UnrecognizedExtension(
                    other.unwrap_or("").to_string(),
                )),
            }
        }
        [a, b] => {
            let (tped_path, tfam_path) = order_tped_tfam(a.as_ref(), b.as_ref())?;
            let tped_file = BufReader::new(open(tped_path)?);
            let tfam_file = BufReader::new(open(tfam_path)?);
            tped::load(tfam_file, tped_file)
        }
        _ => Err(LoaderError::CountMismatch {
            detail: format!("expected 1 or 2 input paths, got {}", inputs.len()),
        }),
    }
}

fn order_tped_tfam<'a>(a: &'a Path, b: &'a Path) -> Result<(&'a Path, &'a Path), LoaderError> {
    let ext = |p: &Path| p.extension().and_then(|e| e.to_str()).map(|s| s.to_ascii_lowercase());
    match (ext(a).as_deref(), ext(b).as_deref()) {
        (Some("tped"), Some("tfam")) => Ok((a, b)),
        (Some("tfam"), Some("tped")) => Ok((b, a)),
        _ => Err(LoaderError::UnrecognizedExtension(format!(
            "{:?}, {:?} (expected one .tped and one .tfam)",
            a, b
        ))),
    }
}

fn open(path: &Path) -> Result<File, LoaderError> {
    File::open(path).map_err(|source| LoaderError::FileUnreadable {
        path: path.display().to_string(),
        source,
    })
}
