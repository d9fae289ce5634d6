use crate::model::lts::LtsError;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use kdam::tqdm;
use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

pub fn is_gzip(filepath: &Path) -> bool {
    filepath.extension().is_some_and(|ext| ext == "gz")
}

/// reads all rows of a CSV file with headers, which may be gzipped. rows that
/// cannot be deserialized are logged and skipped. returns the rows read along
/// with the count of skipped rows. an I/O failure aborts the read.
pub fn read_csv<T>(filepath: &Path, desc: &str) -> Result<(Vec<T>, usize), LtsError>
where
    T: DeserializeOwned,
{
    let filename = filepath.to_string_lossy().to_string();
    let f = File::open(filepath).map_err(|e| LtsError::IoError(filename.clone(), e))?;
    let r: Box<dyn Read> = if is_gzip(filepath) {
        Box::new(BufReader::new(GzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    };
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(r);
    let iter = tqdm!(reader.deserialize::<T>(), desc = desc.to_string());
    let mut rows = vec![];
    let mut n_skipped = 0;
    for row in iter {
        match row {
            Ok(row) => rows.push(row),
            Err(e) if e.is_io_error() => return Err(LtsError::CsvReadError(filename, e)),
            Err(e) => {
                log::warn!("skipping unreadable row in {filename}: {e}");
                n_skipped += 1;
            }
        }
    }
    eprintln!();
    log::debug!(
        "read {} rows from {}, skipped {n_skipped}",
        rows.len(),
        filepath.display()
    );
    Ok((rows, n_skipped))
}
