use super::LtsOutput;
use crate::model::lts::LtsError;
use csv::QuoteStyle;
use flate2::{write::GzEncoder, Compression};
use itertools::Itertools;
use kdam::tqdm;
use std::{fs::File, path::Path};

pub trait LtsWriter {
    /// writes the LTS ratings into CSV and TXT files in a shared directory.
    /// the four files are written together: if any of them already exists
    /// and `overwrite` is not set, none are written.
    fn write_lts(&self, output_directory: &Path, overwrite: bool) -> Result<(), LtsError>;
}

pub mod filenames {
    pub const WAYS_LTS: &str = "ways-lts.csv.gz";
    pub const EDGES_LTS: &str = "edges-lts.csv.gz";
    pub const LTS_ENUMERATED: &str = "edges-lts-enumerated.txt.gz";
    pub const WEIGHT_ENUMERATED: &str = "edges-weight-enumerated.txt.gz";
    pub const ALL: [&str; 4] = [WAYS_LTS, EDGES_LTS, LTS_ENUMERATED, WEIGHT_ENUMERATED];
}

type GzWriter = csv::Writer<GzEncoder<File>>;

impl LtsWriter for LtsOutput {
    fn write_lts(&self, output_directory: &Path, overwrite: bool) -> Result<(), LtsError> {
        if !output_directory.is_dir() {
            std::fs::create_dir_all(output_directory).map_err(|e| {
                LtsError::IoError(output_directory.to_string_lossy().to_string(), e)
            })?;
        }

        let existing = filenames::ALL
            .into_iter()
            .filter(|f| output_directory.join(f).exists())
            .collect_vec();
        if !overwrite && !existing.is_empty() {
            log::warn!(
                "{} already present in {} and overwrite is disabled, skipping all LTS outputs",
                existing.join(", "),
                output_directory.display()
            );
            return Ok(());
        }

        let mut way_writer = create_writer(
            output_directory,
            filenames::WAYS_LTS,
            true,
            QuoteStyle::Necessary,
        )?;
        let mut edge_writer = create_writer(
            output_directory,
            filenames::EDGES_LTS,
            true,
            QuoteStyle::Necessary,
        )?;
        let mut lts_writer = create_writer(
            output_directory,
            filenames::LTS_ENUMERATED,
            false,
            QuoteStyle::Never,
        )?;
        let mut weight_writer = create_writer(
            output_directory,
            filenames::WEIGHT_ENUMERATED,
            false,
            QuoteStyle::Never,
        )?;

        let w_iter = tqdm!(
            self.ways.iter(),
            total = self.ways.len(),
            desc = "write ways LTS dataset"
        );
        for row in w_iter {
            way_writer
                .serialize(row)
                .map_err(|e| LtsError::CsvWriteError(String::from(filenames::WAYS_LTS), e))?;
        }
        eprintln!();

        let e_iter = tqdm!(
            self.edges.iter(),
            total = self.edges.len(),
            desc = "write edges LTS dataset"
        );
        for row in e_iter {
            edge_writer
                .serialize(row)
                .map_err(|e| LtsError::CsvWriteError(String::from(filenames::EDGES_LTS), e))?;
            lts_writer.serialize(row.lts.rank()).map_err(|e| {
                LtsError::CsvWriteError(String::from(filenames::LTS_ENUMERATED), e)
            })?;
            weight_writer.serialize(row.weight).map_err(|e| {
                LtsError::CsvWriteError(String::from(filenames::WEIGHT_ENUMERATED), e)
            })?;
        }
        eprintln!();

        for (writer, filename) in [
            (way_writer, filenames::WAYS_LTS),
            (edge_writer, filenames::EDGES_LTS),
            (lts_writer, filenames::LTS_ENUMERATED),
            (weight_writer, filenames::WEIGHT_ENUMERATED),
        ] {
            finish_writer(writer, filename)?;
        }
        Ok(())
    }
}

/// builds a gzip writer for a .csv.gz or .txt.gz file, replacing any existing file.
fn create_writer(
    directory: &Path,
    filename: &str,
    has_headers: bool,
    quote_style: QuoteStyle,
) -> Result<GzWriter, LtsError> {
    let filepath = directory.join(filename);
    let file = File::create(&filepath)
        .map_err(|e| LtsError::IoError(filepath.to_string_lossy().to_string(), e))?;
    let buffer = GzEncoder::new(file, Compression::default());
    let writer = csv::WriterBuilder::new()
        .has_headers(has_headers)
        .quote_style(quote_style)
        .from_writer(buffer);
    Ok(writer)
}

/// flushes the csv buffer and writes the gzip trailer.
fn finish_writer(writer: GzWriter, filename: &str) -> Result<(), LtsError> {
    let encoder = writer
        .into_inner()
        .map_err(|e| LtsError::IoError(String::from(filename), e.into_error()))?;
    encoder
        .finish()
        .map_err(|e| LtsError::IoError(String::from(filename), e))?;
    Ok(())
}
