use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::StringRecord;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use super::model::{Paper, PaperSet};

// ---------------------------------------------------------------------------
// Load outcome & errors
// ---------------------------------------------------------------------------

/// How the dataset was obtained.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The full source table was present; a fresh subsample was drawn from it
    /// and persisted for future runs.
    FullSampled(PaperSet),
    /// The source table was absent; the previously persisted subsample was
    /// loaded instead.
    Fallback(PaperSet),
}

impl LoadOutcome {
    pub fn into_dataset(self) -> PaperSet {
        match self {
            LoadOutcome::FullSampled(set) | LoadOutcome::Fallback(set) => set,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, LoadOutcome::Fallback(_))
    }
}

/// Fatal loading failure: neither input file exists.
///
/// The field is `source_path` rather than `source`: thiserror reserves the
/// name `source` for the error-cause chain.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset unavailable: neither {source_path} nor {subsample} exists")]
    Unavailable {
        source_path: PathBuf,
        subsample: PathBuf,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Obtain the working dataset.
///
/// If `source` exists, read it, draw a uniform random subsample of
/// `sample_size` rows with the given seed (all rows when the table is
/// smaller) and overwrite `subsample` with it, preserving the full input
/// schema. If `source` is absent, fall back to reading `subsample`.
///
/// Sampling is deterministic: the same seed over the same input always
/// selects the same rows, written in ascending source order, so the
/// persisted file is byte-identical across runs.
pub fn load_or_sample(
    source: &Path,
    subsample: &Path,
    sample_size: usize,
    seed: u64,
) -> Result<LoadOutcome> {
    if source.exists() {
        let (headers, records) = read_table(source)?;
        let sampled = draw_subsample(records, sample_size, seed);
        write_table(subsample, &headers, &sampled)
            .with_context(|| format!("writing subsample to {}", subsample.display()))?;
        log::info!(
            "Full dataset loaded from {}; {} rows sampled into {}",
            source.display(),
            sampled.len(),
            subsample.display()
        );

        let set = parse_papers(&headers, &sampled)?;
        log_overview(&set);
        Ok(LoadOutcome::FullSampled(set))
    } else if subsample.exists() {
        let (headers, records) = read_table(subsample)?;
        log::info!(
            "Source file {} not found; loaded persisted subsample {} ({} rows)",
            source.display(),
            subsample.display(),
            records.len()
        );

        let set = parse_papers(&headers, &records)?;
        log_overview(&set);
        Ok(LoadOutcome::Fallback(set))
    } else {
        Err(DatasetError::Unavailable {
            source_path: source.to_path_buf(),
            subsample: subsample.to_path_buf(),
        }
        .into())
    }
}

// ---------------------------------------------------------------------------
// CSV plumbing
// ---------------------------------------------------------------------------

/// Read a CSV table into raw records, keeping every column so the subsample
/// can be persisted with the same schema as the input.
fn read_table(path: &Path) -> Result<(StringRecord, Vec<StringRecord>)> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("reading CSV headers from {}", path.display()))?
        .clone();

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no} in {}", path.display()))?;
        records.push(record);
    }
    Ok((headers, records))
}

fn write_table(path: &Path, headers: &StringRecord, records: &[StringRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(headers)?;
    for record in records {
        writer.write_record(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Uniform random subsample of exactly `sample_size` rows (or all rows when
/// the table is smaller), seeded for reproducibility. Selected indices are
/// sorted ascending so the output order is stable.
fn draw_subsample(records: Vec<StringRecord>, sample_size: usize, seed: u64) -> Vec<StringRecord> {
    let amount = sample_size.min(records.len());
    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices = rand::seq::index::sample(&mut rng, records.len(), amount).into_vec();
    indices.sort_unstable();

    let mut records: Vec<Option<StringRecord>> = records.into_iter().map(Some).collect();
    indices
        .into_iter()
        .map(|i| records[i].take().expect("indices are distinct"))
        .collect()
}

/// Deserialize raw records into [`Paper`]s. Columns beyond the four the
/// pipeline uses are ignored; the CSV must at least carry `title` and
/// `publish_time` headers.
fn parse_papers(headers: &StringRecord, records: &[StringRecord]) -> Result<PaperSet> {
    for required in ["title", "publish_time"] {
        if !headers.iter().any(|h| h == required) {
            anyhow::bail!("CSV missing '{required}' column");
        }
    }

    let mut papers = Vec::with_capacity(records.len());
    for (row_no, record) in records.iter().enumerate() {
        let paper: Paper = record
            .deserialize(Some(headers))
            .with_context(|| format!("CSV row {row_no}"))?;
        papers.push(paper);
    }
    Ok(PaperSet::new(papers))
}

/// Quick shape / missing-value overview, logged at debug level.
fn log_overview(set: &PaperSet) {
    let missing = |f: fn(&Paper) -> bool| set.papers.iter().filter(|p| f(p)).count();
    log::debug!(
        "{} rows; missing: title={} publish_time={} journal={} abstract={}",
        set.len(),
        missing(|p| p.title.is_none()),
        missing(|p| p.publish_time.is_none()),
        missing(|p| p.journal.is_none()),
        missing(|p| p.abstract_text.is_none()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "cord_uid,title,publish_time,journal,abstract\n";

    fn write_source(dir: &Path, rows: usize) -> PathBuf {
        let path = dir.join("metadata.csv");
        let mut body = String::from(HEADER);
        for i in 0..rows {
            body.push_str(&format!(
                "uid{i},Title {i},20{:02}-01-0{},Journal {},word one two\n",
                10 + i % 13,
                1 + i % 9,
                i % 4
            ));
        }
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn samples_exactly_requested_rows_and_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), 200);
        let subsample = dir.path().join("metadata_sample.csv");

        let outcome = load_or_sample(&source, &subsample, 50, 42).unwrap();
        assert!(!outcome.is_fallback());
        assert_eq!(outcome.into_dataset().len(), 50);

        let first = std::fs::read(&subsample).unwrap();
        load_or_sample(&source, &subsample, 50, 42).unwrap();
        let second = std::fs::read(&subsample).unwrap();
        assert_eq!(first, second, "same seed must produce identical bytes");
    }

    #[test]
    fn different_seed_changes_selection() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), 200);
        let subsample = dir.path().join("metadata_sample.csv");

        load_or_sample(&source, &subsample, 50, 42).unwrap();
        let a = std::fs::read(&subsample).unwrap();
        load_or_sample(&source, &subsample, 50, 7).unwrap();
        let b = std::fs::read(&subsample).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn small_table_is_taken_whole() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), 8);
        let subsample = dir.path().join("metadata_sample.csv");

        let outcome = load_or_sample(&source, &subsample, 50, 42).unwrap();
        assert_eq!(outcome.into_dataset().len(), 8);
    }

    #[test]
    fn falls_back_to_persisted_subsample() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), 30);
        let subsample = dir.path().join("metadata_sample.csv");

        load_or_sample(&source, &subsample, 10, 42).unwrap();
        std::fs::remove_file(&source).unwrap();

        let outcome = load_or_sample(&source, &subsample, 10, 42).unwrap();
        assert!(outcome.is_fallback());
        assert_eq!(outcome.into_dataset().len(), 10);
    }

    #[test]
    fn errors_when_no_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_or_sample(
            &dir.path().join("metadata.csv"),
            &dir.path().join("metadata_sample.csv"),
            10,
            42,
        )
        .unwrap_err();
        assert!(err.downcast_ref::<DatasetError>().is_some());
    }

    #[test]
    fn unavailable_error_reports_both_paths_without_a_cause() {
        use std::error::Error as _;

        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("metadata.csv");
        let subsample = dir.path().join("metadata_sample.csv");
        let err = load_or_sample(&source, &subsample, 10, 42).unwrap_err();

        let dataset_err = err.downcast_ref::<DatasetError>().unwrap();
        let message = dataset_err.to_string();
        assert!(message.contains(&source.display().to_string()));
        assert!(message.contains(&subsample.display().to_string()));
        // The missing paths are payload, not a wrapped error.
        assert!(dataset_err.source().is_none());
    }

    #[test]
    fn extra_columns_survive_in_subsample() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_source(dir.path(), 20);
        let subsample = dir.path().join("metadata_sample.csv");

        load_or_sample(&source, &subsample, 5, 42).unwrap();
        let written = std::fs::read_to_string(&subsample).unwrap();
        assert!(written.starts_with("cord_uid,"), "schema must be preserved");
    }

    #[test]
    fn empty_cells_deserialize_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metadata_sample.csv");
        std::fs::write(
            &path,
            format!("{HEADER}uid0,Some title,2020-01-01,,\n"),
        )
        .unwrap();

        let outcome =
            load_or_sample(&dir.path().join("missing.csv"), &path, 10, 42).unwrap();
        let set = outcome.into_dataset();
        assert_eq!(set.len(), 1);
        assert!(set.papers[0].journal.is_none());
        assert!(set.papers[0].abstract_text.is_none());
    }
}
