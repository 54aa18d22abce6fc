//! # Quote Store
//!
//! Reads quote records from a CSV file and picks one at random.
//!
//! The file carries a header row declaring at least [`REQUIRED_COLUMNS`] columns, followed
//! by one row per quote in the order `quote, attribution, context, emoji`. Fields follow
//! the usual CSV quoting rules, so a quoted field may contain commas.
//!
//! By default the file is looked up beside the running executable rather than in the
//! caller's working directory, so the program behaves the same wherever it is invoked.

use crate::error::{QuoteError, Result};
use crate::model::QuoteRecord;
use csv::ReaderBuilder;
use log::{debug, warn};
use rand::Rng;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const DEFAULT_FILENAME: &str = "inspiration.csv";
pub const REQUIRED_COLUMNS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteStore {
    path: PathBuf,
}

impl QuoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: impl AsRef<Path>, filename: &str) -> Self {
        Self::new(dir.as_ref().join(filename))
    }

    /// The default store: [`DEFAULT_FILENAME`] in the directory holding the executable.
    ///
    /// Symlinks to the executable are resolved, so a link placed on `PATH` still finds the
    /// file installed next to the real binary.
    pub fn beside_executable() -> Result<Self> {
        let exe = std::env::current_exe()?;
        let exe = fs::canonicalize(&exe).unwrap_or(exe);
        let dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(Self::in_dir(dir, DEFAULT_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string())
    }

    pub fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Reads every quote in the file.
    ///
    /// Rows with fewer than [`REQUIRED_COLUMNS`] fields are skipped with a warning; extra
    /// trailing fields are ignored.
    pub fn load(&self) -> Result<Vec<QuoteRecord>> {
        if !self.path.is_file() {
            return Err(QuoteError::MissingSourceFile {
                file: self.file_name(),
                dir: self.dir(),
            });
        }

        let file = File::open(&self.path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let found = reader.headers()?.len();
        if found < REQUIRED_COLUMNS {
            return Err(QuoteError::MalformedHeader {
                expected: REQUIRED_COLUMNS,
                found,
            });
        }

        let mut records = Vec::new();
        for row in reader.records() {
            let mut row = row?;
            if row.len() < REQUIRED_COLUMNS {
                let line = row.position().map_or(0, |pos| pos.line());
                warn!(
                    "Skipping line {} of {}: expected {} fields, found {}",
                    line,
                    self.path.display(),
                    REQUIRED_COLUMNS,
                    row.len()
                );
                continue;
            }
            row.truncate(REQUIRED_COLUMNS);
            records.push(row.deserialize::<QuoteRecord>(None)?);
        }

        debug!("Loaded {} quotes from {}", records.len(), self.path.display());

        if records.is_empty() {
            return Err(QuoteError::EmptyDataset);
        }
        Ok(records)
    }

    /// Picks one quote uniformly at random.
    pub fn pick(&self) -> Result<QuoteRecord> {
        self.pick_with(&mut rand::thread_rng())
    }

    /// Picks one quote uniformly at random using the given generator.
    pub fn pick_with<R: Rng>(&self, rng: &mut R) -> Result<QuoteRecord> {
        choose(self.load()?, rng)
    }
}

/// Takes one record out of `records`, every record being equally likely.
pub fn choose<R: Rng>(mut records: Vec<QuoteRecord>, rng: &mut R) -> Result<QuoteRecord> {
    if records.is_empty() {
        return Err(QuoteError::EmptyDataset);
    }
    let index = rng.gen_range(0..records.len());
    Ok(records.swap_remove(index))
}
