use std::path::{Path, PathBuf};

use finestra_core::types::FinestraError;
use finestra_core::{Corpus, load_corpus};

use crate::Finestra;

fn io_err(path: &Path, e: &std::io::Error) -> FinestraError {
    FinestraError::io(path.display().to_string(), e.to_string())
}

fn is_csv(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

/// CSV files directly inside `dir`, sorted by file name.
pub(crate) fn csv_files(dir: &Path) -> Result<Vec<PathBuf>, FinestraError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, &e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| io_err(dir, &e))?.path();
        if is_csv(&path) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

impl Finestra {
    /// Load every `*.csv` file in `dir` into a corpus.
    ///
    /// Behavior:
    /// - The extension match is case-insensitive; subdirectories are not
    ///   visited.
    /// - Files are read in file-name order and keyed by their upper-cased stem,
    ///   so `aapl.csv` becomes `AAPL`. When two stems fold to the same
    ///   identifier the first file wins.
    ///
    /// # Errors
    /// - `Io` when the directory or a file cannot be read (including non-UTF-8
    ///   content).
    /// - `EmptyCorpus` when the directory holds no CSV file.
    /// - `MalformedSource` naming the file stem of a source without data rows.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "finestra::load_dir",
            skip(self, dir),
            fields(dir = %dir.as_ref().display()),
            err
        )
    )]
    pub fn load_dir(&self, dir: impl AsRef<Path>) -> Result<Corpus, FinestraError> {
        let dir = dir.as_ref();
        let files = csv_files(dir)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(files = files.len(), "csv sources found");

        let mut sources = Vec::with_capacity(files.len());
        for path in &files {
            let raw = std::fs::read_to_string(path).map_err(|e| io_err(path, &e))?;
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            sources.push((stem, raw));
        }
        load_corpus(sources)
    }

    /// Load already-read `(name, raw)` sources into a corpus.
    ///
    /// # Errors
    /// Same as [`finestra_core::load_corpus`].
    pub fn load_sources<I, N, R>(&self, sources: I) -> Result<Corpus, FinestraError>
    where
        I: IntoIterator<Item = (N, R)>,
        N: AsRef<str>,
        R: AsRef<str>,
    {
        load_corpus(sources)
    }
}
