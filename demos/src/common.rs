use std::path::PathBuf;

use finestra::{Finestra, FinestraError};
use finestra_mock::MockSources;
use tempfile::TempDir;

/// Default input directory when neither an argument nor `FINESTRA_DEMO_DATA`
/// is given.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Resolved input directory; owns the temporary fixture directory in mock mode.
pub struct DataDir {
    pub path: PathBuf,
    _guard: Option<TempDir>,
}

/// Positional demo arguments: `[input_dir] [overlap_step] [window_sizes]`.
///
/// Window sizes are a comma-separated list such as `50,200,2000`.
#[derive(Debug, Clone, Default)]
pub struct DemoArgs {
    pub input: Option<String>,
    pub overlap_step: Option<usize>,
    pub window_sizes: Option<Vec<usize>>,
}

impl DemoArgs {
    /// Parse the process arguments.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the step or a window size is not an integer.
    pub fn from_env() -> Result<Self, FinestraError> {
        Self::parse(std::env::args().skip(1))
    }

    /// Parse positional arguments.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the step or a window size is not an integer.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, FinestraError> {
        let mut it = args.into_iter();
        let input = it.next();
        let overlap_step = it
            .next()
            .map(|s| {
                s.trim()
                    .parse::<usize>()
                    .map_err(|_| FinestraError::InvalidArg(format!("bad overlap step '{s}'")))
            })
            .transpose()?;
        let window_sizes = it
            .next()
            .map(|s| {
                s.split(',')
                    .filter(|p| !p.trim().is_empty())
                    .map(|p| {
                        p.trim().parse::<usize>().map_err(|_| {
                            FinestraError::InvalidArg(format!("bad window size '{p}'"))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;
        Ok(Self {
            input,
            overlap_step,
            window_sizes,
        })
    }

    /// Input directory: `FINESTRA_DEMOS_USE_MOCK` writes fixtures to a temp
    /// directory, otherwise `FINESTRA_DEMO_DATA`, the first argument, then
    /// [`DEFAULT_DATA_DIR`].
    ///
    /// # Errors
    /// Returns `Io` when the mock fixtures cannot be written.
    pub fn data_dir(&self) -> Result<DataDir, FinestraError> {
        if std::env::var("FINESTRA_DEMOS_USE_MOCK").is_ok() {
            println!("--- (Using mock fixtures for CI) ---");
            let tmp = TempDir::new().map_err(|e| FinestraError::io("<tempdir>", e.to_string()))?;
            MockSources::new().write_dir(tmp.path())?;
            return Ok(DataDir {
                path: tmp.path().to_path_buf(),
                _guard: Some(tmp),
            });
        }
        let path = std::env::var("FINESTRA_DEMO_DATA")
            .ok()
            .or_else(|| self.input.clone())
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        Ok(DataDir {
            path: PathBuf::from(path),
            _guard: None,
        })
    }

    /// Orchestrator configured from the arguments, with the usual friendly
    /// labels for long-form company file names.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a zero step or window size.
    pub fn finestra(&self) -> Result<Finestra, FinestraError> {
        let mut b = Finestra::builder().display_names([
            ("apple", "AAPL"),
            ("microsoft", "MSFT"),
            ("alphabet", "GOOGL"),
            ("amazon", "AMZN"),
            ("tesla", "TSLA"),
        ]);
        if let Some(step) = self.overlap_step {
            b = b.overlap_step(step);
        }
        if let Some(sizes) = &self.window_sizes {
            b = b.window_sizes(sizes);
        }
        b.build()
    }
}

/// Install a compact tracing subscriber filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}

/// Four-decimal rendering with `NaN` for undefined values.
#[must_use]
pub fn r4(x: f64) -> String {
    if x.is_finite() {
        format!("{x:.4}")
    } else {
        "NaN".to_string()
    }
}
