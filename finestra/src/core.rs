use std::collections::BTreeMap;

use finestra_core::types::{FinestraConfig, FinestraError, InstrumentId, SummaryConfig};

/// Orchestrator that loads sources, aligns them and summarizes windows.
#[derive(Debug, Clone)]
pub struct Finestra {
    pub(crate) cfg: FinestraConfig,
}

/// Builder for constructing a `Finestra` orchestrator with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct FinestraBuilder {
    cfg: FinestraConfig,
}

impl FinestraBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Defaults: window sizes `[50, 200, 2000]`, overlap step `1`, population
    /// standard deviation, no display labels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    ///
    /// Later builder calls still apply on top of it.
    #[must_use]
    pub fn config(mut self, cfg: FinestraConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Register a display label for one instrument.
    ///
    /// The identifier is case-folded the same way source names are, so
    /// `display_name("apple", "AAPL")` labels the `APPLE` column.
    #[must_use]
    pub fn display_name(mut self, id: &str, label: impl Into<String>) -> Self {
        self.cfg
            .display_names
            .insert(InstrumentId::from_source_name(id).as_str().to_string(), label.into());
        self
    }

    /// Register several display labels at once; existing labels for the same
    /// identifiers are replaced.
    #[must_use]
    pub fn display_names<I, K, V>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (k, v) in labels {
            self = self.display_name(k.as_ref(), v);
        }
        self
    }

    /// Window sizes to summarize for every instrument.
    ///
    /// Sizes longer than a series are skipped for that series.
    #[must_use]
    pub fn window_sizes(mut self, sizes: &[usize]) -> Self {
        self.cfg.summary.window_sizes = sizes.to_vec();
        self
    }

    /// Step between window starts in the overlapping pass.
    #[must_use]
    pub const fn overlap_step(mut self, step: usize) -> Self {
        self.cfg.summary.overlap_step = step;
        self
    }

    /// Use the sample (`n - 1`) standard deviation instead of the population one.
    #[must_use]
    pub const fn sample_std(mut self, yes: bool) -> Self {
        self.cfg.summary.use_sample_std = yes;
        self
    }

    /// Build the `Finestra` orchestrator.
    ///
    /// Display-label keys coming from a deserialized configuration are
    /// case-folded here.
    ///
    /// # Errors
    /// Returns `InvalidArg` when no window size is configured, when a window
    /// size is zero, or when the overlap step is zero.
    pub fn build(mut self) -> Result<Finestra, FinestraError> {
        validate_summary(&self.cfg.summary)?;

        self.cfg.display_names = std::mem::take(&mut self.cfg.display_names)
            .into_iter()
            .map(|(k, v)| (InstrumentId::from_source_name(&k).as_str().to_string(), v))
            .collect::<BTreeMap<_, _>>();

        Ok(Finestra { cfg: self.cfg })
    }
}

fn validate_summary(cfg: &SummaryConfig) -> Result<(), FinestraError> {
    if cfg.window_sizes.is_empty() {
        return Err(FinestraError::InvalidArg(
            "no window sizes configured; set at least one via window_sizes(...)".to_string(),
        ));
    }
    if cfg.window_sizes.contains(&0) {
        return Err(FinestraError::InvalidArg(
            "window sizes must be positive".to_string(),
        ));
    }
    if cfg.overlap_step == 0 {
        return Err(FinestraError::InvalidArg(
            "overlap step must be positive".to_string(),
        ));
    }
    Ok(())
}

impl Finestra {
    /// Start building a new `Finestra` instance.
    ///
    /// ```
    /// use finestra::Finestra;
    ///
    /// let f = Finestra::builder()
    ///     .window_sizes(&[5, 20])
    ///     .overlap_step(2)
    ///     .display_name("apple", "AAPL")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(f.display_name(&"APPLE".into()), "AAPL");
    /// assert_eq!(f.display_name(&"MSFT".into()), "MSFT");
    /// ```
    #[must_use]
    pub fn builder() -> FinestraBuilder {
        FinestraBuilder::new()
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &FinestraConfig {
        &self.cfg
    }

    /// Display label for an instrument, falling back to its identifier.
    #[must_use]
    pub fn display_name(&self, id: &InstrumentId) -> String {
        self.cfg
            .display_names
            .get(id.as_str())
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}
