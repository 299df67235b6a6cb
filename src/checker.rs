use std::path::Path;

use crate::config::CheckConfig;
use crate::detector::{read_license_dir, DirNames};
use crate::error::CheckError;
use crate::license::Scorer;
use crate::models::Coverage;

/// Finds a directory's license file, scores it and compares the result against
/// the wanted license type.
pub struct Checker<S> {
    scorer: S,
    config: CheckConfig,
}

impl<S: Scorer> Checker<S> {
    pub fn new(scorer: S) -> Self {
        Checker {
            scorer,
            config: CheckConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CheckConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Check the license file in `dir`: it must cover at least `percent` of its
    /// text with recognized license text, and one of the matches must be `want`.
    pub fn assert_license_dir<D>(&self, dir: &D, want: &str, percent: f64) -> Result<(), CheckError>
    where
        D: DirNames + ?Sized,
    {
        let file = read_license_dir(dir)?;
        let coverage = self
            .scorer
            .cover(&file.contents, &self.config.cover)
            .map_err(CheckError::Scorer)?;
        log::debug!(
            "{}: coverage {:?}",
            file.filename,
            coverage.as_ref().map(|c| c.percent)
        );
        assert_coverage(coverage.as_ref(), want, percent)
    }

    /// [`assert_license_dir`](Self::assert_license_dir) on the current directory.
    pub fn assert_license(&self, want: &str, percent: f64) -> Result<(), CheckError> {
        self.assert_license_dir(Path::new("."), want, percent)
    }

    /// Panic unless the current directory's license is `want` at the configured threshold.
    #[track_caller]
    pub fn test(&self, want: &str) {
        self.test_percent(want, self.config.threshold);
    }

    /// Panic unless the current directory's license is `want` at `percent` coverage.
    #[track_caller]
    pub fn test_percent(&self, want: &str, percent: f64) {
        if let Err(err) = self.assert_license(want, percent) {
            panic!("{}", err);
        }
    }
}

/// Decide a scored license against the wanted type and minimum coverage.
///
/// Matches are examined in the order the scorer reported them and the first one
/// of type `want` passes.
pub fn assert_coverage(
    coverage: Option<&Coverage>,
    want: &str,
    percent: f64,
) -> Result<(), CheckError> {
    let Some(coverage) = coverage else {
        return Err(CheckError::NotFound);
    };

    if coverage.percent < percent {
        return Err(CheckError::BelowThreshold {
            actual: coverage.percent,
            wanted: percent,
        });
    }

    if coverage.matches.iter().any(|m| m.id == want) {
        return Ok(());
    }

    Err(CheckError::Mismatch {
        found: coverage.matches.clone(),
    })
}
