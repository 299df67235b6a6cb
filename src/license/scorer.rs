use std::io::Read;

use anyhow::{bail, Context, Result};
use askalono::{ScanMode, ScanStrategy, Store, TextData};

use super::Scorer;
use crate::config::CoverOptions;
use crate::models::{Coverage, LicenseMatch};

/// A [`Scorer`] backed by an `askalono` license store.
pub struct StoreScorer {
    store: Store,
}

impl StoreScorer {
    /// Wrap an existing store.
    pub fn new(store: Store) -> Self {
        StoreScorer { store }
    }

    /// Store holding every current SPDX license text.
    pub fn spdx() -> Self {
        let scorer = Self::from_licenses(super::spdx::license_texts());
        log::info!("built SPDX license store with {} licenses", scorer.len());
        scorer
    }

    /// Store built from `(id, text)` pairs; the id is reported as the license type.
    pub fn from_licenses<I, N, T>(licenses: I) -> Self
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: AsRef<str>,
    {
        let mut store = Store::new();
        for (id, text) in licenses {
            store.add_license(id.into(), TextData::new(text.as_ref()));
        }
        StoreScorer { store }
    }

    /// Load a store previously serialized with askalono's cache format.
    pub fn from_cache<R: Read>(reader: R) -> Result<Self> {
        let store = Store::from_cache(reader).context("failed to load license store cache")?;
        Ok(StoreScorer { store })
    }

    /// Number of licenses in the store.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl Scorer for StoreScorer {
    fn cover(&self, text: &[u8], options: &CoverOptions) -> Result<Option<Coverage>> {
        if self.store.is_empty() {
            bail!("license store is empty");
        }

        let text = String::from_utf8_lossy(text);
        if text.trim().is_empty() {
            return Ok(None);
        }

        let data = TextData::new(&text);
        let strategy = ScanStrategy::new(&self.store)
            .mode(ScanMode::Elimination)
            .confidence_threshold(options.confidence_threshold)
            .shallow_limit(options.shallow_limit)
            .optimize(options.optimize)
            .max_passes(options.max_passes);

        let result = strategy.scan(&data).context("license scan failed")?;

        let contained: Vec<LicenseMatch> = result
            .containing
            .iter()
            .map(|c| LicenseMatch::new(c.license.name, percent(c.score)))
            .collect();

        // Whole text identified as one license
        if let Some(license) = &result.license {
            let mut matches = vec![LicenseMatch::new(license.name, percent(result.score))];
            matches.extend(contained);
            let coverage = Coverage {
                percent: percent(result.score),
                matches,
            };
            log::debug!("identified {} at {:.1}%", license.name, coverage.percent);
            return Ok(Some(coverage));
        }

        // Several licenses, none covering the whole text
        if !contained.is_empty() {
            let coverage = Coverage {
                percent: covered_percent(
                    result.containing.iter().map(|c| c.line_range),
                    text.lines().count(),
                ),
                matches: contained,
            };
            log::debug!(
                "found {} contained licenses covering {:.1}%",
                coverage.matches.len(),
                coverage.percent
            );
            return Ok(Some(coverage));
        }

        let best = self.store.analyze(&data);
        if best.score < options.min_score {
            log::debug!("best match {} scored {:.3}, no coverage", best.name, best.score);
            return Ok(None);
        }

        log::debug!("best match {} at {:.1}%", best.name, percent(best.score));
        Ok(Some(Coverage {
            percent: percent(best.score),
            matches: vec![LicenseMatch::new(best.name, percent(best.score))],
        }))
    }
}

fn percent(score: f32) -> f64 {
    f64::from(score) * 100.0
}

/// Share of `total` lines covered by the half-open `ranges`, overlaps counted once.
fn covered_percent(ranges: impl Iterator<Item = (usize, usize)>, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    let mut ranges: Vec<(usize, usize)> = ranges
        .map(|(start, end)| (start.min(total), end.min(total)))
        .collect();
    ranges.sort_unstable();

    let mut covered = 0;
    let mut reached = 0;
    for (start, end) in ranges {
        let start = start.max(reached);
        if end > start {
            covered += end - start;
            reached = end;
        }
    }

    covered as f64 / total as f64 * 100.0
}
