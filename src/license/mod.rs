//! License text scoring.
//!
//! - [`Scorer`]: the capability the checker depends on: bytes in, [`Coverage`] out.
//! - [`scorer`]: [`StoreScorer`], an `askalono` store scanned for known license texts.
//! - [`spdx`]: the built-in corpus of SPDX license texts.

use crate::config::CoverOptions;
use crate::models::Coverage;

pub mod scorer;
pub mod spdx;

pub use scorer::StoreScorer;

/// Measures how much of a document is recognizable license text.
pub trait Scorer: Send + Sync {
    /// Score `text`; `Ok(None)` means no license text was found at all.
    fn cover(&self, text: &[u8], options: &CoverOptions) -> anyhow::Result<Option<Coverage>>;
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn cover(&self, text: &[u8], options: &CoverOptions) -> anyhow::Result<Option<Coverage>> {
        (**self).cover(text, options)
    }
}
