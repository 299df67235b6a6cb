use std::io;

use crate::models::LicenseMatch;

/// Why a license assertion failed.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// No recognized license file, or the scorer found no license text in it.
    #[error("license not found")]
    NotFound,

    #[error("percentage {actual:.6} is less than wanted {wanted:.6}")]
    BelowThreshold { actual: f64, wanted: f64 },

    /// Coverage was high enough but none of the matches has the wanted type.
    #[error("license does not match. found: {}", join_matches(.found))]
    Mismatch { found: Vec<LicenseMatch> },

    /// The directory could not be listed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The license file could not be read; displays as the underlying error.
    #[error("{source}")]
    Read {
        filename: String,
        #[source]
        source: io::Error,
    },

    #[error("license scorer failed: {0}")]
    Scorer(#[source] anyhow::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

fn join_matches(found: &[LicenseMatch]) -> String {
    found
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
