//! `license-assert`: check from a test that a project ships the license it claims.
//!
//! # Flow
//! 1. List the directory and pick the first license-like name ([`filenames`], [`detector`]).
//! 2. Read the file from the same directory.
//! 3. Score its text against known license texts ([`license::Scorer`]).
//! 4. Require enough coverage and a match of the wanted type ([`checker::assert_coverage`]).
//! 5. In a test, turn any failure into a panic ([`test`], [`test_percent`]).
//!
//! ```no_run
//! #[test]
//! fn license() {
//!     license_assert::test("MIT");
//! }
//! ```

pub mod checker;
pub mod config;
pub mod detector;
pub mod error;
pub mod filenames;
pub mod license;
pub mod models;
pub mod testing;

pub use checker::{assert_coverage, Checker};
pub use config::{CheckConfig, CoverOptions, DEFAULT_THRESHOLD};
pub use detector::{read_license, read_license_dir, DirNames};
pub use error::CheckError;
pub use filenames::{is_license_filename, FILENAMES};
pub use license::{Scorer, StoreScorer};
pub use models::{Coverage, LicenseFile, LicenseMatch};
pub use testing::{assert_license, assert_license_dir, default_checker, test, test_percent};
