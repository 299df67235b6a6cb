//! Entry points for `#[test]` functions.
//!
//! These use a process-wide [`Checker`] backed by every current SPDX license
//! text. The store is built on first use and shared by all tests in the binary.

use once_cell::sync::Lazy;

use crate::checker::Checker;
use crate::config::DEFAULT_THRESHOLD;
use crate::detector::DirNames;
use crate::error::CheckError;
use crate::license::StoreScorer;

static DEFAULT_CHECKER: Lazy<Checker<StoreScorer>> =
    Lazy::new(|| Checker::new(StoreScorer::spdx()));

/// The checker used by the free functions of this crate.
pub fn default_checker() -> &'static Checker<StoreScorer> {
    &DEFAULT_CHECKER
}

/// Check the license file in `dir` against `want` with at least `percent` coverage.
pub fn assert_license_dir<D>(dir: &D, want: &str, percent: f64) -> Result<(), CheckError>
where
    D: DirNames + ?Sized,
{
    DEFAULT_CHECKER.assert_license_dir(dir, want, percent)
}

/// Check the license file in the current directory.
pub fn assert_license(want: &str, percent: f64) -> Result<(), CheckError> {
    DEFAULT_CHECKER.assert_license(want, percent)
}

/// Fail the running test unless the current directory's license is `want`
/// with at least 90% coverage.
///
/// ```no_run
/// #[test]
/// fn license() {
///     license_assert::test("MIT");
/// }
/// ```
#[track_caller]
pub fn test(want: &str) {
    test_percent(want, DEFAULT_THRESHOLD);
}

/// Fail the running test unless the current directory's license is `want`
/// with at least `percent` coverage.
#[track_caller]
pub fn test_percent(want: &str, percent: f64) {
    if let Err(err) = assert_license(want, percent) {
        panic!("{}", err);
    }
}
