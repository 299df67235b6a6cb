use std::collections::HashSet;

use once_cell::sync::Lazy;

/// File names recognized as license files, matched case-insensitively.
///
/// This is the list pkg.go.dev uses when it looks for a module's license, which
/// covers the names used across the crates.io and npm ecosystems as well.
pub const FILENAMES: &[&str] = &[
    "COPYING",
    "COPYING.md",
    "COPYING.markdown",
    "COPYING.txt",
    "LICENCE",
    "LICENCE.md",
    "LICENCE.markdown",
    "LICENCE.txt",
    "LICENSE",
    "LICENSE.md",
    "LICENSE.markdown",
    "LICENSE.txt",
    "LICENSE-2.0.txt",
    "LICENCE-2.0.txt",
    "LICENSE-APACHE",
    "LICENCE-APACHE",
    "LICENSE-APACHE-2.0.txt",
    "LICENCE-APACHE-2.0.txt",
    "LICENSE-MIT",
    "LICENCE-MIT",
    "LICENSE.MIT",
    "LICENCE.MIT",
    "LICENSE.code",
    "LICENCE.code",
    "LICENSE.docs",
    "LICENCE.docs",
    "LICENSE.rst",
    "LICENCE.rst",
    "MIT-LICENSE",
    "MIT-LICENCE",
    "MIT-LICENSE.md",
    "MIT-LICENCE.md",
    "MIT-LICENSE.markdown",
    "MIT-LICENCE.markdown",
    "MIT-LICENSE.txt",
    "MIT-LICENCE.txt",
    "MIT_LICENSE",
    "MIT_LICENCE",
    "UNLICENSE",
    "UNLICENCE",
];

static LOOKUP: Lazy<HashSet<String>> =
    Lazy::new(|| FILENAMES.iter().map(|name| name.to_lowercase()).collect());

/// Returns `true` if `name` is one of [`FILENAMES`], ignoring case.
pub fn is_license_filename(name: &str) -> bool {
    LOOKUP.contains(&name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_name_is_recognized() {
        for name in FILENAMES {
            assert!(is_license_filename(name), "{name} should be recognized");
        }
    }

    #[test]
    fn test_lookup_has_one_entry_per_name() {
        assert_eq!(LOOKUP.len(), FILENAMES.len());
    }

    #[test]
    fn test_case_insensitive() {
        for name in ["license", "License.Md", "COPYING.TXT", "mit_licence", "UnLiCeNsE"] {
            assert!(is_license_filename(name));
            assert_eq!(
                is_license_filename(name),
                is_license_filename(&name.to_uppercase())
            );
            assert_eq!(
                is_license_filename(name),
                is_license_filename(&name.to_lowercase())
            );
        }
    }

    #[test]
    fn test_unlisted_names() {
        assert!(!is_license_filename("README.md"));
        assert!(!is_license_filename("main.go"));
        assert!(!is_license_filename(""));
        // No extension heuristics beyond the list itself
        assert!(!is_license_filename("LICENSE.html"));
        assert!(!is_license_filename("LICENSE-BSD"));
        assert!(!is_license_filename(" LICENSE"));
        assert!(!is_license_filename("docs/LICENSE"));
    }
}
