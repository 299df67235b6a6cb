/// A license file picked out of a directory listing.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseFile {
    pub filename: String,
    pub contents: Vec<u8>,
}

/// How much of a document a [`Scorer`](crate::license::Scorer) recognized as license text.
#[derive(Debug, Clone, PartialEq)]
pub struct Coverage {
    /// Share of the document covered by recognized license text, `0..=100`.
    pub percent: f64,
    /// Licenses found in the document, in the order the scorer reported them.
    pub matches: Vec<LicenseMatch>,
}

/// One license recognized inside a document.
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseMatch {
    /// License type, compared against the wanted type (e.g. `MIT`, `Apache-2.0`).
    pub id: String,
    /// Display name used in diagnostics.
    pub name: String,
    /// How closely the matched text agrees with the license template, `0..=100`.
    pub percent: f64,
}

impl LicenseMatch {
    /// A match whose display name is its identifier.
    pub fn new(id: impl Into<String>, percent: f64) -> Self {
        let id = id.into();
        LicenseMatch {
            name: id.clone(),
            id,
            percent,
        }
    }
}

impl std::fmt::Display for LicenseMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:3.1}%)", self.name, self.percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_display() {
        assert_eq!(LicenseMatch::new("MIT", 95.0).to_string(), "MIT(95.0%)");
        assert_eq!(
            LicenseMatch::new("Apache-2.0", 95.24).to_string(),
            "Apache-2.0(95.2%)"
        );
        assert_eq!(LicenseMatch::new("ISC", 5.0).to_string(), "ISC(5.0%)");
    }

    #[test]
    fn test_display_uses_name() {
        let m = LicenseMatch {
            id: "BSD-3-Clause".to_string(),
            name: "BSD 3-Clause".to_string(),
            percent: 100.0,
        };
        assert_eq!(m.to_string(), "BSD 3-Clause(100.0%)");
    }
}
