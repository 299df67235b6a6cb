/// License texts from the SPDX license list bundled with the `spdx` crate,
/// skipping identifiers SPDX has deprecated (their texts duplicate the
/// current `-only` / `-or-later` forms).
pub fn license_texts() -> impl Iterator<Item = (&'static str, &'static str)> {
    ::spdx::text::LICENSE_TEXTS
        .iter()
        .copied()
        .filter(|(id, _)| is_current(id))
}

/// Full text of a current SPDX license, looked up by exact identifier.
pub fn license_text(id: &str) -> Option<&'static str> {
    license_texts()
        .find(|(candidate, _)| *candidate == id)
        .map(|(_, text)| text)
}

/// `true` for identifiers on the SPDX license list that are not deprecated.
pub fn is_current(id: &str) -> bool {
    ::spdx::license_id(id).is_some_and(|license| !license.is_deprecated())
}
