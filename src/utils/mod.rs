pub mod logging;

/// Trim a required form field.
pub fn normalize_text(value: &str) -> String {
    value.trim().to_string()
}

/// Trim an optional form field; blank values become `None`.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_string)
}

/// Extension of an uploaded file name, lowercased, without the dot.
pub fn file_extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}
