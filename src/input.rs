use std::{fs, path::Path};

use crate::error::CloudIpError;

/// Read the domain list: one entry per line, trimmed, blank lines dropped
///
/// Order and duplicates are preserved; entries are not validated as
/// domain names.
pub fn load_domains(path: &Path) -> Result<Vec<String>, CloudIpError> {
    let content = fs::read_to_string(path).map_err(|source| CloudIpError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
