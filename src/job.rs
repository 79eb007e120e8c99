use std::path::{Path, PathBuf};

use crate::error::CloudIpError;

pub const AWS_RANGES_URL: &str = "https://ip-ranges.amazonaws.com/ip-ranges.json";
pub const GCP_RANGES_URL: &str = "https://www.gstatic.com/ipranges/cloud.json";

/// Everything a single run needs, built once from the command line
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    /// Newline-delimited domain list
    pub input: PathBuf,
    pub sink: Sink,
    pub sources: SourceEndpoints,
}

/// Where the result rows go. Printing and file output may both be requested.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sink {
    pub print: bool,
    pub file: Option<OutputTarget>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputTarget {
    pub path: PathBuf,
    pub format: OutputFormat,
}

impl OutputTarget {
    pub fn from_path(path: &Path) -> Result<Self, CloudIpError> {
        Ok(Self {
            path: path.to_path_buf(),
            format: OutputFormat::from_path(path)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Spreadsheet workbook
    Xlsx,
    /// Tab-separated text
    Tsv,
}

impl OutputFormat {
    /// Pick the format from the path suffix, ignoring case
    pub fn from_path(path: &Path) -> Result<Self, CloudIpError> {
        let name = path.to_string_lossy().to_ascii_lowercase();
        if name.ends_with(".xlsx") {
            Ok(OutputFormat::Xlsx)
        } else if name.ends_with(".txt") {
            Ok(OutputFormat::Tsv)
        } else {
            Err(CloudIpError::UnsupportedOutputExtension {
                path: path.to_path_buf(),
            })
        }
    }
}

/// URLs of the published provider range documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEndpoints {
    pub aws: String,
    pub gcp: String,
}

impl Default for SourceEndpoints {
    fn default() -> Self {
        Self {
            aws: AWS_RANGES_URL.to_string(),
            gcp: GCP_RANGES_URL.to_string(),
        }
    }
}
