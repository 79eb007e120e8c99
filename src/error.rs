use thiserror::Error;

use std::path::PathBuf;

use hickory_resolver::ResolveError;
use rust_xlsxwriter::XlsxError;

use crate::cloud::Provider;

#[derive(Debug, Error)]
pub enum CloudIpError {
    #[error("this tool expects a domain list file, but the '-f' flag is missing")]
    MissingInputFile,

    #[error("this tool expects either the '-o' or the '-p' flag, but both are missing")]
    MissingOutputMode,

    #[error("output file extension must be .xlsx or .txt: {path}")]
    UnsupportedOutputExtension { path: PathBuf },

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to read domain list {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to initialize DNS resolver: {source}")]
    DnsResolverInit {
        #[source]
        source: ResolveError,
    },

    #[error("failed to resolve domain {domain}: {source}")]
    DnsLookup {
        domain: String,
        #[source]
        source: ResolveError,
    },

    #[error("domain {domain} has no IPv4 address")]
    DnsNoIpv4 { domain: String },

    #[error("failed to build HTTP client: {source}")]
    HttpClientInit {
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to fetch {provider} ranges from {url}: {source}")]
    HttpFetch {
        provider: Provider,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} ranges endpoint {url} answered with HTTP {status}")]
    HttpStatus {
        provider: Provider,
        url: String,
        status: u16,
    },

    #[error("malformed {provider} ranges document: {source}")]
    FeedParse {
        provider: Provider,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write tab-separated output: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write spreadsheet output: {0}")]
    Xlsx(#[from] XlsxError),
}

impl CloudIpError {
    /// Misuse of the command line or config file, reported before any work starts
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingInputFile
                | Self::MissingOutputMode
                | Self::UnsupportedOutputExtension { .. }
                | Self::ConfigRead { .. }
                | Self::ConfigParse { .. }
        )
    }
}
