use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    error::CloudIpError,
    job::{AWS_RANGES_URL, GCP_RANGES_URL, SourceEndpoints},
};

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub sources: SourcesConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SourcesConfig {
    /// URL of the AWS ip-ranges document
    #[serde(default = "default_aws_url")]
    pub aws: String,
    /// URL of the GCP cloud ranges document
    #[serde(default = "default_gcp_url")]
    pub gcp: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            aws: default_aws_url(),
            gcp: default_gcp_url(),
        }
    }
}

fn default_aws_url() -> String {
    AWS_RANGES_URL.to_string()
}

fn default_gcp_url() -> String {
    GCP_RANGES_URL.to_string()
}

impl ConfigFile {
    /// Load configuration file
    pub fn load(path: &Path) -> Result<Self, CloudIpError> {
        let content = fs::read_to_string(path).map_err(|source| CloudIpError::ConfigRead {
            path: PathBuf::from(path),
            source,
        })?;
        toml::from_str(&content).map_err(|source| CloudIpError::ConfigParse {
            path: PathBuf::from(path),
            source,
        })
    }

    pub fn to_endpoints(&self) -> SourceEndpoints {
        SourceEndpoints {
            aws: self.sources.aws.clone(),
            gcp: self.sources.gcp.clone(),
        }
    }
}
