use std::{fmt, net::Ipv4Addr};

use ipnet::Ipv4Net;

/// Cloud providers whose published ranges are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Aws,
    Gcp,
}

impl Provider {
    /// Label written into the remark column
    pub fn label(self) -> &'static str {
        match self {
            Provider::Aws => "Amazon Web Service",
            Provider::Gcp => "Google Cloud Platform",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered IPv4 networks published by one provider
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixList {
    pub provider: Provider,
    /// Revision marker of the feed the list was parsed from, when present
    pub sync_token: Option<String>,
    pub networks: Vec<Ipv4Net>,
}

impl PrefixList {
    pub fn new(provider: Provider, networks: Vec<Ipv4Net>) -> Self {
        Self {
            provider,
            sync_token: None,
            networks,
        }
    }

    /// First network containing `addr`, in publication order
    pub fn find(&self, addr: Ipv4Addr) -> Option<&Ipv4Net> {
        self.networks.iter().find(|net| net.contains(&addr))
    }

    /// Feed revision for log lines, `-` when the document carried none
    pub fn revision(&self) -> &str {
        self.sync_token.as_deref().unwrap_or("-")
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

/// Both provider lists for a single run
#[derive(Debug, Clone, PartialEq)]
pub struct CloudPrefixes {
    pub aws: PrefixList,
    pub gcp: PrefixList,
}

impl CloudPrefixes {
    pub fn new(aws: PrefixList, gcp: PrefixList) -> Self {
        Self { aws, gcp }
    }

    /// Lists in the order they are consulted: AWS, then GCP
    pub fn in_priority_order(&self) -> impl Iterator<Item = &PrefixList> {
        [&self.aws, &self.gcp].into_iter()
    }
}
