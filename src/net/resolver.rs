use std::net::{IpAddr, Ipv4Addr};

use async_trait::async_trait;
use hickory_resolver::{Resolver, TokioResolver};

#[cfg(test)]
use mockall::automock;

use crate::error::CloudIpError;

/// DNS resolver abstraction for testing
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DnsResolver: Send + Sync + 'static {
    async fn resolve(&self, domain: &str) -> Result<Ipv4Addr, CloudIpError>;
}

/// Production DNS resolver using the system configuration
///
/// Reads resolv.conf and the hosts file the same way the platform resolver
/// does, so `localhost` and other hosts-file entries resolve locally.
pub struct SystemDnsResolver {
    resolver: TokioResolver,
}

impl SystemDnsResolver {
    pub fn new() -> Result<Self, CloudIpError> {
        let resolver = Resolver::builder_tokio()
            .map_err(|source| CloudIpError::DnsResolverInit { source })?
            .build();
        Ok(Self { resolver })
    }
}

#[async_trait]
impl DnsResolver for SystemDnsResolver {
    /// Forward-resolve `domain` and return its first IPv4 address
    ///
    /// # Returns
    /// * `Ok(Ipv4Addr)` - First A record in answer order
    /// * `Err(CloudIpError::DnsLookup)` - Lookup failed (NXDOMAIN, timeout, ...)
    /// * `Err(CloudIpError::DnsNoIpv4)` - Lookup succeeded with IPv6 answers only
    async fn resolve(&self, domain: &str) -> Result<Ipv4Addr, CloudIpError> {
        let response =
            self.resolver
                .lookup_ip(domain)
                .await
                .map_err(|source| CloudIpError::DnsLookup {
                    domain: domain.to_string(),
                    source,
                })?;

        response
            .iter()
            .find_map(|ip| match ip {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            })
            .ok_or_else(|| CloudIpError::DnsNoIpv4 {
                domain: domain.to_string(),
            })
    }
}
