use std::{fmt, net::Ipv4Addr};

use super::provider::{CloudPrefixes, Provider};

/// Classification attached to each result row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remark {
    /// Address falls inside a published range of this provider
    Cloud(Provider),
    /// Address resolved but belongs to no known cloud range
    NotCloud,
    /// Domain did not resolve
    Unresolved,
}

impl Remark {
    pub fn label(self) -> &'static str {
        match self {
            Remark::Cloud(provider) => provider.label(),
            Remark::NotCloud => "",
            Remark::Unresolved => "Unresolved",
        }
    }
}

impl fmt::Display for Remark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a resolved address against the provider prefix lists
///
/// Lists are scanned linearly, AWS before GCP, and the first containing
/// network wins. Overlaps between providers are not detected.
pub fn classify(address: Option<Ipv4Addr>, prefixes: &CloudPrefixes) -> Remark {
    let Some(address) = address else {
        return Remark::Unresolved;
    };

    prefixes
        .in_priority_order()
        .find_map(|list| {
            list.find(address).map(|network| {
                log::debug!("{} matched {} network {}", address, list.provider, network);
                Remark::Cloud(list.provider)
            })
        })
        .unwrap_or(Remark::NotCloud)
}
