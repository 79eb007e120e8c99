use std::net::Ipv4Addr;

use crate::cloud::Remark;

/// Column titles shared by every sink
pub const HEADER: [&str; 3] = ["Domain", "IP", "Remark"];

/// Address cell written for domains that did not resolve
pub const ADDRESS_PLACEHOLDER: &str = " ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub domain: String,
    pub address: Option<Ipv4Addr>,
    pub remark: Remark,
}

impl ResultRow {
    pub fn address_cell(&self) -> String {
        self.address
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| ADDRESS_PLACEHOLDER.to_string())
    }

    /// Domain, address and remark cells in column order
    pub fn cells(&self) -> [String; 3] {
        [
            self.domain.clone(),
            self.address_cell(),
            self.remark.label().to_string(),
        ]
    }
}
