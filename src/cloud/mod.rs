pub mod classify;
pub mod provider;
pub mod source;

// Re-export main types and functions
pub use classify::{Remark, classify};
pub use provider::{CloudPrefixes, PrefixList, Provider};
pub use source::{HttpPrefixSource, PrefixSource, parse_aws_ranges, parse_gcp_ranges};
