pub mod resolver;

pub use resolver::{DnsResolver, SystemDnsResolver};
