// file: src/network/subnets.rs
// version: 1.0.0
// guid: 8b2e4f71-0a93-4c5d-b6e8-2f7a1d9c3e40

//! Private (RFC1918) subnet classification and routing-table filtering

use crate::error::WizardError;
use crate::Result;
use ipnet::{IpNet, Ipv4Net};
use std::net::{IpAddr, Ipv4Addr};
use tracing::{debug, trace};

/// RFC1918 ranges as (base address, prefix length)
const PRIVATE_RANGES: [(Ipv4Addr, u8); 3] = [
    (Ipv4Addr::new(10, 0, 0, 0), 8),
    (Ipv4Addr::new(172, 16, 0, 0), 12),
    (Ipv4Addr::new(192, 168, 0, 0), 16),
];

/// The fixed set of private IPv4 networks a tunnel can be routed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateNetworks {
    networks: Vec<Ipv4Net>,
}

impl PrivateNetworks {
    /// Build the RFC1918 network set
    pub fn rfc1918() -> Result<Self> {
        let networks = PRIVATE_RANGES
            .iter()
            .map(|(addr, prefix)| {
                Ipv4Net::new(*addr, *prefix).map_err(|e| {
                    WizardError::config(format!("Invalid CIDR notation: {}/{}: {}", addr, prefix, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { networks })
    }

    /// The networks in this set
    pub fn networks(&self) -> &[Ipv4Net] {
        &self.networks
    }

    /// Check whether a CIDR token lies inside one of the private ranges.
    ///
    /// The address part of the token is tested, so `10.1.2.3/24` is private
    /// even though it is not a network base. Tokens that do not parse as
    /// `address/prefix` are never private.
    pub fn is_private(&self, token: &str) -> bool {
        let net: IpNet = match token.parse() {
            Ok(net) => net,
            Err(_) => {
                trace!("Not a CIDR token: {}", token);
                return false;
            }
        };

        match net.addr() {
            IpAddr::V4(addr) => self.networks.iter().any(|range| range.contains(&addr)),
            IpAddr::V6(_) => false,
        }
    }
}

/// Extract the private subnets from `ip route` output, in routing-table order
pub fn parse_private_subnets(output: &str, private: &PrivateNetworks) -> Vec<String> {
    let subnets: Vec<String> = output
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .filter(|token| private.is_private(token))
        .map(str::to_string)
        .collect();

    debug!(
        "Found {} private subnet(s) in {} line(s) of routing output",
        subnets.len(),
        output.lines().count()
    );

    subnets
}
