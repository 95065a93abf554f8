//! Allocated subnet data model.

use super::ipv4::{address_text, format_address, mask_from_prefix, Address, Block};
use crate::error::FormatError;
use serde::{Deserialize, Serialize};

/// Read-only view of an allocated block with its derived addresses.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetInfo {
    /// Prefix length of the subnet.
    pub prefix: u8,
    /// Subnet mask.
    #[serde(with = "address_text")]
    pub mask: Address,
    /// Network address (block start).
    #[serde(with = "address_text")]
    pub network: Address,
    /// Broadcast address (block end).
    #[serde(with = "address_text")]
    pub broadcast: Address,
    /// First usable address, handed out as the gateway.
    #[serde(with = "address_text")]
    pub gateway: Address,
    /// Last usable address.
    #[serde(with = "address_text")]
    pub last: Address,
    /// Number of addresses in the block.
    pub block_size: u64,
}

impl SubnetInfo {
    /// Derive the subnet record for an aligned block.
    ///
    /// Usable-range fields wrap for /31 and /32; those prefixes are never
    /// generated by the packer.
    pub fn new(block: Block) -> Result<SubnetInfo, FormatError> {
        let block = Block::new(block.addr, block.prefix)?;
        let size = block.size();
        Ok(SubnetInfo {
            prefix: block.prefix,
            mask: mask_from_prefix(block.prefix)?,
            network: block.lo(),
            broadcast: block.hi(),
            gateway: block.lo().wrapping_add(1),
            last: (u64::from(block.lo()) + size).wrapping_sub(2) as u32,
            block_size: size,
        })
    }

    /// The block this subnet occupies.
    pub fn block(&self) -> Block {
        Block {
            addr: self.network,
            prefix: self.prefix,
        }
    }

    /// Whether two subnets share any address.
    pub fn overlaps(&self, other: &SubnetInfo) -> bool {
        self.network <= other.broadcast && other.network <= self.broadcast
    }
}

impl std::fmt::Display for SubnetInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}/{} mask {} usable {}-{} broadcast {}",
            format_address(self.network),
            self.prefix,
            format_address(self.mask),
            format_address(self.gateway),
            format_address(self.last),
            format_address(self.broadcast)
        )
    }
}
