//! VLSM packing of host requirements into an assigned block.
//!
//! Requirements are placed strictly in the order given. Each block starts at
//! the cursor rounded up to a multiple of its own size, so a smaller block
//! followed by a larger one can leave an unused gap. Largest-first input keeps
//! those gaps at zero.

use super::sizing::{block_size, hosts_to_prefix};
use crate::error::SubnetError;
use crate::models::{Block, SubnetInfo};

/// Round `cursor` up to the next multiple of `size` (a power of two).
pub fn align_up(cursor: u64, size: u64) -> u64 {
    cursor.div_ceil(size) * size
}

/// Prefix per requirement and the total number of addresses they need.
pub fn total_allocated_from_hosts(requirements: &[u32]) -> (Vec<u8>, u64) {
    let prefixes: Vec<u8> = requirements.iter().map(|h| hosts_to_prefix(*h)).collect();
    let total = prefixes.iter().map(|p| block_size(*p)).sum();
    (prefixes, total)
}

/// Pack `requirements` into `base`, in order, with alignment rounding.
///
/// Returns [`SubnetError::CapacityOverflow`] when the summed block sizes
/// exceed the base block, or when alignment gaps push an allocation past the
/// end of the base block.
pub fn pack(base: Block, requirements: &[u32]) -> Result<Vec<SubnetInfo>, SubnetError> {
    let base = Block::new(base.addr, base.prefix)?;
    let available = base.size();
    let (prefixes, total) = total_allocated_from_hosts(requirements);

    if total > available {
        log::debug!("pack({base}) needs {total} addresses, only {available} available");
        return Err(SubnetError::CapacityOverflow {
            required: total,
            available,
        });
    }

    let start = u64::from(base.lo());
    let end = start + available;
    let mut cursor = start;
    let mut allocations = Vec::with_capacity(prefixes.len());

    for (hosts, prefix) in requirements.iter().zip(prefixes) {
        let size = block_size(prefix);
        cursor = align_up(cursor, size);
        if cursor + size > end {
            log::debug!("pack({base}) alignment pushed /{prefix} for {hosts} hosts past the block");
            return Err(SubnetError::CapacityOverflow {
                required: cursor + size - start,
                available,
            });
        }

        // cursor + size <= end <= 2^32, so cursor fits in u32
        let subnet = SubnetInfo::new(Block::new(cursor as u32, prefix)?)?;
        log::trace!("pack({base}) {hosts} hosts -> {}", subnet.block());
        allocations.push(subnet);
        cursor += size;
    }

    Ok(allocations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_address;

    fn ip(s: &str) -> u32 {
        parse_address(s).unwrap()
    }

    #[test]
    fn test_align_up() {
        assert_eq!(align_up(0, 64), 0);
        assert_eq!(align_up(1, 64), 64);
        assert_eq!(align_up(64, 64), 64);
        assert_eq!(align_up(96, 64), 128);
        assert_eq!(align_up(u64::from(u32::MAX), 1 << 32), 1 << 32);
    }

    #[test]
    fn test_total_allocated_from_hosts() {
        let (prefixes, total) = total_allocated_from_hosts(&[50, 20, 2]);
        assert_eq!(prefixes, vec![26, 27, 30]);
        assert_eq!(total, 64 + 32 + 4);
        assert_eq!(total_allocated_from_hosts(&[]), (vec![], 0));
    }

    #[test]
    fn test_pack_192_168_1_0_24() {
        let base: Block = "192.168.1.0/24".parse().unwrap();
        let subnets = pack(base, &[50, 20]).unwrap();
        assert_eq!(subnets.len(), 2);

        assert_eq!(subnets[0].prefix, 26);
        assert_eq!(subnets[0].block_size, 64);
        assert_eq!(subnets[0].network, ip("192.168.1.0"));
        assert_eq!(subnets[0].broadcast, ip("192.168.1.63"));
        assert_eq!(subnets[0].gateway, ip("192.168.1.1"));
        assert_eq!(subnets[0].last, ip("192.168.1.62"));

        assert_eq!(subnets[1].prefix, 27);
        assert_eq!(subnets[1].block_size, 32);
        assert_eq!(subnets[1].network, ip("192.168.1.64"));
        assert_eq!(subnets[1].broadcast, ip("192.168.1.95"));
        assert_eq!(subnets[1].gateway, ip("192.168.1.65"));
        assert_eq!(subnets[1].last, ip("192.168.1.94"));
    }

    #[test]
    fn test_pack_exact_fit() {
        let base: Block = "10.1.0.0/24".parse().unwrap();
        let subnets = pack(base, &[126, 62, 30, 14, 6, 2, 2]).unwrap();
        let last = subnets.last().unwrap();
        assert_eq!(last.broadcast, base.hi());
        assert_eq!(
            subnets.iter().map(|s| s.block_size).sum::<u64>(),
            base.size()
        );
    }

    #[test]
    fn test_pack_overflow() {
        let base: Block = "192.168.1.0/24".parse().unwrap();
        assert_eq!(
            pack(base, &[200, 100]),
            Err(SubnetError::CapacityOverflow {
                required: 256 + 128,
                available: 256
            })
        );
    }

    #[test]
    fn test_pack_keeps_given_order_and_aligns() {
        // Smallest first: the /25 has to skip to .128 and no longer fits.
        let base: Block = "192.168.1.0/24".parse().unwrap();
        let result = pack(base, &[2, 100, 50]);
        assert_eq!(
            result,
            Err(SubnetError::CapacityOverflow {
                required: 256 + 64,
                available: 256
            })
        );

        let subnets = pack(base, &[2, 100]).unwrap();
        assert_eq!(subnets[0].network, ip("192.168.1.0"));
        assert_eq!(subnets[0].prefix, 30);
        assert_eq!(subnets[1].network, ip("192.168.1.128"));
        assert_eq!(subnets[1].prefix, 25);
    }

    #[test]
    fn test_pack_top_of_address_space() {
        let base: Block = "255.255.255.0/24".parse().unwrap();
        let subnets = pack(base, &[100, 50, 20]).unwrap();
        assert_eq!(subnets[0].network, ip("255.255.255.0"));
        assert_eq!(subnets[2].broadcast, ip("255.255.255.223"));
    }

    #[test]
    fn test_pack_rejects_unaligned_base() {
        let base = Block {
            addr: ip("10.0.0.5"),
            prefix: 24,
        };
        assert!(matches!(pack(base, &[10]), Err(SubnetError::Format(_))));
    }

    #[test]
    fn test_pack_empty() {
        let base: Block = "10.0.0.0/8".parse().unwrap();
        assert!(pack(base, &[]).unwrap().is_empty());
    }
}
