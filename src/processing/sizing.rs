//! Host count to prefix sizing.
//!
//! A block of `S` addresses gives `S - 2` usable hosts, the network and
//! broadcast addresses being reserved.

use crate::models::MAX_LENGTH;

/// Smallest prefix whose block holds `hosts` usable addresses.
///
/// Computes `32 - ceil(log2(hosts + 2))` in integer arithmetic. Requirements
/// too large for any IPv4 block saturate at `/0`.
///
/// # Examples
/// ```
/// use vlsm_quiz::processing::hosts_to_prefix;
/// assert_eq!(hosts_to_prefix(1), 30);
/// assert_eq!(hosts_to_prefix(254), 24);
/// assert_eq!(hosts_to_prefix(255), 23);
/// ```
pub fn hosts_to_prefix(hosts: u32) -> u8 {
    let needed = u64::from(hosts) + 2;
    // ceil(log2(needed)), needed >= 2
    let bits = (u64::BITS - (needed - 1).leading_zeros()) as u8;
    MAX_LENGTH.saturating_sub(bits)
}

/// Number of addresses in a block of the given prefix.
pub fn block_size(prefix: u8) -> u64 {
    assert!(
        prefix <= MAX_LENGTH,
        "prefix[{prefix}] > 32 should never happen."
    );
    1u64 << (MAX_LENGTH - prefix)
}

/// Usable host addresses in a block of the given prefix.
pub fn usable_hosts(prefix: u8) -> u64 {
    block_size(prefix).saturating_sub(2)
}
