//! Randomized host requirement generation per difficulty tier.
//!
//! Generators return requirements unsorted; callers sort them largest first
//! before packing.

use super::sizing::usable_hosts;
use crate::models::Difficulty;
use rand::Rng;

/// Ceiling for identical medium-tier requirements (a /20 worth of hosts).
pub const MEDIUM_MAX_HOSTS: u32 = 4094;

/// Upper bound on a single requirement for a base block of `base_prefix`.
pub fn max_hosts_for_base(base_prefix: u8) -> u32 {
    if base_prefix >= 24 {
        200
    } else if base_prefix >= 16 {
        2000
    } else {
        8000
    }
}

fn uniform<R: Rng>(rng: &mut R, lo: u32, hi: u32) -> u32 {
    rng.gen_range(lo..=hi.max(lo))
}

/// A single requirement between 10 and `min(400, cap)` hosts.
pub fn gen_hosts_easy<R: Rng>(rng: &mut R, base_prefix: u8) -> Vec<u32> {
    let cap = max_hosts_for_base(base_prefix);
    vec![uniform(rng, 10, 400u32.min(cap))]
}

/// `count` identical requirements sized to share the base block evenly.
pub fn gen_hosts_medium<R: Rng>(rng: &mut R, base_prefix: u8, count: usize) -> Vec<u32> {
    // ceil(log2(count)) for count >= 1
    let split_bits = (usize::BITS - count.max(1).saturating_sub(1).leading_zeros()) as u8;
    let min_subnet_prefix = 30u8.min(base_prefix.saturating_add(split_bits));
    let subnet_prefix = min_subnet_prefix.max(20);

    let cap = usable_hosts(subnet_prefix).min(u64::from(MEDIUM_MAX_HOSTS)) as u32;
    let floor = 30u32.max(cap * 35 / 100);
    let ceil = floor.max(cap * 75 / 100);
    let hosts = uniform(rng, floor, ceil);

    log::trace!(
        "gen_hosts_medium(/{base_prefix}, {count}) subnet=/{subnet_prefix} range={floor}..={ceil} hosts={hosts}"
    );
    vec![hosts; count]
}

/// `count` independent requirements drawn from a small/medium/large mixture.
///
/// 45% fall in 2..=60, 40% in 61..=min(300, cap) and 15% in 301..=cap. When
/// the cap is below 301 the large tier draws from the medium range instead.
pub fn gen_hosts_hard<R: Rng>(rng: &mut R, base_prefix: u8, count: usize) -> Vec<u32> {
    let cap = max_hosts_for_base(base_prefix);
    let medium_hi = 300u32.min(cap);

    (0..count)
        .map(|_| {
            let roll: f64 = rng.gen();
            if roll < 0.45 {
                uniform(rng, 2, 60)
            } else if roll < 0.85 || cap < 301 {
                uniform(rng, 61, medium_hi)
            } else {
                uniform(rng, 301, cap)
            }
        })
        .collect()
}

/// Dispatch to the generator for `difficulty`, sorted largest first.
pub fn generate_requirements<R: Rng>(
    rng: &mut R,
    difficulty: Difficulty,
    base_prefix: u8,
    count: usize,
) -> Vec<u32> {
    let mut hosts = match difficulty {
        Difficulty::Easy => gen_hosts_easy(rng, base_prefix),
        Difficulty::Medium => gen_hosts_medium(rng, base_prefix, count),
        Difficulty::Hard => gen_hosts_hard(rng, base_prefix, count),
    };
    hosts.sort_unstable_by(|a, b| b.cmp(a));
    hosts
}
