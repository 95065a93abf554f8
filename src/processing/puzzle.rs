//! Puzzle generation: base block, requirements and the expected allocation.

use super::packer::pack;
use super::pool::pick_assigned_block;
use super::requirements::generate_requirements;
use crate::error::SubnetError;
use crate::models::{Block, Difficulty, Puzzle, SubnetInfo};
use rand::Rng;

/// Regeneration attempts before giving up on a puzzle.
pub const DEFAULT_MAX_ATTEMPTS: usize = 250;

/// Prefix of the assigned base block for a difficulty.
///
/// Medium favours /24 (60%) over /16 (30%) and /8 (10%); easy and hard pick
/// uniformly among the three.
pub fn pick_assigned_prefix<R: Rng>(rng: &mut R, difficulty: Difficulty) -> u8 {
    match difficulty {
        Difficulty::Medium => {
            let roll: f64 = rng.gen();
            if roll < 0.60 {
                24
            } else if roll < 0.90 {
                16
            } else {
                8
            }
        }
        Difficulty::Easy | Difficulty::Hard => [24, 16, 8][rng.gen_range(0..3)],
    }
}

/// Number of subnets a puzzle asks for.
pub fn pick_subnet_count<R: Rng>(rng: &mut R, difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 1,
        Difficulty::Medium | Difficulty::Hard => rng.gen_range(2..=5),
    }
}

/// Draw requirement sets until one packs into `base`.
///
/// Each draw is packed as given; only [`SubnetError::CapacityOverflow`]
/// triggers another draw. After `max_attempts` overflowing draws the result is
/// [`SubnetError::GenerationExhausted`].
pub fn fit_requirements<R, F>(
    rng: &mut R,
    base: Block,
    max_attempts: usize,
    mut generate: F,
) -> Result<(Vec<u32>, Vec<SubnetInfo>), SubnetError>
where
    R: Rng,
    F: FnMut(&mut R) -> Vec<u32>,
{
    for attempt in 1..=max_attempts {
        let requirements = generate(rng);
        match pack(base, &requirements) {
            Ok(allocations) => {
                log::debug!("fit_requirements({base}) {requirements:?} fit on attempt {attempt}");
                return Ok((requirements, allocations));
            }
            Err(SubnetError::CapacityOverflow {
                required,
                available,
            }) => {
                log::trace!(
                    "fit_requirements({base}) attempt {attempt}: {requirements:?} needs {required}/{available}"
                );
            }
            Err(e) => return Err(e),
        }
    }

    log::warn!("fit_requirements({base}) gave up after {max_attempts} attempts");
    Err(SubnetError::GenerationExhausted {
        attempts: max_attempts,
    })
}

/// Generate a puzzle with an explicit attempt cap.
pub fn generate_puzzle_with_attempts<R: Rng>(
    rng: &mut R,
    difficulty: Difficulty,
    max_attempts: usize,
) -> Result<Puzzle, SubnetError> {
    let assigned_prefix = pick_assigned_prefix(rng, difficulty);
    let base = pick_assigned_block(rng, assigned_prefix)?;
    let count = pick_subnet_count(rng, difficulty);

    let (requirements, allocations) = fit_requirements(rng, base, max_attempts, |rng| {
        generate_requirements(rng, difficulty, base.prefix, count)
    })?;

    log::info!(
        "New {difficulty} puzzle: {base} with {} subnet(s) {requirements:?}",
        requirements.len()
    );

    Ok(Puzzle {
        difficulty,
        base,
        requirements,
        allocations,
    })
}

/// Generate a puzzle for `difficulty` using the default attempt cap.
pub fn generate_puzzle<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Result<Puzzle, SubnetError> {
    generate_puzzle_with_attempts(rng, difficulty, DEFAULT_MAX_ATTEMPTS)
}
