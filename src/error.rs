//! Error types for the subnetting engine.

use thiserror::Error;

/// Malformed address or prefix text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Text matched neither dotted-decimal nor dotted-binary notation.
    #[error("'{0}' is not a dotted-decimal or dotted-binary IPv4 address")]
    Address(String),

    /// A dotted-decimal octet was above 255.
    #[error("'{0}' is not a valid octet")]
    OctetOutOfRange(String),

    /// Prefix length outside 0..=32.
    #[error("/{0} is not a valid prefix length")]
    Prefix(u32),

    /// CIDR text that is not `a.b.c.d/n`.
    #[error("'{0}' is not in a.b.c.d/n notation")]
    Cidr(String),

    /// Address has host bits set for its prefix.
    #[error("{0} is not aligned to its prefix")]
    Unaligned(String),
}

/// Errors raised while building or packing a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    /// Bad address or prefix text.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Requested blocks do not fit in the assigned block.
    #[error("requirements need {required} addresses but only {available} are available")]
    CapacityOverflow {
        /// Sum of the requested block sizes.
        required: u64,
        /// Size of the assigned base block.
        available: u64,
    },

    /// Every regeneration attempt overflowed the base block.
    #[error("no fitting requirement set after {attempts} attempts")]
    GenerationExhausted {
        /// Number of attempts made.
        attempts: usize,
    },

    /// No reserved pool is large enough to hold a block of this prefix.
    #[error("no reserved pool can hold a /{0} block")]
    NoPoolForPrefix(u8),
}
