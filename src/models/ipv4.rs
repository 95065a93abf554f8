//! IPv4 address arithmetic and CIDR block notation.
//!
//! Addresses are plain `u32` values. Text input is accepted in dotted-decimal
//! (`192.168.1.0`) or dotted-binary (`11000000.10101000.00000001.00000000`)
//! notation; output is always canonical dotted-decimal unless the binary
//! formatter is asked for explicitly.

use crate::error::FormatError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// A 32-bit IPv4 address.
pub type Address = u32;

lazy_static! {
    static ref DOTTED_DECIMAL: Regex =
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$").expect("Invalid Regex?");
    static ref DOTTED_BINARY: Regex =
        Regex::new(r"^([01]{8})\.([01]{8})\.([01]{8})\.([01]{8})$").expect("Invalid Regex?");
}

/// Parse a dotted-decimal or dotted-binary address.
///
/// # Examples
/// ```
/// use vlsm_quiz::models::parse_address;
/// assert_eq!(parse_address("192.168.1.0").unwrap(), 0xC0A80100);
/// assert_eq!(
///     parse_address("11111111.11111111.11111111.00000000").unwrap(),
///     0xFFFFFF00
/// );
/// ```
pub fn parse_address(text: &str) -> Result<Address, FormatError> {
    let text = text.trim();

    if let Some(caps) = DOTTED_DECIMAL.captures(text) {
        let mut addr: u32 = 0;
        for octet in caps.iter().skip(1).flatten() {
            let value: u32 = octet
                .as_str()
                .parse()
                .map_err(|_| FormatError::OctetOutOfRange(octet.as_str().to_string()))?;
            if value > 255 {
                return Err(FormatError::OctetOutOfRange(octet.as_str().to_string()));
            }
            addr = (addr << 8) | value;
        }
        return Ok(addr);
    }

    if let Some(caps) = DOTTED_BINARY.captures(text) {
        let mut addr: u32 = 0;
        for octet in caps.iter().skip(1).flatten() {
            // Eight binary digits always fit in a u8.
            let value = u8::from_str_radix(octet.as_str(), 2)
                .map_err(|_| FormatError::Address(text.to_string()))?;
            addr = (addr << 8) | u32::from(value);
        }
        return Ok(addr);
    }

    Err(FormatError::Address(text.to_string()))
}

/// Format an address as canonical dotted-decimal.
pub fn format_address(addr: Address) -> String {
    Ipv4Addr::from(addr).to_string()
}

/// Format an address as four zero-padded binary octets.
///
/// ```
/// use vlsm_quiz::models::format_address_binary;
/// assert_eq!(
///     format_address_binary(0xFFFFFFC0),
///     "11111111.11111111.11111111.11000000"
/// );
/// ```
pub fn format_address_binary(addr: Address) -> String {
    addr.to_be_bytes()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .collect::<Vec<String>>()
        .join(".")
}

/// Lenient parse: `None` instead of an error for anything unparsable.
pub fn normalize_address_text(text: &str) -> Option<Address> {
    parse_address(text).ok()
}

/// Convert a prefix length to a subnet mask.
///
/// # Examples
/// ```
/// use vlsm_quiz::models::mask_from_prefix;
/// assert_eq!(mask_from_prefix(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn mask_from_prefix(len: u8) -> Result<Address, FormatError> {
    if len > MAX_LENGTH {
        Err(FormatError::Prefix(u32::from(len)))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Network address for a given address and prefix length.
pub fn cut_addr(addr: Address, len: u8) -> Result<Address, FormatError> {
    Ok(addr & mask_from_prefix(len)?)
}

/// Serde adapter writing an [`Address`] as dotted-decimal text.
///
/// Use with `#[serde(with = "address_text")]`; reading also accepts dotted
/// binary.
pub mod address_text {
    use super::{format_address, parse_address, Address};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(addr: &Address, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_address(*addr))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Address, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_address(&s).map_err(de::Error::custom)
    }
}

/// An aligned IPv4 block in CIDR notation.
#[derive(Eq, Ord, PartialOrd, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Block {
    /// Network address of the block.
    pub addr: Address,
    /// Prefix length (0-32).
    pub prefix: u8,
}

impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Block, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Block::from_str(&s).map_err(de::Error::custom)
    }
}

impl Block {
    /// Create a block, rejecting prefixes above 32 and unaligned addresses.
    pub fn new(addr: Address, prefix: u8) -> Result<Block, FormatError> {
        if cut_addr(addr, prefix)? != addr {
            return Err(FormatError::Unaligned(format!(
                "{}/{}",
                format_address(addr),
                prefix
            )));
        }
        Ok(Block { addr, prefix })
    }

    /// Number of addresses in the block.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix)
    }

    /// Lowest (network) address.
    pub fn lo(&self) -> Address {
        self.addr
    }

    /// Highest (broadcast) address.
    pub fn hi(&self) -> Address {
        // size >= 1 and the block is aligned, so this never leaves u32.
        (u64::from(self.addr) + self.size() - 1) as u32
    }

    /// Whether `addr` falls inside the block.
    pub fn contains(&self, addr: Address) -> bool {
        self.lo() <= addr && addr <= self.hi()
    }
}

impl FromStr for Block {
    type Err = FormatError;

    fn from_str(addr_cidr: &str) -> Result<Self, Self::Err> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(FormatError::Cidr(addr_cidr.to_string()));
        }
        let addr = parse_address(parts[0])?;
        let prefix: u8 = parts[1]
            .trim()
            .parse()
            .map_err(|_| FormatError::Cidr(addr_cidr.to_string()))?;
        Block::new(addr, prefix)
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", format_address(self.addr), self.prefix)
    }
}
