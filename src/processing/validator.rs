//! Checking user answers against an allocated subnet.
//!
//! Every address field accepts dotted-decimal or dotted-binary text and is
//! compared numerically. Unparsable text is simply wrong; nothing here fails.

use crate::models::{normalize_address_text, Address, FieldSet, SubnetInfo};

/// Per-field outcome of checking one subnet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldReport {
    pub mask: bool,
    pub cidr: bool,
    pub network: bool,
    pub broadcast: bool,
    pub gateway: bool,
    pub last: bool,
}

impl FieldReport {
    /// True only when every field matched.
    pub fn all_correct(&self) -> bool {
        self.mask && self.cidr && self.network && self.broadcast && self.gateway && self.last
    }

    /// Names of the fields that did not match, in form order.
    pub fn wrong_fields(&self) -> Vec<&'static str> {
        [
            ("mask", self.mask),
            ("cidr", self.cidr),
            ("network", self.network),
            ("broadcast", self.broadcast),
            ("gateway", self.gateway),
            ("last", self.last),
        ]
        .into_iter()
        .filter(|(_, ok)| !ok)
        .map(|(name, _)| name)
        .collect()
    }
}

/// Parse a prefix answer such as `/26`, `26` or ` / 26 `.
pub fn normalize_cidr_text(text: &str) -> Option<u8> {
    let text = text.trim();
    let text = text.strip_prefix('/').unwrap_or(text).trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn address_matches(submitted: &str, expected: Address) -> bool {
    normalize_address_text(submitted) == Some(expected)
}

/// Check every field of `submitted` against `expected`.
pub fn validate_fields(expected: &SubnetInfo, submitted: &FieldSet) -> FieldReport {
    FieldReport {
        mask: address_matches(&submitted.mask, expected.mask),
        cidr: normalize_cidr_text(&submitted.cidr) == Some(expected.prefix),
        network: address_matches(&submitted.network, expected.network),
        broadcast: address_matches(&submitted.broadcast, expected.broadcast),
        gateway: address_matches(&submitted.gateway, expected.gateway),
        last: address_matches(&submitted.last, expected.last),
    }
}

/// Pass/fail for one subnet: all six fields must match.
pub fn check_subnet(expected: &SubnetInfo, submitted: &FieldSet) -> bool {
    validate_fields(expected, submitted).all_correct()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{format_address, format_address_binary};
    use proptest::prelude::*;

    fn expected() -> SubnetInfo {
        SubnetInfo::new("192.168.1.64/27".parse().unwrap()).unwrap()
    }

    fn correct_answer() -> FieldSet {
        FieldSet {
            mask: "255.255.255.224".to_string(),
            cidr: "/27".to_string(),
            network: "192.168.1.64".to_string(),
            broadcast: "192.168.1.95".to_string(),
            gateway: "192.168.1.65".to_string(),
            last: "192.168.1.94".to_string(),
        }
    }

    fn binary_answer(s: &SubnetInfo) -> FieldSet {
        FieldSet {
            mask: format_address_binary(s.mask),
            cidr: s.prefix.to_string(),
            network: format_address_binary(s.network),
            broadcast: format_address_binary(s.broadcast),
            gateway: format_address_binary(s.gateway),
            last: format_address_binary(s.last),
        }
    }

    #[test]
    fn test_normalize_cidr_text() {
        assert_eq!(normalize_cidr_text("/27"), Some(27));
        assert_eq!(normalize_cidr_text("27"), Some(27));
        assert_eq!(normalize_cidr_text("  / 27 "), Some(27));
        assert_eq!(normalize_cidr_text("027"), Some(27));
        assert_eq!(normalize_cidr_text(""), None);
        assert_eq!(normalize_cidr_text("/"), None);
        assert_eq!(normalize_cidr_text("//27"), None);
        assert_eq!(normalize_cidr_text("+27"), None);
        assert_eq!(normalize_cidr_text("27a"), None);
        assert_eq!(normalize_cidr_text("99999"), None);
    }

    #[test]
    fn test_check_subnet_correct() {
        assert!(check_subnet(&expected(), &correct_answer()));
    }

    #[test]
    fn test_check_subnet_cidr_without_slash() {
        let mut answer = correct_answer();
        answer.cidr = "27".to_string();
        assert!(check_subnet(&expected(), &answer));
    }

    #[test]
    fn test_check_subnet_binary_mask() {
        let mut answer = correct_answer();
        answer.mask = "11111111.11111111.11111111.11100000".to_string();
        assert!(check_subnet(&expected(), &answer));
    }

    #[test]
    fn test_check_subnet_wrong_field() {
        let mut answer = correct_answer();
        answer.last = "192.168.1.95".to_string();
        let report = validate_fields(&expected(), &answer);
        assert!(!report.all_correct());
        assert_eq!(report.wrong_fields(), vec!["last"]);
        assert!(!check_subnet(&expected(), &answer));
    }

    #[test]
    fn test_check_subnet_garbage_is_incorrect() {
        let answer = FieldSet {
            mask: "banana".to_string(),
            cidr: "/x".to_string(),
            network: "300.1.1.1".to_string(),
            broadcast: "".to_string(),
            gateway: "1.2.3".to_string(),
            last: "\u{0}".to_string(),
        };
        let report = validate_fields(&expected(), &answer);
        assert_eq!(report, FieldReport::default());
        assert_eq!(report.wrong_fields().len(), 6);
        assert!(!check_subnet(&expected(), &FieldSet::default()));
    }

    #[test]
    fn test_check_subnet_whitespace_tolerated() {
        let mut answer = correct_answer();
        answer.network = "  192.168.1.64\t".to_string();
        assert!(check_subnet(&expected(), &answer));
    }

    proptest! {
        #[test]
        fn prop_binary_and_decimal_agree(index in 0u32..(1 << 24), prefix in 8u8..=30) {
            let size = 1u32 << (32 - prefix);
            let network = index.wrapping_mul(size);
            let s = SubnetInfo::new(crate::models::Block { addr: network, prefix }).unwrap();
            let decimal = FieldSet {
                mask: format_address(s.mask),
                cidr: format!("/{}", s.prefix),
                network: format_address(s.network),
                broadcast: format_address(s.broadcast),
                gateway: format_address(s.gateway),
                last: format_address(s.last),
            };
            prop_assert!(check_subnet(&s, &decimal));
            prop_assert!(check_subnet(&s, &binary_answer(&s)));
        }
    }
}
