//! CSV-style allocation table for solved block layouts.

use super::terminal::{format_field, AddressStyle};
use crate::models::{Block, SubnetInfo};
use colored::Colorize;
use itertools::Itertools;

/// One printable row of an allocation, unused gaps included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationRow {
    /// 1-based subnet number, 0 for gap rows.
    pub j: usize,
    /// Hosts requested, `None` for gaps.
    pub hosts: Option<u32>,
    pub cidr: String,
    pub mask: String,
    pub network: String,
    pub first: String,
    pub last: String,
    pub broadcast: String,
    pub block_size: u64,
}

fn subnet_row(j: usize, hosts: u32, s: &SubnetInfo, style: AddressStyle) -> AllocationRow {
    AllocationRow {
        j,
        hosts: Some(hosts),
        cidr: format!("/{}", s.prefix),
        mask: style.format(s.mask),
        network: style.format(s.network),
        first: style.format(s.gateway),
        last: style.format(s.last),
        broadcast: style.format(s.broadcast),
        block_size: s.block_size,
    }
}

fn gap_row(from: u64, to: u64, style: AddressStyle) -> AllocationRow {
    AllocationRow {
        j: 0,
        hosts: None,
        cidr: "-gap-".to_string(),
        mask: String::new(),
        network: style.format(from as u32),
        first: String::new(),
        last: String::new(),
        broadcast: style.format((to - 1) as u32),
        block_size: to - from,
    }
}

/// Rows for every allocation plus any unused ranges between and after them.
pub fn allocation_rows(
    base: Block,
    requirements: &[u32],
    allocations: &[SubnetInfo],
    style: AddressStyle,
) -> Vec<AllocationRow> {
    let mut rows = Vec::new();
    let mut next_ip = u64::from(base.lo());

    for (i, (hosts, s)) in requirements.iter().zip(allocations).enumerate() {
        let network = u64::from(s.network);
        if next_ip < network {
            rows.push(gap_row(next_ip, network, style));
        }
        rows.push(subnet_row(i + 1, *hosts, s, style));
        next_ip = network + s.block_size;
    }

    let end = u64::from(base.lo()) + base.size();
    if next_ip < end {
        rows.push(gap_row(next_ip, end, style));
    }
    rows
}

/// Render rows as a header plus one CSV line per row.
pub fn render_allocation_table(rows: &[AllocationRow]) -> String {
    let width = if rows.iter().any(|r| r.network.len() > 15) { 37 } else { 17 };
    let header = [
        format_field("cnt", 5),
        format_field("hosts", 7),
        format_field("cidr", 7),
        format_field("mask", width),
        format_field("network", width),
        format_field("first", width),
        format_field("last", width),
        format_field("broadcast", width),
        format_field("size", 10),
    ]
    .into_iter()
    .join(",");

    std::iter::once(header.bold().to_string())
        .chain(rows.iter().map(|row| {
            [
                format_field(row.j, 5),
                format_field(row.hosts.map(|h| h.to_string()).unwrap_or_default(), 7),
                format_field(&row.cidr, 7),
                format_field(&row.mask, width),
                format_field(&row.network, width),
                format_field(&row.first, width),
                format_field(&row.last, width),
                format_field(&row.broadcast, width),
                format_field(row.block_size, 10),
            ]
            .into_iter()
            .join(",")
        }))
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::pack;

    #[test]
    fn test_allocation_rows_trailing_gap() {
        let base: Block = "192.168.1.0/24".parse().unwrap();
        let allocations = pack(base, &[50, 20]).unwrap();
        let rows = allocation_rows(base, &[50, 20], &allocations, AddressStyle::Decimal);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].j, 1);
        assert_eq!(rows[0].network, "192.168.1.0");
        assert_eq!(rows[1].cidr, "/27");
        assert_eq!(rows[1].first, "192.168.1.65");
        assert_eq!(rows[2].j, 0);
        assert_eq!(rows[2].cidr, "-gap-");
        assert_eq!(rows[2].network, "192.168.1.96");
        assert_eq!(rows[2].broadcast, "192.168.1.255");
        assert_eq!(rows[2].block_size, 160);
    }

    #[test]
    fn test_allocation_rows_alignment_gap() {
        let base: Block = "10.0.0.0/24".parse().unwrap();
        let allocations = pack(base, &[2, 100]).unwrap();
        let rows = allocation_rows(base, &[2, 100], &allocations, AddressStyle::Decimal);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].cidr, "-gap-");
        assert_eq!(rows[1].network, "10.0.0.4");
        assert_eq!(rows[1].broadcast, "10.0.0.127");
        assert_eq!(rows[2].network, "10.0.0.128");
    }

    #[test]
    fn test_allocation_rows_full_block() {
        let base: Block = "10.0.0.0/24".parse().unwrap();
        let allocations = pack(base, &[254]).unwrap();
        let rows = allocation_rows(base, &[254], &allocations, AddressStyle::Decimal);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_render_allocation_table() {
        let base: Block = "192.168.1.0/24".parse().unwrap();
        let allocations = pack(base, &[50]).unwrap();
        let rows = allocation_rows(base, &[50], &allocations, AddressStyle::Decimal);
        let text = render_allocation_table(&rows);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("\"255.255.255.192\""));
        assert!(lines[1].contains("\"/26\""));
        assert!(lines[2].contains("\"-gap-\""));
    }
}
