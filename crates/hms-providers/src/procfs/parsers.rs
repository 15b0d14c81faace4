//! Typed parsers for procfs and sysfs files
//!
//! Pure functions over file contents. They never touch the filesystem, which
//! keeps them testable against captured kernel output.

use crate::constants::{DEFAULT_ROUTE_DESTINATION, MEMINFO_UNIT_BYTES, SECTOR_SIZE_BYTES};
use hms_domain::error::{Error, Result};
use hms_domain::ports::InterfaceCounters;
use hms_domain::value_objects::{DiskCounters, LoadAverage, MemoryUsage, NetworkCounters};

const NET_DEV: &str = "/proc/net/dev";
const DISKSTATS: &str = "/proc/diskstats";
const LOADAVG: &str = "/proc/loadavg";
const MEMINFO: &str = "/proc/meminfo";

/// Column of received bytes after the interface name
const NET_DEV_RX_BYTES: usize = 0;
/// Column of transmitted bytes after the interface name
const NET_DEV_TX_BYTES: usize = 8;

/// Column of sectors read (0-based, after whitespace split)
const DISKSTATS_SECTORS_READ: usize = 5;
/// Column of sectors written
const DISKSTATS_SECTORS_WRITTEN: usize = 9;

fn parse_u64(what: &str, field: &str, value: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .map_err(|e| Error::parse(what, format!("{field}: '{value}' is not a counter ({e})")))
}

/// Per-interface cumulative byte counters from `/proc/net/dev`
///
/// The two header lines are skipped. Loopback is included; callers decide
/// what to exclude.
pub fn parse_net_dev(content: &str) -> Result<InterfaceCounters> {
    let mut interfaces = InterfaceCounters::new();

    for line in content.lines().skip(2) {
        if line.trim().is_empty() {
            continue;
        }
        let (name, stats) = line
            .split_once(':')
            .ok_or_else(|| Error::parse(NET_DEV, format!("missing ':' in '{}'", line.trim())))?;
        let name = name.trim();
        let fields: Vec<&str> = stats.split_whitespace().collect();
        if fields.len() <= NET_DEV_TX_BYTES {
            return Err(Error::parse(
                NET_DEV,
                format!("{name}: expected at least 9 columns, got {}", fields.len()),
            ));
        }

        let received = parse_u64(NET_DEV, name, fields[NET_DEV_RX_BYTES])?;
        let sent = parse_u64(NET_DEV, name, fields[NET_DEV_TX_BYTES])?;
        interfaces.insert(name.to_string(), NetworkCounters::new(received, sent));
    }

    Ok(interfaces)
}

/// Whether a block device name is a whole disk worth counting
///
/// Partitions would double count their parent. Loop and RAM devices are not
/// real I/O.
pub fn is_whole_disk(name: &str) -> bool {
    const VIRTUAL_PREFIXES: [&str; 3] = ["loop", "ram", "zram"];
    if VIRTUAL_PREFIXES.iter().any(|prefix| name.starts_with(prefix)) {
        return false;
    }

    // nvme0n1p2, mmcblk0p1: partition suffix after the unit number
    if name.starts_with("nvme") || name.starts_with("mmcblk") {
        return !has_partition_suffix(name);
    }

    // sda1, vdb3, xvda1, hdc2: disk letters followed by a partition number
    const LETTERED_PREFIXES: [&str; 4] = ["sd", "hd", "vd", "xvd"];
    if LETTERED_PREFIXES.iter().any(|prefix| name.starts_with(prefix)) {
        return !name.ends_with(|c: char| c.is_ascii_digit());
    }

    true
}

/// `p<digits>` at the end, preceded by a digit
fn has_partition_suffix(name: &str) -> bool {
    let Some(index) = name.rfind('p') else {
        return false;
    };
    let (head, tail) = name.split_at(index);
    let digits = &tail[1..];
    !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit())
        && head.ends_with(|c: char| c.is_ascii_digit())
}

/// Cumulative bytes read and written across whole disks from `/proc/diskstats`
pub fn parse_diskstats(content: &str) -> Result<DiskCounters> {
    let mut total = DiskCounters::default();

    for line in content.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() <= DISKSTATS_SECTORS_WRITTEN {
            return Err(Error::parse(
                DISKSTATS,
                format!("expected at least 10 columns, got {}", fields.len()),
            ));
        }
        let name = fields[2];
        if !is_whole_disk(name) {
            continue;
        }

        let read = parse_u64(DISKSTATS, name, fields[DISKSTATS_SECTORS_READ])?;
        let written = parse_u64(DISKSTATS, name, fields[DISKSTATS_SECTORS_WRITTEN])?;
        total = total
            + DiskCounters::new(
                read.saturating_mul(SECTOR_SIZE_BYTES),
                written.saturating_mul(SECTOR_SIZE_BYTES),
            );
    }

    Ok(total)
}

/// 1/5/15 minute load averages from `/proc/loadavg`
pub fn parse_loadavg(content: &str) -> Result<LoadAverage> {
    let mut fields = content.split_whitespace();
    let mut next = |label: &str| -> Result<f64> {
        let raw = fields
            .next()
            .ok_or_else(|| Error::parse(LOADAVG, format!("missing {label} load")))?;
        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
            .ok_or_else(|| Error::parse(LOADAVG, format!("{label} load '{raw}' is not a load value")))
    };

    let one = next("1m")?;
    let five = next("5m")?;
    let fifteen = next("15m")?;
    Ok(LoadAverage::new(one, five, fifteen))
}

/// Total and available memory from `/proc/meminfo`
///
/// Uses `MemAvailable` (kernel 3.14+), falling back to `MemFree`.
pub fn parse_meminfo(content: &str) -> Result<MemoryUsage> {
    let mut total = None;
    let mut available = None;
    let mut free = None;

    for line in content.lines() {
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let slot = match key.trim() {
            "MemTotal" => &mut total,
            "MemAvailable" => &mut available,
            "MemFree" => &mut free,
            _ => continue,
        };
        let value = rest
            .split_whitespace()
            .next()
            .ok_or_else(|| Error::parse(MEMINFO, format!("{key} has no value")))?;
        *slot = Some(parse_u64(MEMINFO, key, value)?.saturating_mul(MEMINFO_UNIT_BYTES));
    }

    let total = total.ok_or_else(|| Error::parse(MEMINFO, "MemTotal not found"))?;
    let free = available
        .or(free)
        .ok_or_else(|| Error::parse(MEMINFO, "neither MemAvailable nor MemFree found"))?;
    Ok(MemoryUsage::new(total, free))
}

/// Interface carrying the IPv4 default route in `/proc/net/route`
pub fn parse_default_route(content: &str) -> Option<String> {
    content.lines().skip(1).find_map(|line| {
        let mut fields = line.split_whitespace();
        let iface = fields.next()?;
        let destination = fields.next()?;
        (destination == DEFAULT_ROUTE_DESTINATION).then(|| iface.to_string())
    })
}

/// Link speed in Mbps from `/sys/class/net/<if>/speed`
///
/// The kernel reports `-1` (or refuses the read) when the speed is unknown.
pub fn parse_link_speed(content: &str) -> Option<u64> {
    content
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|mbps| *mbps > 0)
        .and_then(|mbps| u64::try_from(mbps).ok())
}
