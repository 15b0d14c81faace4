//! Provider Constants
//!
//! Constants specific to probe implementations. Sampling defaults live in
//! `hms_domain::constants`.

// ============================================================================
// PROCFS CONSTANTS
// ============================================================================

/// Default mount point of procfs
pub const DEFAULT_PROCFS_ROOT: &str = "/proc";

/// Default mount point of sysfs
pub const DEFAULT_SYSFS_ROOT: &str = "/sys";

/// Per-interface byte counters, relative to the procfs root
pub const PROC_NET_DEV: &str = "net/dev";

/// Block device I/O counters, relative to the procfs root
pub const PROC_DISKSTATS: &str = "diskstats";

/// Load averages, relative to the procfs root
pub const PROC_LOADAVG: &str = "loadavg";

/// Memory totals, relative to the procfs root
pub const PROC_MEMINFO: &str = "meminfo";

/// IPv4 routing table, relative to the procfs root
pub const PROC_NET_ROUTE: &str = "net/route";

/// Network interface directory, relative to the sysfs root
pub const SYS_CLASS_NET: &str = "class/net";

/// `/proc/diskstats` counts 512-byte sectors regardless of the device
pub const SECTOR_SIZE_BYTES: u64 = 512;

/// `/proc/meminfo` reports kibibytes
pub const MEMINFO_UNIT_BYTES: u64 = 1024;

/// Destination column value of the default route in `/proc/net/route`
pub const DEFAULT_ROUTE_DESTINATION: &str = "00000000";

// ============================================================================
// SYSINFO CONSTANTS
// ============================================================================

/// Pending requests the sysinfo actor accepts before callers wait
pub const SYSINFO_ACTOR_CHANNEL_CAPACITY: usize = 32;

// ============================================================================
// PROVIDER NAMES
// ============================================================================

/// Name reported by the sysinfo probe
pub const PROVIDER_SYSINFO: &str = "sysinfo";

/// Name reported by the procfs probe
pub const PROVIDER_PROCFS: &str = "procfs";

/// Name reported by the null probe
pub const PROVIDER_NULL: &str = "null";
