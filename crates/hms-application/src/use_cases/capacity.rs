//! Network capacity queries

use crate::domain_services::network_percentile;
use crate::store::MetricsStore;
use hms_domain::constants::LINK_CAPACITY_SAFETY_FACTOR;
use hms_domain::ports::InterfaceResolver;
use hms_domain::value_objects::{NetworkCapacity, NetworkPercentile, PercentileQuery};
use std::sync::Arc;

/// Usable bytes per second on a link of `speed_mbps`
///
/// Uses binary megabits and keeps a safety margin below line rate.
pub fn inferred_cap_bytes_per_sec(speed_mbps: u64) -> u64 {
    (speed_mbps as f64 * 1024.0 * 1024.0 * LINK_CAPACITY_SAFETY_FACTOR).floor() as u64
}

pub struct CapacityService {
    store: Arc<MetricsStore>,
    resolver: Arc<dyn InterfaceResolver>,
}

impl CapacityService {
    pub fn new(store: Arc<MetricsStore>, resolver: Arc<dyn InterfaceResolver>) -> Self {
        Self { store, resolver }
    }

    /// Nearest-rank percentiles over the most recent network samples
    pub fn network_percentile(&self, query: PercentileQuery) -> NetworkPercentile {
        let query = query.normalized();
        network_percentile(&self.store.network_window(query.window), query)
    }

    /// Default interface, its link speed and the capacity inferred from it
    pub async fn network_capacity(&self) -> NetworkCapacity {
        let Some(interface) = self.resolver.default_interface().await else {
            return NetworkCapacity::default();
        };
        let speed = self
            .resolver
            .interface_speed_mbps(&interface)
            .await
            .filter(|mbps| *mbps > 0);

        NetworkCapacity {
            default_interface: Some(interface),
            interface_speed_mbps: speed,
            inferred_cap_bytes_per_sec: speed.map(inferred_cap_bytes_per_sec),
        }
    }
}
