//! Network Interface Resolution Port

use async_trait::async_trait;

/// Resolves the interface carrying the default route
///
/// Both lookups are best effort: `None` means "unknown", never an error.
#[async_trait]
pub trait InterfaceResolver: Send + Sync {
    /// Name of the default-route interface
    async fn default_interface(&self) -> Option<String>;

    /// Nominal link speed of an interface in megabits per second
    async fn interface_speed_mbps(&self, interface: &str) -> Option<u64>;
}
