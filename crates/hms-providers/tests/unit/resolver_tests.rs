//! ProcfsInterfaceResolver tests over fake procfs and sysfs trees

use hms_domain::ports::InterfaceResolver;
use hms_providers::ProcfsInterfaceResolver;
use std::fs;
use tempfile::TempDir;

struct FakeHost {
    proc_dir: TempDir,
    sys_dir: TempDir,
}

impl FakeHost {
    fn new() -> Self {
        Self {
            proc_dir: TempDir::new().expect("proc dir"),
            sys_dir: TempDir::new().expect("sys dir"),
        }
    }

    fn with_route(self, content: &str) -> Self {
        let net = self.proc_dir.path().join("net");
        fs::create_dir_all(&net).expect("net dir");
        fs::write(net.join("route"), content).expect("route file");
        self
    }

    fn with_speed(self, interface: &str, content: &str) -> Self {
        let dir = self.sys_dir.path().join("class/net").join(interface);
        fs::create_dir_all(&dir).expect("interface dir");
        fs::write(dir.join("speed"), content).expect("speed file");
        self
    }

    fn resolver(&self) -> ProcfsInterfaceResolver {
        ProcfsInterfaceResolver::with_roots(self.proc_dir.path(), self.sys_dir.path())
    }
}

const ROUTE: &str = "Iface\tDestination\tGateway\nens3\t00000000\t0101A8C0\n";

#[tokio::test]
async fn test_resolves_default_interface() {
    let host = FakeHost::new().with_route(ROUTE);

    assert_eq!(host.resolver().default_interface().await.as_deref(), Some("ens3"));
}

#[tokio::test]
async fn test_missing_route_table_is_unknown() {
    let host = FakeHost::new();

    assert_eq!(host.resolver().default_interface().await, None);
}

#[tokio::test]
async fn test_reads_link_speed() {
    let host = FakeHost::new()
        .with_speed("ens3", "10000\n")
        .with_speed("veth0", "-1\n");
    let resolver = host.resolver();

    assert_eq!(resolver.interface_speed_mbps("ens3").await, Some(10_000));
    assert_eq!(resolver.interface_speed_mbps("veth0").await, None);
    assert_eq!(resolver.interface_speed_mbps("missing0").await, None);
}

#[tokio::test]
async fn test_rejects_path_like_interface_names() {
    let host = FakeHost::new().with_speed("ens3", "1000\n");
    let resolver = host.resolver();

    assert_eq!(resolver.interface_speed_mbps("../net/ens3").await, None);
    assert_eq!(resolver.interface_speed_mbps("").await, None);
}
