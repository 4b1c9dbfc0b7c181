use crate::{
    ProxmoxClient,
    core::{
        domain::model::{auth::Auth, connection::Connection},
        infrastructure::api_client::ApiClient,
    },
};
use url::Url;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn create_test_connection(server_url: &str) -> Connection {
    let url = Url::parse(server_url).unwrap();
    Connection::new(
        url.host_str().unwrap(),
        url.port().unwrap(),
        "testuser@pam",
        "testpass",
        false,
        false,
    )
    .unwrap()
}

fn create_authenticated_client(mock_server: &MockServer) -> ProxmoxClient {
    let connection = create_test_connection(&mock_server.uri());
    let mut api = ApiClient::new(connection).unwrap();
    api.set_auth(
        Auth::new(
            "PVE:testuser@pam:4EEC61E2::sig".to_string(),
            "4EEC61E2:token".to_string(),
        )
        .unwrap(),
    );
    ProxmoxClient { api }
}

#[tokio::test]
async fn test_cluster_vms_list() {
    let mock_server = MockServer::start().await;
    let client = create_authenticated_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api2/json/cluster/resources"))
        .and(query_param("type", "vm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {
                    "vmid": 100,
                    "name": "web01",
                    "node": "pve1",
                    "status": "running",
                    "cpu": 0.125,
                    "maxcpu": 4,
                    "mem": 4294967296_i64,
                    "maxmem": 8589934592_i64,
                    "uptime": 86400
                },
                {
                    "vmid": 101,
                    "node": "pve1",
                    "status": "stopped",
                    "maxcpu": 2,
                    "maxmem": 2147483648_i64,
                    "template": 0
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let vms = client.cluster_vms().await.unwrap();
    assert_eq!(vms.len(), 2);

    let vm = &vms[0];
    assert_eq!(vm.vmid, 100);
    assert_eq!(vm.name.as_deref(), Some("web01"));
    assert_eq!(vm.node, "pve1");
    assert!(vm.is_running());
    assert_eq!(vm.cpu, Some(0.125));
    assert_eq!(vm.maxcpu, Some(4));
    assert_eq!(vm.mem, Some(4294967296));
    assert_eq!(vm.maxmem, Some(8589934592));

    let stopped = &vms[1];
    assert_eq!(stopped.name, None);
    assert!(!stopped.is_running());
}

#[tokio::test]
async fn test_vm_config_disk_slots() {
    let mock_server = MockServer::start().await;
    let client = create_authenticated_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/qemu/100/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "name": "web01",
                "sockets": 1,
                "cores": 4,
                "ostype": "l26",
                "scsihw": "virtio-scsi-pci",
                "boot": "order=scsi0;net0",
                "scsi0": "local:vm-100-disk-0,size=32G",
                "scsi1": "local-lvm:vm-100-disk-1,discard=on,size=120G",
                "digest": "a1b2c3"
            }
        })))
        .mount(&mock_server)
        .await;

    let config = client.vm_config("pve1", 100).await.unwrap();
    assert_eq!(config.name.as_deref(), Some("web01"));
    assert_eq!(config.cores, Some(4));
    assert_eq!(config.scsi0.as_deref(), Some("local:vm-100-disk-0,size=32G"));
    assert_eq!(
        config.scsi1.as_deref(),
        Some("local-lvm:vm-100-disk-1,discard=on,size=120G")
    );
}

#[tokio::test]
async fn test_vm_config_without_disks() {
    let mock_server = MockServer::start().await;
    let client = create_authenticated_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api2/json/nodes/pve1/qemu/101/config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "name": "diskless",
                "cores": 1
            }
        })))
        .mount(&mock_server)
        .await;

    let config = client.vm_config("pve1", 101).await.unwrap();
    assert_eq!(config.scsi0, None);
    assert_eq!(config.scsi1, None);
}

#[tokio::test]
async fn test_guest_network_interfaces() {
    let mock_server = MockServer::start().await;
    let client = create_authenticated_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(
            "/api2/json/nodes/pve1/qemu/100/agent/network-get-interfaces",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {
                "result": [
                    {
                        "name": "lo",
                        "hardware-address": "00:00:00:00:00:00",
                        "ip-addresses": [
                            {"ip-address": "127.0.0.1", "ip-address-type": "ipv4", "prefix": 8}
                        ]
                    },
                    {
                        "name": "eth0",
                        "hardware-address": "aa:bb:cc:dd:ee:ff",
                        "ip-addresses": [
                            {"ip-address": "10.0.0.15", "ip-address-type": "ipv4", "prefix": 24},
                            {"ip-address": "fe80::1", "ip-address-type": "ipv6", "prefix": 64}
                        ]
                    }
                ]
            }
        })))
        .mount(&mock_server)
        .await;

    let interfaces = client.guest_network_interfaces("pve1", 100).await.unwrap();
    assert_eq!(interfaces.len(), 2);
    assert_eq!(interfaces[1].name, "eth0");
    assert_eq!(
        interfaces[1].hardware_address.as_deref(),
        Some("aa:bb:cc:dd:ee:ff")
    );
    assert_eq!(interfaces[1].ip_addresses[0].ip_address, "10.0.0.15");
    assert_eq!(
        interfaces[1].ip_addresses[0].ip_address_type.as_deref(),
        Some("ipv4")
    );
    assert_eq!(interfaces[1].ip_addresses[0].prefix, Some(24));
}

#[tokio::test]
async fn test_guest_network_interfaces_agent_unavailable() {
    let mock_server = MockServer::start().await;
    let client = create_authenticated_client(&mock_server);

    Mock::given(method("GET"))
        .and(path(
            "/api2/json/nodes/pve1/qemu/100/agent/network-get-interfaces",
        ))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("QEMU guest agent is not running"),
        )
        .mount(&mock_server)
        .await;

    let result = client.guest_network_interfaces("pve1", 100).await;
    assert!(result.is_err());
}
