use crate::{
    ProxmoxClient,
    core::{
        domain::model::{auth::Auth, connection::Connection},
        infrastructure::api_client::ApiClient,
    },
    report::inventory,
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
async fn test_collect_nodes_sorts_by_name() {
    let mock_server = MockServer::start().await;
    let client = create_authenticated_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api2/json/cluster/resources"))
        .and(query_param("type", "node"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {
                    "node": "pve3",
                    "status": "online",
                    "cpu": 0.08,
                    "maxcpu": 16,
                    "mem": 4294967296_i64,
                    "maxmem": 34359738368_i64,
                    "uptime": 987654,
                    "id": "node/pve3"
                },
                {
                    "node": "pve1",
                    "status": "online",
                    "cpu": 0.15,
                    "maxcpu": 8,
                    "mem": 8589934592_i64,
                    "maxmem": 17179869184_i64,
                    "uptime": 1234567,
                    "id": "node/pve1"
                },
                {
                    "node": "pve2",
                    "status": "online",
                    "maxcpu": 4,
                    "maxmem": 8589934592_i64
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let nodes = inventory::collect_nodes(&client).await.unwrap();
    assert_eq!(
        inventory::node_names(&nodes),
        vec!["pve1".to_string(), "pve2".to_string(), "pve3".to_string()]
    );

    let node1 = &nodes[0];
    assert_eq!(node1.node, "pve1");
    assert_eq!(node1.status.as_deref(), Some("online"));
    assert_eq!(node1.maxcpu, Some(8));
    assert_eq!(node1.maxmem, Some(17179869184));
    assert_eq!(node1.uptime, Some(1234567));
    assert_eq!(node1.id.as_deref(), Some("node/pve1"));

    // Optional stats may be absent entirely.
    let node2 = &nodes[1];
    assert_eq!(node2.cpu, None);
    assert_eq!(node2.uptime, None);
    assert_eq!(node2.id, None);
}

#[tokio::test]
async fn test_collect_nodes_empty_cluster() {
    let mock_server = MockServer::start().await;
    let client = create_authenticated_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api2/json/cluster/resources"))
        .and(query_param("type", "node"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": []
        })))
        .mount(&mock_server)
        .await;

    let nodes = inventory::collect_nodes(&client).await.unwrap();
    assert!(nodes.is_empty());
}
