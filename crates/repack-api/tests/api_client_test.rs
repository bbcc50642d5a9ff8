#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use repack_api::models::{
    Field, InterfaceStatusRequest, LinkState, LinkType, LogFilter, NftRule, Rule, TestRequest,
    VlanConfig, VlanIpRequest,
};
use repack_api::{ApiClient, ApiConfig, Error, FieldId, InterfaceName, LogId, NftRuleId, RuleId};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let config = ApiConfig::parse(&format!("{}/api", server.uri())).unwrap();
    let client = ApiClient::new(config).unwrap();
    (server, client)
}

fn ack(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "message": message }))
}

// ── Network ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_interfaces() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/interfaces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "name": "eth0", "hardware_addr": "aa:bb:cc:dd:ee:ff",
                  "ip_addresses": ["192.168.1.2/24"], "is_up": true },
                { "name": "eth1", "hardware_addr": "", "ip_addresses": [], "is_up": false }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.list_interfaces().await.unwrap();
    let ifaces = resp.data.unwrap();
    assert_eq!(ifaces.len(), 2);
    assert_eq!(ifaces[0].name.as_str(), "eth0");
    assert!(ifaces[0].is_up);
    assert!(!ifaces[1].is_up);
}

#[tokio::test]
async fn test_get_interface_interpolates_name() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/interfaces/eth0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "name": "eth0", "hardware_addr": "aa:bb:cc:dd:ee:ff",
                      "ip_addresses": [], "is_up": true, "mtu": 1500 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let iface = client
        .get_interface(&InterfaceName::new("eth0"))
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(iface.hardware_addr, "aa:bb:cc:dd:ee:ff");
    assert_eq!(iface.extra.get("mtu"), Some(&json!(1500)));
}

#[tokio::test]
async fn test_dot_interface_names_never_leave_the_client() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ack("IP addresses removed successfully"))
        .expect(0)
        .mount(&server)
        .await;

    for name in ["..", ".", ""] {
        let name = InterfaceName::new(name);
        let err = client.get_interface(&name).await.unwrap_err();
        assert!(matches!(err, Error::InvalidPathSegment(_)), "{err:?}");
        let err = client.remove_vlan_ip(&name).await.unwrap_err();
        assert!(matches!(err, Error::InvalidPathSegment(_)), "{err:?}");
    }
}

#[tokio::test]
async fn test_get_vlan_config_keeps_unrecognised_mode() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/vlan/eth3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "interface": "eth3", "link_type": "Trunk", "trunk_vlan_id": "5" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cfg = client
        .get_vlan_config(&"eth3".into())
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(cfg.link_type, LinkType::Other("Trunk".into()));
    assert_eq!(cfg.trunk_vlan_id, "5");
}

#[tokio::test]
async fn test_configure_vlan_sends_payload() {
    let (server, client) = setup().await;

    let config = VlanConfig {
        interface: "eth1".into(),
        link_type: LinkType::Trunk,
        vlan_id: String::new(),
        trunk_vlan_id: "2,3,5-10".into(),
        default_id: "1".into(),
    };

    Mock::given(method("POST"))
        .and(path("/api/vlan"))
        .and(body_json(json!({
            "interface": "eth1",
            "link_type": "trunk",
            "vlan_id": "",
            "trunk_vlan_id": "2,3,5-10",
            "default_id": "1"
        })))
        .respond_with(ack("VLAN configured successfully"))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client.configure_vlan(&config).await.unwrap();
    assert_eq!(resp.message.as_deref(), Some("VLAN configured successfully"));
}

#[tokio::test]
async fn test_get_vlan_config_default() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/vlan/eth2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "interface": "eth2", "link_type": "access", "vlan_id": "0",
                      "trunk_vlan_id": "", "default_id": "1" }
        })))
        .mount(&server)
        .await;

    let cfg = client
        .get_vlan_config(&"eth2".into())
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(cfg.link_type, LinkType::Access);
    assert_eq!(cfg.vlan_id, "0");
}

#[tokio::test]
async fn test_vlan_ip_add_and_flush() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/vlan/ip"))
        .and(body_json(json!({
            "vlan_interface": "vlan_10",
            "ip_addresses": ["10.0.10.1/24"]
        })))
        .respond_with(ack("IP addresses added successfully"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/vlan/ip/vlan_10"))
        .respond_with(ack("IP addresses removed successfully"))
        .expect(1)
        .mount(&server)
        .await;

    let req = VlanIpRequest {
        vlan_interface: "vlan_10".into(),
        ip_addresses: vec!["10.0.10.1/24".into()],
    };
    client.add_vlan_ip(&req).await.unwrap();
    client.remove_vlan_ip(&"vlan_10".into()).await.unwrap();
}

#[tokio::test]
async fn test_set_interface_status() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/interface/status"))
        .and(body_json(json!({ "interface": "eth1", "status": "up" })))
        .respond_with(ack("Interface status updated"))
        .expect(1)
        .mount(&server)
        .await;

    let req = InterfaceStatusRequest {
        interface: "eth1".into(),
        status: LinkState::Up,
    };
    client.set_interface_status(&req).await.unwrap();
}

// ── Fields ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_field_crud() {
    let (server, client) = setup().await;

    let stored = json!({
        "ID": 3, "CreatedAt": "2024-01-01T00:00:00Z", "UpdatedAt": "2024-01-01T00:00:00Z",
        "DeletedAt": null, "name": "tagName", "offset": 88, "length": 16, "type": "string"
    });

    Mock::given(method("GET"))
        .and(path("/api/fields"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [stored] })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/fields/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": stored })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/fields"))
        .and(body_json(json!({ "name": "tagName", "offset": 88, "length": 16, "type": "string" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "data": stored })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/fields/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": stored })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/fields/3"))
        .respond_with(ack("Field deleted successfully"))
        .expect(1)
        .mount(&server)
        .await;

    let new_field = Field {
        name: "tagName".into(),
        offset: 88,
        length: 16,
        field_type: "string".into(),
        ..Field::default()
    };

    let listed = client.list_fields().await.unwrap().data.unwrap();
    assert_eq!(listed[0].id, Some(FieldId(3)));

    let fetched = client.get_field(FieldId(3)).await.unwrap().data.unwrap();
    assert_eq!(fetched.field_type, "string");

    let created = client.create_field(&new_field).await.unwrap().data.unwrap();
    assert_eq!(created.id, Some(FieldId(3)));

    client.update_field(FieldId(3), &new_field).await.unwrap();

    let deleted = client.delete_field(FieldId(3)).await.unwrap();
    assert_eq!(deleted.message.as_deref(), Some("Field deleted successfully"));
}

#[tokio::test]
async fn test_list_fields_tolerates_unchecked_records() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/fields"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "ID": 1, "name": "ok", "offset": 0, "length": 4, "type": "hex" },
                { "ID": 2, "name": "bad", "offset": -1, "length": 2, "type": "hex" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fields = client.list_fields().await.unwrap().data.unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[1].offset, -1);
}

// ── Rules ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_rule_crud() {
    let (server, client) = setup().await;

    let stored = json!({
        "ID": 4, "CreatedAt": "2024-02-01T00:00:00Z", "UpdatedAt": "2024-02-01T00:00:00Z",
        "DeletedAt": null, "name": "rewrite-tag", "enabled": true,
        "match_condition": "tagName == 'BHB10A01YP01_pmt'",
        "actions": "[{\"field\":\"tagName\",\"value\":\"X\"}]",
        "output_options": "{}", "priority": 10
    });

    Mock::given(method("GET"))
        .and(path("/api/rules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [stored] })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/rules"))
        .and(body_json(json!({
            "name": "rewrite-tag", "enabled": true,
            "match_condition": "tagName == 'BHB10A01YP01_pmt'",
            "actions": "[{\"field\":\"tagName\",\"value\":\"X\"}]",
            "output_options": "{}", "priority": 10
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "data": stored })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/rules/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": stored })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/rules/4"))
        .respond_with(ack("Rule deleted successfully"))
        .expect(1)
        .mount(&server)
        .await;

    let new_rule = Rule {
        name: "rewrite-tag".into(),
        enabled: true,
        match_condition: "tagName == 'BHB10A01YP01_pmt'".into(),
        actions: r#"[{"field":"tagName","value":"X"}]"#.into(),
        output_options: "{}".into(),
        priority: 10,
        ..Rule::default()
    };

    let listed = client.list_rules().await.unwrap().data.unwrap();
    assert_eq!(listed[0].id, Some(RuleId(4)));
    assert!(listed[0].extra.contains_key("DeletedAt"));

    let created = client.create_rule(&new_rule).await.unwrap().data.unwrap();
    assert_eq!(created.priority, 10);

    let updated = client.update_rule(RuleId(4), &new_rule).await.unwrap();
    assert_eq!(updated.data.unwrap().name, "rewrite-tag");

    let deleted = client.delete_rule(RuleId(4)).await.unwrap();
    assert_eq!(deleted.message.as_deref(), Some("Rule deleted successfully"));
}

#[tokio::test]
async fn test_toggle_rule() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/rules/5/toggle"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "ID": 5, "name": "rewrite-tag", "enabled": false, "priority": 10 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let rule = client.toggle_rule(RuleId(5)).await.unwrap().data.unwrap();
    assert_eq!(rule.id, Some(RuleId(5)));
    assert!(!rule.enabled);
}

#[tokio::test]
async fn test_concurrent_toggles_complete_independently() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/rules/1/toggle"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": { "ID": 1, "name": "r", "enabled": true } }))
                .set_delay(Duration::from_millis(50)),
        )
        .expect(2)
        .mount(&server)
        .await;

    let other = client.clone();
    let (a, b) = tokio::join!(client.toggle_rule(RuleId(1)), other.toggle_rule(RuleId(1)));
    assert!(a.is_ok());
    assert!(b.is_ok());
}

// ── nftables rules ──────────────────────────────────────────────────

#[tokio::test]
async fn test_nft_rule_list_toggle_and_apply() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/nftrules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "ID": 2, "name": "queue-modbus", "enabled": true, "priority": 100,
                       "dst_port": "502", "protocol": "tcp", "action": "queue",
                       "queue_num": "0-3", "summary": "tcp dport 502 queue num 0-3" }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/nftrules/2/toggle"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Rule toggled successfully",
            "data": { "ID": 2, "name": "queue-modbus", "enabled": false, "action": "queue" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/nftrules/apply"))
        .respond_with(ack("Rules applied successfully"))
        .expect(1)
        .mount(&server)
        .await;

    let rules = client.list_nft_rules().await.unwrap().data.unwrap();
    assert_eq!(rules[0].queue_num, "0-3");
    assert_eq!(rules[0].summary.as_deref(), Some("tcp dport 502 queue num 0-3"));

    let toggled = client.toggle_nft_rule(NftRuleId(2)).await.unwrap();
    assert_eq!(toggled.message.as_deref(), Some("Rule toggled successfully"));
    assert!(!toggled.data.unwrap().enabled);

    client.apply_nft_rules().await.unwrap();
}

#[tokio::test]
async fn test_nft_rule_crud() {
    let (server, client) = setup().await;

    let stored = json!({
        "ID": 6, "name": "drop-telnet", "enabled": true, "priority": 50,
        "dst_port": "23", "protocol": "tcp", "action": "drop"
    });

    Mock::given(method("GET"))
        .and(path("/api/nftrules/6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": stored })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/nftrules"))
        .and(body_json(json!({
            "name": "drop-telnet", "enabled": true, "priority": 50,
            "src_ip": "", "dst_ip": "", "src_port": "", "dst_port": "23",
            "protocol": "tcp", "log_enabled": false, "log_prefix": "",
            "action": "drop", "queue_num": ""
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "data": stored })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/nftrules/6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": stored })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/nftrules/6"))
        .respond_with(ack("Rule deleted successfully"))
        .expect(1)
        .mount(&server)
        .await;

    let rule = NftRule {
        name: "drop-telnet".into(),
        enabled: true,
        priority: 50,
        dst_port: "23".into(),
        protocol: "tcp".into(),
        action: "drop".into(),
        ..NftRule::default()
    };

    let fetched = client.get_nft_rule(NftRuleId(6)).await.unwrap().data.unwrap();
    assert_eq!(fetched.action, "drop");

    let created = client.create_nft_rule(&rule).await.unwrap().data.unwrap();
    assert_eq!(created.id, Some(NftRuleId(6)));

    client.update_nft_rule(NftRuleId(6), &rule).await.unwrap();

    let deleted = client.delete_nft_rule(NftRuleId(6)).await.unwrap();
    assert_eq!(deleted.message.as_deref(), Some("Rule deleted successfully"));
}

#[tokio::test]
async fn test_create_nft_rule_rejected() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/nftrules"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "Action must be accept, drop, or queue"
        })))
        .mount(&server)
        .await;

    let rule = NftRule {
        name: "bad".into(),
        action: "reject".into(),
        ..NftRule::default()
    };
    let err = client.create_nft_rule(&rule).await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(
        err.body(),
        Some(r#"{"error":"Action must be accept, drop, or queue"}"#)
    );
    assert_eq!(
        err.server_message().as_deref(),
        Some("Action must be accept, drop, or queue")
    );
}

// ── Test mode ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_run_test_unwrapped_result() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/test"))
        .and(body_json(json!({ "hex_packet": "deadbeef", "rule_id": 7 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "original_packet": "deadbeef",
            "parsed_fields": { "tagName": "BHB10A01YP01_pmt" },
            "matched_rule": null,
            "modified_fields": {},
            "modified_packet": "",
            "processing_steps": ["Packet parsed successfully", "Rule condition not matched"],
            "src_ip": "10.0.0.1", "dst_ip": "10.0.0.2",
            "src_port": 5000, "dst_port": 502, "protocol": "TCP"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client
        .run_test(&TestRequest {
            hex_packet: "deadbeef".into(),
            rule_id: Some(RuleId(7)),
        })
        .await
        .unwrap();

    assert_eq!(result.processing_steps.len(), 2);
    assert_eq!(result.parsed_fields["tagName"], "BHB10A01YP01_pmt");
    assert_eq!(result.dst_port, 502);
    assert!(result.error.is_none());
}

// ── Logs ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_logs_with_filters() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/logs"))
        .and(query_param("page", "2"))
        .and(query_param("rule_id", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "ID": 41, "rule_id": 4, "rule_name": "rewrite-tag", "result": "success",
                       "processed_at": "2024-06-01T12:00:00Z" }],
            "pagination": { "page": 2, "page_size": 20, "total": 21, "total_pages": 2 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = LogFilter {
        page: Some(2),
        rule_id: Some(RuleId(4)),
        ..LogFilter::default()
    };
    let resp = client.list_logs(&filter).await.unwrap();
    assert_eq!(resp.pagination.unwrap().total_pages, 2);
    assert_eq!(resp.data.unwrap()[0].id, LogId(41));
}

#[tokio::test]
async fn test_get_log() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/logs/41"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "ID": 41, "result": "dropped" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let entry = client.get_log(LogId(41)).await.unwrap().data.unwrap();
    assert_eq!(entry.result, "dropped");
}

#[tokio::test]
async fn test_clear_logs_without_days() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/logs"))
        .and(query_param_is_missing("days"))
        .respond_with(ack("Logs cleared successfully"))
        .expect(1)
        .mount(&server)
        .await;

    client.clear_logs(None).await.unwrap();
}

#[tokio::test]
async fn test_clear_logs_older_than() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/logs"))
        .and(query_param("days", "30"))
        .respond_with(ack("Logs cleared successfully"))
        .expect(1)
        .mount(&server)
        .await;

    client.clear_logs(Some(30)).await.unwrap();
}

// ── Configuration ───────────────────────────────────────────────────

#[tokio::test]
async fn test_base_url_override_changes_prefix_only() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gateway/v2/rules/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "ID": 9, "name": "r9", "enabled": true }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ApiConfig::parse(&format!("{}/gateway/v2", server.uri())).unwrap();
    let client = ApiClient::new(config).unwrap();

    let rule = client.get_rule(RuleId(9)).await.unwrap().data.unwrap();
    assert_eq!(rule.name, "r9");
}

#[tokio::test]
async fn test_slow_response_surfaces_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/nftrules"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": [] }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = ApiConfig::parse(&format!("{}/api", server.uri()))
        .unwrap()
        .with_timeout(Duration::from_millis(100));
    let client = ApiClient::new(config).unwrap();

    let err = client.list_nft_rules().await.unwrap_err();
    assert!(
        matches!(err, Error::Timeout { timeout_ms: 100 }),
        "expected Timeout, got: {err:?}"
    );
}

// ── Error handling ──────────────────────────────────────────────────

#[tokio::test]
async fn test_not_found_keeps_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/rules/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "Rule not found" })))
        .mount(&server)
        .await;

    let err = client.get_rule(RuleId(99)).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.server_message().as_deref(), Some("Rule not found"));
}

#[tokio::test]
async fn test_non_json_success_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/fields"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let err = client.list_fields().await.unwrap_err();
    assert!(
        matches!(err, Error::Deserialization { ref body, .. } if body == "<html>proxy</html>"),
        "expected Deserialization, got: {err:?}"
    );
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ApiConfig::parse(&format!("http://{addr}/api")).unwrap();
    let client = ApiClient::new(config).unwrap();

    let err = client.list_interfaces().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "expected Transport, got: {err:?}");
    assert!(err.is_connect());
}
