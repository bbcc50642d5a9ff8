// Backend request and response types
//
// Persisted records carry the storage layer's bookkeeping keys (`ID`,
// `CreatedAt`, `UpdatedAt`, `DeletedAt`) next to their snake_case domain
// fields. Read models use `#[serde(default)]` liberally and keep every
// undocumented key in `extra`, so a decoded response loses nothing.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{FieldId, InterfaceName, LogId, NftRuleId, RuleId};

type Extra = serde_json::Map<String, serde_json::Value>;

// ── Response Envelope ────────────────────────────────────────────────

/// Standard success envelope.
///
/// Depending on the endpoint the backend fills `data`, `message`, or both;
/// log listing adds `pagination`.
/// ```json
/// { "message": "Rule toggled successfully", "data": { ... } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T = serde_json::Value> {
    // A missing `data` key already decodes as `None`; `default` here would
    // force a `T: Default` bound on `Deserialize`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Envelope for calls that only acknowledge (`{"message": "..."}`).
pub type Ack = ApiResponse<serde_json::Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub total_pages: u64,
}

// ── Network ──────────────────────────────────────────────────────────

/// A network interface as reported by the appliance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interface {
    pub name: InterfaceName,
    #[serde(default)]
    pub hardware_addr: String,
    #[serde(default)]
    pub ip_addresses: Vec<String>,
    #[serde(default)]
    pub is_up: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Port mode of a VLAN assignment.
///
/// The backend stores whatever mode string it was given; anything other
/// than `access` or `trunk` is kept verbatim in [`LinkType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    #[default]
    Access,
    Trunk,
    #[serde(untagged)]
    Other(String),
}

impl LinkType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Access => "access",
            Self::Trunk => "trunk",
            Self::Other(mode) => mode,
        }
    }
}

/// VLAN assignment for one interface; both the `POST /vlan` payload and
/// the `GET /vlan/{name}` result.
///
/// In access mode `vlan_id = "0"` asks the backend to remove the VLAN.
/// `trunk_vlan_id` accepts lists and ranges such as `"2,3,5-10"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VlanConfig {
    pub interface: InterfaceName,
    #[serde(default)]
    pub link_type: LinkType,
    #[serde(default)]
    pub vlan_id: String,
    #[serde(default)]
    pub trunk_vlan_id: String,
    #[serde(default)]
    pub default_id: String,
}

/// `POST /vlan/ip` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VlanIpRequest {
    pub vlan_interface: InterfaceName,
    pub ip_addresses: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkState {
    Up,
    Down,
}

/// `POST /interface/status` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceStatusRequest {
    pub interface: InterfaceName,
    pub status: LinkState,
}

// ── Fields ───────────────────────────────────────────────────────────

/// Named byte range inside a packet that rules can reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Field {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FieldId>,
    #[serde(rename = "CreatedAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "UpdatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub name: String,
    /// Starting offset in bytes. Stored unchecked, so it may be negative.
    #[serde(default)]
    pub offset: i64,
    /// Length in bytes.
    #[serde(default)]
    pub length: i64,
    /// `hex`, `decimal`, `string` or `builtin`.
    #[serde(rename = "type", default)]
    pub field_type: String,
    #[serde(flatten)]
    pub extra: Extra,
}

// ── Rules ────────────────────────────────────────────────────────────

/// High-level packet modification rule.
///
/// `actions` and `output_options` are JSON documents stored as strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rule {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RuleId>,
    #[serde(rename = "CreatedAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "UpdatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub match_condition: String,
    #[serde(default)]
    pub actions: String,
    #[serde(default)]
    pub output_options: String,
    /// Higher values are evaluated first.
    #[serde(default)]
    pub priority: i64,
    #[serde(flatten)]
    pub extra: Extra,
}

// ── nftables rules ───────────────────────────────────────────────────

/// Low-level nftables rule. Empty 5-tuple members mean "any".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NftRule {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NftRuleId>,
    #[serde(rename = "CreatedAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "UpdatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
    /// Lower values are evaluated first.
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub src_ip: String,
    #[serde(default)]
    pub dst_ip: String,
    #[serde(default)]
    pub src_port: String,
    #[serde(default)]
    pub dst_port: String,
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub log_enabled: bool,
    #[serde(default)]
    pub log_prefix: String,
    /// `accept`, `drop` or `queue`.
    #[serde(default)]
    pub action: String,
    /// Queue number or range (`"0"`, `"0-3"`) for the `queue` action.
    #[serde(default)]
    pub queue_num: String,
    /// Human-readable rendering, present only in list responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

// ── Test mode ────────────────────────────────────────────────────────

/// `POST /test` payload. Without `rule_id` the backend tries every
/// enabled rule in priority order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestRequest {
    pub hex_packet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<RuleId>,
}

/// Dry-run outcome. Processing failures are reported in `error` with a
/// 200 status; only an unknown `rule_id` comes back as 404.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestResult {
    #[serde(default)]
    pub original_packet: String,
    #[serde(default)]
    pub parsed_fields: BTreeMap<String, String>,
    #[serde(default)]
    pub matched_rule: Option<Rule>,
    #[serde(default)]
    pub modified_fields: Extra,
    #[serde(default)]
    pub modified_packet: String,
    #[serde(default)]
    pub processing_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub src_ip: String,
    #[serde(default)]
    pub dst_ip: String,
    #[serde(default)]
    pub src_port: u16,
    #[serde(default)]
    pub dst_port: u16,
    #[serde(default)]
    pub protocol: String,
}

// ── Logs ─────────────────────────────────────────────────────────────

/// One processed packet, as recorded by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(rename = "ID")]
    pub id: LogId,
    #[serde(default)]
    pub rule_id: Option<RuleId>,
    #[serde(default)]
    pub rule_name: String,
    #[serde(default)]
    pub original_packet: String,
    #[serde(default)]
    pub modified_packet: String,
    #[serde(default)]
    pub field_values: String,
    /// `success`, `error` or `dropped`.
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub error_message: String,
    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub src_ip: String,
    #[serde(default)]
    pub dst_ip: String,
    #[serde(default)]
    pub src_port: u16,
    #[serde(default)]
    pub dst_port: u16,
    #[serde(default)]
    pub protocol: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Query filters for `GET /logs`. Unset members are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub rule_id: Option<RuleId>,
    pub result: Option<String>,
}
