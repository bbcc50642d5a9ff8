// Typed request descriptions, one constructor per remote operation.
//
// An `Endpoint` fixes the method, the path segments and the query of a
// call. Segments are pushed through `Url::path_segments_mut`, which
// percent-encodes them, so an identifier containing `/` or `?` stays a
// single segment. Empty and dot segments are refused outright: URL
// normalization would drop or collapse them and move the request to a
// different route.

use std::fmt;

use reqwest::Method;
use url::Url;

use crate::error::Error;
use crate::ids::{FieldId, InterfaceName, LogId, NftRuleId, RuleId};
use crate::models::LogFilter;

/// Method, path and query of a single backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    method: Method,
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
}

impl Endpoint {
    fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
        }
    }

    fn with_query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn query(&self) -> &[(&'static str, String)] {
        &self.query
    }

    /// Path relative to the base, e.g. `/vlan/ip/eth0`. Unencoded.
    pub fn path(&self) -> String {
        let mut out = String::new();
        for seg in &self.segments {
            out.push('/');
            out.push_str(seg);
        }
        out
    }

    /// Resolve against `base`, keeping whatever path prefix it carries.
    pub fn url(&self, base: &Url) -> Result<Url, Error> {
        if let Some(seg) = self
            .segments
            .iter()
            .find(|s| matches!(s.as_str(), "" | "." | ".."))
        {
            return Err(Error::InvalidPathSegment(seg.clone()));
        }
        let mut url = base.clone();
        {
            let mut segs = url
                .path_segments_mut()
                .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?;
            segs.pop_if_empty();
            segs.extend(&self.segments);
        }
        url.set_query(None);
        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    // ── Network ──────────────────────────────────────────────────────

    pub fn list_interfaces() -> Self {
        Self::new(Method::GET, ["interfaces"])
    }

    pub fn get_interface(name: &InterfaceName) -> Self {
        Self::new(Method::GET, ["interfaces", name.as_str()])
    }

    pub fn configure_vlan() -> Self {
        Self::new(Method::POST, ["vlan"])
    }

    pub fn get_vlan_config(name: &InterfaceName) -> Self {
        Self::new(Method::GET, ["vlan", name.as_str()])
    }

    pub fn add_vlan_ip() -> Self {
        Self::new(Method::POST, ["vlan", "ip"])
    }

    pub fn remove_vlan_ip(name: &InterfaceName) -> Self {
        Self::new(Method::DELETE, ["vlan", "ip", name.as_str()])
    }

    pub fn set_interface_status() -> Self {
        Self::new(Method::POST, ["interface", "status"])
    }

    // ── Fields ───────────────────────────────────────────────────────

    pub fn list_fields() -> Self {
        Self::new(Method::GET, ["fields"])
    }

    pub fn get_field(id: FieldId) -> Self {
        Self::new(Method::GET, ["fields".to_owned(), id.to_string()])
    }

    pub fn create_field() -> Self {
        Self::new(Method::POST, ["fields"])
    }

    pub fn update_field(id: FieldId) -> Self {
        Self::new(Method::PUT, ["fields".to_owned(), id.to_string()])
    }

    pub fn delete_field(id: FieldId) -> Self {
        Self::new(Method::DELETE, ["fields".to_owned(), id.to_string()])
    }

    // ── Rules ────────────────────────────────────────────────────────

    pub fn list_rules() -> Self {
        Self::new(Method::GET, ["rules"])
    }

    pub fn get_rule(id: RuleId) -> Self {
        Self::new(Method::GET, ["rules".to_owned(), id.to_string()])
    }

    pub fn create_rule() -> Self {
        Self::new(Method::POST, ["rules"])
    }

    pub fn update_rule(id: RuleId) -> Self {
        Self::new(Method::PUT, ["rules".to_owned(), id.to_string()])
    }

    pub fn delete_rule(id: RuleId) -> Self {
        Self::new(Method::DELETE, ["rules".to_owned(), id.to_string()])
    }

    pub fn toggle_rule(id: RuleId) -> Self {
        Self::new(
            Method::POST,
            ["rules".to_owned(), id.to_string(), "toggle".to_owned()],
        )
    }

    // ── nftables rules ───────────────────────────────────────────────

    pub fn list_nft_rules() -> Self {
        Self::new(Method::GET, ["nftrules"])
    }

    pub fn get_nft_rule(id: NftRuleId) -> Self {
        Self::new(Method::GET, ["nftrules".to_owned(), id.to_string()])
    }

    pub fn create_nft_rule() -> Self {
        Self::new(Method::POST, ["nftrules"])
    }

    pub fn update_nft_rule(id: NftRuleId) -> Self {
        Self::new(Method::PUT, ["nftrules".to_owned(), id.to_string()])
    }

    pub fn delete_nft_rule(id: NftRuleId) -> Self {
        Self::new(Method::DELETE, ["nftrules".to_owned(), id.to_string()])
    }

    pub fn toggle_nft_rule(id: NftRuleId) -> Self {
        Self::new(
            Method::POST,
            ["nftrules".to_owned(), id.to_string(), "toggle".to_owned()],
        )
    }

    pub fn apply_nft_rules() -> Self {
        Self::new(Method::POST, ["nftrules", "apply"])
    }

    // ── Test mode ────────────────────────────────────────────────────

    pub fn run_test() -> Self {
        Self::new(Method::POST, ["test"])
    }

    // ── Logs ─────────────────────────────────────────────────────────

    pub fn list_logs(filter: &LogFilter) -> Self {
        let mut ep = Self::new(Method::GET, ["logs"]);
        if let Some(page) = filter.page {
            ep = ep.with_query("page", page);
        }
        if let Some(size) = filter.page_size {
            ep = ep.with_query("page_size", size);
        }
        if let Some(rule_id) = filter.rule_id {
            ep = ep.with_query("rule_id", rule_id);
        }
        if let Some(ref result) = filter.result {
            ep = ep.with_query("result", result);
        }
        ep
    }

    pub fn get_log(id: LogId) -> Self {
        Self::new(Method::GET, ["logs".to_owned(), id.to_string()])
    }

    /// `DELETE /logs`, optionally limited to entries older than `days`.
    pub fn clear_logs(days: Option<u32>) -> Self {
        let ep = Self::new(Method::DELETE, ["logs"]);
        match days {
            Some(d) => ep.with_query("days", d),
            None => ep,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn base() -> Url {
        Url::parse("http://localhost:8080/api").unwrap()
    }

    fn resolved(ep: &Endpoint) -> String {
        ep.url(&base()).unwrap().to_string()
    }

    #[test]
    fn interpolates_interface_name() {
        let ep = Endpoint::get_interface(&InterfaceName::new("eth0"));
        assert_eq!(ep.method(), Method::GET);
        assert_eq!(resolved(&ep), "http://localhost:8080/api/interfaces/eth0");
    }

    #[test]
    fn keeps_base_prefix_with_trailing_slash() {
        let base = Url::parse("http://gw.local/console/api/").unwrap();
        let url = Endpoint::list_fields().url(&base).unwrap();
        assert_eq!(url.as_str(), "http://gw.local/console/api/fields");
    }

    #[test]
    fn encodes_hostile_segments() {
        let ep = Endpoint::remove_vlan_ip(&InterfaceName::new("eth0/1 x"));
        assert_eq!(ep.method(), Method::DELETE);
        assert_eq!(resolved(&ep), "http://localhost:8080/api/vlan/ip/eth0%2F1%20x");
    }

    #[test]
    fn dot_names_cannot_reach_other_routes() {
        for name in ["..", "."] {
            let name = InterfaceName::new(name);
            for ep in [
                Endpoint::get_interface(&name),
                Endpoint::get_vlan_config(&name),
                Endpoint::remove_vlan_ip(&name),
            ] {
                let err = ep.url(&base()).unwrap_err();
                assert!(
                    matches!(err, Error::InvalidPathSegment(ref s) if s == name.as_str()),
                    "{ep}: {err:?}"
                );
            }
        }
    }

    #[test]
    fn empty_name_is_refused() {
        let err = Endpoint::get_interface(&InterfaceName::new(""))
            .url(&base())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPathSegment(ref s) if s.is_empty()));
    }

    #[test]
    fn names_merely_containing_dots_are_encoded_not_refused() {
        let ep = Endpoint::get_interface(&InterfaceName::new("eth0.10"));
        assert_eq!(resolved(&ep), "http://localhost:8080/api/interfaces/eth0.10");
        let ep = Endpoint::get_interface(&InterfaceName::new("%2e%2e"));
        assert_eq!(resolved(&ep), "http://localhost:8080/api/interfaces/%252e%252e");
    }

    #[test]
    fn toggle_and_apply_paths() {
        assert_eq!(Endpoint::toggle_rule(RuleId(3)).to_string(), "POST /rules/3/toggle");
        assert_eq!(
            Endpoint::toggle_nft_rule(NftRuleId(9)).to_string(),
            "POST /nftrules/9/toggle"
        );
        assert_eq!(Endpoint::apply_nft_rules().to_string(), "POST /nftrules/apply");
    }

    #[test]
    fn clear_logs_query_depends_on_days() {
        assert_eq!(
            resolved(&Endpoint::clear_logs(None)),
            "http://localhost:8080/api/logs"
        );
        assert_eq!(
            resolved(&Endpoint::clear_logs(Some(30))),
            "http://localhost:8080/api/logs?days=30"
        );
    }

    #[test]
    fn list_logs_only_sends_set_filters() {
        let filter = LogFilter {
            page: Some(2),
            result: Some("dropped".into()),
            ..LogFilter::default()
        };
        assert_eq!(
            resolved(&Endpoint::list_logs(&filter)),
            "http://localhost:8080/api/logs?page=2&result=dropped"
        );
        assert_eq!(
            resolved(&Endpoint::list_logs(&LogFilter::default())),
            "http://localhost:8080/api/logs"
        );
    }

    #[test]
    fn crud_methods() {
        assert_eq!(Endpoint::create_field().method(), Method::POST);
        assert_eq!(Endpoint::update_field(FieldId(1)).method(), Method::PUT);
        assert_eq!(Endpoint::delete_nft_rule(NftRuleId(1)).method(), Method::DELETE);
        assert_eq!(Endpoint::get_log(LogId(5)).path(), "/logs/5");
    }
}
