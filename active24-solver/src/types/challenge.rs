//! Challenge request and the coordinates derived from it

use serde::{Deserialize, Serialize};

/// TTL of every challenge record, in seconds.
pub const DEFAULT_TTL: u32 = 300;

/// A challenge as handed over by the dispatcher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRequest {
    /// Zone with trailing dot, e.g. `example.com.`
    pub resolved_zone: String,
    /// FQDN with trailing dot, e.g. `_acme-challenge.example.com.`
    #[serde(rename = "resolvedFQDN")]
    pub resolved_fqdn: String,
    /// TXT content to publish
    pub key: String,
    /// Undecoded solver config
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
    /// Namespace secrets are looked up in
    #[serde(default)]
    pub resource_namespace: String,
}

impl ChallengeRequest {
    /// Resolved zone without its trailing dot.
    pub fn zone(&self) -> &str {
        trim_trailing_dot(&self.resolved_zone)
    }

    /// FQDN with the `"." + resolved_zone` suffix removed.
    ///
    /// Left unchanged when the FQDN does not end with the zone.
    pub fn record_name(&self) -> &str {
        let suffix = format!(".{}", self.resolved_zone);
        self.resolved_fqdn
            .strip_suffix(suffix.as_str())
            .unwrap_or(&self.resolved_fqdn)
    }
}

/// Where and what to publish for one challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeCoords {
    /// Zone without trailing dot
    pub zone: String,
    /// FQDN without trailing dot
    pub fqdn: String,
    /// Record name relative to the zone
    pub record_name: String,
    /// TXT payload
    pub content: String,
    /// TTL in seconds
    pub ttl: u32,
}

impl ChallengeCoords {
    /// Coordinates for `record_name` under `zone` with the default TTL.
    #[cfg(test)]
    pub(crate) fn new(
        zone: impl Into<String>,
        record_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let zone = trim_trailing_dot(&zone.into()).to_string();
        let record_name = record_name.into();
        Self {
            fqdn: format!("{record_name}.{zone}"),
            zone,
            record_name,
            content: content.into(),
            ttl: DEFAULT_TTL,
        }
    }

    /// Derive coordinates from a request.
    ///
    /// A non-empty `zone_override` replaces the resolved zone; the record name
    /// is always derived from the resolved FQDN and zone.
    pub fn from_request(req: &ChallengeRequest, zone_override: Option<&str>) -> Self {
        let zone = match zone_override {
            Some(z) if !z.is_empty() => trim_trailing_dot(z),
            _ => req.zone(),
        };
        Self {
            zone: zone.to_string(),
            fqdn: trim_trailing_dot(&req.resolved_fqdn).to_string(),
            record_name: req.record_name().to_string(),
            content: req.key.clone(),
            ttl: DEFAULT_TTL,
        }
    }

    /// Absolute name the backend lists the record under.
    pub fn absolute_name(&self) -> String {
        format!("{}.{}", self.record_name, self.zone)
    }
}

fn trim_trailing_dot(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(zone: &str, fqdn: &str) -> ChallengeRequest {
        ChallengeRequest {
            resolved_zone: zone.to_string(),
            resolved_fqdn: fqdn.to_string(),
            key: "tok1".to_string(),
            ..ChallengeRequest::default()
        }
    }

    #[test]
    fn derives_record_name_and_zone() {
        let req = request("example.com.", "_acme-challenge.example.com.");
        assert_eq!(req.zone(), "example.com");
        assert_eq!(req.record_name(), "_acme-challenge");

        let coords = ChallengeCoords::from_request(&req, None);
        assert_eq!(coords.zone, "example.com");
        assert_eq!(coords.fqdn, "_acme-challenge.example.com");
        assert_eq!(coords.record_name, "_acme-challenge");
        assert_eq!(coords.content, "tok1");
        assert_eq!(coords.ttl, 300);
        assert_eq!(coords.absolute_name(), "_acme-challenge.example.com");
    }

    #[test]
    fn nested_record_name() {
        let req = request("example.com.", "_acme-challenge.www.example.com.");
        assert_eq!(req.record_name(), "_acme-challenge.www");
    }

    #[test]
    fn fqdn_outside_zone_is_kept() {
        let req = request("example.com.", "_acme-challenge.other.org.");
        assert_eq!(req.record_name(), "_acme-challenge.other.org.");
    }

    #[test]
    fn suffix_must_start_at_label_boundary() {
        let req = request("example.com.", "_acme-challenge.myexample.com.");
        assert_eq!(req.record_name(), "_acme-challenge.myexample.com.");
    }

    #[test]
    fn zone_override_replaces_resolved_zone() {
        let req = request("sub.example.com.", "_acme-challenge.sub.example.com.");
        let coords = ChallengeCoords::from_request(&req, Some("example.com"));
        assert_eq!(coords.zone, "example.com");
        assert_eq!(coords.record_name, "_acme-challenge");

        let coords = ChallengeCoords::from_request(&req, Some(""));
        assert_eq!(coords.zone, "sub.example.com");
    }

    #[test]
    fn strip_suffix_round_trip() {
        for (label, zone) in [
            ("_acme-challenge", "example.com"),
            ("_acme-challenge.a.b", "c.example.org"),
            ("x", "y"),
        ] {
            let req = request(&format!("{zone}."), &format!("{label}.{zone}."));
            assert_eq!(req.record_name(), label);
        }
    }

    #[test]
    fn decodes_dispatcher_json() {
        let req: ChallengeRequest = serde_json::from_str(
            r#"{
                "resolvedZone": "example.com.",
                "resolvedFQDN": "_acme-challenge.example.com.",
                "key": "tok1",
                "resourceNamespace": "cert-manager",
                "config": {"serviceID": 1}
            }"#,
        )
        .unwrap();
        assert_eq!(req.resolved_fqdn, "_acme-challenge.example.com.");
        assert_eq!(req.resource_namespace, "cert-manager");
        assert_eq!(req.config, Some(serde_json::json!({"serviceID": 1})));
    }
}
