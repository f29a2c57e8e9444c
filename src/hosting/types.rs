//! Hosting lookup data structures.

use serde::{Deserialize, Serialize};

/// What is known about a page's hosting provider.
///
/// Produced fresh for every analysis; only ever cached as part of the full
/// analysis result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostingDescriptor {
    /// Whether the registry verified the host as running on renewable energy.
    pub is_green: bool,
    /// Name of the hosting provider, `"Unknown"` when the registry could not
    /// identify one.
    pub hosted_by: String,
    /// Provider website, when the registry reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosted_by_website: Option<String>,
}

impl HostingDescriptor {
    /// The conservative descriptor used when verification fails: treat the
    /// host as non-green rather than guessing.
    pub fn degraded() -> Self {
        HostingDescriptor {
            is_green: false,
            hosted_by: "Unknown".to_string(),
            hosted_by_website: None,
        }
    }
}

/// Response shape of The Green Web Foundation greencheck API.
///
/// Only the fields the analysis consumes; the registry sends more.
#[derive(Debug, Deserialize)]
pub(crate) struct GreencheckResponse {
    /// The verdict. Absent or null means the registry could not decide.
    pub green: Option<bool>,
    pub hosted_by: Option<String>,
    pub hosted_by_website: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degraded_descriptor_is_conservative() {
        let descriptor = HostingDescriptor::degraded();
        assert!(!descriptor.is_green);
        assert_eq!(descriptor.hosted_by, "Unknown");
        assert!(descriptor.hosted_by_website.is_none());
    }

    #[test]
    fn test_greencheck_response_deserializes_registry_payload() {
        let body = r#"{
            "url": "example.com",
            "green": true,
            "hosted_by": "Example Green Cloud",
            "hosted_by_website": "https://green.example",
            "modified": "2025-11-02T10:00:00Z"
        }"#;
        let parsed: GreencheckResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.green, Some(true));
        assert_eq!(parsed.hosted_by.as_deref(), Some("Example Green Cloud"));
        assert_eq!(
            parsed.hosted_by_website.as_deref(),
            Some("https://green.example")
        );
    }

    #[test]
    fn test_greencheck_response_tolerates_missing_verdict() {
        let parsed: GreencheckResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.green, None);
        assert!(parsed.hosted_by.is_none());
    }

    #[test]
    fn test_website_omitted_when_absent() {
        let json = serde_json::to_value(HostingDescriptor::degraded()).unwrap();
        assert!(json.get("hostedByWebsite").is_none());
        assert_eq!(json["isGreen"], false);
        assert_eq!(json["hostedBy"], "Unknown");
    }
}
