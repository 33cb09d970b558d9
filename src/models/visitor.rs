use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::utils::user_agent::ClientInfo;

/// The only section tracked under the homepage-only policy.
pub const HOMEPAGE_SECTION: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    #[default]
    View,
    Click,
    Pageview,
}

/// One recorded homepage visit. Append-only; never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub timestamp: i64, // Unix millis, authoritative ordering key
    pub local_time: String, // display-only
    pub browser: String,
    pub os: String,
    pub device: String,
    pub ip: String,
    pub section: String,
    pub path: String,
    pub interaction_type: InteractionType,
}

impl Visitor {
    pub fn new(ip: String, client: ClientInfo) -> Self {
        let now = chrono::Local::now();

        Self {
            id: None,
            timestamp: now.timestamp_millis(),
            local_time: now.format("%d/%m/%Y, %H:%M:%S").to_string(),
            browser: client.browser,
            os: client.os,
            device: client.device,
            ip,
            section: HOMEPAGE_SECTION.to_string(),
            path: HOMEPAGE_SECTION.to_string(),
            interaction_type: InteractionType::Pageview,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interaction_type_uses_lowercase_wire_names() {
        let json = serde_json::to_string(&InteractionType::Pageview).unwrap();
        assert_eq!(json, "\"pageview\"");

        let parsed: InteractionType = serde_json::from_str("\"click\"").unwrap();
        assert_eq!(parsed, InteractionType::Click);
    }

    #[test]
    fn new_visitor_is_a_homepage_pageview() {
        let visitor = Visitor::new("1.2.3.4".to_string(), ClientInfo::unknown());
        assert_eq!(visitor.section, "/");
        assert_eq!(visitor.path, "/");
        assert_eq!(visitor.interaction_type, InteractionType::Pageview);
        assert!(visitor.timestamp > 0);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let visitor = Visitor::new("1.2.3.4".to_string(), ClientInfo::unknown());
        let value = serde_json::to_value(&visitor).unwrap();
        assert!(value.get("localTime").is_some());
        assert!(value.get("interactionType").is_some());
        assert!(value.get("local_time").is_none());
    }
}
