use woothee::parser::Parser;

const UNKNOWN: &str = "Unknown";
const DEFAULT_DEVICE: &str = "Desktop";

/// Browser, OS and device labels derived from a User-Agent header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInfo {
    pub browser: String,
    pub os: String,
    pub device: String,
}

impl ClientInfo {
    pub fn unknown() -> Self {
        Self {
            browser: UNKNOWN.to_string(),
            os: UNKNOWN.to_string(),
            device: DEFAULT_DEVICE.to_string(),
        }
    }
}

/// Best-effort User-Agent parsing. Anything the parser cannot place degrades
/// to the default labels; this never fails.
pub fn parse_user_agent(user_agent: Option<&str>) -> ClientInfo {
    let parsed = user_agent.and_then(|ua| Parser::new().parse(ua));

    match parsed {
        Some(result) => ClientInfo {
            browser: join_name_version(result.name, &result.version),
            os: join_name_version(result.os, &result.os_version),
            device: device_label(result.category).to_string(),
        },
        None => ClientInfo::unknown(),
    }
}

// woothee reports missing fields as the literal "UNKNOWN".
fn join_name_version(name: &str, version: &str) -> String {
    let name = if name.is_empty() || name == "UNKNOWN" {
        UNKNOWN
    } else {
        name
    };
    let version = if version == "UNKNOWN" { "" } else { version };
    format!("{} {}", name, version).trim().to_string()
}

fn device_label(category: &str) -> &'static str {
    match category {
        "smartphone" | "mobilephone" => "Mobile",
        "crawler" => "Bot",
        _ => DEFAULT_DEVICE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_DESKTOP: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
        AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";
    const SAFARI_IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
        AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";

    #[test]
    fn missing_header_degrades_to_defaults() {
        let info = parse_user_agent(None);
        assert_eq!(info, ClientInfo::unknown());
    }

    #[test]
    fn unparseable_header_degrades_to_defaults() {
        let info = parse_user_agent(Some("definitely not a browser"));
        assert_eq!(info.device, "Desktop");
        assert_eq!(info.os, "Unknown");
    }

    #[test]
    fn desktop_chrome_is_recognized() {
        let info = parse_user_agent(Some(CHROME_DESKTOP));
        assert!(info.browser.starts_with("Chrome"), "got {}", info.browser);
        assert_eq!(info.device, "Desktop");
    }

    #[test]
    fn iphone_maps_to_mobile() {
        let info = parse_user_agent(Some(SAFARI_IPHONE));
        assert_eq!(info.device, "Mobile");
    }

    #[test]
    fn join_trims_missing_version() {
        assert_eq!(join_name_version("Firefox", "UNKNOWN"), "Firefox");
        assert_eq!(join_name_version("UNKNOWN", "UNKNOWN"), "Unknown");
        assert_eq!(join_name_version("Chrome", "122.0"), "Chrome 122.0");
    }
}
