pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Deployment tokens for the EmailJS relay.
///
/// Baked in at compile time since the browser bundle has no environment to
/// read from. Override with `PORTFOLIO_EMAILJS_*` when building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
}

impl RelayConfig {
    pub fn from_build_env() -> Self {
        Self {
            endpoint: option_env!("PORTFOLIO_EMAILJS_ENDPOINT")
                .unwrap_or(DEFAULT_ENDPOINT)
                .to_string(),
            service_id: option_env!("PORTFOLIO_EMAILJS_SERVICE_ID")
                .unwrap_or("service_r339v3q")
                .to_string(),
            template_id: option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID")
                .unwrap_or("template_19lqq9f")
                .to_string(),
            user_id: option_env!("PORTFOLIO_EMAILJS_USER_ID")
                .unwrap_or("WSSb5ojVuhYEeO7hy")
                .to_string(),
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// RFC 3339 timestamp captured by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Year the site was built, shown in the footer.
pub fn build_year() -> i32 {
    parse_year(BUILD_TIME).unwrap_or(2025)
}

fn parse_year(timestamp: &str) -> Option<i32> {
    use chrono::Datelike;
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| t.year())
}
