//! CORS policy for the session API.
//!
//! Configured origins are either exact (`http://localhost:5173`) or a
//! subdomain wildcard (`https://*.vercel.app`).

use http::{request::Parts, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// One allowed-origin entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginPattern {
    Exact(String),
    /// `scheme://*.domain`: any non-empty subdomain of `domain`, no port.
    Subdomain { scheme: String, domain: String },
}

impl OriginPattern {
    pub fn parse(entry: &str) -> Self {
        let entry = entry.trim().trim_end_matches('/');
        if let Some((scheme, host)) = entry.split_once("://") {
            if let Some(domain) = host.strip_prefix("*.") {
                return OriginPattern::Subdomain {
                    scheme: scheme.to_ascii_lowercase(),
                    domain: domain.to_ascii_lowercase(),
                };
            }
        }
        OriginPattern::Exact(entry.to_ascii_lowercase())
    }

    pub fn matches(&self, origin: &str) -> bool {
        let origin = origin.to_ascii_lowercase();
        match self {
            OriginPattern::Exact(allowed) => origin == *allowed,
            OriginPattern::Subdomain { scheme, domain } => {
                let Some(host) = origin
                    .strip_prefix(scheme.as_str())
                    .and_then(|rest| rest.strip_prefix("://"))
                else {
                    return false;
                };
                let Some(label) = host
                    .strip_suffix(domain.as_str())
                    .and_then(|rest| rest.strip_suffix('.'))
                else {
                    return false;
                };
                !label.is_empty()
                    && label
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
            }
        }
    }
}

/// Build the CORS layer from configured origin entries.
///
/// Any header a preflight asks for is allowed.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let patterns: Vec<OriginPattern> = origins.iter().map(|o| OriginPattern::parse(o)).collect();
    tracing::debug!(?patterns, "CORS origins configured");

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .map(|origin| patterns.iter().any(|p| p.matches(origin)))
                    .unwrap_or(false)
            },
        ))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CORS_ORIGINS;

    fn defaults() -> Vec<OriginPattern> {
        DEFAULT_CORS_ORIGINS
            .iter()
            .map(|o| OriginPattern::parse(o))
            .collect()
    }

    fn allowed(origin: &str) -> bool {
        defaults().iter().any(|p| p.matches(origin))
    }

    #[test]
    fn parses_wildcard_entries() {
        assert_eq!(
            OriginPattern::parse("https://*.vercel.app"),
            OriginPattern::Subdomain {
                scheme: "https".to_string(),
                domain: "vercel.app".to_string()
            }
        );
        assert_eq!(
            OriginPattern::parse("http://localhost:5173/"),
            OriginPattern::Exact("http://localhost:5173".to_string())
        );
    }

    #[test]
    fn accepts_local_dev_server() {
        assert!(allowed("http://localhost:5173"));
    }

    #[test]
    fn accepts_vercel_subdomains() {
        assert!(allowed("https://app.vercel.app"));
        assert!(allowed("https://catalog-git-main-team.vercel.app"));
    }

    #[test]
    fn rejects_lookalike_and_bare_domains() {
        assert!(!allowed("https://vercel.app.evil.com"));
        assert!(!allowed("https://evilvercel.app"));
        assert!(!allowed("https://vercel.app"));
    }

    #[test]
    fn rejects_other_schemes_and_ports() {
        assert!(!allowed("http://app.vercel.app"));
        assert!(!allowed("https://app.vercel.app:8443"));
        assert!(!allowed("http://localhost:3000"));
    }
}
