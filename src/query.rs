// src/query.rs
//! Builds crt.sh search URLs from raw input domains

use anyhow::{Context, Result};
use url::Url;

/// Search URL with a `%` wildcard so crt.sh returns every subdomain
pub const DEFAULT_URL_TEMPLATE: &str = "https://crt.sh/?q=%.{{host}}";

const HOST_PLACEHOLDER: &str = "{{host}}";

/// Reduce a raw input line to the authority crt.sh should be queried for.
///
/// Accepts bare domains as well as full URLs; path, query and fragment are
/// dropped and a single leading `www.` is removed.
pub fn normalize_host(raw: &str) -> Result<String> {
    let lower = raw.to_ascii_lowercase();
    let with_scheme = if lower.starts_with("http://") || lower.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{}", raw)
    };

    let parsed = Url::parse(&with_scheme)
        .with_context(|| format!("Invalid domain or URL: {}", raw))?;

    let host = parsed
        .host_str()
        .with_context(|| format!("No host in URL: {}", raw))?;

    let authority = match written_port(&with_scheme, &parsed) {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };

    Ok(match authority.strip_prefix("www.") {
        Some(stripped) => stripped.to_string(),
        None => authority,
    })
}

/// Port spelled out in the input, even when it is the scheme's default.
///
/// `Url` drops default ports, so the raw authority decides.
fn written_port(with_scheme: &str, parsed: &Url) -> Option<u16> {
    let after_scheme = with_scheme.split_once("://")?.1;
    let authority = after_scheme.split(['/', '?', '#', '\\']).next()?;
    let host_port = authority.rsplit('@').next()?;
    let host_end = host_port.rfind(']').unwrap_or(0);
    if host_port[host_end..].contains(':') {
        parsed.port_or_known_default()
    } else {
        None
    }
}

/// Substitute the normalized host into the search URL template
pub fn build_query_url(template: &str, raw: &str) -> Result<String> {
    let host = normalize_host(raw)?;
    Ok(template.replacen(HOST_PLACEHOLDER, &host, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_domain() {
        let url = build_query_url(DEFAULT_URL_TEMPLATE, "example.com").unwrap();
        assert_eq!(url, "https://crt.sh/?q=%.example.com");
    }

    #[test]
    fn test_www_and_path_are_dropped() {
        let url = build_query_url(DEFAULT_URL_TEMPLATE, "http://www.example.com/path").unwrap();
        assert_eq!(url, "https://crt.sh/?q=%.example.com");
    }

    #[test]
    fn test_https_scheme_query_and_fragment() {
        let url =
            build_query_url(DEFAULT_URL_TEMPLATE, "https://shop.example.org/a?b=c#d").unwrap();
        assert_eq!(url, "https://crt.sh/?q=%.shop.example.org");
    }

    #[test]
    fn test_explicit_port_is_kept() {
        assert_eq!(normalize_host("example.com:8443").unwrap(), "example.com:8443");
        assert_eq!(normalize_host("www.example.com:8443").unwrap(), "example.com:8443");
    }

    #[test]
    fn test_default_port_spelled_out_is_kept() {
        assert_eq!(normalize_host("http://www.example.com:80/").unwrap(), "example.com:80");
        assert_eq!(normalize_host("https://example.com:443/x").unwrap(), "example.com:443");
        assert_eq!(normalize_host("http://[::1]/").unwrap(), "[::1]");
    }

    #[test]
    fn test_domains_starting_with_http() {
        for domain in ["httpbin.org", "http-example.com", "httpstat.us"] {
            let url = build_query_url(DEFAULT_URL_TEMPLATE, domain).unwrap();
            assert_eq!(url, format!("https://crt.sh/?q=%.{}", domain));
        }
        assert_eq!(normalize_host("HTTPS://www.httpbin.org").unwrap(), "httpbin.org");
    }

    #[test]
    fn test_only_one_www_prefix_stripped() {
        assert_eq!(normalize_host("www.www.example.com").unwrap(), "www.example.com");
        assert_eq!(normalize_host("wwwexample.com").unwrap(), "wwwexample.com");
    }

    #[test]
    fn test_unparseable_input() {
        assert!(normalize_host("exa mple.com").is_err());
        assert!(normalize_host("").is_err());
        assert!(build_query_url(DEFAULT_URL_TEMPLATE, "http://[::1").is_err());
    }

    #[test]
    fn test_custom_template() {
        let url = build_query_url("http://127.0.0.1:8080/?q=%.{{host}}", "example.com").unwrap();
        assert_eq!(url, "http://127.0.0.1:8080/?q=%.example.com");
    }
}
