//! URL and host validation helpers shared by the config reader and the
//! URL builder.

use url::Url;

/// Check if a string is a bare host, optionally with a port.
///
/// The host must come back unchanged after being placed in a URL, so
/// schemes, paths, credentials and non-canonical spellings are rejected.
pub fn is_valid_host(host: &str) -> bool {
    let url = match Url::parse(&format!("http://{}", host)) {
        Ok(url) => url,
        Err(_) => return false,
    };

    url.path() == "/"
        && url.query().is_none()
        && url.fragment().is_none()
        && url.username().is_empty()
        && url.password().is_none()
        && host_with_port(&url).as_deref() == Some(host)
}

/// Check if a string parses as an absolute URL
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// Strip every trailing `/`
pub fn trim_trailing_slashes(value: &str) -> &str {
    value.trim_end_matches('/')
}

/// The `host[:port]` part of a URL, port omitted when it is the default
pub fn host_with_port(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_host() {
        assert!(is_valid_host("rubygems.org"));
        assert!(is_valid_host("gems.example.com"));
        assert!(is_valid_host("localhost:8080"));
        assert!(is_valid_host("127.0.0.1"));
        assert!(is_valid_host("[::1]:9292"));

        assert!(!is_valid_host(""));
        assert!(!is_valid_host("7"));
        assert!(!is_valid_host("https://rubygems.org"));
        assert!(!is_valid_host("rubygems.org/gems"));
        assert!(!is_valid_host("user@rubygems.org"));
        assert!(!is_valid_host("RubyGems.org"));
        assert!(!is_valid_host("has space.com"));
        assert!(!is_valid_host("rubygems.org:80"));
    }

    #[test]
    fn test_is_valid_url() {
        assert!(is_valid_url("https://rubygems.org"));
        assert!(is_valid_url("https://rubygems.org/api/v1"));
        assert!(is_valid_url("http://localhost:9292/sub"));

        assert!(!is_valid_url(""));
        assert!(!is_valid_url("rubygems.org"));
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn test_trim_trailing_slashes() {
        assert_eq!(trim_trailing_slashes("https://a.com/"), "https://a.com");
        assert_eq!(trim_trailing_slashes("https://a.com/api///"), "https://a.com/api");
        assert_eq!(trim_trailing_slashes("https://a.com"), "https://a.com");
        assert_eq!(trim_trailing_slashes("/"), "");
    }

    #[test]
    fn test_host_with_port() {
        let url = Url::parse("https://gems.example.com:8443/gems/rails").unwrap();
        assert_eq!(host_with_port(&url), Some("gems.example.com:8443".to_string()));

        let url = Url::parse("https://rubygems.org:443/gems/rails").unwrap();
        assert_eq!(host_with_port(&url), Some("rubygems.org".to_string()));

        let url = Url::parse("data:text/plain,hello").unwrap();
        assert_eq!(host_with_port(&url), None);
    }
}
