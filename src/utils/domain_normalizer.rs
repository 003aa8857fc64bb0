//! Company domain normalization.
//!
//! Callers pass whatever they have at hand: a bare domain, a website URL, or
//! something pasted from a browser bar. The CRM stores the bare, lowercase
//! primary domain, so lookups go through [`normalize_domain`] first.

use url::{Host, Url};

/// Errors that can occur during domain normalization.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DomainNormalizationError {
    #[error("Domain must not be empty")]
    Empty,

    #[error("Invalid domain: {0}")]
    InvalidFormat(String),
}

/// Normalizes user input to a bare company domain.
///
/// Only the shape of the input is cleaned up; any host is accepted, including
/// single-label names and IP literals.
///
/// # Normalization Rules
///
/// 1. **Whitespace**: Trimmed
/// 2. **Scheme**: Optional; `http://`/`https://` accepted and dropped
/// 3. **Path, query, fragment, port, credentials**: Dropped
/// 4. **Case**: Lowercased
/// 5. **IDNs**: Returned in Unicode form (`münchen.de`, not `xn--mnchen-3ya.de`)
/// 6. **`www.` prefix**: Removed unless what remains is a single label
/// 7. **Trailing dot**: Removed
///
/// # Errors
///
/// Returns [`DomainNormalizationError::Empty`] for blank input.
/// Returns [`DomainNormalizationError::InvalidFormat`] if no host can be parsed.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_domain("https://www.Example.com/about").unwrap(), "example.com");
/// assert_eq!(normalize_domain("example.com").unwrap(), "example.com");
/// ```
pub fn normalize_domain(input: &str) -> Result<String, DomainNormalizationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DomainNormalizationError::Empty);
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };

    let url = Url::parse(&candidate)
        .map_err(|e| DomainNormalizationError::InvalidFormat(format!("{trimmed}: {e}")))?;

    let host = match url.host() {
        // The parser hands back IDNs as lowercase punycode.
        Some(Host::Domain(host)) => idna::domain_to_unicode(host).0,
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => addr.to_string(),
        None => {
            return Err(DomainNormalizationError::InvalidFormat(format!(
                "{trimmed}: no host"
            )));
        }
    };

    let host = host.trim_end_matches('.');
    let host = match host.strip_prefix("www.") {
        Some(rest) if rest.contains('.') => rest,
        _ => host,
    };

    if host.is_empty() {
        return Err(DomainNormalizationError::InvalidFormat(trimmed.to_string()));
    }

    Ok(host.to_string())
}
