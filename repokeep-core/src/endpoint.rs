//! Remote endpoint classification
//!
//! Git remotes come in three shapes: scheme-qualified URLs
//! (`https://host/path`), SCP-style addresses (`[user@]host[:port]:path`),
//! and plain local filesystem paths. This module tells them apart and
//! pulls SCP addresses into their components.

use url::Url;

/// Components of an SCP-style address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScpComponents {
    /// Login user, when the address carries one
    pub user: Option<String>,
    /// Host name or address
    pub host: String,
    /// Port, when the address carries one (kept textual, 1-5 digits)
    pub port: Option<String>,
    /// Repository path on the host
    pub path: String,
}

/// Whether the address is scheme-qualified, e.g. `https://host/path`
pub fn matches_scheme(address: &str) -> bool {
    match address.split_once("://") {
        Some((scheme, _)) => !scheme.is_empty() && !scheme.contains(':'),
        None => false,
    }
}

/// Whether the address has the SCP form `[user@]host[:port]:path`
pub fn matches_scp(address: &str) -> bool {
    parse_scp(address).is_some()
}

/// Parse an SCP-style address into its components
///
/// The host may not contain whitespace or colons, the port is one to
/// five digits, and the path must be non-empty and not start with a
/// backslash (which keeps `C:\repo` style Windows paths out).
pub fn parse_scp(address: &str) -> Option<ScpComponents> {
    let (user, rest) = match address.split_once('@') {
        Some((user, rest)) if !user.is_empty() => (Some(user.to_string()), rest),
        _ => (None, address),
    };

    let (host, after_host) = rest.split_once(':')?;
    if host.is_empty() || host.chars().any(char::is_whitespace) {
        return None;
    }

    if let Some((port, path)) = after_host.split_once(':') {
        if (1..=5).contains(&port.len())
            && port.chars().all(|c| c.is_ascii_digit())
            && is_valid_scp_path(path)
        {
            return Some(ScpComponents {
                user,
                host: host.to_string(),
                port: Some(port.to_string()),
                path: path.to_string(),
            });
        }
    }

    if is_valid_scp_path(after_host) {
        return Some(ScpComponents {
            user,
            host: host.to_string(),
            port: None,
            path: after_host.to_string(),
        });
    }

    None
}

fn is_valid_scp_path(path: &str) -> bool {
    !path.is_empty() && !path.starts_with('\\')
}

/// Whether the address names a local filesystem endpoint
///
/// `/home/user/src/project` is local; `https://host/project` and
/// `git@host:project.git` are not.
pub fn is_local_endpoint(address: &str) -> bool {
    !matches_scheme(address) && !matches_scp(address)
}

/// Best-effort web URL for a remote address
///
/// Scheme-qualified addresses are returned as parsed; SCP addresses are
/// rewritten as `https://host/path` with any `.git` suffix dropped.
/// Local endpoints have no web form.
pub fn web_url(address: &str) -> Option<String> {
    if matches_scheme(address) {
        return Url::parse(address).ok().map(|url| url.to_string());
    }

    parse_scp(address).map(|scp| {
        let path = scp.path.trim_end_matches(".git");
        format!("https://{}/{}", scp.host, path.trim_start_matches('/'))
    })
}
