//! Host/IP validation and `host:port` rendering for the monitor endpoint.
//!
//! Validation is purely syntactic; no name resolution happens here.

use std::net::IpAddr;

use crate::error::{Result, StatsError};

const MAX_HOSTNAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Accept an IPv4/IPv6 literal or an RFC 1123 hostname.
pub fn validate_host_or_ip(host: &str) -> Result<()> {
    if host.parse::<IpAddr>().is_ok() {
        return Ok(());
    }
    if looks_like_ipv4(host) {
        // all digits and dots but not an address, e.g. 300.1.1.1
        return Err(StatsError::HostValidation(format!("`{host}' is not a valid ip")));
    }
    if is_valid_hostname(host) {
        Ok(())
    } else {
        Err(StatsError::HostValidation(format!("`{host}' is not a valid hostname")))
    }
}

fn looks_like_ipv4(host: &str) -> bool {
    host.contains('.') && host.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn is_valid_hostname(host: &str) -> bool {
    let host = host.strip_suffix('.').unwrap_or(host);
    if host.is_empty() || host.len() > MAX_HOSTNAME_LEN {
        return false;
    }
    host.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

/// Render `host:port`. The host is used as given, IPv6 literals included.
pub fn endpoint(host: &str, port: u16) -> String {
    format!("{host}:{port}")
}
