use std::net::{Ipv4Addr, Ipv6Addr};

use email_address::EmailAddress;

/// Pragmatic address check used to filter configured recipients.
///
/// Accepts a bare ASCII `local@domain` whose domain carries at least one dot
/// and whose labels hold only letters, digits and inner hyphens. A bracketed
/// IP literal is accepted as the domain. Display-name forms and anything with
/// whitespace are rejected.
pub fn is_likely_email(value: &str) -> bool {
    if value
        .chars()
        .any(|c| c.is_whitespace() || c == '<' || c == '>')
    {
        return false;
    }

    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };

    !local.is_empty()
        && local.is_ascii()
        && domain.contains('.')
        && EmailAddress::is_valid(value)
        && is_valid_domain(domain)
}

fn is_valid_domain(domain: &str) -> bool {
    if let Some(literal) = domain
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        return match literal.strip_prefix("IPv6:") {
            Some(v6) => v6.parse::<Ipv6Addr>().is_ok(),
            None => literal.parse::<Ipv4Addr>().is_ok(),
        };
    }

    domain.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
