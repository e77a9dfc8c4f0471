//! Predicates behind the built-in checks.

use email_address::EmailAddress;

/// Whether `value` is a syntactically valid email address with a
/// fully-qualified domain (`local@example.com`, not `local@localhost`).
pub fn is_email(value: &str) -> bool {
    if value.is_empty() || !EmailAddress::is_valid(value) {
        return false;
    }

    match value.rsplit_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !has_bare_whitespace(local) && is_qualified_domain(domain)
        }
        None => false,
    }
}

/// Whether `value` holds at least `min` characters. Counts code points,
/// not bytes.
pub fn has_min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Exact, case-sensitive equality.
pub fn equals(value: &str, other: &str) -> bool {
    value == other
}

fn is_qualified_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || !labels.iter().all(|label| is_domain_label(label)) {
        return false;
    }

    let Some(tld) = labels.last() else {
        return false;
    };
    let punycode = tld.len() > 4
        && tld
            .get(..4)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("xn--"));
    tld.chars().count() >= 2 && (punycode || tld.chars().all(char::is_alphabetic))
}

/// Whitespace is only allowed inside a quoted local part.
fn has_bare_whitespace(local: &str) -> bool {
    let quoted = local.len() >= 2 && local.starts_with('"') && local.ends_with('"');
    !quoted && local.chars().any(char::is_whitespace)
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_alphanumeric() || c == '-')
}
