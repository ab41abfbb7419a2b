//! Boundary credential validators.
//!
//! Intentionally loose checks, sufficient for a mock sign-in form; anything
//! more belongs to a real identity provider.

/// Shape check only: a non-empty local part, exactly one `@`, a dotted
/// domain, and no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Minimum length only.
pub fn is_valid_password(password: &str) -> bool {
    password.len() >= 6
}
