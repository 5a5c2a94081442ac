/// Extract the lowercased domain after the last `@`, if any.
///
/// Returns `None` for malformed input (no `@`, or empty domain) rather
/// than panicking.
pub fn domain_of(email: &str) -> Option<String> {
    let (_, domain) = email.rsplit_once('@')?;
    if domain.is_empty() {
        return None;
    }
    Some(domain.to_ascii_lowercase())
}

/// Structural email check: non-empty local part, `@`, and a domain part
/// containing at least one `.`.
///
/// A syntactic gate only — says nothing about deliverability.
pub fn is_valid_email(email: &str) -> bool {
    match email.rsplit_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && domain.contains('.'),
        None => false,
    }
}
