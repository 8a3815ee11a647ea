pub const DEFAULT_LOGO_BASE_URL: &str = "https://api.faviconkit.com";

/// Maps a company domain to the URL of its logo image.
///
/// Accepts loose input such as `https://www.acme.com/about` and keeps only
/// the host. Returns `None` when nothing usable is left.
#[must_use]
pub fn logo_url(base_url: &str, domain_name: &str) -> Option<String> {
    let host = sanitize_domain(domain_name)?;
    Some(format!("{}/{host}/144", base_url.trim_end_matches('/')))
}

fn sanitize_domain(domain_name: &str) -> Option<&str> {
    let trimmed = domain_name.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    let without_www = without_scheme
        .strip_prefix("www.")
        .unwrap_or(without_scheme);
    let host = without_www.split('/').next().unwrap_or_default();
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}
