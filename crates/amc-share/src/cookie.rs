//! Minimal `Cookie` header parsing.
//!
//! Accepts both the request header form (`a=1; b=2`) and `document.cookie`,
//! which use the same syntax.

/// Split a cookie header into `(name, value)` pairs.
///
/// Values are percent-decoded and stripped of surrounding double quotes.
/// Pairs without `=` or with an empty name are skipped.
pub fn parse_cookie_header(header: &str) -> Vec<(String, String)> {
    header
        .split(';')
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            let value = urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string());
            Some((name.to_string(), value))
        })
        .collect()
}

/// Value of the first cookie called `name`, if any.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    parse_cookie_header(header)
        .into_iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v)
}
