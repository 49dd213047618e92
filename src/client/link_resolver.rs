//! URI-template expansion and relative-href resolution.
//!
//! Pure functions, no I/O. The navigator uses them on every hop: first the
//! href is expanded as a template against the caller's parameters, then the
//! result is resolved against the current base location to get the absolute
//! URL actually dispatched.

use crate::error::Result;
use std::collections::BTreeMap;
use url::Url;

/// Expand `{name}` placeholders in a templated href.
///
/// Substitutes every `{name}` (and comma-separated `{a,b}` lists, whose
/// matched values are joined with `,` as RFC 6570 does) from `params`.
/// Placeholders with no matching parameter expand to the empty string.
/// Returns the expanded href together with the parameters no placeholder
/// consumed; the navigator sends those as query parameters (consumed
/// parameters are not re-sent).
pub fn expand(
    template: &str,
    params: &BTreeMap<String, String>,
) -> (String, BTreeMap<String, String>) {
    let mut expanded = String::with_capacity(template.len());
    let mut consumed = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        expanded.push_str(&rest[..open]);
        match rest[open..].find('}') {
            Some(close_offset) => {
                let expression = &rest[open + 1..open + close_offset];
                let mut values = Vec::new();
                for name in expression.split(',').map(str::trim) {
                    if let Some(value) = params.get(name) {
                        values.push(value.as_str());
                        consumed.push(name.to_string());
                    }
                }
                expanded.push_str(&values.join(","));
                rest = &rest[open + close_offset + 1..];
            }
            None => {
                // Unterminated expression, keep the rest literally.
                expanded.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    expanded.push_str(rest);

    let unused = params
        .iter()
        .filter(|(name, _)| !consumed.iter().any(|c| c.as_str() == name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    (expanded, unused)
}

/// Resolve a possibly-relative href against a base URL (RFC 3986).
///
/// Absolute hrefs are returned as-is; relative ones join against the base
/// the way a browser would.
pub fn make_absolute(base: &Url, href: &str) -> Result<Url> {
    Ok(base.join(href)?)
}
