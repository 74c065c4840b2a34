//! URL template resolution.
//!
//! # Responsibilities
//! - Scan a path template for `{name}` placeholders, left to right
//! - Look each name up as a field of the request's JSON object form
//! - Substitute every occurrence of `{name}` with the field's string form
//!
//! # Design Decisions
//! - No percent-encoding: callers supply URL-safe identifiers
//! - An open brace with no closing brace ends the scan; it never fails
//! - What happens to a placeholder with no value is an explicit [`PlaceholderPolicy`]

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// What to do with a placeholder whose field is missing or null.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderPolicy {
    /// Leave `{name}` in the path unchanged.
    #[default]
    Verbatim,
    /// Substitute the empty string.
    Empty,
    /// Fail the call.
    Reject,
}

/// Errors raised while resolving a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Placeholder '{{{name}}}' in template '{template}' has no value on the request")]
    UnresolvedPlaceholder { name: String, template: String },
}

/// A placeholder name and the value it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlSegment {
    pub name: String,
    pub value: String,
}

/// Collect the segments to substitute in `template`.
pub fn extract_segments(
    template: &str,
    request: &Value,
    policy: PlaceholderPolicy,
) -> Result<Vec<UrlSegment>, TemplateError> {
    let mut segments = Vec::new();
    let mut last = 0;

    while let Some(open) = template[last..].find('{').map(|i| i + last) {
        let Some(close) = template[open + 1..].find('}').map(|i| i + open + 1) else {
            break;
        };

        let name = &template[open + 1..close];
        match field_value(request, name) {
            Some(value) => segments.push(UrlSegment {
                name: name.to_string(),
                value,
            }),
            None => match policy {
                PlaceholderPolicy::Verbatim => {}
                PlaceholderPolicy::Empty => segments.push(UrlSegment {
                    name: name.to_string(),
                    value: String::new(),
                }),
                PlaceholderPolicy::Reject => {
                    return Err(TemplateError::UnresolvedPlaceholder {
                        name: name.to_string(),
                        template: template.to_string(),
                    });
                }
            },
        }

        last = open + 1;
    }

    Ok(segments)
}

/// Resolve `template` against the request's fields.
pub fn resolve(
    template: &str,
    request: &Value,
    policy: PlaceholderPolicy,
) -> Result<String, TemplateError> {
    let segments = extract_segments(template, request, policy)?;

    let mut resolved = template.to_string();
    for segment in &segments {
        resolved = resolved.replace(&format!("{{{}}}", segment.name), &segment.value);
    }
    Ok(resolved)
}

/// String form of the request field `name`, or `None` when absent or null.
fn field_value(request: &Value, name: &str) -> Option<String> {
    match request.as_object()?.get(name)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
