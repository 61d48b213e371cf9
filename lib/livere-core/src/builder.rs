//! Request target composition.
//!
//! [`build_target`] turns a service path, a method path template and the
//! bound parameters into a relative URL. It performs no I/O.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;

use crate::{BoundParameter, ParamLocation};

/// Everything but the RFC 3986 unreserved characters (`A-Z a-z 0-9 - . _ ~`).
const UNRESERVED_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// `{+name}` expansion keeps reserved characters such as `/`.
const RESERVED_EXPANSION_ENCODE_SET: &AsciiSet = &UNRESERVED_ENCODE_SET
    .remove(b':')
    .remove(b'/')
    .remove(b'?')
    .remove(b'#')
    .remove(b'[')
    .remove(b']')
    .remove(b'@')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// A relative request target: expanded path plus ordered query items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    /// Path relative to the base URL, placeholders expanded.
    pub path: String,
    /// Query items in parameter order, not yet encoded.
    pub query: Vec<(String, String)>,
}

impl RequestTarget {
    /// The relative URL with its percent-encoded query string.
    #[must_use]
    pub fn relative_url(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }

        let query = self
            .query
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(name, UNRESERVED_ENCODE_SET),
                    utf8_percent_encode(value, UNRESERVED_ENCODE_SET)
                )
            })
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{query}", self.path)
    }
}

/// Compose a request target.
///
/// The method template is appended to `service_path`, unless it starts with
/// `/`, in which case it is resolved from the root. Path-located parameters
/// fill `{name}` (encoded as one segment) and `{+name}` (reserved characters
/// kept) placeholders; every other parameter becomes a query item.
///
/// # Example
///
/// ```
/// use livere_core::{BoundParameter, build_target};
///
/// let target = build_target(
///     "v1/count/",
///     "page",
///     &[BoundParameter::query("refer", "www.bloter.net/archives/244922")],
/// );
/// assert_eq!(
///     target.relative_url(),
///     "v1/count/page?refer=www.bloter.net%2Farchives%2F244922"
/// );
/// ```
#[must_use]
pub fn build_target(
    service_path: &str,
    path_template: &str,
    parameters: &[BoundParameter],
) -> RequestTarget {
    let template = match path_template.strip_prefix('/') {
        Some(from_root) => from_root.to_string(),
        None => format!("{service_path}{path_template}"),
    };

    let mut query = Vec::new();
    for param in parameters {
        if param.location == ParamLocation::Path {
            continue;
        }
        match &param.value {
            Value::Array(items) => {
                query.extend(
                    items
                        .iter()
                        .filter_map(render_scalar)
                        .map(|value| (param.name.clone(), value)),
                );
            }
            value => {
                if let Some(value) = render_scalar(value) {
                    query.push((param.name.clone(), value));
                }
            }
        }
    }

    RequestTarget {
        path: expand_template(&template, parameters),
        query,
    }
}

/// String form of a parameter value; `None` for null.
fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

fn path_value(parameters: &[BoundParameter], name: &str) -> Option<String> {
    let param = parameters
        .iter()
        .find(|p| p.location == ParamLocation::Path && p.name == name)?;
    match &param.value {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(render_scalar)
                .collect::<Vec<_>>()
                .join(","),
        ),
        value => render_scalar(value),
    }
}

fn expand_template(template: &str, parameters: &[BoundParameter]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let (literal, tail) = rest.split_at(start);
        out.push_str(literal);

        let Some(end) = tail.find('}') else {
            // Unterminated placeholder: keep the remainder verbatim.
            out.push_str(tail);
            return out;
        };

        let expression = tail.get(1..end).unwrap_or_default();
        let (name, encode_set) = match expression.strip_prefix('+') {
            Some(name) => (name, RESERVED_EXPANSION_ENCODE_SET),
            None => (expression, UNRESERVED_ENCODE_SET),
        };

        if let Some(value) = path_value(parameters, name) {
            out.extend(utf8_percent_encode(&value, encode_set));
        }

        rest = tail.get(end + 1..).unwrap_or_default();
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ParameterSpec;

    #[test]
    fn appends_template_to_service_path() {
        let target = build_target("v1/count/", "page", &[]);
        assert_eq!(target.path, "v1/count/page");
        assert!(target.query.is_empty());
        assert_eq!(target.relative_url(), "v1/count/page");
    }

    #[test]
    fn leading_slash_resolves_from_root() {
        let target = build_target("v1/count/", "/v2/status", &[]);
        assert_eq!(target.path, "v2/status");
    }

    #[test]
    fn encodes_query_values() {
        let params = [
            ParameterSpec::query("refer").bind(json!("www.bloter.net/archives/244922")),
            ParameterSpec::query("title").bind(json!("hello world & more")),
        ];

        let target = build_target("v1/count/", "page", &params);
        assert_eq!(
            target.relative_url(),
            "v1/count/page?refer=www.bloter.net%2Farchives%2F244922&title=hello%20world%20%26%20more"
        );
    }

    #[test]
    fn renders_scalars_and_repeats_arrays() {
        let params = [
            ParameterSpec::query("active").bind(json!(true)),
            ParameterSpec::query("limit").bind(json!(20)),
            ParameterSpec::query("tag").bind(json!(["a", "b c"])),
            ParameterSpec::query("skipped").bind(Value::Null),
        ];

        let target = build_target("", "list", &params);
        assert_eq!(
            target.query,
            vec![
                ("active".to_string(), "true".to_string()),
                ("limit".to_string(), "20".to_string()),
                ("tag".to_string(), "a".to_string()),
                ("tag".to_string(), "b c".to_string()),
            ]
        );
        assert_eq!(
            target.relative_url(),
            "list?active=true&limit=20&tag=a&tag=b%20c"
        );
    }

    #[test]
    fn substitutes_path_parameters() {
        let params = [
            ParameterSpec::path("site").bind(json!("bloter net")),
            ParameterSpec::path("id").bind(json!(244_922)),
            ParameterSpec::query("refer").bind(json!("x")),
        ];

        let target = build_target("v1/count/", "site/{site}/page/{id}", &params);
        assert_eq!(target.path, "v1/count/site/bloter%20net/page/244922");
        assert_eq!(target.query, vec![("refer".to_string(), "x".to_string())]);
    }

    #[test]
    fn simple_expansion_encodes_slash_reserved_keeps_it() {
        let params = [ParameterSpec::path("name").bind(json!("archives/244922"))];

        assert_eq!(
            build_target("", "page/{name}", &params).path,
            "page/archives%2F244922"
        );
        assert_eq!(
            build_target("", "page/{+name}", &params).path,
            "page/archives/244922"
        );
    }

    #[test]
    fn unbound_placeholder_expands_to_empty() {
        let target = build_target("v1/", "page/{missing}/x", &[]);
        assert_eq!(target.path, "v1/page//x");
    }

    #[test]
    fn array_path_value_is_comma_joined() {
        let params = [ParameterSpec::path("ids").bind(json!([1, 2, 3]))];
        assert_eq!(build_target("", "pages/{ids}", &params).path, "pages/1%2C2%2C3");
        assert_eq!(build_target("", "pages/{+ids}", &params).path, "pages/1,2,3");
    }

    #[test]
    fn unterminated_placeholder_is_literal() {
        let target = build_target("", "page/{oops", &[]);
        assert_eq!(target.path, "page/{oops");
    }

    #[test]
    fn body_located_parameters_go_to_query() {
        let params = [crate::BoundParameter {
            name: "draft".to_string(),
            location: ParamLocation::Body,
            type_name: "boolean".to_string(),
            value: json!(false),
        }];

        let target = build_target("", "page", &params);
        assert_eq!(target.relative_url(), "page?draft=false");
    }

    #[test]
    fn build_is_deterministic() {
        let params = [
            ParameterSpec::query("b").bind(json!("2")),
            ParameterSpec::query("a").bind(json!("1")),
        ];
        let first = build_target("v1/", "x", &params);
        let second = build_target("v1/", "x", &params);
        assert_eq!(first, second);
        assert_eq!(first.relative_url(), "v1/x?b=2&a=1");
    }
}
