use std::sync::LazyLock;

use regex::Regex;

use crate::ir::Docs;
use crate::parse::schema::SchemaNode;

static DEFAULTS_TO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Defaults to (.*)").expect("valid regex"));
static DEFAULT_IS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Default is (.*)").expect("valid regex"));

/// Build the docs for a node, optionally tagging the definition it came from.
pub fn docs_for(node: &SchemaNode, schema: Option<&str>) -> Docs {
    let description = node.description.clone();
    let default_value = description.as_deref().and_then(extract_default);
    Docs {
        description,
        default_value,
        schema: schema.map(str::to_string),
    }
}

/// Capture the value of a "Defaults to X" or "Default is X" sentence, up to the end of its line.
pub fn extract_default(description: &str) -> Option<String> {
    [&*DEFAULTS_TO, &*DEFAULT_IS]
        .iter()
        .find_map(|re| re.captures(description))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
