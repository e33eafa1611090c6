use heck::{ToLowerCamelCase, ToPascalCase};

use crate::config::NamingMode;
use crate::ir::ScalarKind;
use crate::parse::schema::ResourceIdentity;

/// Derive the declared type name for a `$ref` target.
///
/// - `Short`: `#/definitions/io.k8s.api.core.v1.PodSpec` → `PodSpec`
/// - `Qualified`: `#/definitions/io.k8s.api.core.v1.PodSpec` → `IoK8sApiCoreV1PodSpec`
pub fn type_name_for_ref(ref_path: &str, mode: NamingMode) -> String {
    let definition = ref_path.rsplit('/').next().unwrap_or(ref_path);
    type_name_for_definition(definition, mode)
}

/// Derive the declared type name for a definition name.
pub fn type_name_for_definition(definition: &str, mode: NamingMode) -> String {
    match mode {
        NamingMode::Short => {
            let last = definition.rsplit('.').next().unwrap_or(definition);
            if is_identifier(last) {
                last.to_string()
            } else {
                sanitize_identifier(last).to_pascal_case()
            }
        }
        NamingMode::Qualified => sanitize_identifier(definition).to_pascal_case(),
    }
}

/// Name of the options type for a resource kind.
pub fn options_name(kind: &str) -> String {
    format!("{kind}Options")
}

/// Output unit base name: `<group>-<kind>-<version>`, lower-cased, with dots in the group
/// replaced by hyphens. The core (empty) group is omitted.
pub fn module_name(identity: &ResourceIdentity) -> String {
    let group = identity.group.replace('.', "-");
    [group.as_str(), identity.kind.as_str(), identity.version.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Factory function name for a union variant, e.g. `fromString`.
pub fn factory_name(kind: ScalarKind) -> String {
    format!("from_{kind}").to_lower_camel_case()
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Sanitize a string to be a valid identifier.
fn sanitize_identifier(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut prev_was_separator = false;

    for (i, ch) in name.chars().enumerate() {
        if ch.is_alphanumeric() {
            if i == 0 && ch.is_ascii_digit() {
                result.push('_');
            }
            if prev_was_separator && !result.is_empty() {
                result.push('_');
            }
            result.push(ch);
            prev_was_separator = false;
        } else {
            prev_was_separator = true;
        }
    }

    if result.is_empty() {
        return "Unnamed".to_string();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(group: &str, kind: &str, version: &str) -> ResourceIdentity {
        ResourceIdentity {
            group: group.to_string(),
            kind: kind.to_string(),
            version: version.to_string(),
        }
    }

    #[test]
    fn test_short_name_takes_trailing_component() {
        assert_eq!(
            type_name_for_ref("#/definitions/io.k8s.api.core.v1.PodSpec", NamingMode::Short),
            "PodSpec"
        );
        assert_eq!(
            type_name_for_ref("#/definitions/Plain", NamingMode::Short),
            "Plain"
        );
    }

    #[test]
    fn test_short_name_keeps_acronyms() {
        assert_eq!(
            type_name_for_definition(
                "io.k8s.apiextensions.v1.JSONSchemaProps",
                NamingMode::Short
            ),
            "JSONSchemaProps"
        );
    }

    #[test]
    fn test_short_name_sanitizes_invalid_identifiers() {
        assert_eq!(
            type_name_for_definition("com.example.node-pool", NamingMode::Short),
            "NodePool"
        );
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(
            type_name_for_ref("#/definitions/io.k8s.api.core.v1.PodSpec", NamingMode::Qualified),
            "IoK8sApiCoreV1PodSpec"
        );
    }

    #[test]
    fn test_module_name() {
        assert_eq!(
            module_name(&identity("example.com", "Widget", "v1")),
            "example-com-widget-v1"
        );
        assert_eq!(module_name(&identity("", "Pod", "v1")), "pod-v1");
        assert_eq!(
            module_name(&identity("apps", "ReplicaSet", "v1")),
            "apps-replicaset-v1"
        );
    }

    #[test]
    fn test_factory_names() {
        assert_eq!(factory_name(ScalarKind::String), "fromString");
        assert_eq!(factory_name(ScalarKind::Number), "fromNumber");
        assert_eq!(factory_name(ScalarKind::Integer), "fromInteger");
        assert_eq!(factory_name(ScalarKind::Boolean), "fromBoolean");
    }

    #[test]
    fn test_options_name() {
        assert_eq!(options_name("Deployment"), "DeploymentOptions");
    }
}
