use kgen_core::ir::TypeExpr;

/// Map a `TypeExpr` to its TypeScript type string representation.
pub fn type_expr_to_ts(expr: &TypeExpr) -> String {
    match expr {
        TypeExpr::String => "string".to_string(),
        TypeExpr::Number => "number".to_string(),
        TypeExpr::Boolean => "boolean".to_string(),
        TypeExpr::Timestamp => "Date".to_string(),
        TypeExpr::Ref(name) => name.clone(),
        TypeExpr::Array(inner) => format!("{}[]", type_expr_to_ts(inner)),
        TypeExpr::Map(value_type) => {
            format!("{{ [key: string]: {} }}", type_expr_to_ts(value_type))
        }
    }
}

/// Render a property name, quoting it when it is not a valid identifier.
pub fn property_key(name: &str) -> String {
    let mut chars = name.chars();
    let is_identifier = match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    };
    if is_identifier {
        name.to_string()
    } else {
        format!("'{}'", escape_single_quoted(name))
    }
}

/// Escape a value for use inside a single-quoted TypeScript string literal.
pub fn escape_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
