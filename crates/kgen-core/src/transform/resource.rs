use crate::config::NamingMode;
use crate::error::EmitError;
use crate::ir::{ConstructDecl, ResourceUnit};
use crate::parse::discovery::ResourceSchema;
use crate::parse::document::SchemaDocument;
use crate::parse::ref_resolve::{RefResolver, definition_ref, parse_ref_name};

use super::docs::docs_for;
use super::naming::{module_name, options_name};
use super::scheduler::EmissionScheduler;
use super::type_emitter::emit_type;
use super::type_mapper::{DeferredType, TypeMapper};

/// Properties the construct fills in itself.
const CONSTRUCT_MANAGED: [&str; 3] = ["apiVersion", "kind", "status"];

/// Emits the options type, construct, and every transitively referenced type of one resource.
pub struct ResourceEmitter<'a> {
    resolver: RefResolver<'a>,
    naming: NamingMode,
}

impl<'a> ResourceEmitter<'a> {
    pub fn new(doc: &'a SchemaDocument, naming: NamingMode) -> Self {
        Self {
            resolver: RefResolver::new(doc),
            naming,
        }
    }

    /// Emit one resource. Returns `Ok(None)` when the definition has no `metadata` property and so
    /// is not a real API object.
    pub fn emit(&self, resource: &ResourceSchema<'_>) -> Result<Option<ResourceUnit>, EmitError> {
        let identity = resource
            .schema
            .resource_identity()
            .ok_or_else(|| EmitError::MissingResourceIdentity(resource.name.to_string()))?;

        if !resource.schema.has_property("metadata") {
            log::warn!(
                "skipping {}: no metadata property, not an API object",
                resource.name
            );
            return Ok(None);
        }

        let options_name = options_name(&identity.kind);
        let mut options_schema = resource.schema.clone();
        if let Some(ref mut properties) = options_schema.properties {
            for managed in CONSTRUCT_MANAGED {
                properties.shift_remove(managed);
            }
        }
        options_schema
            .required
            .retain(|name| !CONSTRUCT_MANAGED.contains(&name.as_str()));

        // A fresh scheduler per resource; nothing carries over between resources.
        let mut scheduler: EmissionScheduler<DeferredType> = EmissionScheduler::new();
        let origin = definition_ref(resource.name);
        scheduler.reserve(&options_name, &origin);
        scheduler.reserve(&identity.kind, &origin);

        let options = emit_type(
            &options_name,
            &options_schema,
            Some(resource.name),
            &mut TypeMapper::new(self.naming, &mut scheduler),
        )?;

        let construct = ConstructDecl {
            name: identity.kind.clone(),
            options_name,
            definition: resource.name.to_string(),
            identity: identity.clone(),
            docs: docs_for(resource.schema, None),
        };

        let mut types = Vec::new();
        scheduler.drain(|scheduler, name, deferred| {
            let node = self.resolver.resolve(&deferred.ref_path)?;
            let definition = parse_ref_name(&deferred.ref_path)?;
            let mut mapper = TypeMapper::new(self.naming, scheduler);
            types.push(emit_type(name, node, Some(definition), &mut mapper)?);
            Ok::<(), EmitError>(())
        })?;

        log::debug!(
            "{}: emitted {} auxiliary types",
            resource.name,
            types.len()
        );

        Ok(Some(ResourceUnit {
            module_name: module_name(identity),
            options,
            construct,
            types,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{TypeDecl, TypeExpr};
    use crate::parse::discovery::discover_resources;
    use crate::parse::from_json;

    const WIDGET: &str = r##"{
        "definitions": {
            "com.example.v1.Widget": {
                "description": "A widget.",
                "required": ["kind", "spec"],
                "properties": {
                    "apiVersion": {"type": "string"},
                    "kind": {"type": "string"},
                    "metadata": {"$ref": "#/definitions/io.k8s.ObjectMeta"},
                    "spec": {"$ref": "#/definitions/com.example.v1.WidgetSpec"},
                    "status": {"$ref": "#/definitions/com.example.v1.WidgetStatus"}
                },
                "x-kubernetes-group-version-kind": [
                    {"group": "example.com", "kind": "Widget", "version": "v1"}
                ]
            },
            "io.k8s.ObjectMeta": {
                "properties": {
                    "name": {"type": "string"},
                    "labels": {"type": "object", "additionalProperties": {"type": "string"}},
                    "owner": {"$ref": "#/definitions/io.k8s.ObjectMeta"}
                }
            },
            "com.example.v1.WidgetSpec": {
                "properties": {
                    "meta": {"$ref": "#/definitions/io.k8s.ObjectMeta"},
                    "size": {"$ref": "#/definitions/com.example.v1.Size"}
                }
            },
            "com.example.v1.Size": {"oneOf": [{"type": "string"}, {"type": "integer"}]},
            "com.example.v1.WidgetStatus": {"properties": {"ready": {"type": "boolean"}}}
        }
    }"##;

    fn emit_first(json: &str) -> Result<Option<ResourceUnit>, EmitError> {
        let doc = from_json(json).unwrap();
        let resources = discover_resources(&doc);
        ResourceEmitter::new(&doc, NamingMode::Short).emit(&resources[0])
    }

    #[test]
    fn test_widget_unit() {
        let unit = emit_first(WIDGET).unwrap().unwrap();
        assert_eq!(unit.module_name, "example-com-widget-v1");
        assert_eq!(unit.construct.name, "Widget");
        assert_eq!(unit.construct.options_name, "WidgetOptions");
        assert_eq!(unit.construct.api_version(), "example.com/v1");
        assert_eq!(unit.options.name(), "WidgetOptions");

        let TypeDecl::Interface(ref options) = unit.options else {
            panic!("options should be an interface");
        };
        let fields: Vec<_> = options.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(fields, vec!["metadata", "spec"]);
        assert!(options.fields[1].required);

        // Cycles and repeated references emit each type once; status is never reached.
        let names: Vec<_> = unit.types.iter().map(TypeDecl::name).collect();
        assert_eq!(names, vec!["ObjectMeta", "WidgetSpec", "Size"]);
    }

    #[test]
    fn test_labels_map() {
        let unit = emit_first(WIDGET).unwrap().unwrap();
        let TypeDecl::Interface(ref meta) = unit.types[0] else {
            panic!("ObjectMeta should be an interface");
        };
        assert_eq!(
            meta.fields[1].field_type,
            TypeExpr::Map(Box::new(TypeExpr::String))
        );
    }

    #[test]
    fn test_resource_without_metadata_is_skipped() {
        let json = r#"{"definitions":{"a.v1.List":{
            "properties": {"items": {"type": "array", "items": {"type": "string"}}},
            "x-kubernetes-group-version-kind": [{"group": "", "kind": "List", "version": "v1"}]
        }}}"#;
        assert!(emit_first(json).unwrap().is_none());
    }

    #[test]
    fn test_missing_identity() {
        let doc = from_json(r#"{"definitions":{"a.Thing":{"properties":{"metadata":{}}}}}"#)
            .unwrap();
        let resource = ResourceSchema {
            name: "a.Thing",
            schema: doc.definition("a.Thing").unwrap(),
        };
        let err = ResourceEmitter::new(&doc, NamingMode::Short)
            .emit(&resource)
            .unwrap_err();
        assert!(matches!(err, EmitError::MissingResourceIdentity(n) if n == "a.Thing"));
    }

    #[test]
    fn test_unresolved_reference_fails_the_resource() {
        let json = r##"{"definitions":{"a.v1.Thing":{
            "properties": {"metadata": {"$ref": "#/definitions/a.Missing"}},
            "x-kubernetes-group-version-kind": [{"group": "", "kind": "Thing", "version": "v1"}]
        }}}"##;
        assert!(matches!(
            emit_first(json),
            Err(EmitError::UnresolvedReference(r)) if r == "#/definitions/a.Missing"
        ));
    }

    #[test]
    fn test_references_cannot_redeclare_construct_or_options() {
        let json = r##"{"definitions":{
            "com.example.v1.Widget": {
                "properties": {
                    "metadata": {"type": "string"},
                    "previous": {"$ref": "#/definitions/com.example.v1beta1.Widget"},
                    "legacy": {"$ref": "#/definitions/com.example.v1beta1.WidgetOptions"}
                },
                "x-kubernetes-group-version-kind": [
                    {"group": "example.com", "kind": "Widget", "version": "v1"}
                ]
            },
            "com.example.v1beta1.Widget": {"properties": {"size": {"type": "integer"}}},
            "com.example.v1beta1.WidgetOptions": {"type": "string"}
        }}"##;
        let unit = emit_first(json).unwrap().unwrap();
        assert_eq!(unit.declared_names(), vec!["WidgetOptions", "Widget"]);
        assert!(unit.types.is_empty());

        let TypeDecl::Interface(ref options) = unit.options else {
            panic!("options should be an interface");
        };
        assert_eq!(options.fields[1].field_type, TypeExpr::Ref("Widget".to_string()));
        assert_eq!(
            options.fields[2].field_type,
            TypeExpr::Ref("WidgetOptions".to_string())
        );
    }

    #[test]
    fn test_first_identity_wins() {
        let json = r#"{"definitions":{"a.Thing":{
            "properties": {"metadata": {"type": "string"}},
            "x-kubernetes-group-version-kind": [
                {"group": "", "kind": "Thing", "version": "v1"},
                {"group": "", "kind": "Thing", "version": "v2"}
            ]
        }}}"#;
        let unit = emit_first(json).unwrap().unwrap();
        assert_eq!(unit.construct.api_version(), "v1");
        assert_eq!(unit.module_name, "thing-v1");
    }
}
