use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::load::node::Node;
use crate::transform::name_normalizer::{to_handler_symbol, to_route_pattern, to_type_symbol};

/// HTTP methods recognised as operation keys of a path item.
///
/// Declaration order is the canonical emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl HttpMethod {
    /// Case-insensitive lookup of a method token.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "get" => Some(Self::Get),
            "put" => Some(Self::Put),
            "post" => Some(Self::Post),
            "delete" => Some(Self::Delete),
            "options" => Some(Self::Options),
            "head" => Some(Self::Head),
            "patch" => Some(Self::Patch),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Put => "put",
            Self::Post => "post",
            Self::Delete => "delete",
            Self::Options => "options",
            Self::Head => "head",
            Self::Patch => "patch",
            Self::Trace => "trace",
        }
    }

    /// Only `GET` counts as a read; everything else gets a write skeleton.
    pub fn is_read(&self) -> bool {
        matches!(self, Self::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How mapping keys are ordered before emission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyOrder {
    /// Paths and schemas sorted by key, methods in canonical order.
    #[default]
    Lexicographic,
    /// Keep the order the document was written in.
    Document,
}

/// One HTTP-method entry under a path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Operation {
    pub operation_id: Option<String>,
    pub summary: Option<String>,
}

impl Operation {
    fn from_node(node: &Node) -> Self {
        Self {
            operation_id: node
                .get("operationId")
                .and_then(Node::as_str)
                .filter(|id| id.chars().any(char::is_alphanumeric))
                .map(str::to_string),
            summary: node.get("summary").and_then(Node::as_str).map(str::to_string),
        }
    }
}

/// Operations of one path, keyed by method.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathItem {
    pub operations: IndexMap<HttpMethod, Operation>,
}

impl PathItem {
    fn from_node(pattern: &str, node: &Node) -> Self {
        let mut operations = IndexMap::new();
        for (key, value) in node.entries() {
            let Some(method) = HttpMethod::parse(key) else {
                continue;
            };
            if operations.contains_key(&method) {
                log::warn!("{pattern}: duplicate `{key}` entry ignored");
                continue;
            }
            operations.insert(method, Operation::from_node(value));
        }
        Self { operations }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyDef {
    /// The raw `type` keyword; `None` when absent or not a string.
    pub type_name: Option<String>,
}

impl PropertyDef {
    fn from_node(node: &Node) -> Self {
        let type_node = node.get("type");
        let type_name = match type_node.and_then(Node::as_sequence) {
            // 3.1 style `type: [string, "null"]`
            Some(types) => types
                .iter()
                .filter_map(Node::as_str)
                .find(|t| *t != "null"),
            None => type_node.and_then(Node::as_str),
        };
        Self {
            type_name: type_name.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDef {
    pub name: String,
    pub properties: IndexMap<String, PropertyDef>,
}

impl SchemaDef {
    fn from_node(name: &str, node: &Node) -> Self {
        let properties = node
            .get("properties")
            .map(|props| {
                props
                    .entries()
                    .map(|(prop, def)| (prop.to_string(), PropertyDef::from_node(def)))
                    .collect()
            })
            .unwrap_or_default();
        Self {
            name: name.to_string(),
            properties,
        }
    }
}

/// The typed view of a specification document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Specification {
    pub paths: IndexMap<String, PathItem>,
    pub schemas: IndexMap<String, SchemaDef>,
}

impl Specification {
    /// Build from a parsed document. Unknown keys are ignored and missing
    /// sections are empty.
    ///
    /// Schemas come from top-level `schemas` and from `components.schemas`;
    /// a top-level definition shadows a component of the same name.
    pub fn from_node(root: &Node) -> Self {
        let paths = root
            .get("paths")
            .map(|paths| {
                paths
                    .entries()
                    .map(|(pattern, item)| (pattern.to_string(), PathItem::from_node(pattern, item)))
                    .collect()
            })
            .unwrap_or_default();

        let mut schemas: IndexMap<String, SchemaDef> = IndexMap::new();
        let top_level = root.get("schemas");
        let components = root.get("components").and_then(|c| c.get("schemas"));
        for section in [top_level, components].into_iter().flatten() {
            for (name, def) in section.entries() {
                if !schemas.contains_key(name) {
                    schemas.insert(name.to_string(), SchemaDef::from_node(name, def));
                }
            }
        }

        Self { paths, schemas }
    }

    /// Reorder paths, methods and schemas according to `order`.
    pub fn ordered(mut self, order: KeyOrder) -> Self {
        if order == KeyOrder::Lexicographic {
            self.paths.sort_keys();
            for item in self.paths.values_mut() {
                item.operations.sort_keys();
            }
            self.schemas.sort_keys();
        }
        self
    }

    /// Every (path, method, operation) triple that carries an operationId.
    pub fn bindings(&self) -> impl Iterator<Item = Binding<'_>> {
        self.paths.iter().flat_map(|(pattern, item)| {
            item.operations.iter().filter_map(move |(method, operation)| {
                let operation_id = operation.operation_id.as_deref()?;
                Some(Binding {
                    pattern,
                    method: *method,
                    operation_id,
                    operation,
                })
            })
        })
    }

    pub fn operation_count(&self) -> usize {
        self.paths.values().map(|item| item.operations.len()).sum()
    }

    /// Operations left out of the scaffold because they have no operationId.
    pub fn skipped_operations(&self) -> usize {
        self.operation_count() - self.bindings().count()
    }
}

/// An addressable operation: the unit routes and controllers are emitted for.
#[derive(Debug, Clone, Copy)]
pub struct Binding<'a> {
    pub pattern: &'a str,
    pub method: HttpMethod,
    pub operation_id: &'a str,
    pub operation: &'a Operation,
}

impl Binding<'_> {
    pub fn handler_name(&self) -> String {
        to_handler_symbol(self.operation_id)
    }

    pub fn controller_name(&self) -> String {
        format!("{}Controller", to_type_symbol(self.operation_id))
    }

    pub fn route_pattern(&self) -> String {
        to_route_pattern(self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::from_yaml;

    const SPEC: &str = r#"
paths:
  /zeta:
    post:
      operationId: create_zeta
    GET:
      operationId: list_zetas
  /alpha/{id}:
    parameters: []
    delete:
      summary: no id here
    get:
      operationId: get_alpha
      summary: Fetch one alpha
schemas:
  Zebra:
    properties:
      stripes: { type: integer }
  Apple:
    properties:
      color: { type: [string, "null"] }
      weight: {}
"#;

    #[test]
    fn test_method_parse_is_case_insensitive() {
        assert_eq!(HttpMethod::parse("GET"), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::parse("Patch"), Some(HttpMethod::Patch));
        assert_eq!(HttpMethod::parse("parameters"), None);
    }

    #[test]
    fn test_document_order_is_kept() {
        let spec = from_yaml(SPEC).unwrap().ordered(KeyOrder::Document);
        let paths: Vec<&str> = spec.paths.keys().map(String::as_str).collect();
        assert_eq!(paths, vec!["/zeta", "/alpha/{id}"]);
        let methods: Vec<HttpMethod> = spec.paths["/zeta"].operations.keys().copied().collect();
        assert_eq!(methods, vec![HttpMethod::Post, HttpMethod::Get]);
    }

    #[test]
    fn test_lexicographic_order() {
        let spec = from_yaml(SPEC).unwrap().ordered(KeyOrder::Lexicographic);
        let paths: Vec<&str> = spec.paths.keys().map(String::as_str).collect();
        assert_eq!(paths, vec!["/alpha/{id}", "/zeta"]);
        let schemas: Vec<&str> = spec.schemas.keys().map(String::as_str).collect();
        assert_eq!(schemas, vec!["Apple", "Zebra"]);
        let methods: Vec<HttpMethod> = spec.paths["/zeta"].operations.keys().copied().collect();
        assert_eq!(methods, vec![HttpMethod::Get, HttpMethod::Post]);
    }

    #[test]
    fn test_operations_without_id_are_kept_but_not_bound() {
        let spec = from_yaml(SPEC).unwrap();
        assert_eq!(spec.operation_count(), 4);
        assert_eq!(spec.bindings().count(), 3);
        assert_eq!(spec.skipped_operations(), 1);
        let delete = &spec.paths["/alpha/{id}"].operations[&HttpMethod::Delete];
        assert!(delete.operation_id.is_none());
        assert_eq!(delete.summary.as_deref(), Some("no id here"));
    }

    #[test]
    fn test_binding_names() {
        let spec = from_yaml(SPEC).unwrap().ordered(KeyOrder::Lexicographic);
        let first = spec.bindings().next().unwrap();
        assert_eq!(first.handler_name(), "getAlpha");
        assert_eq!(first.controller_name(), "GetAlphaController");
        assert_eq!(first.route_pattern(), "/alpha/:id");
        assert_eq!(first.operation.summary.as_deref(), Some("Fetch one alpha"));
    }

    #[test]
    fn test_property_types() {
        let spec = from_yaml(SPEC).unwrap();
        let apple = &spec.schemas["Apple"];
        assert_eq!(apple.properties["color"].type_name.as_deref(), Some("string"));
        assert_eq!(apple.properties["weight"].type_name, None);
        let zebra = &spec.schemas["Zebra"];
        assert_eq!(zebra.properties["stripes"].type_name.as_deref(), Some("integer"));
    }

    #[test]
    fn test_components_schemas_are_read() {
        let yaml = r#"
schemas:
  Item:
    properties:
      name: { type: string }
components:
  schemas:
    Item:
      properties:
        other: { type: integer }
    Order:
      properties:
        total: { type: number }
"#;
        let spec = from_yaml(yaml).unwrap();
        assert_eq!(spec.schemas.len(), 2);
        assert!(spec.schemas["Item"].properties.contains_key("name"));
        assert!(!spec.schemas["Item"].properties.contains_key("other"));
        assert!(spec.schemas["Order"].properties.contains_key("total"));
    }

    #[test]
    fn test_blank_operation_id_is_absent() {
        let yaml = "paths:\n  /x:\n    get:\n      operationId: \"__\"\n";
        let spec = from_yaml(yaml).unwrap();
        assert_eq!(spec.bindings().count(), 0);
    }
}
