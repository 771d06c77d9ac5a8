//! Block type registry.
//!
//! Provides:
//! - `AttributeDefinition`: type tag and default for one block attribute
//! - `BlockTypeDefinition`: a block type and its declared attributes
//! - `BlockTypeRegistry`: registry of known block types, extensible by plugins

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Block name of the core navigation block.
pub const NAVIGATION_BLOCK: &str = "core/navigation";

/// Declared type of a block attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Boolean,
    Number,
    Integer,
    Object,
    Array,
}

impl AttributeType {
    /// Check whether a JSON value matches this type.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            AttributeType::String => value.is_string(),
            AttributeType::Boolean => value.is_boolean(),
            AttributeType::Number => value.is_number(),
            AttributeType::Integer => value.is_i64() || value.is_u64(),
            AttributeType::Object => value.is_object(),
            AttributeType::Array => value.is_array(),
        }
    }
}

/// Type tag and optional default for a single attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    #[serde(rename = "type")]
    pub kind: AttributeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl AttributeDefinition {
    /// Attribute with no default.
    pub fn new(kind: AttributeType) -> Self {
        Self {
            kind,
            default: None,
        }
    }

    /// Attribute with a default value.
    pub fn with_default(kind: AttributeType, default: Value) -> Self {
        Self {
            kind,
            default: Some(default),
        }
    }
}

/// Definition of a single block type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockTypeDefinition {
    /// Namespaced block name (e.g. "core/navigation").
    pub name: String,
    /// Human-readable label.
    pub label: String,
    /// Declared attributes, keyed by attribute name.
    pub attributes: BTreeMap<String, AttributeDefinition>,
    /// Plugin that provides this block type.
    pub plugin: String,
}

/// Registry of block type definitions, keyed by block name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockTypeRegistry {
    types: HashMap<String, BlockTypeDefinition>,
}

impl BlockTypeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the core block types.
    pub fn with_core_types() -> Self {
        let mut registry = Self::new();
        registry.register_core_types();
        registry
    }

    /// Register a single block type definition, replacing any existing one.
    pub fn register(&mut self, definition: BlockTypeDefinition) {
        self.types.insert(definition.name.clone(), definition);
    }

    /// Look up a block type by name.
    pub fn get(&self, name: &str) -> Option<&BlockTypeDefinition> {
        self.types.get(name)
    }

    /// Check whether a block type is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Return the number of registered block types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// List all registered block names, sorted.
    pub fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.types.keys().cloned().collect();
        names.sort();
        names
    }

    /// Declare additional attributes on an existing block type.
    ///
    /// Returns false, leaving the registry untouched, when the block type is
    /// not registered. Attributes already declared are overwritten.
    pub fn extend_attributes<I>(&mut self, name: &str, attributes: I) -> bool
    where
        I: IntoIterator<Item = (String, AttributeDefinition)>,
    {
        let Some(definition) = self.types.get_mut(name) else {
            return false;
        };
        definition.attributes.extend(attributes);
        true
    }

    /// Default values of every attribute of `name` that declares one.
    pub fn defaults_for(&self, name: &str) -> Map<String, Value> {
        self.types
            .get(name)
            .map(|definition| {
                definition
                    .attributes
                    .iter()
                    .filter_map(|(key, attr)| {
                        attr.default.as_ref().map(|d| (key.clone(), d.clone()))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Check attribute values against their declared types.
    ///
    /// Returns a list of validation messages. Undeclared attributes and null
    /// values are not reported.
    pub fn validate_attributes(&self, name: &str, attributes: &Map<String, Value>) -> Vec<String> {
        let Some(definition) = self.types.get(name) else {
            return vec![format!("unknown block type: {name}")];
        };

        let mut errors = Vec::new();
        for (key, value) in attributes {
            if value.is_null() {
                continue;
            }
            if let Some(attr) = definition.attributes.get(key)
                && !attr.kind.accepts(value)
            {
                errors.push(format!("attribute '{key}' must be of type {:?}", attr.kind));
            }
        }
        errors
    }

    /// Register the core block types the kernel renders.
    pub fn register_core_types(&mut self) {
        let navigation_attributes = [
            ("ref", AttributeDefinition::new(AttributeType::Number)),
            (
                "overlayMenu",
                AttributeDefinition::with_default(AttributeType::String, Value::from("mobile")),
            ),
            (
                "openSubmenusOnClick",
                AttributeDefinition::with_default(AttributeType::Boolean, Value::from(false)),
            ),
            (
                "showSubmenuIcon",
                AttributeDefinition::with_default(AttributeType::Boolean, Value::from(true)),
            ),
            ("textColor", AttributeDefinition::new(AttributeType::String)),
            (
                "overlayBackgroundColor",
                AttributeDefinition::new(AttributeType::String),
            ),
        ];

        self.register(BlockTypeDefinition {
            name: NAVIGATION_BLOCK.to_string(),
            label: "Navigation".to_string(),
            attributes: navigation_attributes
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            plugin: "core".to_string(),
        });

        self.register(BlockTypeDefinition {
            name: "core/template-part".to_string(),
            label: "Template Part".to_string(),
            attributes: [
                ("slug", AttributeDefinition::new(AttributeType::String)),
                ("area", AttributeDefinition::new(AttributeType::String)),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
            plugin: "core".to_string(),
        });
    }
}
