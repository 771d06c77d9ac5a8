//! Block definitions and rendered block instances.
//!
//! This module provides:
//! - BlockTypeRegistry: block type definitions and their declared attributes
//! - RenderedBlock: one block instance as seen by render filters

mod types;

pub use types::{
    AttributeDefinition, AttributeType, BlockTypeDefinition, BlockTypeRegistry, NAVIGATION_BLOCK,
};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{NavError, NavResult};

/// A block instance whose markup has already been rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedBlock {
    /// Namespaced block name.
    #[serde(rename = "blockName")]
    pub name: String,
    /// Raw, untrusted attributes.
    #[serde(rename = "attrs", default)]
    pub attributes: Map<String, Value>,
}

impl RenderedBlock {
    /// Create a block instance.
    pub fn new(name: &str, attributes: Map<String, Value>) -> Self {
        Self {
            name: name.to_string(),
            attributes,
        }
    }

    /// Create a block instance from a JSON attribute object.
    pub fn from_json(name: &str, attributes_json: &str) -> NavResult<Self> {
        let value: Value = serde_json::from_str(attributes_json)?;
        match value {
            Value::Object(attributes) => Ok(Self::new(name, attributes)),
            Value::Null => Ok(Self::new(name, Map::new())),
            _ => Err(NavError::AttributesNotObject),
        }
    }

    /// Check the block name.
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Fill in registry defaults for attributes that were not supplied.
    pub fn with_defaults(mut self, registry: &BlockTypeRegistry) -> Self {
        for (key, default) in registry.defaults_for(&self.name) {
            self.attributes.entry(key).or_insert(default);
        }
        self
    }
}
