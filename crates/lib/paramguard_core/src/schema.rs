//! Serde-deserializable structs matching the OpenAPI 3.0 operation subset we need.
//!
//! Definitions are accepted as-is from the definition source: keys the
//! validator does not care about (`description`, `enum`, `format`, ...) are
//! ignored during deserialization.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Flat argument map supplied by the caller at call time.
///
/// Nested request body objects travel under a single top-level key, e.g.
/// `output` maps to `{"title": ..., "summary": ...}`.
pub type Arguments = Map<String, Value>;

/// Media type preferred when a request body declares several.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// A single API operation: its parameters and optional request body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDefinition {
    #[serde(default)]
    pub operation_id: Option<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub request_body: Option<RequestBody>,
}

/// A named top-level input of an operation.
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub schema: PropertySchema,
}

/// Where a parameter is placed in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
}

impl ParameterLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
        }
    }
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body, keyed by media type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub content: BTreeMap<String, MediaType>,
}

impl RequestBody {
    /// The body schema: the `application/json` one if declared, otherwise the
    /// first media type that carries a schema.
    pub fn schema(&self) -> Option<&PropertySchema> {
        self.content
            .get(JSON_MEDIA_TYPE)
            .and_then(|media| media.schema.as_ref())
            .or_else(|| self.content.values().find_map(|media| media.schema.as_ref()))
    }
}

/// Content entry of a request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaType {
    #[serde(default)]
    pub schema: Option<PropertySchema>,
}

/// A (possibly nested) JSON Schema object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type", default)]
    pub schema_type: Option<String>,
    #[serde(default)]
    pub properties: Properties,
    #[serde(default)]
    pub required: Required,
    /// Element schema for `array` types.
    #[serde(default)]
    pub items: Option<Box<PropertySchema>>,
    #[serde(default)]
    pub default: Option<Value>,
}

impl PropertySchema {
    pub fn is_object(&self) -> bool {
        self.schema_type.as_deref() == Some("object")
    }

    pub fn is_array(&self) -> bool {
        self.schema_type.as_deref() == Some("array")
    }

    /// Names of required child properties: the `required` list, then any
    /// child flagged `required: true`, each in declaration order.
    pub fn required_names(&self) -> impl Iterator<Item = &str> {
        self.required.names().chain(
            self.properties
                .iter()
                .filter(|(_, child)| child.required.is_flagged())
                .map(|(name, _)| name),
        )
    }
}

/// The `required` keyword of a schema.
///
/// JSON Schema lists required child names on the parent. Swagger 2 style
/// definitions instead mark the child itself with `required: true`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Required {
    Names(Vec<String>),
    Flag(bool),
}

impl Default for Required {
    fn default() -> Self {
        Required::Names(Vec::new())
    }
}

impl Required {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let names: &[String] = match self {
            Required::Names(names) => names,
            Required::Flag(_) => &[],
        };
        names.iter().map(String::as_str)
    }

    pub fn is_flagged(&self) -> bool {
        matches!(self, Required::Flag(true))
    }
}

/// Child property schemas in the order the definition declares them.
#[derive(Debug, Clone, Default)]
pub struct Properties(Vec<(String, PropertySchema)>);

impl Properties {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertySchema)> {
        self.0.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    pub fn get(&self, name: &str) -> Option<&PropertySchema> {
        self.iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, schema)| schema)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(name, _)| name)
    }
}

impl FromIterator<(String, PropertySchema)> for Properties {
    fn from_iter<I: IntoIterator<Item = (String, PropertySchema)>>(iter: I) -> Self {
        Properties(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for Properties {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PropertiesVisitor;

        impl<'de> Visitor<'de> for PropertiesVisitor {
            type Value = Properties;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of property names to schemas")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Properties, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, PropertySchema>()? {
                    entries.push(entry);
                }
                Ok(Properties(entries))
            }
        }

        deserializer.deserialize_map(PropertiesVisitor)
    }
}
