//! Tool-parameter descriptors and type mapping.
//!
//! Callers embedding the validator describe their tool parameters with
//! abstract types; this module maps them to BigQuery standard SQL type names
//! and models the descriptors the allow-list introspection produces.

use crate::error::{GuardError, GuardResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Map an abstract tool parameter type to the BigQuery standard SQL type.
pub fn bigquery_type(tool_type: &str) -> GuardResult<&'static str> {
    match tool_type {
        "string" => Ok("STRING"),
        "integer" => Ok("INT64"),
        "float" => Ok("FLOAT64"),
        "boolean" => Ok("BOOL"),
        other => Err(GuardError::UnsupportedType {
            tool_type: other.to_string(),
        }),
    }
}

/// A parameter descriptor advertised to tool callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub parameter_type: String,
    pub description: String,
    /// Default value; omitted for free-form parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl ToolParameter {
    /// A free-form string parameter.
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameter_type: "string".to_string(),
            description: description.into(),
            default: None,
        }
    }

    /// A string parameter with a default value.
    pub fn string_with_default(
        name: impl Into<String>,
        default: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            default: Some(default.into()),
            ..Self::string(name, description)
        }
    }
}
