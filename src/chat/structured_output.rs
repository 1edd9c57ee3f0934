use std::mem::take;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{ApiResponseOrError, FunctionObject};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum JsonSchemaStyle {
    /// Strict mode: every property required, no additional properties.
    OpenAI,
    /// Plain schema, optional fields stay optional.
    Relaxed,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ResponseFormatJsonSchema {
    /// Must be a-z, A-Z, 0-9, or contain underscores and dashes, with a maximum length of 64.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
    /// Only a subset of JSON Schema is supported when `strict` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

impl ResponseFormatJsonSchema {
    pub fn new<T: JsonSchema>(strict: bool, style: JsonSchemaStyle) -> ApiResponseOrError<Self> {
        let (schema, description) = generate_json_schema::<T>(style)?;
        Ok(ResponseFormatJsonSchema {
            name: T::schema_name(),
            description,
            schema: Some(schema),
            strict: Some(strict),
        })
    }
}

impl FunctionObject {
    /// A function definition whose parameters are the JSON Schema of `T`.
    pub fn from_schema<T: JsonSchema>(strict: bool, style: JsonSchemaStyle) -> ApiResponseOrError<Self> {
        let (schema, description) = generate_json_schema::<T>(style)?;
        Ok(FunctionObject {
            name: T::schema_name(),
            description,
            parameters: Some(schema),
            strict: match style {
                JsonSchemaStyle::OpenAI => Some(strict),
                JsonSchemaStyle::Relaxed => None,
            },
        })
    }
}

fn retain_keys(object: &mut Map<String, Value>, keys: &[&str]) {
    *object = take(object)
        .into_iter()
        .filter(|(key, _)| keys.contains(&key.as_str()))
        .collect();
}

/// Rewrites a generated schema into the subset structured outputs accept.
fn normalize(schema: &mut Value, style: JsonSchemaStyle) {
    let Value::Object(object) = schema else {
        return;
    };

    if let Some(one_of) = object.remove("oneOf") {
        object.insert("anyOf".to_string(), one_of);
    }
    if let Some(Value::Array(variants)) = object.get_mut("anyOf") {
        variants.iter_mut().for_each(|v| normalize(v, style));
    }

    let kind = match object.get("type") {
        Some(Value::String(kind)) => kind.clone(),
        _ => return,
    };
    match kind.as_str() {
        "array" => {
            if let Some(items) = object.get_mut("items") {
                normalize(items, style);
            }
        }
        "object" => {
            let Some(Value::Object(properties)) = object.get_mut("properties") else {
                return;
            };
            properties.values_mut().for_each(|v| normalize(v, style));
            let required: Vec<Value> = properties.keys().cloned().map(Value::String).collect();

            if style == JsonSchemaStyle::OpenAI {
                object.insert("required".to_string(), Value::Array(required));
                object
                    .entry("additionalProperties")
                    .or_insert(Value::Bool(false));
            }
        }
        "string" => retain_keys(object, &["type", "enum"]),
        // `format`, `minimum` and `multipleOf` are rejected
        "number" | "integer" => retain_keys(object, &["type"]),
        _ => {}
    }
}

/// Generates the JSON Schema of `T` and its description.
///
/// Numeric bounds are dropped, so every integer is treated as `i64` and every
/// float as `f64`.
pub fn generate_json_schema<T: JsonSchema>(
    style: JsonSchemaStyle,
) -> ApiResponseOrError<(Value, Option<String>)> {
    let mut settings = schemars::r#gen::SchemaSettings::default();
    settings.option_nullable = false;
    settings.inline_subschemas = true;
    settings.option_add_null_type = style == JsonSchemaStyle::OpenAI;

    let mut generator = settings.into_generator();
    let mut schema = T::json_schema(&mut generator).into_object();
    let description = schema.metadata().description.clone();

    let mut schema = serde_json::to_value(schema)?;
    normalize(&mut schema, style);
    Ok((schema, description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Current weather in a city.
    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct Weather {
        city: String,
        days: u8,
        unit: Option<String>,
    }

    #[test]
    fn strict_schema_requires_every_property() {
        let (schema, description) = generate_json_schema::<Weather>(JsonSchemaStyle::OpenAI).unwrap();
        assert_eq!(description.as_deref(), Some("Current weather in a city."));
        assert_eq!(schema["additionalProperties"], json!(false));
        assert_eq!(schema["required"], json!(["city", "days", "unit"]));
        assert_eq!(schema["properties"]["days"], json!({ "type": "integer" }));
    }

    #[test]
    fn relaxed_function_has_no_strict_flag() {
        let function = FunctionObject::from_schema::<Weather>(true, JsonSchemaStyle::Relaxed).unwrap();
        assert_eq!(function.name, "Weather");
        assert_eq!(function.strict, None);
        let parameters = function.parameters.unwrap();
        assert!(parameters.get("additionalProperties").is_none());
    }
}
