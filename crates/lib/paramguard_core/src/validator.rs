//! Required-field validation of call arguments against an operation definition.
//!
//! Checks run depth-first and stop at the first missing field: top-level
//! parameters, then the request body's required properties, then nested
//! object properties, each in declaration order.
//!
//! Request body properties are looked up in the same flat argument map as the
//! parameters. There is no separate `body` key.

use serde_json::Value;

use crate::error::{Result, ValidationError};
use crate::schema::{Arguments, OperationDefinition, Parameter, PropertySchema, RequestBody};

/// Validate `arguments` against `definition`.
///
/// Only presence is checked: a key mapped to `null`, `""` or `{}` counts as
/// supplied. Unknown keys are ignored.
pub fn validate(arguments: &Arguments, definition: &OperationDefinition) -> Result<()> {
    let operation = definition.operation_id.as_deref().unwrap_or("<unnamed>");
    log::debug!(
        "Validating {} argument(s) for operation {operation}",
        arguments.len()
    );

    check_parameters(arguments, &definition.parameters)?;

    if let Some(schema) = definition
        .request_body
        .as_ref()
        .and_then(RequestBody::schema)
    {
        check_schema(arguments, schema)?;
    }

    log::debug!("Operation {operation}: required parameters satisfied");
    Ok(())
}

impl OperationDefinition {
    /// Validate `arguments` against this definition. See [`validate`].
    pub fn validate(&self, arguments: &Arguments) -> Result<()> {
        validate(arguments, self)
    }
}

fn check_parameters(arguments: &Arguments, parameters: &[Parameter]) -> Result<()> {
    for parameter in parameters {
        if !parameter.required || arguments.contains_key(&parameter.name) {
            continue;
        }
        // The transport fills in a declared default.
        if parameter.schema.default.is_some() {
            log::trace!(
                "{} parameter {} absent, schema default applies",
                parameter.location,
                parameter.name
            );
            continue;
        }
        return Err(missing(&parameter.name));
    }
    Ok(())
}

fn check_schema(context: &Arguments, schema: &PropertySchema) -> Result<()> {
    if let Some(name) = schema
        .required_names()
        .find(|name| !context.contains_key(*name))
    {
        return Err(missing(name));
    }

    for (name, property) in schema.properties.iter() {
        match context.get(name) {
            Some(Value::Object(nested)) if property.is_object() => {
                log::trace!("Checking nested object {name}");
                check_schema(nested, property)?;
            }
            Some(Value::Array(elements)) if property.is_array() => {
                let Some(item) = property.items.as_deref().filter(|item| item.is_object()) else {
                    continue;
                };
                log::trace!("Checking {} element(s) of {name}", elements.len());
                for element in elements {
                    if let Value::Object(nested) = element {
                        check_schema(nested, item)?;
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn missing(name: &str) -> ValidationError {
    log::debug!("Missing required parameter {name}");
    ValidationError::MissingRequiredParameter(name.to_string())
}
