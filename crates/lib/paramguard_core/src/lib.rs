//! # paramguard_core
//!
//! Required-parameter validation for OpenAPI-style operation definitions.
//!
//! A caller hands [`validate`] the flat argument map it is about to turn into
//! a request, together with the operation's definition. Validation fails on
//! the first required parameter or request body property that is absent.

pub mod error;
pub mod schema;
pub mod validator;

pub use error::{Result, ValidationError};
pub use schema::{
    Arguments, MediaType, OperationDefinition, Parameter, ParameterLocation, Properties,
    PropertySchema, RequestBody,
};
pub use validator::validate;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
