//! Integration test — validate arguments against the check-run creation operation.

use paramguard_core::{Arguments, OperationDefinition, ValidationError, validate};
use serde_json::{Value, json};

const CREATE_CHECK_RUN: &str = include_str!("fixtures/create_check_run.json");

fn definition() -> OperationDefinition {
    serde_json::from_str(CREATE_CHECK_RUN).expect("parse fixture")
}

/// The same operation with the request body stripped.
fn parameter_only_definition() -> OperationDefinition {
    OperationDefinition {
        request_body: None,
        ..definition()
    }
}

fn args(value: Value) -> Arguments {
    serde_json::from_value(value).expect("arguments object")
}

fn error_message(arguments: Value) -> String {
    validate(&args(arguments), &definition())
        .expect_err("validation should fail")
        .to_string()
}

#[test]
fn fixture_keeps_declared_property_order() {
    let def = definition();
    let schema = def.request_body.as_ref().and_then(|b| b.schema()).unwrap();
    let names: Vec<&str> = schema.properties.names().take(3).collect();
    assert_eq!(names, vec!["name", "head_sha", "details_url"]);
}

#[test]
fn validate_required_parameters() {
    let arguments = args(json!({ "owner": "me", "repo": "my_repo" }));
    assert!(validate(&arguments, &parameter_only_definition()).is_ok());
}

#[test]
fn missing_required_parameter() {
    let err = validate(&args(json!({ "owner": "me" })), &definition()).unwrap_err();
    assert_eq!(err, ValidationError::MissingRequiredParameter("repo".into()));
    assert_eq!(err.to_string(), "repo is a required parameter");
}

#[test]
fn missing_required_request_body_property() {
    assert_eq!(
        error_message(json!({ "owner": "me", "repo": "my_repo" })),
        "name is a required parameter"
    );
    assert_eq!(
        error_message(json!({ "owner": "me", "repo": "my_repo", "name": "blah" })),
        "head_sha is a required parameter"
    );
}

#[test]
fn validate_parameters_and_request_body_properties() {
    let arguments = args(json!({
        "owner": "me",
        "repo": "my_repo",
        "name": "blah",
        "head_sha": "master"
    }));
    assert!(definition().validate(&arguments).is_ok());
}

#[test]
fn validate_nested_request_body_properties() {
    assert_eq!(
        error_message(json!({
            "owner": "me", "repo": "my_repo", "name": "blah", "head_sha": "master",
            "output": {}
        })),
        "title is a required parameter"
    );
    assert_eq!(
        error_message(json!({
            "owner": "me", "repo": "my_repo", "name": "blah", "head_sha": "master",
            "output": { "title": "here" }
        })),
        "summary is a required parameter"
    );

    let complete = args(json!({
        "owner": "me", "repo": "my_repo", "name": "blah", "head_sha": "master",
        "output": { "title": "here", "summary": "there" }
    }));
    assert!(validate(&complete, &definition()).is_ok());
}

#[test]
fn validate_annotations_inside_output() {
    assert_eq!(
        error_message(json!({
            "owner": "me", "repo": "my_repo", "name": "blah", "head_sha": "master",
            "output": {
                "title": "here",
                "summary": "there",
                "annotations": [{
                    "path": "src/lib.rs",
                    "start_line": 1,
                    "end_line": 2,
                    "annotation_level": "warning"
                }]
            }
        })),
        "message is a required parameter"
    );
}

#[test]
fn nested_objects_are_checked_in_declaration_order() {
    // `output` is declared before `actions`, so its failure wins.
    assert_eq!(
        error_message(json!({
            "owner": "me", "repo": "my_repo", "name": "blah", "head_sha": "master",
            "actions": [{}],
            "output": {}
        })),
        "title is a required parameter"
    );
}
