use reqwest::StatusCode;

use infra::memory::repositories::PERSON_NOT_FOUND_MESSAGE;
use use_case::person::DOCUMENT_TYPE_ERROR_MESSAGE;

use crate::helpers::{ResponseParts, load_app_settings_for_testing, split_response};
use crate::test_case::TestCase;

fn error_messages(body: &str) -> Vec<String> {
    let value = serde_json::from_str::<serde_json::Value>(body).unwrap();
    value["messages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|message| message.as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn person_is_found_by_document() {
    let app_settings = load_app_settings_for_testing();
    let test_case = TestCase::begin(app_settings, false).await;

    let response = test_case.find_person("C", "23445322").await;
    let ResponseParts {
        status_code, body, ..
    } = split_response(response).await;
    assert_eq!(
        status_code,
        StatusCode::OK,
        "Person lookup failed: {}",
        status_code
    );
    let person = serde_json::from_str::<serde_json::Value>(&body).unwrap();
    assert_eq!(person["firstName"], "Daniel");
    assert_eq!(person["secondName"], "Ricardo");
    assert_eq!(person["firstLastName"], "Buritica");
    assert_eq!(person["secondLastName"], "Junco");
    assert_eq!(person["phone"], "3217570485");
    assert_eq!(person["address"], "Calle falsa 123");
    assert_eq!(person["residenceCity"], "Bogota");

    test_case.end().await;
}

#[tokio::test]
async fn invalid_document_type_is_rejected_as_a_bad_request() {
    let app_settings = load_app_settings_for_testing();
    let test_case = TestCase::begin(app_settings, false).await;

    let response = test_case.find_person("A", "12345").await;
    let ResponseParts {
        status_code, body, ..
    } = split_response(response).await;
    assert_eq!(status_code, StatusCode::BAD_REQUEST);
    assert_eq!(error_messages(&body), vec![DOCUMENT_TYPE_ERROR_MESSAGE]);

    test_case.end().await;
}

#[tokio::test]
async fn unknown_document_number_is_not_found() {
    let app_settings = load_app_settings_for_testing();
    let test_case = TestCase::begin(app_settings, false).await;

    let response = test_case.find_person("C", "12345").await;
    let ResponseParts {
        status_code, body, ..
    } = split_response(response).await;
    assert_eq!(status_code, StatusCode::NOT_FOUND);
    assert_eq!(error_messages(&body), vec![PERSON_NOT_FOUND_MESSAGE]);

    test_case.end().await;
}

#[tokio::test]
async fn absent_parameters_are_treated_as_empty_strings() {
    let app_settings = load_app_settings_for_testing();
    let test_case = TestCase::begin(app_settings, false).await;

    let response = test_case.find_person_without_params().await;
    let ResponseParts {
        status_code, body, ..
    } = split_response(response).await;
    assert_eq!(status_code, StatusCode::BAD_REQUEST);
    assert_eq!(error_messages(&body), vec![DOCUMENT_TYPE_ERROR_MESSAGE]);

    test_case.end().await;
}

#[tokio::test]
async fn lowercase_document_type_passes_validation_but_misses_the_directory() {
    let app_settings = load_app_settings_for_testing();
    let test_case = TestCase::begin(app_settings, false).await;

    // The type code is validated case-insensitively, while the directory
    // matches it exactly, so a lowercase code reaches the repository and
    // misses there.
    let response = test_case.find_person("c", "23445322").await;
    let ResponseParts {
        status_code, body, ..
    } = split_response(response).await;
    assert_eq!(status_code, StatusCode::NOT_FOUND);
    assert_eq!(error_messages(&body), vec![PERSON_NOT_FOUND_MESSAGE]);

    test_case.end().await;
}
